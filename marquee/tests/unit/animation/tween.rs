use super::*;
use crate::foundation::core::VisualProps;

#[test]
fn lerp_scalars() {
    assert_eq!(<f64 as Lerp>::lerp(&0.0, &10.0, 0.5), 5.0);
    assert_eq!(<f32 as Lerp>::lerp(&1.0, &3.0, 0.25), 1.5);
}

#[test]
fn capture_base_only_snapshots_animated_channels() {
    let current = VisualProps {
        opacity: 0.4,
        offset_y: 12.0,
        scale: 1.5,
        visible: true,
    };
    let to = PropertyMap::new().opacity(1.0);
    let base = to.capture_base(&current);
    assert_eq!(base.opacity, Some(0.4));
    assert_eq!(base.offset_y, None);
    assert_eq!(base.scale, None);
}

#[test]
fn overlay_prefers_explicit_values() {
    let captured = PropertyMap::new().opacity(0.4).scale(1.5);
    let explicit = PropertyMap::new().opacity(0.0);
    let base = captured.overlay(&explicit);
    assert_eq!(base.opacity, Some(0.0));
    assert_eq!(base.scale, Some(1.5));
}

#[test]
fn lerp_toward_interpolates_present_channels() {
    let base = PropertyMap::new().opacity(0.0).offset_y(50.0);
    let to = PropertyMap::new().opacity(1.0).offset_y(0.0);
    let mid = base.lerp_toward(&to, 0.5);
    assert_eq!(mid.opacity, Some(0.5));
    assert_eq!(mid.offset_y, Some(25.0));
    assert_eq!(mid.scale, None);
}

#[test]
fn lerp_toward_jumps_when_base_channel_is_missing() {
    let base = PropertyMap::new();
    let to = PropertyMap::new().scale(2.0);
    assert_eq!(base.lerp_toward(&to, 0.1).scale, Some(2.0));
}

#[test]
fn apply_to_leaves_missing_channels_untouched() {
    let mut props = VisualProps::default();
    PropertyMap::new().opacity(0.25).apply_to(&mut props);
    assert_eq!(props.opacity, 0.25);
    assert_eq!(props.offset_y, 0.0);
    assert_eq!(props.scale, 1.0);
}

#[test]
fn finiteness_check_covers_all_channels() {
    assert!(PropertyMap::new().opacity(0.5).is_finite());
    assert!(!PropertyMap::new().offset_y(f64::NAN).is_finite());
    assert!(PropertyMap::new().is_empty());
}
