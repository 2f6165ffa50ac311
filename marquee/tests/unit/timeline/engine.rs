use super::*;
use crate::animation::ease::Ease;

fn stage_with_node() -> (Stage, NodeId) {
    let mut stage = Stage::new();
    let id = stage.add_node("node");
    (stage, id)
}

fn opacity(stage: &Stage, id: NodeId) -> f64 {
    stage.node(id).map(|n| n.props.opacity).unwrap()
}

fn set_text(node: NodeId, text: &str) -> CueAction {
    CueAction::SetText {
        node,
        text: text.to_owned(),
    }
}

#[test]
fn interpolates_midway_and_clamps_at_completion() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(Effect::from_to(
        id,
        PropertyMap::new().opacity(0.0),
        PropertyMap::new().opacity(1.0),
        Seconds::ZERO,
        Seconds(2.0),
        Ease::Linear,
    ))
    .unwrap();

    tl.advance_to(Seconds(1.0), &mut stage).unwrap();
    assert!((opacity(&stage, id) - 0.5).abs() < 1e-12);

    tl.advance_to(Seconds(5.0), &mut stage).unwrap();
    assert_eq!(opacity(&stage, id), 1.0);
}

#[test]
fn from_values_apply_when_the_window_opens() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(Effect::from_to(
        id,
        PropertyMap::new().opacity(0.0),
        PropertyMap::new().opacity(1.0),
        Seconds(1.0),
        Seconds(1.0),
        Ease::Linear,
    ))
    .unwrap();

    tl.advance_to(Seconds(0.5), &mut stage).unwrap();
    assert_eq!(opacity(&stage, id), 1.0); // untouched before the window

    tl.advance_to(Seconds(1.0), &mut stage).unwrap();
    assert_eq!(opacity(&stage, id), 0.0);
}

#[test]
fn coarse_steps_replay_boundaries_in_chronological_order() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(Effect::hold(id, Seconds::ZERO, Seconds(1.0)).on_complete(set_text(id, "A")))
        .unwrap();
    tl.schedule(Effect::hold(id, Seconds(1.0), Seconds(1.0)).on_complete(set_text(id, "B")))
        .unwrap();

    // One big jump past both windows: both cues fire, in time order.
    tl.advance_to(Seconds(10.0), &mut stage).unwrap();
    assert_eq!(stage.node(id).unwrap().text, "B");
}

#[test]
fn boundary_cues_fire_exactly_once() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(
        Effect::hold(id, Seconds(1.0), Seconds(1.0))
            .on_start(set_text(id, "started"))
            .on_complete(set_text(id, "done")),
    )
    .unwrap();

    tl.advance_to(Seconds(1.5), &mut stage).unwrap();
    assert_eq!(stage.node(id).unwrap().text, "started");

    tl.advance_to(Seconds(3.0), &mut stage).unwrap();
    assert_eq!(stage.node(id).unwrap().text, "done");

    // Later advances must not re-fire either boundary.
    stage.set_text(id, "afterwards");
    tl.advance_to(Seconds(4.0), &mut stage).unwrap();
    assert_eq!(stage.node(id).unwrap().text, "afterwards");
}

#[test]
fn registration_order_breaks_start_time_ties() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(Effect::to(
        id,
        PropertyMap::new().opacity(0.3),
        Seconds::ZERO,
        Seconds(1.0),
        Ease::Linear,
    ))
    .unwrap();
    tl.schedule(Effect::to(
        id,
        PropertyMap::new().opacity(0.7),
        Seconds::ZERO,
        Seconds(1.0),
        Ease::Linear,
    ))
    .unwrap();

    // The later registration is applied last and owns the final value.
    tl.advance_to(Seconds(2.0), &mut stage).unwrap();
    assert_eq!(opacity(&stage, id), 0.7);
}

#[test]
fn completion_of_earlier_effect_precedes_start_of_later_one() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(Effect::hold(id, Seconds::ZERO, Seconds(1.0)).on_complete(set_text(id, "out")))
        .unwrap();
    tl.schedule(Effect::hold(id, Seconds(1.0), Seconds(1.0)).on_start(set_text(id, "in")))
        .unwrap();

    tl.advance_to(Seconds(1.0), &mut stage).unwrap();
    assert_eq!(stage.node(id).unwrap().text, "in");
}

#[test]
fn zero_duration_set_applies_instantly() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(Effect::set(
        id,
        PropertyMap::new().opacity(0.25),
        Seconds(0.5),
    ))
    .unwrap();

    tl.advance_to(Seconds(0.4), &mut stage).unwrap();
    assert_eq!(opacity(&stage, id), 1.0);
    tl.advance_to(Seconds(0.5), &mut stage).unwrap();
    assert_eq!(opacity(&stage, id), 0.25);
}

#[test]
fn yoyo_repeat_oscillates_and_never_completes() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(
        Effect::to(
            id,
            PropertyMap::new().scale(2.0),
            Seconds::ZERO,
            Seconds(1.0),
            Ease::Linear,
        )
        .repeat(Repeat::Infinite { yoyo: true }),
    )
    .unwrap();

    let scale = |stage: &Stage| stage.node(id).unwrap().props.scale;

    tl.advance_to(Seconds(0.5), &mut stage).unwrap();
    assert!((scale(&stage) - 1.5).abs() < 1e-12);
    tl.advance_to(Seconds(1.0), &mut stage).unwrap();
    assert!((scale(&stage) - 2.0).abs() < 1e-12);
    tl.advance_to(Seconds(1.5), &mut stage).unwrap();
    assert!((scale(&stage) - 1.5).abs() < 1e-12);
    tl.advance_to(Seconds(2.0), &mut stage).unwrap();
    assert!((scale(&stage) - 1.0).abs() < 1e-12);
    // Still going strong hundreds of cycles later.
    tl.advance_to(Seconds(100.25), &mut stage).unwrap();
    assert!((scale(&stage) - 1.25).abs() < 1e-9);
}

#[test]
fn kill_cancels_everything_and_silences_cues() {
    let (mut stage, id) = stage_with_node();
    let mut tl = Timeline::new();
    tl.schedule(Effect::hold(id, Seconds(1.0), Seconds(0.0)).on_complete(set_text(id, "late")))
        .unwrap();

    tl.kill();
    assert!(tl.is_killed());
    assert_eq!(tl.effect_count(), 0);

    tl.advance_to(Seconds(5.0), &mut stage).unwrap();
    assert_eq!(stage.node(id).unwrap().text, "");
}

#[test]
fn advancing_backwards_is_an_error() {
    let (mut stage, _) = stage_with_node();
    let mut tl = Timeline::new();
    tl.advance_to(Seconds(2.0), &mut stage).unwrap();
    assert!(tl.advance_to(Seconds(1.0), &mut stage).is_err());
}

#[test]
fn malformed_effects_are_rejected_at_scheduling_time() {
    let mut tl = Timeline::new();
    let err = tl.schedule(Effect::to(
        NodeId(0),
        PropertyMap::new().opacity(1.0),
        Seconds(f64::NAN),
        Seconds(1.0),
        Ease::Linear,
    ));
    assert!(matches!(err, Err(MarqueeError::Scheduling(_))));
    assert_eq!(tl.effect_count(), 0);
}

#[test]
fn missing_targets_degrade_without_failing() {
    let mut stage = Stage::new();
    let mut tl = Timeline::new();
    tl.schedule(
        Effect::set(NodeId(42), PropertyMap::new().opacity(0.0), Seconds::ZERO)
            .on_start(set_text(NodeId(42), "ghost")),
    )
    .unwrap();
    tl.advance_to(Seconds(1.0), &mut stage).unwrap();
}

#[test]
fn stagger_expands_a_template_across_a_batch() {
    let mut stage = Stage::new();
    let ids: Vec<NodeId> = (0..3).map(|i| stage.add_node(format!("item-{i}"))).collect();
    let mut tl = Timeline::new();
    tl.schedule_staggered(
        &ids,
        &Effect::set(ids[0], PropertyMap::new().opacity(0.5), Seconds(1.0)),
        Seconds(0.1),
    )
    .unwrap();

    tl.advance_to(Seconds(1.05), &mut stage).unwrap();
    assert_eq!(opacity(&stage, ids[0]), 0.5);
    assert_eq!(opacity(&stage, ids[1]), 1.0);

    tl.advance_to(Seconds(1.25), &mut stage).unwrap();
    for &id in &ids {
        assert_eq!(opacity(&stage, id), 0.5);
    }
}
