use super::*;
use crate::foundation::core::Seconds;

#[test]
fn opens_on_fonts_ready_before_the_deadline() {
    let mut gate = AssetGate::with_default_timeout();
    assert!(!gate.poll(Seconds(0.5)));
    gate.note_fonts_ready();
    assert!(gate.poll(Seconds(0.6)));
}

#[test]
fn opens_at_the_deadline_without_fonts() {
    let mut gate = AssetGate::new(Seconds(3.0)).unwrap();
    assert!(!gate.poll(Seconds(2.99)));
    assert!(gate.poll(Seconds(3.0)));
}

#[test]
fn stays_open_once_opened() {
    let mut gate = AssetGate::new(Seconds(1.0)).unwrap();
    assert!(gate.poll(Seconds(1.0)));
    assert!(gate.is_open());
    assert!(gate.poll(Seconds(1.5)));
}

#[test]
fn fallback_gate_opens_after_a_short_delay() {
    let mut gate = AssetGate::without_font_events();
    assert!(!gate.poll(Seconds(0.05)));
    assert!(gate.poll(Seconds(AssetGate::FALLBACK_DELAY)));
}

#[test]
fn negative_timeouts_are_rejected() {
    assert!(AssetGate::new(Seconds(-1.0)).is_err());
}

#[test]
fn attach_wires_font_events_from_the_bus() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let bus = EventBus::new();
    let gate = Rc::new(RefCell::new(AssetGate::with_default_timeout()));
    let _guard = AssetGate::attach(&gate, &bus);

    bus.emit(&UiEvent::FontsReady);
    assert!(gate.borrow_mut().poll(Seconds(0.0)));
}
