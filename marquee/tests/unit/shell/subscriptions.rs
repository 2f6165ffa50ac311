use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn handlers_run_in_subscription_order() {
    let bus = EventBus::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let a = Rc::clone(&order);
    let _first = bus.subscribe(move |_| a.borrow_mut().push(1));
    let b = Rc::clone(&order);
    let _second = bus.subscribe(move |_| b.borrow_mut().push(2));

    bus.emit(&UiEvent::FontsReady);
    assert_eq!(*order.borrow(), [1, 2]);
}

#[test]
fn dropping_the_guard_unsubscribes() {
    let bus = EventBus::new();
    let hits = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&hits);
    let guard = bus.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(bus.subscriber_count(), 1);

    bus.emit(&UiEvent::FontsReady);
    drop(guard);
    assert_eq!(bus.subscriber_count(), 0);

    bus.emit(&UiEvent::FontsReady);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn guards_are_independent() {
    let bus = EventBus::new();
    let hits = Rc::new(RefCell::new(0));

    let a = Rc::clone(&hits);
    let first = bus.subscribe(move |_| *a.borrow_mut() += 1);
    let b = Rc::clone(&hits);
    let _second = bus.subscribe(move |_| *b.borrow_mut() += 10);

    drop(first);
    bus.emit(&UiEvent::PointerDown {
        over_dropdown: false,
    });
    assert_eq!(*hits.borrow(), 10);
    assert_eq!(bus.subscriber_count(), 1);
}

#[test]
fn guards_outliving_the_bus_are_harmless() {
    let bus = EventBus::new();
    let guard = bus.subscribe(|_| {});
    drop(bus);
    drop(guard);
}
