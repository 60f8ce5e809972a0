//! Full drag sessions: begin, movement masking, terminal notifications.

use crate::helpers::{init_tracing, RecordingObserver, TestRigBuilder};
use dragdrop::{DragConfig, DragMode, Point, Rect};

#[test]
fn test_drop_on_region_fires_drop_and_returns() {
    init_tracing();

    // Element at (0,0), region bounds (100,100)-(200,200), start saved.
    let mut rig = TestRigBuilder::new()
        .with_region(1, Rect::new(100.0, 100.0, 100.0, 100.0))
        .with_saved_start()
        .build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_move(&mut rig.element, Point::new(150.0, 150.0));
    assert_eq!(rig.element.origin, Point::new(140.0, 140.0));

    rig.controller
        .pointer_up(&mut rig.element, Point::new(150.0, 150.0));
    assert_eq!(rig.events(), vec!["begin", "hover(1)", "drop(1)"]);

    // Default veto answers true, so the return animation was scheduled.
    let scheduled = rig.animator.borrow().last_scheduled();
    assert_eq!(scheduled.target, Point::new(0.0, 0.0));
    assert_eq!(scheduled.duration, 0.25);

    rig.controller
        .on_return_complete(&mut rig.element, scheduled.ticket);
    assert_eq!(rig.element.origin, Point::new(0.0, 0.0));
    assert_eq!(
        rig.events(),
        vec!["begin", "hover(1)", "drop(1)", "returned"]
    );
    assert!(rig.controller.phase().is_idle());
}

#[test]
fn test_release_outside_fires_outside_and_returns() {
    let mut rig = TestRigBuilder::new()
        .with_region(1, Rect::new(100.0, 100.0, 100.0, 100.0))
        .with_saved_start()
        .build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_move(&mut rig.element, Point::new(50.0, 50.0));
    rig.controller
        .pointer_up(&mut rig.element, Point::new(50.0, 50.0));

    assert_eq!(rig.events(), vec!["begin", "outside"]);

    let scheduled = rig.animator.borrow().last_scheduled();
    rig.controller
        .on_return_complete(&mut rig.element, scheduled.ticket);
    assert_eq!(rig.element.origin, Point::new(0.0, 0.0));
    assert_eq!(rig.events(), vec!["begin", "outside", "returned"]);
}

#[test]
fn test_exactly_one_terminal_notification_per_session() {
    for release_at in [Point::new(150.0, 150.0), Point::new(50.0, 50.0)] {
        let mut rig = TestRigBuilder::new()
            .with_region(1, Rect::new(100.0, 100.0, 100.0, 100.0))
            .build();

        rig.controller
            .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
        rig.controller.pointer_move(&mut rig.element, release_at);
        rig.controller.pointer_up(&mut rig.element, release_at);

        assert_eq!(rig.observer.borrow().terminal_count(), 1);
    }
}

#[test]
fn test_restrict_x_freezes_horizontal_component() {
    let mut rig = TestRigBuilder::new()
        .with_config(DragConfig {
            mode: DragMode::RestrictX,
            ..Default::default()
        })
        .build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    for pointer in [
        Point::new(60.0, 40.0),
        Point::new(-30.0, 90.0),
        Point::new(200.0, 10.0),
    ] {
        rig.controller.pointer_move(&mut rig.element, pointer);
        assert_eq!(rig.element.origin.x, 0.0);
    }
    // The vertical component kept tracking the pointer: last pointer y
    // minus the grab offset.
    assert_eq!(rig.element.origin.y, 0.0);
}

#[test]
fn test_restrict_y_freezes_vertical_component() {
    let mut rig = TestRigBuilder::new()
        .with_config(DragConfig {
            mode: DragMode::RestrictY,
            ..Default::default()
        })
        .build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    for pointer in [
        Point::new(60.0, 40.0),
        Point::new(-30.0, 90.0),
        Point::new(200.0, 10.0),
    ] {
        rig.controller.pointer_move(&mut rig.element, pointer);
        assert_eq!(rig.element.origin.y, 0.0);
    }
    // Horizontal followed the pointer: last pointer x minus the grab offset.
    assert_eq!(rig.element.origin.x, 190.0);
}

#[test]
fn test_mode_change_mid_session_is_not_retroactive() {
    let mut rig = TestRigBuilder::new().build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_move(&mut rig.element, Point::new(110.0, 10.0));
    assert_eq!(rig.element.origin, Point::new(100.0, 0.0));

    // Movement applied under Normal stays applied; only subsequent deltas
    // are masked.
    rig.controller.set_mode(DragMode::RestrictX);
    rig.controller
        .pointer_move(&mut rig.element, Point::new(210.0, 60.0));
    assert_eq!(rig.element.origin, Point::new(100.0, 50.0));
}

#[test]
fn test_pickup_threshold_latches_after_enough_travel() {
    let mut rig = TestRigBuilder::new().build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    assert!(!rig.controller.phase().past_threshold());

    // Small jitter: movement is applied but the threshold has not latched.
    rig.controller
        .pointer_move(&mut rig.element, Point::new(12.0, 12.0));
    assert_eq!(rig.element.origin, Point::new(2.0, 2.0));
    assert!(!rig.controller.phase().past_threshold());

    rig.controller
        .pointer_move(&mut rig.element, Point::new(30.0, 30.0));
    assert!(rig.controller.phase().past_threshold());
}

#[test]
fn test_events_ignored_while_disabled() {
    let mut rig = TestRigBuilder::new().build();
    rig.controller.disable(&mut rig.element);

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_move(&mut rig.element, Point::new(50.0, 50.0));
    rig.controller
        .pointer_up(&mut rig.element, Point::new(50.0, 50.0));

    assert!(rig.events().is_empty());
    assert_eq!(rig.element.origin, Point::new(0.0, 0.0));
}

#[test]
fn test_pointer_down_ignored_mid_session() {
    let mut rig = TestRigBuilder::new().build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_down(&mut rig.element, Point::new(90.0, 90.0));

    // Only one begin, and the original grab offset still applies.
    assert_eq!(rig.events(), vec!["begin"]);
    rig.controller
        .pointer_move(&mut rig.element, Point::new(20.0, 20.0));
    assert_eq!(rig.element.origin, Point::new(10.0, 10.0));
}

#[test]
fn test_enable_with_replaces_observer_and_regions() {
    let mut rig = TestRigBuilder::new()
        .with_region(1, Rect::new(100.0, 100.0, 100.0, 100.0))
        .build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_up(&mut rig.element, Point::new(10.0, 10.0));
    assert_eq!(rig.observer.borrow().terminal_count(), 1);

    let (replacement, replacement_state) = RecordingObserver::new();
    rig.controller.enable_with(
        vec![crate::helpers::region(2, 0.0, 0.0, 60.0, 60.0)],
        Box::new(replacement),
    );

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_move(&mut rig.element, Point::new(20.0, 20.0));
    rig.controller
        .pointer_up(&mut rig.element, Point::new(20.0, 20.0));

    // The first observer saw nothing new; the replacement saw the session,
    // with drop detection running against the new region set.
    assert_eq!(rig.events(), vec!["begin", "outside"]);
    assert_eq!(
        replacement_state.borrow().events,
        vec!["begin", "hover(2)", "drop(2)"]
    );
}

#[test]
fn test_enable_without_regions_treats_every_release_as_outside() {
    let mut rig = TestRigBuilder::new().build();

    rig.controller
        .pointer_down(&mut rig.element, Point::new(10.0, 10.0));
    rig.controller
        .pointer_move(&mut rig.element, Point::new(500.0, 500.0));
    rig.controller
        .pointer_up(&mut rig.element, Point::new(500.0, 500.0));

    assert_eq!(rig.events(), vec!["begin", "outside"]);
}
