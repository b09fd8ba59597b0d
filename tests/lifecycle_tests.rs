// Host-side tests for the Idle / Active / Cooldown state machine.

mod common;

use common::MockPlatform;
use lectura_core::{Clock, InstantClock, Lifecycle, LifecycleState, TransitionError};

#[test]
fn full_cycle_updates_host_affordances() {
    let mut ui = MockPlatform::new(100.0, 100.0);
    let mut lc = Lifecycle::new();
    assert!(lc.is_idle());

    lc.activate(&mut ui, true).unwrap();
    assert_eq!(lc.state(), LifecycleState::Active);
    assert_eq!(ui.phase, LifecycleState::Active);
    assert!(!ui.reveal_enabled);
    assert!(ui.canvas_interactive);

    lc.enter_cooldown(&mut ui).unwrap();
    assert_eq!(ui.phase, LifecycleState::Cooldown);
    assert!(!ui.canvas_interactive);
    assert!(!ui.reveal_enabled);

    lc.return_to_idle(&mut ui).unwrap();
    assert_eq!(ui.phase, LifecycleState::Idle);
    assert!(ui.reveal_enabled);
}

#[test]
fn non_interactive_activation_leaves_the_canvas_passive() {
    let mut ui = MockPlatform::new(100.0, 100.0);
    let mut lc = Lifecycle::new();
    lc.activate(&mut ui, false).unwrap();
    assert!(!ui.canvas_interactive);
}

#[test]
fn illegal_transitions_are_rejected() {
    let mut ui = MockPlatform::new(100.0, 100.0);
    let mut lc = Lifecycle::new();
    assert_eq!(
        lc.enter_cooldown(&mut ui),
        Err(TransitionError {
            from: LifecycleState::Idle,
            to: LifecycleState::Cooldown,
        })
    );
    assert!(lc.return_to_idle(&mut ui).is_err());

    lc.activate(&mut ui, true).unwrap();
    assert!(lc.activate(&mut ui, true).is_err());
    assert_eq!(lc.state(), LifecycleState::Active);
}

#[test]
fn force_idle_works_from_any_state() {
    let mut ui = MockPlatform::new(100.0, 100.0);
    let mut lc = Lifecycle::new();
    assert!(!lc.force_idle(&mut ui));

    lc.activate(&mut ui, true).unwrap();
    lc.enter_cooldown(&mut ui).unwrap();
    assert!(lc.force_idle(&mut ui));
    assert!(lc.is_idle());
    assert!(ui.reveal_enabled);
    assert!(!ui.canvas_interactive);
}

#[test]
fn state_classes() {
    assert_eq!(LifecycleState::Idle.css_class(), None);
    assert_eq!(LifecycleState::Active.css_class(), Some("effect-active"));
    assert_eq!(LifecycleState::Cooldown.css_class(), Some("effect-cooldown"));
}

#[test]
fn instant_clock_is_monotonic() {
    let clock = InstantClock::default();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(a >= 0.0);
    assert!(b >= a);
}
