//! End-to-end timing scenarios for the carousel host.
//!
//! These drive the full loop: engine effects into the timer driver, due
//! timers back into the engine, published snapshots into a recording
//! render callback.

use std::cell::RefCell;
use std::rc::Rc;

use revolve_engine::{CarouselConfig, CarouselState, InputSource};
use revolve_shell::CarouselHost;

type Rendered = Rc<RefCell<Vec<CarouselState>>>;

fn recording_host(config: CarouselConfig) -> (CarouselHost<impl FnMut(&CarouselState)>, Rendered) {
    let rendered: Rendered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&rendered);
    let host = CarouselHost::new(config, move |state| sink.borrow_mut().push(*state)).unwrap();
    (host, rendered)
}

fn autoplay_config(count: usize) -> CarouselConfig {
    CarouselConfig::new(count)
        .with_autoplay_interval(5_000)
        .with_transition_duration(700)
}

#[test]
fn autoplay_cycles_back_to_the_first_slide() {
    let (mut host, _rendered) = recording_host(autoplay_config(4));
    host.set_view_active(true);

    // Four intervals plus their transitions: 0 -> 1 -> 2 -> 3 -> 0
    host.advance_by(4 * 5_700).unwrap();
    assert_eq!(host.state().active_index, 0);
    assert!(!host.state().is_transitioning);
}

#[test]
fn double_start_fires_one_advance_per_interval() {
    let (mut host, rendered) = recording_host(autoplay_config(5));
    host.set_view_active(true);
    host.start_autoplay();
    host.start_autoplay();

    host.advance_by(5_000).unwrap();
    assert_eq!(host.state().active_index, 1);

    // Exactly one transition was rendered: commit + unlock
    let indices: Vec<_> = rendered.borrow().iter().map(|s| s.active_index).collect();
    assert_eq!(indices, vec![1]);

    host.advance_by(700).unwrap();
    assert_eq!(rendered.borrow().len(), 2);
    assert_eq!(host.state().active_index, 1);
}

#[test]
fn leaving_the_viewport_freezes_the_carousel() {
    let (mut host, rendered) = recording_host(autoplay_config(3));
    host.set_view_active(true);
    host.advance_by(5_700).unwrap();
    assert_eq!(host.state().active_index, 1);

    host.set_view_active(false);
    let rendered_before = rendered.borrow().len();
    host.advance_by(120_000).unwrap();
    assert_eq!(host.state().active_index, 1);
    assert_eq!(rendered.borrow().len(), rendered_before);
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn dispose_mid_transition_renders_nothing_further() {
    let (mut host, rendered) = recording_host(autoplay_config(5));
    host.set_view_active(true);
    host.next();
    let rendered_before = rendered.borrow().len();

    host.dispose();
    host.advance_by(60_000).unwrap();

    assert_eq!(rendered.borrow().len(), rendered_before);
    assert_eq!(host.pending_timers(), 0);
    assert!(host.state().is_transitioning); // frozen as disposed mid-flight
}

#[test]
fn manual_click_then_autoplay_resumes() {
    let (mut host, _rendered) = recording_host(autoplay_config(5));
    host.set_view_active(true);

    host.advance_by(4_000).unwrap();
    host.go_to(3, None);

    // The pre-click tick was cancelled; only the transition runs
    host.advance_by(1_000).unwrap();
    assert_eq!(host.state().active_index, 3);

    // Autoplay rearms at unlock (t=4700) and fires at t=9700
    host.advance_by(5_000).unwrap();
    assert_eq!(host.state().active_index, 4);
}

#[test]
fn drag_then_discrete_transition() {
    let (mut host, rendered) = recording_host(CarouselConfig::new(5));

    host.apply_delta(500.0, InputSource::Drag); // 500 * 0.1 = 50 progress
    assert_eq!(host.state().progress, 50.0);
    assert_eq!(host.state().active_index, 2);
    assert_eq!(host.pending_timers(), 0); // drags never arm timers

    host.next();
    assert_eq!(host.state().active_index, 3);
    assert!(host.state().is_transitioning);

    host.advance_by(700).unwrap();
    assert!(!host.state().is_transitioning);
    assert_eq!(rendered.borrow().len(), 3); // drag, commit, unlock
}

#[test]
fn swipe_steps_are_discrete_progress_jumps() {
    let (mut host, _rendered) = recording_host(CarouselConfig::new(5));

    host.apply_delta(1.0, InputSource::Swipe);
    assert_eq!(host.state().progress, 20.0);

    host.apply_delta(1.0, InputSource::Swipe);
    assert_eq!(host.state().progress, 40.0);
    assert_eq!(host.state().active_index, 1);

    host.apply_delta(-1.0, InputSource::Swipe);
    assert_eq!(host.state().progress, 20.0);
}

#[test]
fn renders_follow_effect_order() {
    let (mut host, rendered) = recording_host(autoplay_config(3));
    host.set_view_active(true);
    host.next();
    host.advance_by(700).unwrap();

    let states = rendered.borrow();
    assert_eq!(states.len(), 2);
    assert!(states[0].is_transitioning);
    assert!(!states[1].is_transitioning);
    assert_eq!(states[0].active_index, states[1].active_index);
}
