use crypto_dashboard_wasm::domain::chart::ValueAnimation;

#[test]
fn equal_endpoints_need_no_animation() {
    assert!(ValueAnimation::new(100.0, 100.0, 1000.0).is_none());
}

#[test]
fn non_positive_duration_needs_no_animation() {
    assert!(ValueAnimation::new(1.0, 2.0, 0.0).is_none());
    assert!(ValueAnimation::new(1.0, 2.0, -5.0).is_none());
}

#[test]
fn value_is_linear_in_elapsed_time() {
    let animation = ValueAnimation::new(100.0, 200.0, 1000.0).unwrap();
    assert_eq!(animation.value_at(0.0), 100.0);
    assert_eq!(animation.value_at(250.0), 125.0);
    assert_eq!(animation.value_at(500.0), 150.0);
    assert_eq!(animation.value_at(1000.0), 200.0);
}

#[test]
fn progress_clamps_past_duration() {
    let animation = ValueAnimation::new(10.0, 20.0, 1000.0).unwrap();
    assert_eq!(animation.progress(1500.0), 1.0);
    assert_eq!(animation.value_at(99_999.0), 20.0);
    assert!(animation.is_complete(1000.0));
    assert!(animation.is_complete(1500.0));
    assert!(!animation.is_complete(999.9));
}

#[test]
fn negative_elapsed_clamps_to_start() {
    let animation = ValueAnimation::new(10.0, 20.0, 1000.0).unwrap();
    assert_eq!(animation.value_at(-50.0), 10.0);
}

#[test]
fn downward_transition_interpolates_toward_end() {
    let animation = ValueAnimation::new(200.0, 100.0, 1000.0).unwrap();
    assert_eq!(animation.value_at(500.0), 150.0);
    assert_eq!(animation.value_at(1000.0), 100.0);
}

#[test]
fn superseding_animation_starts_from_displayed_value() {
    // A new sync mid-animation restarts from wherever the display got
    // to; the stale animation's samples are simply never applied again
    // (last writer wins).
    let first = ValueAnimation::new(100.0, 200.0, 1000.0).unwrap();
    let displayed = first.value_at(400.0);
    assert_eq!(displayed, 140.0);

    let second = ValueAnimation::new(displayed, 300.0, 1000.0).unwrap();
    assert_eq!(second.value_at(0.0), 140.0);
    assert_eq!(second.value_at(1000.0), 300.0);
}
