// Host-side tests for the reveal latches.

use site_core::{stagger_delay_ms, ElementId, Reveal, VisibilityTracker};

#[test]
fn threshold_crossing_reveals_once() {
    let mut t = VisibilityTracker::new();
    let id = ElementId(1);
    assert!(t.register(id, 0.15));

    assert_eq!(t.on_intersection(id, 0.05), None);
    assert!(!t.is_revealed(id));

    assert_eq!(t.on_intersection(id, 0.2), Some(Reveal { id, delay_ms: 0 }));
    assert!(t.is_revealed(id));

    // Leaving the viewport does not undo the reveal.
    assert_eq!(t.on_intersection(id, 0.0), None);
    assert!(t.is_revealed(id));
}

#[test]
fn exact_threshold_counts() {
    let mut t = VisibilityTracker::new();
    t.register(ElementId(2), 0.5);
    assert!(t.on_intersection(ElementId(2), 0.5).is_some());
}

#[test]
fn notifies_exactly_once() {
    let mut t = VisibilityTracker::new();
    let id = ElementId(3);
    t.register(id, 0.1);
    let notifications = [0.0, 0.3, 0.9, 1.0, 0.05, 0.6]
        .iter()
        .filter_map(|&r| t.on_intersection(id, r))
        .count();
    assert_eq!(notifications, 1);
}

#[test]
fn duplicate_registration_is_idempotent() {
    let mut t = VisibilityTracker::new();
    assert!(t.register(ElementId(7), 0.3));
    for _ in 0..5 {
        assert!(!t.register(ElementId(7), 0.9));
    }
    assert_eq!(t.len(), 1);
    // The first registration's threshold is kept.
    assert_eq!(t.get(ElementId(7)).map(|e| e.threshold), Some(0.3));
}

#[test]
fn reregistering_a_revealed_element_does_not_reset_it() {
    let mut t = VisibilityTracker::new();
    t.register(ElementId(8), 0.1);
    t.on_intersection(ElementId(8), 1.0);
    assert!(!t.register(ElementId(8), 0.1));
    assert!(t.is_revealed(ElementId(8)));
}

#[test]
fn out_of_range_thresholds_are_clamped() {
    let mut t = VisibilityTracker::new();
    t.register(ElementId(1), -3.0);
    t.register(ElementId(2), 4.0);
    assert_eq!(t.get(ElementId(1)).map(|e| e.threshold), Some(0.0));
    assert_eq!(t.get(ElementId(2)).map(|e| e.threshold), Some(1.0));

    // Threshold 0 reveals on any report, threshold 1 needs full visibility.
    assert!(t.on_intersection(ElementId(1), 0.0).is_some());
    assert!(t.on_intersection(ElementId(2), 0.99).is_none());
    assert!(t.on_intersection(ElementId(2), 1.0).is_some());
}

#[test]
fn never_intersecting_element_stays_hidden() {
    let mut t = VisibilityTracker::new();
    t.register(ElementId(1), 0.1);
    t.register(ElementId(2), 0.1);
    t.on_intersection(ElementId(1), 0.4);
    assert_eq!(t.pending(), vec![ElementId(2)]);
    assert!(t.is_observed(ElementId(2)));
    assert!(!t.is_observed(ElementId(1)));
}

#[test]
fn boolean_reports_map_to_full_and_empty_ratio() {
    let mut t = VisibilityTracker::new();
    t.register(ElementId(1), 1.0);
    assert!(t.on_intersecting(ElementId(1), false).is_none());
    assert!(t.on_intersecting(ElementId(1), true).is_some());
}

#[test]
fn delay_is_carried_into_the_notification() {
    let mut t = VisibilityTracker::new();
    for i in 0..3 {
        t.register_with_delay(ElementId(i), 0.1, stagger_delay_ms(i as usize));
    }
    let r = t.on_intersection(ElementId(2), 0.5);
    assert_eq!(
        r,
        Some(Reveal {
            id: ElementId(2),
            delay_ms: 200
        })
    );
}

#[test]
fn already_revealed_registration_never_notifies() {
    let mut t = VisibilityTracker::new();
    assert!(t.register_revealed(ElementId(4), 0.1));
    assert!(t.is_revealed(ElementId(4)));
    assert!(t.pending().is_empty());
    assert_eq!(t.on_intersection(ElementId(4), 1.0), None);
    // A later plain registration cannot reset the latch.
    assert!(!t.register(ElementId(4), 0.1));
    assert!(t.is_revealed(ElementId(4)));
}
