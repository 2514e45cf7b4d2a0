use site_core::reveal::RevealTracker;

#[test]
fn first_intersection_reveals_and_second_is_a_no_op() {
    let mut tracker = RevealTracker::new(3);
    assert!(tracker.mark_revealed(1));
    assert!(tracker.is_revealed(1));

    // Leaving and re-entering the viewport reports another intersection;
    // the element must stay revealed with no state change.
    assert!(!tracker.mark_revealed(1));
    assert!(tracker.is_revealed(1));
    assert_eq!(tracker.pending_count(), 2);
}

#[test]
fn elements_reveal_independently() {
    let mut tracker = RevealTracker::new(4);
    tracker.mark_revealed(0);
    tracker.mark_revealed(2);
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_revealed(1));
    assert!(tracker.is_revealed(2));
    assert!(!tracker.is_revealed(3));
    assert_eq!(tracker.pending_count(), 2);
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut tracker = RevealTracker::new(2);
    assert!(!tracker.mark_revealed(2));
    assert!(!tracker.mark_revealed(99));
    assert_eq!(tracker.pending_count(), 2);
}

#[test]
fn reveal_all_flips_everything_once() {
    let mut tracker = RevealTracker::new(5);
    tracker.mark_revealed(3);

    let changed = tracker.reveal_all();
    assert_eq!(changed, vec![0, 1, 2, 4]);
    assert_eq!(tracker.pending_count(), 0);

    // A second sweep has nothing left to do.
    assert!(tracker.reveal_all().is_empty());
}

#[test]
fn empty_tracker_is_trivially_done() {
    let mut tracker = RevealTracker::new(0);
    assert!(tracker.is_empty());
    assert_eq!(tracker.pending_count(), 0);
    assert!(tracker.reveal_all().is_empty());
}
