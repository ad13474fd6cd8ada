use super::*;
use crate::frames::builder::FrameSetBuilder;

fn five_frame_set(reverse: bool) -> FrameSet {
    let a = Image::filled(2, 2, [0, 0, 0, 255]).unwrap();
    let b = Image::filled(2, 2, [200, 100, 40, 255]).unwrap();
    FrameSetBuilder::build(&a, &b, 5, Duration::from_millis(40), reverse).unwrap()
}

#[test]
fn progress_at_spans_unit_interval() {
    assert_eq!(progress_at(0, 5), 0.0);
    assert_eq!(progress_at(2, 5), 0.5);
    assert_eq!(progress_at(4, 5), 1.0);
    assert_eq!(progress_at(0, 1), 0.0);
    assert_eq!(progress_at(9, 5), 1.0);
}

#[test]
fn metadata_is_reported() {
    let set = five_frame_set(false);
    assert_eq!(set.frame_count(), 5);
    assert_eq!(set.per_frame_duration(), Duration::from_millis(40));
    assert_eq!(set.transition_duration(), Duration::from_millis(160));
    assert_eq!(set.size(), Size::new(2, 2));
    assert!(!set.is_reversed());
    for (i, f) in set.frames().iter().enumerate() {
        assert_eq!(f.index(), FrameIndex(i as u32));
    }
    assert!(set.frame(FrameIndex(5)).is_none());
}

#[test]
fn forward_presentation_matches_storage() {
    let set = five_frame_set(false);
    let order: Vec<u32> = set.presentation_order().map(|f| f.index().0).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn reversed_presentation_walks_storage_backwards() {
    let set = five_frame_set(true);
    assert!(set.is_reversed());
    let order: Vec<u32> = set.presentation_order().map(|f| f.index().0).collect();
    assert_eq!(order, vec![4, 3, 2, 1, 0]);
    assert_eq!(set.storage_index(99), FrameIndex(0));
}

#[test]
fn into_reversed_keeps_storage_and_key() {
    let set = five_frame_set(false);
    let key = set.key();
    let first = set.frames()[0].clone();
    let rev = set.into_reversed();
    assert!(rev.is_reversed());
    assert_eq!(rev.key(), key);
    assert_eq!(rev.frames()[0], first);
    assert_eq!(rev.presented(0).index(), FrameIndex(4));
}

#[test]
fn single_frame_set_has_zero_transition_time() {
    let a = Image::filled(1, 1, [1, 1, 1, 1]).unwrap();
    let set = FrameSetBuilder::build(&a, &a, 1, Duration::from_millis(40), true).unwrap();
    assert_eq!(set.transition_duration(), Duration::ZERO);
    assert_eq!(set.storage_index(0), FrameIndex(0));
    assert_eq!(set.presented(3).progress(), 0.0);
}
