use std::cmp::Ordering;
use std::panic::{catch_unwind, AssertUnwindSafe};

use coppice::SetBy;

const UNORDERED: u32 = 13;

// Panics whenever the unordered key takes part in a comparison
fn compare(a: &u32, b: &u32) -> Ordering {
    if *a == UNORDERED || *b == UNORDERED {
        panic!("{UNORDERED} has no place in the order");
    }
    a.cmp(b)
}

#[test]
// A comparator that panics leaves the set as it was
fn panicking_comparator_leaves_set_unchanged() {
    let mut set = SetBy::new(compare);
    for key in [50, 30, 80, 10, 40, 70, 90] {
        set.insert(key);
    }
    assert_eq!(set.remove(&30), Some(30));

    let in_order: Vec<u32> = set.in_order().into_iter().copied().collect();
    let level_order: Vec<u32> = set.level_order().into_iter().copied().collect();
    let count = set.count();
    let allocated_count = set.allocated_count().clone();

    let inserted = catch_unwind(AssertUnwindSafe(|| set.insert(UNORDERED)));
    assert!(inserted.is_err());

    let removed = catch_unwind(AssertUnwindSafe(|| set.remove(&UNORDERED)));
    assert!(removed.is_err());

    assert_eq!(set.in_order().into_iter().copied().collect::<Vec<_>>(), in_order);
    assert_eq!(set.level_order().into_iter().copied().collect::<Vec<_>>(), level_order);
    assert_eq!(set.count(), count);
    assert_eq!(set.allocated_count(), &allocated_count);

    // The set is still usable afterwards
    set.insert(60);
    assert_eq!(set.search(&60), Some(&60));
    assert_eq!(set.remove(&50), Some(50));
    assert_eq!(
        set.in_order().into_iter().copied().collect::<Vec<_>>(),
        [10, 40, 60, 70, 80, 90]
    );
}
