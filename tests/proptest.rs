use std::collections::BTreeSet;

use coppice::{Heap, Set, SetBy};
use proptest::prelude::*;

const MAX_KEYS: usize = 64;

#[derive(Clone, Debug)]
enum Action {
    Insert(u8),
    Remove(u8),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..128u8).prop_map(Action::Insert),
        (0..128u8).prop_map(Action::Remove),
    ]
}

fn keys_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..MAX_KEYS)
}

fn sorted<'a>(keys: impl IntoIterator<Item = &'a u8>) -> Vec<u8> {
    let mut v: Vec<u8> = keys.into_iter().copied().collect();
    v.sort();
    v
}

proptest! {
    #[test]
    fn in_order_is_strictly_increasing(keys in keys_strategy()) {
        let set: Set<u8> = keys.iter().copied().collect();
        let model: BTreeSet<u8> = keys.iter().copied().collect();

        let v: Vec<u8> = set.in_order().into_iter().copied().collect();
        let w: Vec<u8> = model.into_iter().collect();
        prop_assert_eq!(v, w);
    }

    #[test]
    fn insert_then_search_then_remove(keys in keys_strategy(), key in any::<u8>()) {
        let mut set: Set<u8> = keys.iter().copied().collect();

        set.insert(key);
        prop_assert_eq!(set.search(&key), Some(&key));

        prop_assert_eq!(set.remove(&key), Some(key));
        prop_assert_eq!(set.search(&key), None);
    }

    #[test]
    fn duplicate_insert_is_ignored(keys in keys_strategy(), ix in any::<prop::sample::Index>()) {
        prop_assume!(!keys.is_empty());

        let mut set: Set<u8> = keys.iter().copied().collect();
        let before: Vec<u8> = set.iter().copied().collect();
        let allocated_count = set.allocated_count().clone();

        set.insert(keys[ix.index(keys.len())]);
        let after: Vec<u8> = set.iter().copied().collect();

        prop_assert_eq!(before, after);
        prop_assert_eq!(set.allocated_count(), &allocated_count);
    }

    #[test]
    fn removal_keeps_the_rest_sorted(keys in keys_strategy(), doomed in proptest::collection::vec(any::<bool>(), MAX_KEYS)) {
        let mut set: Set<u8> = keys.iter().copied().collect();
        let mut model: BTreeSet<u8> = keys.iter().copied().collect();
        let allocated_count = set.allocated_count().clone();

        for (key, remove) in keys.iter().zip(doomed) {
            if remove {
                prop_assert_eq!(set.remove(key), model.take(key));
            }
        }

        let v: Vec<u8> = set.in_order().into_iter().copied().collect();
        let w: Vec<u8> = model.into_iter().collect();
        prop_assert_eq!(v, w);
        prop_assert_eq!(set.allocated_count(), &allocated_count);
    }

    #[test]
    fn traversals_hold_the_same_keys(actions in proptest::collection::vec(action_strategy(), 0..MAX_KEYS)) {
        let mut set = Set::new();
        for action in &actions {
            match action {
                Action::Insert(key) => set.insert(*key),
                Action::Remove(key) => {
                    set.remove(key);
                }
            }
        }

        let in_order = sorted(set.in_order());
        prop_assert_eq!(&sorted(set.pre_order()), &in_order);
        prop_assert_eq!(&sorted(set.post_order()), &in_order);
        prop_assert_eq!(&sorted(set.level_order()), &in_order);
        prop_assert_eq!(in_order.len(), set.count());
    }

    #[test]
    fn custom_order_matches_model(actions in proptest::collection::vec(action_strategy(), 0..MAX_KEYS)) {
        let mut set = SetBy::new(|a: &u8, b: &u8| b.cmp(a));
        let mut model = BTreeSet::new();
        for action in &actions {
            match action {
                Action::Insert(key) => {
                    set.insert(*key);
                    model.insert(*key);
                }
                Action::Remove(key) => {
                    prop_assert_eq!(set.remove(key), model.take(key));
                }
            }
        }

        let v: Vec<u8> = set.iter().copied().collect();
        let w: Vec<u8> = model.into_iter().rev().collect();
        prop_assert_eq!(v, w);
    }

    #[test]
    fn heap_pops_in_order(keys in proptest::collection::vec(any::<i32>(), 0..200)) {
        let heap: Heap<i32> = keys.iter().copied().collect();

        let mut model = keys;
        model.sort();
        prop_assert_eq!(heap.into_sorted_vec(), model);
    }
}
