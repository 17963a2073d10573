use std::collections::BTreeSet;

use proptest::prelude::*;
use rbtree::{RBTree, natural_order};

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Delete(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(|k| Op::Insert(k % 512)),
        2 => any::<u16>().prop_map(|k| Op::Delete(k % 512)),
    ]
}

proptest! {
    #[test]
    fn matches_btreeset(ops in proptest::collection::vec(op(), 0..600)) {
        let mut tree: RBTree<u16> = RBTree::default();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    tracing::debug!("inserting {k}");
                    prop_assert_eq!(tree.insert(k, natural_order, &()), model.insert(k));
                }
                Op::Delete(k) => {
                    tracing::debug!("deleting {k}");
                    prop_assert_eq!(tree.delete(&k, natural_order, &()), model.remove(&k));
                    prop_assert!(tree.find(&k, natural_order, &()).is_none());
                }
            }

            tree.assert_valid(natural_order, &());
            prop_assert_eq!(tree.size(), model.len());
        }

        let values: Vec<_> = tree.iter().copied().collect();
        let expected: Vec<_> = model.iter().copied().collect();
        prop_assert_eq!(values, expected);

        let reversed: Vec<_> = tree.iter().rev().copied().collect();
        let expected: Vec<_> = model.iter().rev().copied().collect();
        prop_assert_eq!(reversed, expected);
    }

    #[test]
    fn insert_then_delete_all(keys in proptest::collection::hash_set(any::<u32>(), 1..400)) {
        let keys: Vec<_> = keys.into_iter().collect();
        let mut tree: RBTree<u32> = RBTree::default();

        for k in &keys {
            prop_assert!(tree.insert(*k, natural_order, &()));
        }
        tree.assert_valid(natural_order, &());

        let first = *tree.first_node().unwrap().get();
        let last = *tree.last_node().unwrap().get();
        prop_assert_eq!(Some(first), keys.iter().copied().min());
        prop_assert_eq!(Some(last), keys.iter().copied().max());

        // delete in a different order than inserted
        let mut order = keys.clone();
        order.sort_unstable_by_key(|k| k.rotate_left(7) ^ 0x5bd1_e995);
        for k in &order {
            prop_assert!(tree.delete(k, natural_order, &()));
            tree.assert_valid(natural_order, &());
        }

        prop_assert!(tree.is_empty());
        prop_assert!(tree.root().is_none());
        prop_assert!(tree.first_node().is_none());
        prop_assert!(tree.last_node().is_none());
    }

    #[test]
    fn duplicates_keep_first_payload(pairs in proptest::collection::vec((0u8..64, any::<u32>()), 1..300)) {
        let by_key = |a: &(u8, u32), b: &(u8, u32), _: &()| a.0.cmp(&b.0);
        let find_by_key = |k: &u8, b: &(u8, u32), _: &()| k.cmp(&b.0);

        let mut tree = RBTree::default();
        let mut first_seen = std::collections::BTreeMap::new();

        for pair in pairs {
            let fresh = !first_seen.contains_key(&pair.0);
            first_seen.entry(pair.0).or_insert(pair.1);
            prop_assert_eq!(tree.insert(pair, by_key, &()), fresh);
        }
        tree.assert_valid(by_key, &());
        prop_assert_eq!(tree.size(), first_seen.len());

        for (k, v) in &first_seen {
            prop_assert_eq!(tree.find(k, find_by_key, &()), Some(&(*k, *v)));
        }
    }
}
