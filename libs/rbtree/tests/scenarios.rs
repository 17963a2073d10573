use std::cell::Cell;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rbtree::{Color, RBTree, natural_order};

fn tree_of(keys: &[u32]) -> RBTree<u32> {
    let mut tree = RBTree::default();
    for k in keys {
        assert!(tree.insert(*k, natural_order, &()));
        tree.assert_valid(natural_order, &());
    }
    tree
}

fn in_order(tree: &RBTree<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut curr = tree.first_node();
    while let Some(node) = curr {
        out.push(*node.get());
        curr = node.next();
    }
    out
}

#[test]
fn ascending_inserts() {
    let tree = tree_of(&[1, 2, 3]);

    assert_eq!(tree.size(), 3);
    let first = tree.first_node().unwrap();
    let last = tree.last_node().unwrap();
    assert_eq!(*first.get(), 1);
    assert_eq!(*last.get(), 3);

    let second = first.next().unwrap();
    assert_eq!(*second.get(), 2);
    assert_eq!(second.next(), Some(last));
    assert!(last.next().is_none());

    // ascending inserts rotate 2 up to the root
    let root = tree.root().unwrap();
    assert_eq!(*root.get(), 2);
    assert_eq!(root.color(), Color::Black);
    assert!(root.parent().is_none());
}

#[test]
fn search_and_traversal() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

    let node = tree.find_node(&4, natural_order, &()).unwrap();
    assert_eq!(*node.get(), 4);
    assert!(tree.find(&100, natural_order, &()).is_none());
    assert!(tree.contains(&9, natural_order, &()));
    assert!(!tree.contains(&6, natural_order, &()));

    assert_eq!(in_order(&tree), [1, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn delete_inner_node() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

    assert!(tree.delete(&5, natural_order, &()));
    tree.assert_valid(natural_order, &());

    assert_eq!(tree.size(), 6);
    assert_eq!(in_order(&tree), [1, 3, 4, 7, 8, 9]);
    assert_eq!(tree.root().unwrap().color(), Color::Black);
    assert!(tree.find(&5, natural_order, &()).is_none());
}

#[test]
fn clear_releases_every_payload() {
    let calls = Rc::new(Cell::new(0));
    let mut tree = RBTree::with_release({
        let calls = calls.clone();
        move |_: u32| calls.set(calls.get() + 1)
    });

    let mut keys: Vec<u32> = (0..10).collect();
    keys.shuffle(&mut rand::rng());
    for k in keys {
        tree.insert(k, natural_order, &());
    }

    tree.clear();

    assert_eq!(calls.get(), 10);
    assert_eq!(tree.size(), 0);
    assert!(tree.root().is_none());

    // dropping the cleared tree releases nothing more
    drop(tree);
    assert_eq!(calls.get(), 10);
}

#[test]
fn single_key_roundtrip() {
    let mut tree = tree_of(&[42]);

    assert!(tree.delete(&42, natural_order, &()));
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    tree.assert_valid(natural_order, &());

    for k in [0, 42, u32::MAX] {
        assert!(tree.find(&k, natural_order, &()).is_none());
    }
}

#[test]
fn borrowed_payloads_stay_with_the_caller() {
    let owned: Vec<String> = ["pear", "apple", "fig", "kiwi"]
        .into_iter()
        .map(String::from)
        .collect();

    let by_str = |a: &&String, b: &&String, _: &()| a.cmp(b);
    let by_name = |k: &str, b: &&String, _: &()| k.cmp(b.as_str());

    let mut tree = RBTree::default();
    for s in &owned {
        tree.insert(s, by_str, &());
    }

    assert!(tree.delete("fig", by_name, &()));
    assert_eq!(
        tree.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        ["apple", "kiwi", "pear"]
    );
    tree.free();

    assert_eq!(owned.len(), 4);
}
