#![no_main]

use libfuzzer_sys::fuzz_target;
use rbtree::{RBTree, natural_order};

fuzz_target!(|inserts: Vec<usize>| {
    let mut tree: RBTree<usize> = RBTree::default();

    for i in inserts {
        let fresh = !tree.contains(&i, natural_order, &());
        assert_eq!(tree.insert(i, natural_order, &()), fresh);
        tree.assert_valid(natural_order, &());
    }
});
