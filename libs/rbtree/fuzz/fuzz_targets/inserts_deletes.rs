#![no_main]

use libfuzzer_sys::fuzz_target;
use rbtree::{RBTree, natural_order};

fuzz_target!(|inserts_removals: (Vec<u16>, Vec<u16>)| {
    let mut tree: RBTree<u16> = RBTree::default();

    for i in inserts_removals.0 {
        tree.insert(i, natural_order, &());
        tree.assert_valid(natural_order, &());
    }

    for i in inserts_removals.1 {
        let present = tree.contains(&i, natural_order, &());
        assert_eq!(tree.delete(&i, natural_order, &()), present);
        assert!(!tree.contains(&i, natural_order, &()));
        tree.assert_valid(natural_order, &());
    }
});
