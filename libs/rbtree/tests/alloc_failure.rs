use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;

use rbtree::{InsertError, RBTree, natural_order};

thread_local! {
    static FAIL_ALLOCATIONS: Cell<bool> = const { Cell::new(false) };
}

/// Forwards to the system allocator, but fails every allocation made by the current thread while
/// `FAIL_ALLOCATIONS` is set.
struct FailingAlloc;

unsafe impl GlobalAlloc for FailingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL_ALLOCATIONS.try_with(Cell::get).unwrap_or(false) {
            return ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: FailingAlloc = FailingAlloc;

fn out_of_memory<R>(f: impl FnOnce() -> R) -> R {
    FAIL_ALLOCATIONS.with(|fail| fail.set(true));
    let out = f();
    FAIL_ALLOCATIONS.with(|fail| fail.set(false));
    out
}

#[test]
fn failed_allocation_leaves_tree_untouched() {
    let mut tree: RBTree<u64> = RBTree::default();
    for k in [5, 3, 8, 1, 4, 7, 9] {
        assert!(tree.insert(k, natural_order, &()));
    }
    let before: Vec<u64> = tree.iter().copied().collect();
    let root = *tree.root().unwrap().get();

    let res = out_of_memory(|| tree.try_insert(6, natural_order, &()));
    assert_eq!(res, Err(InsertError::AllocError(6)));
    assert!(!out_of_memory(|| tree.insert(2, natural_order, &())));
    // duplicates are rejected before a node is allocated
    let dup = out_of_memory(|| tree.try_insert(4, natural_order, &()));
    assert_eq!(dup, Err(InsertError::Duplicate(4)));

    assert_eq!(tree.size(), 7);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
    assert_eq!(*tree.root().unwrap().get(), root);
    assert!(!tree.contains(&6, natural_order, &()));
    tree.assert_valid(natural_order, &());

    // once memory is available again the handed back payload can be inserted
    let payload = res.unwrap_err().into_inner();
    assert!(tree.insert(payload, natural_order, &()));
    assert_eq!(tree.size(), 8);
    tree.assert_valid(natural_order, &());
}

#[test]
fn failed_allocation_hands_payload_back() {
    let mut tree: RBTree<String> = RBTree::default();

    let name = String::from("kiwi");
    let err = out_of_memory(|| tree.try_insert(name, natural_order, &())).unwrap_err();
    assert!(matches!(err, InsertError::AllocError(_)));
    assert_eq!(err.into_inner(), "kiwi");

    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    tree.assert_valid(natural_order, &());
}
