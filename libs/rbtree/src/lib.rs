// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # A top-down red-black tree.
//!
//! [`RBTree`] is a self-balancing binary search tree storing opaque payloads under a
//! caller-supplied total order. Search, insertion and deletion run in O(log n), in-order
//! traversal needs neither recursion nor auxiliary storage, and clearing the tree runs in O(n)
//! time with O(1) extra space.
//!
//! Both insertion and deletion rebalance *top-down*: violations of the red-black rules are fixed
//! eagerly while walking from the root to the affected leaf, so every mutation is a single pass
//! down the tree with no upward correction pass afterwards.
//!
//! ## ordering
//!
//! The tree never requires `T: Ord`. Every operation that needs to order elements takes a
//! comparator `FnMut(&Q, &T, &C) -> Ordering` together with a context value `&C` that is handed
//! through to it. The comparator receives the key first and the stored payload second. The same
//! tree type can be reused for many orderings, but all calls on one tree **must** agree on a
//! single strict total order; violating this leaves the tree in an unspecified (but memory safe)
//! shape.
//!
//! [`natural_order`] is a ready-made comparator for `T: Ord` with a `()` context:
//!
//! ```rust
//! use rbtree::{RBTree, natural_order};
//!
//! let mut tree = RBTree::default();
//! assert!(tree.insert(5, natural_order, &()));
//! assert!(tree.insert(3, natural_order, &()));
//! // duplicates are rejected
//! assert!(!tree.insert(5, natural_order, &()));
//!
//! assert_eq!(tree.find(&3, natural_order, &()), Some(&3));
//! assert!(tree.delete(&5, natural_order, &()));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3]);
//! ```
//!
//! The context lets one comparator serve several orderings:
//!
//! ```rust
//! use core::cmp::Ordering;
//! use rbtree::RBTree;
//!
//! let by_direction = |a: &u32, b: &u32, descending: &bool| -> Ordering {
//!     if *descending { b.cmp(a) } else { a.cmp(b) }
//! };
//!
//! let mut tree = RBTree::default();
//! for n in [2, 3, 1] {
//!     tree.insert(n, by_direction, &true);
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
//! ```
//!
//! ## ownership
//!
//! The tree owns its payloads. When a node is destroyed (through [`RBTree::delete`],
//! [`RBTree::clear`], [`RBTree::free`] or by dropping the tree) its payload is handed to the
//! release callback configured in [`RBTree::new`], or simply dropped if there is none. For
//! handle-like payloads such as references or raw pointers, "no release callback" therefore means
//! the caller keeps ownership of the referent. [`RBTree::remove`] hands the payload back instead
//! of releasing it.
//!
//! ## features
//!
//! | Feature | Default | Explanation                                                                            |
//! |:--------|:--------|:---------------------------------------------------------------------------------------|
//! | `dot`   | `false` | Enables the `RBTree::dot` method, which allows display of the tree in [graphviz format] |
//!
//! [graphviz format]: https://graphviz.org/doc/info/lang.html

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod cursor;
#[cfg(feature = "dot")]
mod dot;
mod iter;
mod node;
mod utils;

use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

pub use cursor::NodeRef;
#[cfg(feature = "dot")]
pub use dot::Dot;
pub use iter::Iter;
pub use node::Color;

use crate::node::{Link, Node, Unlinked};
use crate::utils::Side;

/// Callback invoked with every payload whose node is destroyed by the tree.
pub type Release<T> = Box<dyn FnMut(T)>;

/// Comparator ordering payloads by their [`Ord`] implementation, ignoring the context.
pub fn natural_order<T: Ord + ?Sized>(key: &T, stored: &T, _ctx: &()) -> Ordering {
    key.cmp(stored)
}

/// Error type returned by [`RBTree::try_insert`].
///
/// Both variants hand the payload that could not be inserted back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError<T> {
    /// Allocating the node for the payload failed.
    AllocError(T),
    /// A comparator-equal payload is already stored in the tree.
    Duplicate(T),
}

impl<T> InsertError<T> {
    /// Returns the payload that was not inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::AllocError(data) | InsertError::Duplicate(data) => data,
        }
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::AllocError(_) => write!(f, "allocation failure"),
            InsertError::Duplicate(_) => write!(f, "duplicate key"),
        }
    }
}

impl<T: fmt::Debug> core::error::Error for InsertError<T> {}

/// A red-black tree storing payloads of type `T` under a caller-supplied order.
///
/// Invariants upheld after every public operation:
///
/// 1. The root, if present, is black and has no parent.
/// 2. No red node has a red child.
/// 3. Every path from the root to a missing child crosses the same number of black nodes.
/// 4. Payloads are placed in comparator order (lesser to the left, greater to the right).
/// 5. Parent links exactly mirror child links.
///
/// Consequently the height is bounded by 2log2(n + 1) and all lookups and mutations complete in
/// logarithmic time. [`RBTree::assert_valid`] checks all of the above.
pub struct RBTree<T> {
    pub(crate) root: Link<T>,
    size: usize,
    release: Option<Release<T>>,
    _marker: PhantomData<T>,
}

impl<T> Drop for RBTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for RBTree<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T: fmt::Debug> fmt::Debug for RBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a RBTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> RBTree<T> {
    /// Creates a new, empty tree.
    ///
    /// `release` is invoked with the payload of every node the tree destroys. Without it payloads
    /// are simply dropped.
    #[must_use]
    pub fn new(release: Option<Release<T>>) -> Self {
        Self {
            root: None,
            size: 0,
            release,
            _marker: PhantomData,
        }
    }

    /// Creates a new, empty tree that hands destroyed payloads to `release`.
    #[must_use]
    pub fn with_release<F>(release: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Self::new(Some(Box::new(release)))
    }

    /// Returns the number of entries in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no entries.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.root.is_none(), self.size() == 0);
        self.size() == 0
    }

    /// Returns the root node of the tree, if any.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(NodeRef::new)
    }

    /// Returns the node holding the least payload, or `None` if the tree is empty.
    pub fn first_node(&self) -> Option<NodeRef<'_, T>> {
        self.root
            .map(|root| NodeRef::new(unsafe { utils::find_minimum(root) }))
    }

    /// Returns the node holding the greatest payload, or `None` if the tree is empty.
    pub fn last_node(&self) -> Option<NodeRef<'_, T>> {
        self.root
            .map(|root| NodeRef::new(unsafe { utils::find_maximum(root) }))
    }

    /// Gets an iterator over the payloads in the tree, in comparator order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.root.map(|root| unsafe { utils::find_minimum(root) }),
            tail: self.root.map(|root| unsafe { utils::find_maximum(root) }),
            remaining: self.size,
            _tree: PhantomData,
        }
    }

    /// Returns the node whose payload is comparator-equal to `key`.
    pub fn find_node<Q, C, F>(&self, key: &Q, mut cmp: F, ctx: &C) -> Option<NodeRef<'_, T>>
    where
        Q: ?Sized,
        C: ?Sized,
        F: FnMut(&Q, &T, &C) -> Ordering,
    {
        let mut tree = self.root;
        while let Some(curr) = tree {
            // Safety: all links reachable from the root point to live nodes
            let (data, links) = unsafe { (Node::data(curr), Node::links(curr)) };

            match cmp(key, data, ctx) {
                Ordering::Equal => return Some(NodeRef::new(curr)),
                Ordering::Less => tree = links.left(),
                Ordering::Greater => tree = links.right(),
            }
        }

        None
    }

    /// Returns the payload that is comparator-equal to `key`.
    pub fn find<Q, C, F>(&self, key: &Q, cmp: F, ctx: &C) -> Option<&T>
    where
        Q: ?Sized,
        C: ?Sized,
        F: FnMut(&Q, &T, &C) -> Ordering,
    {
        self.find_node(key, cmp, ctx).map(|node| node.get())
    }

    /// Returns `true` if a payload comparator-equal to `key` is stored in the tree.
    pub fn contains<Q, C, F>(&self, key: &Q, cmp: F, ctx: &C) -> bool
    where
        Q: ?Sized,
        C: ?Sized,
        F: FnMut(&Q, &T, &C) -> Ordering,
    {
        self.find_node(key, cmp, ctx).is_some()
    }

    /// Inserts `data` into the tree, returning `true` if it was inserted.
    ///
    /// Returns `false` if a comparator-equal payload is already present or if the node could not
    /// be allocated. In both cases `data` is dropped without being passed to the release callback;
    /// use [`RBTree::try_insert`] to get it back.
    pub fn insert<C, F>(&mut self, data: T, cmp: F, ctx: &C) -> bool
    where
        C: ?Sized,
        F: FnMut(&T, &T, &C) -> Ordering,
    {
        self.try_insert(data, cmp, ctx).is_ok()
    }

    /// Inserts `data` into the tree.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::Duplicate`] if a comparator-equal payload is already present, and
    /// [`InsertError::AllocError`] if the node could not be allocated. In both cases the tree is
    /// left exactly as it was, shape and colors included.
    pub fn try_insert<C, F>(&mut self, data: T, mut cmp: F, ctx: &C) -> Result<(), InsertError<T>>
    where
        C: ?Sized,
        F: FnMut(&T, &T, &C) -> Ordering,
    {
        // the walk below recolors and rotates before it reaches an equal node
        if self.find_node(&data, &mut cmp, ctx).is_some() {
            tracing::trace!("rejecting duplicate key");
            return Err(InsertError::Duplicate(data));
        }

        let node = Unlinked::alloc(data).map_err(|data| {
            tracing::trace!("failed to allocate tree node");
            InsertError::AllocError(data)
        })?;

        let Some(root) = self.root else {
            let node = node.into_linked();
            // Safety: the node was just allocated and is not shared
            unsafe { Node::links(node).set_color(Color::Black) };
            self.root = Some(node);
            self.size += 1;
            return Ok(());
        };

        // Safety: `root` and all nodes reachable from it are live, `node` is unlinked
        let inserted = unsafe { self.insert_top_down(root, node.as_ptr(), &mut cmp, ctx) };
        self.fixup_root();

        if inserted {
            node.into_linked();
            self.size += 1;
            Ok(())
        } else {
            // only reachable with a comparator that disagrees with itself
            Err(InsertError::Duplicate(node.into_data()))
        }
    }

    /// Removes the payload comparator-equal to `key`, passing it to the release callback.
    ///
    /// Returns `false` if the tree is empty or holds no such payload.
    pub fn delete<Q, C, F>(&mut self, key: &Q, cmp: F, ctx: &C) -> bool
    where
        Q: ?Sized,
        C: ?Sized,
        F: FnMut(&Q, &T, &C) -> Ordering,
    {
        match self.remove(key, cmp, ctx) {
            Some(data) => {
                self.release_payload(data);
                true
            }
            None => false,
        }
    }

    /// Removes the payload comparator-equal to `key` and returns it, without invoking the release
    /// callback.
    ///
    /// # Panics
    ///
    /// Panics if the tree ends up empty while still accounting for live nodes, which indicates an
    /// inconsistent comparator or a bug in the rebalancing.
    pub fn remove<Q, C, F>(&mut self, key: &Q, mut cmp: F, ctx: &C) -> Option<T>
    where
        Q: ?Sized,
        C: ?Sized,
        F: FnMut(&Q, &T, &C) -> Ordering,
    {
        if self.root.is_none() {
            tracing::trace!("attempted to remove from an empty tree");
            return None;
        }

        // Safety: all nodes reachable from the root are live
        let data = unsafe { self.remove_top_down(key, &mut cmp, ctx) };

        if self.root.is_some() {
            self.fixup_root();
        } else {
            assert_eq!(
                self.size, 0,
                "tree has no root but still accounts for {} nodes",
                self.size
            );
        }

        data
    }

    /// Removes all entries from the tree, passing every payload to the release callback.
    ///
    /// Runs in O(n) time and O(1) space: instead of recursing, left children are rotated up
    /// until the current node has none, at which point it can be destroyed and the walk continues
    /// with its right child.
    pub fn clear(&mut self) {
        tracing::trace!(size = self.size, "clearing tree");

        // `self.root` always holds the nodes not yet destroyed, so a panicking release callback
        // leaves them reachable for the next `clear` or the drop of the tree.
        while let Some(node) = self.root {
            // Safety: nodes are only destroyed once all links to them are gone
            unsafe {
                let links = Node::links(node);
                if let Some(save) = links.left() {
                    utils::set_link(node, Side::Left, Node::links(save).right());
                    utils::set_link(save, Side::Right, Some(node));
                    self.set_slot(None, Side::Right, Some(save));
                } else {
                    self.set_slot(None, Side::Right, links.right());
                    let data = Node::into_data(node);
                    self.size -= 1;
                    self.release_payload(data);
                }
            }
        }

        debug_assert_eq!(self.size, 0);
    }

    /// Clears the tree, then releases the tree itself.
    pub fn free(mut self) {
        self.clear();
    }

    /// Returns a graphviz rendering of the tree.
    #[cfg(feature = "dot")]
    pub fn dot(&self) -> Dot<'_, T> {
        Dot { tree: self }
    }

    /// Asserts all red-black invariants, the consistency of parent links, the comparator order of
    /// the payloads and that the recorded size matches the number of reachable nodes.
    ///
    /// # Panics
    ///
    /// Panics describing the first violated invariant.
    #[track_caller]
    pub fn assert_valid<C, F>(&self, mut cmp: F, ctx: &C)
    where
        C: ?Sized,
        F: FnMut(&T, &T, &C) -> Ordering,
    {
        let Some(root) = self.root else {
            assert_eq!(self.size, 0, "empty tree must have size 0");
            return;
        };

        unsafe {
            let root_links = Node::links(root);
            assert!(root_links.parent().is_none(), "root must not have a parent");
            assert_eq!(root_links.color(), Color::Black, "root must be black");

            let mut reachable = 0;
            Self::assert_valid_inner(root, &mut reachable);
            assert_eq!(
                reachable, self.size,
                "size {} does not match the {reachable} reachable nodes",
                self.size
            );

            // In-order traversal must be strictly increasing and visit every node
            let mut visited = 1;
            let mut prev = utils::find_minimum(root);
            while let Some(curr) = utils::next(prev) {
                assert_eq!(
                    cmp(Node::data(prev), Node::data(curr), ctx),
                    Ordering::Less,
                    "Ordering violation: in-order traversal is not strictly increasing"
                );
                assert_eq!(utils::prev(curr), Some(prev), "prev is not the inverse of next");
                visited += 1;
                prev = curr;
            }
            assert_eq!(prev, utils::find_maximum(root));
            assert_eq!(visited, self.size, "in-order traversal missed nodes");
        }
    }

    /// Returns the black-height of the subtree rooted at `node`.
    #[track_caller]
    unsafe fn assert_valid_inner(node: NonNull<Node<T>>, reachable: &mut usize) -> usize {
        unsafe {
            let node_links = Node::links(node);

            // assert that all links are set up correctly (no loops, self references, etc.)
            node_links.assert_valid(node);
            *reachable += 1;

            let mut black_height = |side: Side| -> usize {
                let Some(child) = node_links.child(side) else {
                    return 0;
                };
                let child_links = Node::links(child);

                assert_eq!(
                    child_links.parent(),
                    Some(node),
                    "{side} child's parent link does not point back at its parent"
                );
                assert!(
                    !(node_links.is_red() && child_links.is_red()),
                    "red violation: red node has a red {side} child"
                );

                Self::assert_valid_inner(child, reachable)
            };

            let left = black_height(Side::Left);
            let right = black_height(Side::Right);
            assert_eq!(
                left, right,
                "black violation: left black-height {left} != right black-height {right}"
            );

            left + usize::from(!node_links.is_red())
        }
    }

    fn release_payload(&mut self, data: T) {
        if let Some(release) = self.release.as_mut() {
            release(data);
        }
    }

    /// Paints the root black. The root may have changed or been painted red by a color flip.
    fn fixup_root(&mut self) {
        if let Some(root) = self.root {
            // Safety: the root is live
            let root_links = unsafe { Node::links(root) };
            root_links.set_color(Color::Black);
            debug_assert!(root_links.parent().is_none());
        }
    }

    /// Returns the `side` child of `parent`.
    ///
    /// A `None` parent denotes the sentinel above the root: its right link is the root and its
    /// left link is always empty.
    unsafe fn slot(&self, parent: Link<T>, side: Side) -> Link<T> {
        match parent {
            Some(parent) => unsafe { Node::links(parent).child(side) },
            None if side == Side::Right => self.root,
            None => None,
        }
    }

    /// Links `child` into the `side` slot of `parent`, see [`Self::slot`]. Linking into the
    /// sentinel makes `child` the new, parent-less root.
    unsafe fn set_slot(&mut self, parent: Link<T>, side: Side, child: Link<T>) {
        match parent {
            Some(parent) => unsafe { utils::set_link(parent, side, child) },
            None => {
                debug_assert_eq!(side, Side::Right, "the sentinel only has a right link");
                self.root = child;
                if let Some(child) = child {
                    unsafe { Node::links(child).replace_parent(None) };
                }
            }
        }
    }

    /// Walks down from `root` towards the insertion point of `node`, splitting 4-nodes on the way
    /// so the new red leaf can always be attached without a second pass.
    ///
    /// Returns `false` without linking `node` if a comparator-equal payload is found.
    unsafe fn insert_top_down<C, F>(
        &mut self,
        root: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
        cmp: &mut F,
        ctx: &C,
    ) -> bool
    where
        C: ?Sized,
        F: FnMut(&T, &T, &C) -> Ordering,
    {
        unsafe {
            let key = Node::data(node);

            // `great` starts out at the sentinel
            let mut great: Link<T> = None;
            let mut g: Link<T> = None;
            let mut p: Link<T> = None;
            let mut q: Link<T> = Some(root);
            let mut dir = Side::Left;
            let mut last = Side::Left;

            loop {
                let (curr, inserted) = if let Some(curr) = q {
                    let links = Node::links(curr);
                    if let (Some(left), Some(right)) = (links.left(), links.right())
                        && Node::links(left).is_red()
                        && Node::links(right).is_red()
                    {
                        tracing::trace!("insert: color flip");
                        links.set_color(Color::Red);
                        Node::links(left).set_color(Color::Black);
                        Node::links(right).set_color(Color::Black);
                    }
                    (curr, false)
                } else {
                    let Some(parent) = p else {
                        unreachable!("walked off an empty root");
                    };
                    utils::set_link(parent, dir, Some(node));
                    (node, true)
                };

                // Two reds in a row, rotate at the grandparent
                if utils::is_red(Some(curr)) && utils::is_red(p) {
                    let (Some(parent), Some(grandparent)) = (p, g) else {
                        unreachable!("a red parent is never the root");
                    };

                    let dir2 = if self.slot(great, Side::Right) == g {
                        Side::Right
                    } else {
                        Side::Left
                    };

                    let top = if Node::links(parent).child(last) == Some(curr) {
                        tracing::trace!("insert: single rotation to the {}", last.opposite());
                        utils::rotate_once(grandparent, last.opposite())
                    } else {
                        tracing::trace!("insert: double rotation to the {}", last.opposite());
                        utils::rotate_twice(grandparent, last.opposite())
                    };
                    self.set_slot(great, dir2, Some(top));
                }

                if inserted {
                    return true;
                }

                last = dir;
                dir = match cmp(key, Node::data(curr), ctx) {
                    Ordering::Equal => return false,
                    Ordering::Less => Side::Left,
                    Ordering::Greater => Side::Right,
                };

                if g.is_some() {
                    great = g;
                }
                g = p;
                p = Some(curr);
                q = Node::links(curr).child(dir);
            }
        }
    }

    /// Walks down towards the in-order predecessor of `key`, pushing a red node down along the
    /// path so the node finally spliced out is never a lone black leaf.
    ///
    /// The last comparator-equal node on the way takes over the predecessor's payload and the
    /// predecessor's node is unlinked. Returns the payload of the deleted key.
    unsafe fn remove_top_down<Q, C, F>(&mut self, key: &Q, cmp: &mut F, ctx: &C) -> Option<T>
    where
        Q: ?Sized,
        C: ?Sized,
        F: FnMut(&Q, &T, &C) -> Ordering,
    {
        unsafe {
            // `q` and `p` start out at the sentinel
            let mut q: Link<T> = None;
            let mut p: Link<T> = None;
            let mut found: Link<T> = None;
            let mut dir = Side::Right;

            while let Some(curr) = self.slot(q, dir) {
                let last = dir;
                let g = p;
                p = q;
                q = Some(curr);

                let ord = cmp(key, Node::data(curr), ctx);
                if ord == Ordering::Equal {
                    found = Some(curr);
                }
                // equal keys keep walking left, towards the predecessor
                dir = if ord == Ordering::Greater {
                    Side::Right
                } else {
                    Side::Left
                };

                let curr_links = Node::links(curr);
                if curr_links.is_red() || utils::is_red(curr_links.child(dir)) {
                    continue;
                }

                if utils::is_red(curr_links.child(dir.opposite())) {
                    tracing::trace!("remove: rotating red child into the path");
                    let top = utils::rotate_once(curr, dir);
                    self.set_slot(p, last, Some(top));
                    p = Some(top);
                } else if let Some(parent) = p
                    && let Some(sibling) = self.slot(p, last.opposite())
                {
                    let sibling_links = Node::links(sibling);

                    if !utils::is_red(sibling_links.child(last.opposite()))
                        && !utils::is_red(sibling_links.child(last))
                    {
                        tracing::trace!("remove: color flip");
                        Node::links(parent).set_color(Color::Black);
                        sibling_links.set_color(Color::Red);
                        curr_links.set_color(Color::Red);
                    } else {
                        let dir2 = if self.slot(g, Side::Right) == p {
                            Side::Right
                        } else {
                            Side::Left
                        };

                        let top = if utils::is_red(sibling_links.child(last)) {
                            tracing::trace!("remove: double rotation to the {last}");
                            utils::rotate_twice(parent, last)
                        } else {
                            tracing::trace!("remove: single rotation to the {last}");
                            utils::rotate_once(parent, last)
                        };
                        self.set_slot(g, dir2, Some(top));

                        // recolor so the black-height of the rotated subtree is unchanged
                        let top_links = Node::links(top);
                        curr_links.set_color(Color::Red);
                        top_links.set_color(Color::Red);
                        if let Some(left) = top_links.left() {
                            Node::links(left).set_color(Color::Black);
                        }
                        if let Some(right) = top_links.right() {
                            Node::links(right).set_color(Color::Black);
                        }
                    }
                }
            }

            let found = found?;
            let Some(target) = q else {
                unreachable!("found a match without visiting any node");
            };

            // `target` has at most one child, splice it into `target`s slot
            let target_links = Node::links(target);
            let child = target_links.left().or(target_links.right());
            let side = if self.slot(p, Side::Right) == Some(target) {
                Side::Right
            } else {
                Side::Left
            };
            self.set_slot(p, side, child);

            // the matched node keeps the predecessor's payload, the spliced out node leaves with
            // the payload of the deleted key
            if found != target {
                Node::swap_data(found, target);
            }

            self.size -= 1;
            Some(Node::into_data(target))
        }
    }
}
