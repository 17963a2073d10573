// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::node::{Color, Node};
use crate::{RBTree, utils};

/// A shared handle to a node of a [`RBTree`].
///
/// The handle borrows the tree, so the tree cannot be modified while it is alive. It can be used
/// to step through the tree in order without any auxiliary storage.
pub struct NodeRef<'a, T> {
    pub(crate) ptr: NonNull<Node<T>>,
    pub(crate) _tree: PhantomData<&'a RBTree<T>>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}
impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("data", self.get())
            .field("color", &self.color())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(ptr: NonNull<Node<T>>) -> Self {
        Self {
            ptr,
            _tree: PhantomData,
        }
    }

    fn wrap(link: Option<NonNull<Node<T>>>) -> Option<Self> {
        link.map(Self::new)
    }

    /// Returns the payload stored in this node.
    pub fn get(&self) -> &'a T {
        // Safety: the handle borrows the tree, which keeps the node alive and unmodified
        unsafe { Node::data(self.ptr) }
    }

    /// Returns the color of this node.
    pub fn color(&self) -> Color {
        // Safety: see `get`
        unsafe { Node::links(self.ptr).color() }
    }

    /// Returns the parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        // Safety: see `get`
        Self::wrap(unsafe { Node::links(self.ptr).parent() })
    }

    /// Returns the left (lesser) child of this node.
    pub fn left(&self) -> Option<Self> {
        // Safety: see `get`
        Self::wrap(unsafe { Node::links(self.ptr).left() })
    }

    /// Returns the right (greater) child of this node.
    pub fn right(&self) -> Option<Self> {
        // Safety: see `get`
        Self::wrap(unsafe { Node::links(self.ptr).right() })
    }

    /// Returns the in-order successor of this node, or `None` if this is the last node.
    #[allow(clippy::should_implement_trait, reason = "a node is not an iterator")]
    pub fn next(&self) -> Option<Self> {
        // Safety: see `get`
        Self::wrap(unsafe { utils::next(self.ptr) })
    }

    /// Returns the in-order predecessor of this node, or `None` if this is the first node.
    pub fn prev(&self) -> Option<Self> {
        // Safety: see `get`
        Self::wrap(unsafe { utils::prev(self.ptr) })
    }
}
