// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use core::alloc::Layout;
use core::cell::Cell;
use core::fmt;
use core::mem;
use core::ptr::{self, NonNull};

use crate::utils::Side;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// The color of a node in a [`RBTree`](crate::RBTree).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    /// Freshly inserted nodes are red.
    Red,
    /// The root is always black.
    Black,
}

/// A heap allocated tree node, owning its payload.
///
/// Nodes are only ever handled through `NonNull` pointers. Child links are logically owning (a
/// node is reachable from exactly one parent slot) while the parent link is a plain back-reference
/// used for traversal.
pub(crate) struct Node<T> {
    pub(crate) links: Links<T>,
    pub(crate) data: T,
}

impl<T> Node<T> {
    /// Allocates a new red, unlinked node holding `data`.
    ///
    /// The allocation is fallible: if the global allocator returns null the payload is handed back
    /// to the caller instead of aborting the process.
    pub(crate) fn try_alloc(data: T) -> Result<NonNull<Self>, T> {
        let layout = Layout::new::<Self>();
        debug_assert_ne!(layout.size(), 0);

        // Safety: `Node<T>` always contains three links, so the layout is never zero-sized.
        let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<Self>();

        let Some(ptr) = NonNull::new(raw) else {
            return Err(data);
        };

        // Safety: the pointer was just allocated with the layout of `Self` and is not aliased.
        unsafe {
            ptr.as_ptr().write(Self {
                links: Links::new(),
                data,
            });
        }

        Ok(ptr)
    }

    /// Reclaims the node allocation, returning the payload it held.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`Node::try_alloc`], must not be reachable from any tree
    /// anymore and must not be used after this call.
    pub(crate) unsafe fn into_data(ptr: NonNull<Self>) -> T {
        // Safety: `try_alloc` allocates with `Layout::new::<Self>()` from the global allocator,
        // which is exactly the allocation `Box` expects.
        let node = unsafe { alloc::boxed::Box::from_raw(ptr.as_ptr()) };
        node.data
    }

    /// Returns the links of the node pointed to by `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live node. The returned reference must not outlive it.
    #[inline]
    pub(crate) unsafe fn links<'a>(ptr: NonNull<Self>) -> &'a Links<T> {
        unsafe { &(*ptr.as_ptr()).links }
    }

    /// Returns the payload of the node pointed to by `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live node. The returned reference must not outlive it and the payload
    /// must not be moved while the reference exists.
    #[inline]
    pub(crate) unsafe fn data<'a>(ptr: NonNull<Self>) -> &'a T {
        unsafe { &(*ptr.as_ptr()).data }
    }

    /// Exchanges the payloads of two nodes, leaving their links untouched.
    ///
    /// # Safety
    ///
    /// Both pointers must point to live nodes and no references to either payload may exist.
    pub(crate) unsafe fn swap_data(a: NonNull<Self>, b: NonNull<Self>) {
        unsafe {
            ptr::swap(
                ptr::addr_of_mut!((*a.as_ptr()).data),
                ptr::addr_of_mut!((*b.as_ptr()).data),
            );
        }
    }
}

/// A freshly allocated node that no tree links to yet.
///
/// Dropping it frees the node together with its payload, so an insertion that unwinds out of the
/// comparator before the node is linked does not leak it.
pub(crate) struct Unlinked<T>(NonNull<Node<T>>);

impl<T> Unlinked<T> {
    pub(crate) fn alloc(data: T) -> Result<Self, T> {
        Node::try_alloc(data).map(Self)
    }

    pub(crate) fn as_ptr(&self) -> NonNull<Node<T>> {
        self.0
    }

    /// Gives up ownership of the node, the caller must have linked it into a tree.
    pub(crate) fn into_linked(self) -> NonNull<Node<T>> {
        let ptr = self.0;
        mem::forget(self);
        ptr
    }

    pub(crate) fn into_data(self) -> T {
        // Safety: the node is still unlinked and ownership is not shared
        unsafe { Node::into_data(self.into_linked()) }
    }
}

impl<T> Drop for Unlinked<T> {
    fn drop(&mut self) {
        // Safety: see `into_data`
        drop(unsafe { Node::into_data(self.0) });
    }
}

/// Color and links of a single node.
///
/// All fields are `Cell`s so the rebalancing code can relink several nodes through shared
/// references without ever materializing a `&mut` to a node another pointer may also observe.
pub(crate) struct Links<T> {
    color: Cell<Color>,
    up: Cell<Link<T>>,
    left: Cell<Link<T>>,
    right: Cell<Link<T>>,
}

impl<T> fmt::Debug for Links<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Links")
            .field("self", &format_args!("{self:p}"))
            .field("color", &self.color())
            .field("parent", &self.parent())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Links<T> {
    const fn new() -> Self {
        Self {
            color: Cell::new(Color::Red),
            up: Cell::new(None),
            left: Cell::new(None),
            right: Cell::new(None),
        }
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color.get()
    }
    #[inline]
    pub(crate) fn set_color(&self, color: Color) {
        self.color.set(color);
    }
    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[inline]
    pub(crate) fn parent(&self) -> Link<T> {
        self.up.get()
    }
    #[inline]
    pub(crate) fn left(&self) -> Link<T> {
        self.left.get()
    }
    #[inline]
    pub(crate) fn right(&self) -> Link<T> {
        self.right.get()
    }
    #[inline]
    pub(crate) fn child(&self, side: Side) -> Link<T> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    #[inline]
    pub(crate) fn replace_parent(&self, lk: Link<T>) -> Link<T> {
        self.up.replace(lk)
    }
    #[inline]
    pub(crate) fn replace_child(&self, side: Side, child: Link<T>) -> Link<T> {
        match side {
            Side::Left => self.left.replace(child),
            Side::Right => self.right.replace(child),
        }
    }

    /// Asserts the local link invariants of this node: no self references and no node appearing
    /// twice among parent and children.
    #[track_caller]
    pub(crate) fn assert_valid(&self, this: NonNull<Node<T>>) {
        let parent = self.parent();
        let left = self.left();
        let right = self.right();

        assert_ne!(parent, Some(this), "node's parent cannot be itself; node={self:#?}");
        assert_ne!(left, Some(this), "node's left child cannot be itself; node={self:#?}");
        assert_ne!(right, Some(this), "node's right child cannot be itself; node={self:#?}");

        if parent.is_some() {
            assert_ne!(
                parent, left,
                "node's parent and left child cannot be the same; node={self:#?}"
            );
            assert_ne!(
                parent, right,
                "node's parent and right child cannot be the same; node={self:#?}"
            );
        }
        if left.is_some() {
            assert_ne!(
                left, right,
                "node's left and right children cannot be the same; node={self:#?}"
            );
        }
    }
}
