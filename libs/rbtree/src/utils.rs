// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use core::fmt;
use core::ptr::NonNull;

use crate::node::{Color, Link, Node};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Returns `true` if `link` points to a red node. Missing nodes count as black.
#[inline]
pub unsafe fn is_red<T>(link: Link<T>) -> bool {
    link.is_some_and(|node| unsafe { Node::links(node).is_red() })
}

/// Makes `child` the `side` child of `parent` and points `child`s back-reference at `parent`.
///
/// The previous occupant of the slot is overwritten without touching its parent link.
#[inline]
pub unsafe fn set_link<T>(parent: NonNull<Node<T>>, side: Side, child: Link<T>) {
    unsafe {
        Node::links(parent).replace_child(side, child);
        if let Some(child) = child {
            Node::links(child).replace_parent(Some(parent));
        }
    }
}

/// Single rotation of the subtree rooted at `root` towards `side`.
///
/// The `side.opposite()` child of `root` takes its place and `root` becomes that node's `side`
/// child. The old root is painted red and the new top black; callers override this when it does
/// not match the coloring they need.
///
/// The returned node is the new top of the subtree. Its parent link still points at `root`, the
/// caller is responsible for relinking it into the slot `root` used to occupy.
pub unsafe fn rotate_once<T>(root: NonNull<Node<T>>, side: Side) -> NonNull<Node<T>> {
    unsafe {
        let root_links = Node::links(root);
        let Some(save) = root_links.child(side.opposite()) else {
            unreachable!("rotation requires a {} child to promote", side.opposite());
        };
        let save_links = Node::links(save);

        set_link(root, side.opposite(), save_links.child(side));
        set_link(save, side, Some(root));

        root_links.set_color(Color::Red);
        save_links.set_color(Color::Black);

        save
    }
}

/// Double rotation of the subtree rooted at `root` towards `side`.
///
/// Used when the offending red grandchild is the inner one: the `side.opposite()` child is first
/// rotated the other way, then `root` is rotated towards `side`. Same relinking contract as
/// [`rotate_once`].
pub unsafe fn rotate_twice<T>(root: NonNull<Node<T>>, side: Side) -> NonNull<Node<T>> {
    unsafe {
        let Some(child) = Node::links(root).child(side.opposite()) else {
            unreachable!("rotation requires a {} child to promote", side.opposite());
        };
        set_link(root, side.opposite(), Some(rotate_once(child, side.opposite())));
        rotate_once(root, side)
    }
}

pub unsafe fn find_minimum<T>(mut curr: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(left) = unsafe { Node::links(curr).left() } {
        curr = left;
    }

    curr
}

pub unsafe fn find_maximum<T>(mut curr: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(right) = unsafe { Node::links(curr).right() } {
        curr = right;
    }

    curr
}

/// In-order successor of `node`.
pub unsafe fn next<T>(node: NonNull<Node<T>>) -> Link<T> {
    unsafe { step(node, Side::Right) }
}

/// In-order predecessor of `node`.
pub unsafe fn prev<T>(node: NonNull<Node<T>>) -> Link<T> {
    unsafe { step(node, Side::Left) }
}

unsafe fn step<T>(node: NonNull<Node<T>>, side: Side) -> Link<T> {
    unsafe {
        // If we have a child on `side`, its nearest descendant is the neighbour
        if let Some(child) = Node::links(node).child(side) {
            return Some(match side {
                Side::Right => find_minimum(child),
                Side::Left => find_maximum(child),
            });
        }

        let mut curr = node;
        loop {
            // reached the root without finding an ancestor on `side`
            let parent = Node::links(curr).parent()?;

            // the first ancestor we reach from its other subtree is the neighbour
            if Node::links(parent).child(side) != Some(curr) {
                return Some(parent);
            }

            curr = parent;
        }
    }
}
