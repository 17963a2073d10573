// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use core::fmt;
use core::ptr::NonNull;

use crate::RBTree;
use crate::node::{Color, Node};
use crate::utils::Side;

/// Graphviz rendering of a [`RBTree`], returned by [`RBTree::dot`].
pub struct Dot<'a, T> {
    pub(crate) tree: &'a RBTree<T>,
}

impl<T> Dot<'_, T>
where
    T: fmt::Debug,
{
    #[allow(
        clippy::only_used_in_recursion,
        reason = "need to ensure tree is borrowed for the entire time we operate on it"
    )]
    fn node_fmt(&self, f: &mut fmt::Formatter, node: NonNull<Node<T>>) -> fmt::Result {
        unsafe {
            let node_links = Node::links(node);

            let id = node.as_ptr().cast::<u8>() as usize;
            let color = match node_links.color() {
                Color::Red => "red",
                Color::Black => "black",
            };
            f.write_fmt(format_args!(
                r#"{id} [label="{data:?}", color={color}, fontcolor={color}];"#,
                data = Node::data(node),
            ))?;

            if let Some(up) = node_links.parent() {
                f.write_fmt(format_args!(
                    r#"{id} -> {} [label="up", style=dotted];"#,
                    up.as_ptr().cast::<u8>() as usize
                ))?;
            }

            let mut print_side = |side: Side| -> fmt::Result {
                if let Some(child) = node_links.child(side) {
                    f.write_fmt(format_args!(
                        r#"{id} -> {} [label="{side}"];"#,
                        child.as_ptr().cast::<u8>() as usize,
                    ))?;
                    self.node_fmt(f, child)?;
                }
                Ok(())
            };
            print_side(Side::Left)?;
            print_side(Side::Right)?;
        }

        Ok(())
    }
}

impl<T> fmt::Display for Dot<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph {")?;
        if let Some(root) = self.tree.root {
            self.node_fmt(f, root)?;
        }
        f.write_str("}")
    }
}

impl<T> fmt::Debug for Dot<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
