// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::node::{Link, Node};
use crate::{RBTree, utils};

/// An iterator over references to the payloads of a [`RBTree`], in comparator order.
pub struct Iter<'a, T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _tree: PhantomData<&'a RBTree<T>>,
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Iter {
            head: self.head,
            tail: self.tail,
            remaining: self.remaining,
            _tree: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.head?;

        if Some(head) == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.head = unsafe { utils::next(head) };
        }
        self.remaining -= 1;

        Some(unsafe { Node::data(head) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let tail = self.tail?;

        if Some(tail) == self.head {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = unsafe { utils::prev(tail) };
        }
        self.remaining -= 1;

        Some(unsafe { Node::data(tail) })
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> where T: 'a {}
impl<'a, T> FusedIterator for Iter<'a, T> where T: 'a {}
