// Copyright (c) 2020 kprotty
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use alloc::boxed::Box;
use core::{iter::FusedIterator, marker::PhantomData, mem, ptr::NonNull};

type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self { value, next: None }
    }

    pub(crate) fn into_value(self: Box<Self>) -> T {
        self.value
    }

    fn leak(node: Box<Self>) -> NonNull<Self> {
        NonNull::from(Box::leak(node))
    }
}

/// Singly-linked chain of heap nodes.
///
/// Every node reachable from `head` was leaked from a `Box` when it was
/// linked and is owned by this list until `pop_front_node` turns it back into
/// a `Box`. Ownership follows `next`: the head slot owns the first node and
/// each node owns its successor. `tail` is only a position marker for O(1)
/// splicing at the end and never frees the node it points to.
///
/// Links are raw pointers rather than `Box`es so that moving the list never
/// invalidates the tail marker.
pub(crate) struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owned: PhantomData<Box<Node<T>>>,
}

// The list uniquely owns every node it links to.
unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> List<T> {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owned: PhantomData,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn front(&self) -> Option<&T> {
        // SAFETY: linked nodes stay alive while the list is borrowed.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    pub(crate) fn back(&self) -> Option<&T> {
        // SAFETY: see `front`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _list: PhantomData,
        }
    }

    /// Frees every node one at a time so long chains don't recurse.
    pub(crate) fn clear(&mut self) {
        while let Some(node) = self.pop_front_node() {
            drop(node);
        }
    }

    pub(crate) fn push_front_node(&mut self, mut node: Box<Node<T>>) {
        node.next = self.head;
        let node = Node::leak(node);

        if self.tail.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
        self.len += 1;
    }

    pub(crate) fn push_back_node(&mut self, mut node: Box<Node<T>>) {
        node.next = None;
        let node = Node::leak(node);

        match self.tail {
            None => self.head = Some(node),
            // SAFETY: the tail is the last node owned by this list, which is
            // uniquely borrowed through `&mut self`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }

        self.tail = Some(node);
        self.len += 1;
    }

    pub(crate) fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        let head = self.head?;

        // SAFETY: `head` was leaked from a `Box` when linked and is unlinked
        // here before ownership is handed back.
        let mut node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next.take();
        self.len -= 1;

        if self.head.is_none() {
            self.tail = None;
        }

        Some(node)
    }

    /// Moves the nodes from index `at` onwards into a new list, leaving the
    /// first `at` nodes in `self`. No node is allocated or copied.
    pub(crate) fn split_off(&mut self, at: usize) -> Self {
        if at >= self.len {
            return Self::new();
        }

        if at == 0 {
            return mem::take(self);
        }

        let mut left_tail = match self.head {
            Some(head) => head,
            None => return Self::new(),
        };

        for _ in 1..at {
            // SAFETY: `at < len`, so every step lands on a linked node.
            left_tail = match unsafe { (*left_tail.as_ptr()).next } {
                Some(next) => next,
                None => return Self::new(),
            };
        }

        let right = Self {
            // SAFETY: `left_tail` is owned by this list.
            head: unsafe { (*left_tail.as_ptr()).next.take() },
            tail: self.tail,
            len: self.len - at,
            _owned: PhantomData,
        };

        self.tail = Some(left_tail);
        self.len = at;
        right
    }

    /// Splices every node of `other` onto the end of `self`, leaving `other`
    /// empty.
    pub(crate) fn append(&mut self, other: &mut Self) {
        let other_head = match other.head.take() {
            Some(head) => head,
            None => return,
        };

        match self.tail {
            None => self.head = Some(other_head),
            // SAFETY: see `push_back_node`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(other_head) },
        }

        self.tail = other.tail.take();
        self.len += mem::replace(&mut other.len, 0);
    }

    /// Reverses the link direction of every node in one pass, then swaps the
    /// head and tail.
    pub(crate) fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut current = self.head;
        let mut reversed: Link<T> = None;

        while let Some(node) = current {
            // SAFETY: every node on the chain is owned by this list.
            current = mem::replace(unsafe { &mut (*node.as_ptr()).next }, reversed);
            reversed = Some(node);
        }

        self.tail = self.head;
        self.head = reversed;
    }

    /// Stable top-down merge sort by relinking nodes.
    ///
    /// `less` must be a strict "less than". Elements which compare equal keep
    /// their original relative order.
    pub(crate) fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.merge_sort(&mut less);
    }

    fn merge_sort<F>(&mut self, less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len < 2 {
            return;
        }

        let mut right = self.split_off(self.len / 2);
        let mut left = mem::take(self);

        left.merge_sort(less);
        right.merge_sort(less);
        self.merge(&mut left, &mut right, less);
    }

    fn merge<F>(&mut self, left: &mut Self, right: &mut Self, less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(self.is_empty());

        loop {
            // Ties go to the left side to keep the sort stable.
            let take_right = match (left.front(), right.front()) {
                (Some(l), Some(r)) => less(r, l),
                _ => break,
            };

            let source = if take_right { &mut *right } else { &mut *left };
            if let Some(node) = source.pop_front_node() {
                self.push_back_node(node);
            }
        }

        self.append(left);
        self.append(right);
    }
}

pub(crate) struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _list: PhantomData<&'a List<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the list is borrowed for `'a`, so its nodes outlive the
        // returned references.
        let node = unsafe { &*self.next?.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
