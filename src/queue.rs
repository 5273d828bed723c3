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

use crate::{
    error::{QueueError, Result},
    fallible,
    list::{self, List, Node},
};
use alloc::{boxed::Box, string::String};
use core::{
    fmt,
    iter::{FromIterator, FusedIterator},
};

/// A singly-linked queue of owned strings.
///
/// Values can be inserted at either end and removed from the head. The
/// element count is cached so [`len`] is O(1), and the queue can be reversed
/// or stably sorted in place without allocating.
///
/// Every value handed to the queue is copied, the caller's buffer is never
/// retained. Dropping the queue frees all of its nodes and strings.
///
/// [`len`]: Queue::len
///
/// # Examples
///
/// ```
/// use strq::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("banana")?;
/// queue.insert_tail("apple")?;
/// queue.insert_head("cherry")?;
/// assert_eq!(queue.len(), 3);
///
/// queue.sort();
/// assert!(queue.iter().eq(["apple", "banana", "cherry"]));
///
/// queue.reverse();
/// assert_eq!(queue.pop_front().as_deref(), Some("cherry"));
/// # Ok::<(), strq::QueueError>(())
/// ```
#[derive(Default)]
pub struct Queue {
    list: List<String>,
}

impl Queue {
    /// Creates an empty queue. This does not allocate.
    pub const fn new() -> Self {
        Self { list: List::new() }
    }

    /// Returns the number of values in the queue without traversing it.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the value at the head of the queue.
    pub fn front(&self) -> Option<&str> {
        self.list.front().map(String::as_str)
    }

    /// Returns the value at the tail of the queue.
    pub fn back(&self) -> Option<&str> {
        self.list.back().map(String::as_str)
    }

    /// Iterates the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Copies `value` into a new node linked before the current head.
    ///
    /// On [`QueueError::AllocationError`] the queue is left untouched.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let node = Self::alloc_node(value)?;
        self.list.push_front_node(node);
        tracing::trace!(len = self.len(), "inserted at head");
        Ok(())
    }

    /// Copies `value` into a new node linked after the current tail.
    ///
    /// On [`QueueError::AllocationError`] the queue is left untouched.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let node = Self::alloc_node(value)?;
        self.list.push_back_node(node);
        tracing::trace!(len = self.len(), "inserted at tail");
        Ok(())
    }

    fn alloc_node(value: &str) -> Result<Box<Node<String>>> {
        // The string copy is dropped if the node can't be allocated, so
        // nothing is left half-built.
        let value = fallible::try_copy(value)?;
        fallible::try_box(Node::new(value))
    }

    /// Removes the head value, optionally copying it into `out`.
    ///
    /// At most `out.len() - 1` bytes are copied followed by a NUL terminator.
    /// Longer values are silently truncated, and an empty `out` receives
    /// nothing. Returns [`QueueError::Empty`] if there was nothing to remove.
    ///
    /// ```
    /// use strq::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("hello")?;
    ///
    /// let mut buf = [0xffu8; 3];
    /// queue.remove_head(Some(&mut buf[..]))?;
    /// assert_eq!(&buf, b"he\0");
    /// assert!(queue.is_empty());
    /// # Ok::<(), strq::QueueError>(())
    /// ```
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<()> {
        let node = match self.list.pop_front_node() {
            Some(node) => node,
            None => {
                tracing::debug!("remove_head on empty queue");
                return Err(QueueError::Empty);
            }
        };

        let value = node.into_value();
        if let Some(out) = out {
            copy_truncated(&value, out);
        }

        tracing::trace!(len = self.len(), removed = value.len(), "removed head");
        Ok(())
    }

    /// Removes the head value and hands ownership of it to the caller.
    pub fn pop_front(&mut self) -> Option<String> {
        let value = self.list.pop_front_node().map(Node::into_value);
        if value.is_some() {
            tracing::trace!(len = self.len(), "popped head");
        }
        value
    }

    /// Reverses the order of the values by relinking the nodes in place.
    pub fn reverse(&mut self) {
        self.list.reverse();
        tracing::trace!(len = self.len(), "reversed");
    }

    /// Sorts the values in ascending byte-wise order.
    ///
    /// The sort is a stable merge sort which only relinks existing nodes:
    /// no value is copied and nothing is allocated or freed.
    pub fn sort(&mut self) {
        self.sort_by(|a, b| a.as_bytes() < b.as_bytes());
    }

    /// Stably sorts the values using `less` as a strict "less than".
    ///
    /// Values for which neither `less(a, b)` nor `less(b, a)` holds keep
    /// their relative order.
    ///
    /// ```
    /// use strq::Queue;
    ///
    /// let mut queue: Queue = ["b1", "a1", "b2", "a2"].iter().collect();
    /// queue.sort_by(|a, b| a[..1] < b[..1]);
    /// assert!(queue.iter().eq(["a1", "a2", "b1", "b2"]));
    /// ```
    pub fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        if self.len() < 2 {
            return;
        }

        self.list.sort_by(|a, b| less(a.as_str(), b.as_str()));
        tracing::trace!(len = self.len(), "sorted");
    }

    /// Frees every value in the queue.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    fn push_back_owned(&mut self, value: String) {
        self.list.push_back_node(Box::new(Node::new(value)));
    }
}

fn copy_truncated(value: &str, out: &mut [u8]) {
    let last = match out.len().checked_sub(1) {
        Some(last) => last,
        None => return,
    };

    let copied = value.len().min(last);
    out[..copied].copy_from_slice(&value.as_bytes()[..copied]);
    out[copied] = 0;
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Deep copy. Allocation failure aborts here, unlike [`Queue::insert_tail`].
impl Clone for Queue {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Queue {}

/// Appends copies of each value at the tail. Allocation failure aborts here,
/// unlike [`Queue::insert_tail`].
impl<S: AsRef<str>> Extend<S> for Queue {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.push_back_owned(String::from(value.as_ref()));
        }
    }
}

/// Builds a queue in iteration order. Allocation failure aborts here, unlike
/// [`Queue::insert_tail`].
impl<S: AsRef<str>> FromIterator<S> for Queue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Borrowing iterator over a [`Queue`], from head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: list::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator over a [`Queue`], from head to tail.
#[derive(Debug)]
pub struct IntoIter {
    queue: Queue,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
