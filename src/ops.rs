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

//! Handle-style interface over queues which may be absent.
//!
//! These functions mirror the [`Queue`] methods for callers that hold an
//! optional queue, such as a driver which may not have created one yet.
//! An absent queue is reported as [`QueueError::Rejected`] by operations that
//! need one and is otherwise a no-op.
//!
//! ```
//! use strq::{ops, QueueError};
//!
//! let mut queue = Some(ops::create()?);
//! ops::insert_tail(queue.as_deref_mut(), Some("apple"))?;
//! ops::insert_head(queue.as_deref_mut(), Some("banana"))?;
//! ops::sort(queue.as_deref_mut());
//! assert_eq!(ops::size(queue.as_deref()), 2);
//!
//! let mut buf = [0u8; 8];
//! ops::remove_head(queue.as_deref_mut(), Some(&mut buf[..]))?;
//! assert_eq!(&buf[..6], b"apple\0");
//!
//! ops::destroy(queue.take());
//! assert_eq!(ops::remove_head(queue.as_deref_mut(), None), Err(QueueError::Rejected));
//! # Ok::<(), QueueError>(())
//! ```

use crate::{
    error::{QueueError, Result},
    fallible,
    queue::Queue,
};
use alloc::boxed::Box;

/// Allocates a new empty queue.
pub fn create() -> Result<Box<Queue>> {
    fallible::try_box(Queue::new())
}

/// Frees the queue along with all of its values. `None` is ignored.
pub fn destroy(queue: Option<Box<Queue>>) {
    if let Some(queue) = queue {
        tracing::trace!(len = queue.len(), "destroying queue");
        drop(queue);
    }
}

/// Copies `value` in at the head. Rejects an absent queue or value without
/// touching the queue.
pub fn insert_head(queue: Option<&mut Queue>, value: Option<&str>) -> Result<()> {
    let (queue, value) = accept(queue, value)?;
    queue.insert_head(value)
}

/// Copies `value` in at the tail. Rejects an absent queue or value without
/// touching the queue.
pub fn insert_tail(queue: Option<&mut Queue>, value: Option<&str>) -> Result<()> {
    let (queue, value) = accept(queue, value)?;
    queue.insert_tail(value)
}

fn accept<'q, 'v>(
    queue: Option<&'q mut Queue>,
    value: Option<&'v str>,
) -> Result<(&'q mut Queue, &'v str)> {
    match (queue, value) {
        (Some(queue), Some(value)) => Ok((queue, value)),
        (queue, value) => {
            tracing::debug!(
                queue = queue.is_some(),
                value = value.is_some(),
                "insert rejected"
            );
            Err(QueueError::Rejected)
        }
    }
}

/// Removes the head value, copying at most `out.len() - 1` bytes of it plus a
/// NUL terminator into `out` if given.
pub fn remove_head(queue: Option<&mut Queue>, out: Option<&mut [u8]>) -> Result<()> {
    match queue {
        Some(queue) => queue.remove_head(out),
        None => {
            tracing::debug!("remove_head rejected without a queue");
            Err(QueueError::Rejected)
        }
    }
}

/// Returns the cached length, or `0` for an absent queue.
pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::len)
}

/// Reverses the queue in place. An absent queue is ignored.
pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Stably sorts the queue in ascending byte-wise order. An absent queue is
/// ignored.
pub fn sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}
