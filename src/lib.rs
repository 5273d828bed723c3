//! A singly-linked queue of owned strings.
//!
//! [`Queue`] supports insertion at both ends, removal from the head, an O(1)
//! length, and in-place [`reverse`] and stable merge [`sort`] which only
//! relink nodes. The [`ops`] module exposes the same operations over
//! possibly-absent queues.
//!
//! Failures are reported through [`QueueError`] and never leave a queue
//! partially modified.
//!
//! [`reverse`]: Queue::reverse
//! [`sort`]: Queue::sort
//!
//! ```
//! use strq::Queue;
//!
//! let mut queue = Queue::new();
//! for value in ["a", "b", "c"].iter() {
//!     queue.insert_head(value)?;
//! }
//! assert!(queue.iter().eq(["c", "b", "a"].iter().copied()));
//!
//! queue.reverse();
//! assert!(queue.iter().eq(["a", "b", "c"].iter().copied()));
//! # Ok::<(), strq::QueueError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "nightly", feature(allocator_api))]
#![warn(
    rust_2018_idioms,
    unreachable_pub,
    // missing_docs
    missing_debug_implementations
)]

extern crate alloc;

mod error;
mod fallible;
mod list;
pub mod ops;
mod queue;

pub use self::{
    error::{QueueError, Result},
    queue::{IntoIter, Iter, Queue},
};
