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

use thiserror::Error;

/// Reasons a queue operation can refuse to complete.
///
/// A failed operation never leaves the queue partially modified.
#[derive(Error, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum QueueError {
    /// The queue or the value handed to the operation was absent.
    #[error("operation rejected: absent queue or value")]
    Rejected,

    /// A removal was attempted on a queue with no elements.
    #[error("queue is empty")]
    Empty,

    /// Memory for a node or its string could not be obtained.
    #[error("failed to allocate queue storage")]
    AllocationError,
}

pub type Result<T> = core::result::Result<T, QueueError>;
