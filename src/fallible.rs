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

//! Allocation helpers which report failure instead of aborting where the
//! toolchain allows it.

use crate::error::{QueueError, Result};
use alloc::{boxed::Box, string::String};

/// Copies `value` into a freshly allocated string of exactly its length.
pub(crate) fn try_copy(value: &str) -> Result<String> {
    let mut copy = String::new();
    copy.try_reserve_exact(value.len()).map_err(|_| {
        tracing::warn!(len = value.len(), "failed to allocate string copy");
        QueueError::AllocationError
    })?;

    copy.push_str(value);
    Ok(copy)
}

#[cfg(feature = "nightly")]
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>> {
    Box::try_new(value).map_err(|_| {
        tracing::warn!(size = core::mem::size_of::<T>(), "failed to allocate box");
        QueueError::AllocationError
    })
}

/// Stable `Box` allocation can't observe failure, it aborts instead.
#[cfg(not(feature = "nightly"))]
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>> {
    Ok(Box::new(value))
}
