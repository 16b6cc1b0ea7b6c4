// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the 2D integer `Point` value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::OverflowError;

/// A 2-dimensional point with `i32` coordinates.
///
/// `Point` is a plain value: it is `Copy`, compared field by field, and every
/// operation returns a new point instead of mutating the receiver.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Point {
    /// The x coordinate.
    pub x: i32,
    /// The y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new `Point` with the specified coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns a copy of this point offset by `dx` and `dy`.
    ///
    /// The receiver is taken by value, so the caller's point is left untouched.
    /// Fails if either coordinate leaves the `i32` range.
    #[inline]
    pub fn moved(self, dx: i32, dy: i32) -> Result<Self, OverflowError> {
        Ok(Self {
            x: self.x.checked_add(dx).ok_or(OverflowError)?,
            y: self.y.checked_add(dy).ok_or(OverflowError)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
