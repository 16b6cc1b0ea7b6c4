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

//! Lazy iterator pipelines over integer sequences.
//!
//! Nothing here allocates: each function chains adapters over the borrowed
//! input and only the final fold drives the iteration. Squares and sums are
//! checked; the first overflow stops the fold with [`OverflowError`].

use crate::error::OverflowError;

/// Yields the square of every even element, in input order.
///
/// An element whose square does not fit in an `i32` yields `Err`.
pub fn even_squares<'a, I>(
    values: I,
) -> impl Iterator<Item = Result<i32, OverflowError>> + 'a
where
    I: IntoIterator<Item = &'a i32>,
    I::IntoIter: 'a,
{
    values
        .into_iter()
        .copied()
        .filter(|v| v % 2 == 0)
        .map(|v| v.checked_mul(v).ok_or(OverflowError))
}

/// Sums the squares of the even elements of `values`.
pub fn sum_of_even_squares(values: &[i32]) -> Result<i32, OverflowError> {
    log::trace!("Summing even squares of {values:?}");
    even_squares(values).try_fold(0i32, |acc, square| {
        acc.checked_add(square?).ok_or(OverflowError)
    })
}

/// Concatenates the inner sequences of `nested`, outer order first.
pub fn flatten<'a, I>(nested: I) -> impl Iterator<Item = i32> + 'a
where
    I: IntoIterator<Item = &'a [i32]>,
    I::IntoIter: 'a,
{
    nested.into_iter().flatten().copied()
}

/// Sums every element of every inner sequence of `nested`.
pub fn flattened_sum(nested: &[&[i32]]) -> Result<i32, OverflowError> {
    log::trace!("Flattening {nested:?}");
    flatten(nested.iter().copied())
        .try_fold(0i32, |acc, v| acc.checked_add(v).ok_or(OverflowError))
}
