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

//! Integer division that reports failure as a value instead of panicking.

use thiserror::Error;

/// Why a [`safe_div`] call produced no quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisionError {
    /// The divisor was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The quotient does not fit in an `i32` (`i32::MIN / -1`).
    #[error("Division overflow")]
    Overflow,
}

/// Divides `dividend` by `divisor`, truncating toward zero.
pub fn safe_div(dividend: i32, divisor: i32) -> Result<i32, DivisionError> {
    if divisor == 0 {
        return Err(DivisionError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(DivisionError::Overflow)
}
