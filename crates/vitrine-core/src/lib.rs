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

//! # Vitrine Core
//!
//! Building blocks for the Vitrine report: a small integer value type,
//! checked division, checked iterator pipelines over fixed sequences, and the
//! builder that renders them into text.

#![warn(missing_docs)]

pub mod division;
pub mod error;
pub mod math;
pub mod message;
pub mod pipeline;

pub use division::{safe_div, DivisionError};
pub use error::OverflowError;
pub use math::Point;
pub use message::make_message;
