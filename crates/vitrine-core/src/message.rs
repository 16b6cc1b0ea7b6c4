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

//! Builds the multi-line report printed by the `vitrine` binary.
//!
//! The report has five lines, always in this order:
//!
//! 1. the sum of the squares of the even inputs,
//! 2. the outcome of a checked division,
//! 3. the sum of a flattened nested sequence,
//! 4. a point before and after being moved,
//! 5. a float rendered to a fixed number of decimals.

use crate::division::{safe_div, DivisionError};
use crate::math::Point;
use crate::pipeline::{flattened_sum, sum_of_even_squares};

/// Input of the even-squares line.
pub const EVEN_SQUARES_INPUT: [i32; 5] = [1, 2, 3, 4, 5];

/// `(dividend, divisor)` of the division line.
pub const DIVISION_OPERANDS: (i32, i32) = (10, 2);

/// Input of the flattened-sum line.
pub const NESTED_INPUT: &[&[i32]] = &[&[1, 2], &[3, 4]];

/// Starting point of the point-move line.
pub const POINT_START: Point = Point::new(10, 20);

/// `(dx, dy)` applied to [`POINT_START`].
pub const POINT_OFFSET: (i32, i32) = (5, 7);

/// Value rendered by the formatting line.
#[allow(clippy::approx_constant)]
pub const FORMAT_VALUE: f64 = 3.1415926535;

/// Number of decimals used by the formatting line.
pub const FORMAT_PRECISION: usize = 3;

/// Number of lines in the report.
pub const LINE_COUNT: usize = 5;

/// Renders the even-squares line for `values`.
pub fn render_even_squares(values: &[i32]) -> String {
    match sum_of_even_squares(values) {
        Ok(sum) => {
            log::debug!("Even squares of {values:?} sum to {sum}");
            format!("Sum of even squares = {sum}")
        }
        Err(err) => {
            log::debug!("Even squares of {values:?} failed: {err}");
            format!("Sum of even squares error: {err}")
        }
    }
}

/// Renders a division outcome, on either branch.
pub fn render_division(outcome: Result<i32, DivisionError>) -> String {
    match outcome {
        Ok(quotient) => format!("safe_div OK: {quotient}"),
        Err(err) => {
            log::debug!("Division failed: {err}");
            format!("safe_div error: {err}")
        }
    }
}

/// Renders the flattened-sum line for `nested`.
pub fn render_flattened(nested: &[&[i32]]) -> String {
    match flattened_sum(nested) {
        Ok(sum) => {
            log::debug!("Flattened sum is {sum}");
            format!("Flattened vector sum = {sum}")
        }
        Err(err) => {
            log::debug!("Flattened sum failed: {err}");
            format!("Flattened vector sum error: {err}")
        }
    }
}

/// Renders `start` next to the point obtained by moving it by `(dx, dy)`.
pub fn render_point_move(start: Point, (dx, dy): (i32, i32)) -> String {
    match start.moved(dx, dy) {
        Ok(moved) => {
            log::debug!("Moved {start} by ({dx}, {dy}) to {moved}");
            format!("Point move: {start} → {moved}")
        }
        Err(err) => {
            log::debug!("Moving {start} by ({dx}, {dy}) failed: {err}");
            format!("Point move error: {start} by ({dx}, {dy}): {err}")
        }
    }
}

/// Renders `value` with `precision` decimals.
///
/// Rounding is to nearest on the exact binary value of `value`; exact
/// decimal ties go to the even digit.
pub fn render_fixed(value: f64, precision: usize) -> String {
    format!("Formatting example: {value:.precision$}")
}

/// Builds the full report, one `\n`-terminated line per section.
///
/// The result depends only on the constants of this module, so every call
/// returns the same text.
pub fn make_message() -> String {
    let (dividend, divisor) = DIVISION_OPERANDS;
    let lines: [String; LINE_COUNT] = [
        render_even_squares(&EVEN_SQUARES_INPUT),
        render_division(safe_div(dividend, divisor)),
        render_flattened(NESTED_INPUT),
        render_point_move(POINT_START, POINT_OFFSET),
        render_fixed(FORMAT_VALUE, FORMAT_PRECISION),
    ];

    let mut message = String::new();
    for line in &lines {
        message.push_str(line);
        message.push('\n');
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_render_even_squares() {
        assert_eq!(
            render_even_squares(&EVEN_SQUARES_INPUT),
            "Sum of even squares = 20"
        );
    }

    #[test]
    fn test_render_even_squares_overflow() {
        assert_eq!(
            render_even_squares(&[65536]),
            "Sum of even squares error: Arithmetic overflow"
        );
    }

    #[test]
    fn test_render_division_ok() {
        assert_eq!(render_division(safe_div(10, 2)), "safe_div OK: 5");
    }

    #[test]
    fn test_render_division_by_zero() {
        assert_eq!(
            render_division(safe_div(10, 0)),
            "safe_div error: Division by zero"
        );
    }

    #[test]
    fn test_render_division_overflow() {
        assert_eq!(
            render_division(safe_div(i32::MIN, -1)),
            "safe_div error: Division overflow"
        );
    }

    #[test]
    fn test_render_flattened() {
        assert_eq!(render_flattened(NESTED_INPUT), "Flattened vector sum = 10");
    }

    #[test]
    fn test_render_point_move() {
        assert_eq!(
            render_point_move(POINT_START, POINT_OFFSET),
            "Point move: (10, 20) → (15, 27)"
        );
        assert_eq!(POINT_START, Point::new(10, 20));
    }

    #[test]
    fn test_render_flattened_overflow() {
        assert_eq!(
            render_flattened(&[&[i32::MAX], &[1]]),
            "Flattened vector sum error: Arithmetic overflow"
        );
    }

    #[test]
    fn test_render_point_move_overflow() {
        assert_eq!(
            render_point_move(Point::new(i32::MAX, 0), (1, 0)),
            "Point move error: (2147483647, 0) by (1, 0): Arithmetic overflow"
        );
    }

    #[test]
    fn test_render_fixed() {
        assert_eq!(
            render_fixed(FORMAT_VALUE, FORMAT_PRECISION),
            "Formatting example: 3.142"
        );
        assert_eq!(render_fixed(2.0, 3), "Formatting example: 2.000");
        assert_eq!(render_fixed(1.0, 0), "Formatting example: 1");
    }

    #[test]
    fn test_render_fixed_ties_to_even() {
        // 0.125 and 0.375 are exact in binary, so these are true ties.
        assert_eq!(render_fixed(0.125, 2), "Formatting example: 0.12");
        assert_eq!(render_fixed(0.375, 2), "Formatting example: 0.38");
    }

    #[test]
    fn test_render_fixed_within_half_unit() {
        let values = [FORMAT_VALUE, -FORMAT_VALUE, 1.0 / 3.0, 1234.56789];
        for value in values {
            for precision in 0..=8 {
                let rendered = render_fixed(value, precision);
                let digits = rendered.trim_start_matches("Formatting example: ");
                let parsed: f64 = digits.parse().unwrap();
                let half_unit = 0.5 * 10f64.powi(-(precision as i32));
                assert_abs_diff_eq!(parsed, value, epsilon = half_unit * 1.001);
            }
        }
    }

    #[test]
    fn test_make_message_lines() {
        let message = make_message();
        assert!(message.ends_with('\n'));
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), LINE_COUNT);
        assert!(lines[0].starts_with("Sum of even squares"));
        assert!(lines[1].starts_with("safe_div"));
        assert!(lines[2].starts_with("Flattened vector sum"));
        assert!(lines[3].starts_with("Point move"));
        assert!(lines[4].starts_with("Formatting example"));
    }

    #[test]
    fn test_make_message_is_deterministic() {
        assert_eq!(make_message(), make_message());
    }
}
