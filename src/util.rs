/// Checked integer helpers.
///
/// This module provides the overflow-checked building blocks used by both
/// phases: accumulating decimal digits into a literal while parsing, and
/// raising an integer to a non-negative power while evaluating.
///
/// All functions return a `Result` carrying a caller-supplied error, so each
/// phase can report the failure with its own error type and position.
pub mod num;
