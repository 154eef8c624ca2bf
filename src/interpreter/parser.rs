/// Binary operator parsing.
///
/// One function per precedence level: additive, multiplicative and power.
/// Each level parses its higher-precedence operand first and then loops while
/// it sees one of its own operators.
pub mod binary;

/// Parser entry points and the result type.
///
/// Contains [`parse`](core::parse), which parses a complete input, and
/// [`parse_expression`](core::parse_expression), the lowest-precedence rule.
pub mod core;

/// Primary expressions.
///
/// Integer literals and parenthesised sub-expressions, the atoms every other
/// rule is built from.
pub mod primary;
