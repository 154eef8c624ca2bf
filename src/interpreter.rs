/// The cursor module walks the raw input one character at a time.
///
/// There is no separate tokenizer: the parser inspects and consumes
/// characters directly through a [`Cursor`](cursor::Cursor), which tracks the
/// current offset for error reporting.
///
/// # Responsibilities
/// - Exposes the current character, advancing, and end-of-input detection.
/// - Skips whitespace between grammar symbols.
/// - Never backtracks.
pub mod cursor;
/// The parser module builds the syntax tree from the character stream.
///
/// A recursive-descent parser with one function per grammar level. The shape
/// of the tree it returns encodes operator precedence and associativity.
///
/// # Responsibilities
/// - Converts text into [`Expr`](crate::ast::Expr) nodes.
/// - Fails fast with a positioned [`ParseError`](crate::error::ParseError) on
///   malformed input.
pub mod parser;
/// The evaluator module computes and annotates every node.
///
/// A single post-order walk over the parsed tree that produces the evaluated
/// [`AnnotatedNode`](tree::AnnotatedNode) tree, recording for each node the
/// production and arithmetic step that gave it its value.
///
/// # Responsibilities
/// - Applies the six operators with checked integer arithmetic.
/// - Formats the derivation string for each node.
/// - Reports division by zero, overflow, and negative exponents.
pub mod evaluator;
/// The evaluated tree shape.
///
/// Nodes in this tree always carry a value and an annotation, so an
/// unevaluated node cannot be observed once evaluation has finished.
pub mod tree;
/// Renders an annotated tree as indented text.
pub mod printer;
