use std::fmt::{self, Write};

use crate::interpreter::tree::AnnotatedNode;

/// Number of spaces each tree level is indented by default.
pub const DEFAULT_INDENT: usize = 7;

/// Renders an annotated tree, one node per line.
///
/// Nodes are written depth-first, a node before its children and the left
/// child before the right, each indented by `depth * indent` spaces.
/// Constants are shown as `value (annotation)` and operations as
/// `symbol (annotation)`. Every line, including the last, ends in `\n`.
///
/// # Example
/// ```
/// use annota::interpreter::printer::render;
///
/// let tree = annota::annotate("3+4").unwrap();
/// assert_eq!(render(&tree, 2),
///            "+ (exp -> exp + term : 3 + 4 = 7)\n  3 (comp -> num : 3)\n  4 (comp -> num : 4)\n");
/// ```
#[must_use]
pub fn render(tree: &AnnotatedNode, indent: usize) -> String {
    Rendered { tree, indent }.to_string()
}

/// An annotated tree paired with the indent width to print it with.
struct Rendered<'a> {
    tree:   &'a AnnotatedNode,
    indent: usize,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.tree, 0, self.indent)
    }
}

fn write_node(out: &mut impl Write,
              node: &AnnotatedNode,
              level: usize,
              indent: usize)
              -> fmt::Result {
    write!(out, "{:width$}", "", width = level * indent)?;

    match node.operator() {
        Some(op) => writeln!(out, "{op} ({})", node.annotation())?,
        None => writeln!(out, "{} ({})", node.value(), node.annotation())?,
    }

    if let Some((left, right)) = node.children() {
        write_node(out, left, level + 1, indent)?;
        write_node(out, right, level + 1, indent)?;
    }
    Ok(())
}

/// Renders the tree with [`DEFAULT_INDENT`].
impl fmt::Display for AnnotatedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Rendered { tree:   self,
                                  indent: DEFAULT_INDENT, };
        fmt::Display::fmt(&rendered, f)
    }
}
