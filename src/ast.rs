use std::fmt;

/// A binary arithmetic operator.
///
/// These are the only operators the grammar knows about. Each one belongs to a
/// precedence level and carries the production that is quoted in the
/// annotation of every node it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition `+`
    Add,
    /// Subtraction `-`
    Sub,
    /// Multiplication `*`
    Mul,
    /// Integer division `/`
    Div,
    /// Remainder `%`
    Mod,
    /// Exponentiation `^`
    Pow,
}

impl Operator {
    /// Returns the printable form of the operator.
    ///
    /// ## Example
    /// ```
    /// use annota::ast::Operator;
    ///
    /// assert_eq!(Operator::Mod.symbol(), '%');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }

    /// Maps an operator character to its operator.
    ///
    /// Returns `None` for every character that is not one of `+ - * / % ^`.
    ///
    /// ## Example
    /// ```
    /// use annota::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('('), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The grammar production that introduces this operator.
    ///
    /// This is the left half of an operation node's annotation, e.g.
    /// `term -> term * fac`.
    #[must_use]
    pub const fn production(self) -> &'static str {
        match self {
            Self::Add => "exp -> exp + term",
            Self::Sub => "exp -> exp - term",
            Self::Mul => "term -> term * fac",
            Self::Div => "term -> term / fac",
            Self::Mod => "term -> term % fac",
            Self::Pow => "fac -> fac ^ comp",
        }
    }

    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// - `1`: additive (`+ -`)
    /// - `2`: multiplicative (`* / %`)
    /// - `3`: power (`^`)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A syntax tree node as produced by the parser.
///
/// Only constants carry a value at this stage. Operation nodes always own
/// both of their operands; the parser never hands out a half-built
/// operation. Values and annotations for operations are produced by the
/// evaluator into a separate [`AnnotatedNode`](crate::interpreter::tree::AnnotatedNode)
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A non-negative integer literal.
    Constant {
        /// The literal's value.
        value:    i64,
        /// Offset of the literal's first digit in the source.
        position: usize,
    },
    /// A binary operation.
    Operation {
        /// The operator.
        op:       Operator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the operator character in the source.
        position: usize,
        /// Height of the subtree rooted here.
        depth:    usize,
    },
}

impl Expr {
    /// Builds a constant node.
    #[must_use]
    pub const fn constant(value: i64, position: usize) -> Self {
        Self::Constant { value, position }
    }

    /// Builds an operation node owning both operands.
    ///
    /// The subtree height is computed from the operands' cached heights, so
    /// building never walks the tree.
    #[must_use]
    pub fn operation(op: Operator, left: Self, right: Self, position: usize) -> Self {
        let depth = 1 + left.depth().max(right.depth());
        Self::Operation { op,
                          left: Box::new(left),
                          right: Box::new(right),
                          position,
                          depth }
    }

    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use annota::ast::Expr;
    ///
    /// let expr = Expr::constant(42, 5);
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Constant { position, .. } | Self::Operation { position, .. } => *position,
        }
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Constant { .. } => 1,
            Self::Operation { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Number of operation nodes in the tree.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        match self {
            Self::Constant { .. } => 0,
            Self::Operation { left, right, .. } => {
                1 + left.operation_count() + right.operation_count()
            },
        }
    }

    /// Height of the tree; a lone constant has depth `1`.
    ///
    /// ## Example
    /// ```
    /// use annota::ast::{Expr, Operator};
    ///
    /// let sum = Expr::operation(Operator::Add, Expr::constant(1, 0), Expr::constant(2, 2), 1);
    /// let product = Expr::operation(Operator::Mul, sum, Expr::constant(3, 4), 3);
    ///
    /// assert_eq!(product.depth(), 3);
    /// ```
    #[must_use]
    pub const fn depth(&self) -> usize {
        match self {
            Self::Constant { .. } => 1,
            Self::Operation { depth, .. } => *depth,
        }
    }
}

/// Renders the tree as fully parenthesised infix, e.g. `((3 + 4) * 2)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { value, .. } => write!(f, "{value}"),
            Self::Operation { op, left, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
