use crate::ast::Operator;

/// An evaluated syntax tree node.
///
/// Produced only by the evaluator. Every node carries its final value and the
/// derivation that produced it, and nothing here can be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedNode {
    value:      i64,
    annotation: String,
    kind:       AnnotatedKind,
}

/// What an [`AnnotatedNode`] stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotatedKind {
    /// An integer literal.
    Constant,
    /// A binary operation over two evaluated operands.
    Operation {
        /// The operator applied.
        op:    Operator,
        /// Left operand.
        left:  Box<AnnotatedNode>,
        /// Right operand.
        right: Box<AnnotatedNode>,
    },
}

impl AnnotatedNode {
    pub(crate) const fn constant(value: i64, annotation: String) -> Self {
        Self { value,
               annotation,
               kind: AnnotatedKind::Constant }
    }

    pub(crate) fn operation(op: Operator,
                            left: Self,
                            right: Self,
                            value: i64,
                            annotation: String)
                            -> Self {
        Self { value,
               annotation,
               kind: AnnotatedKind::Operation { op,
                                                left: Box::new(left),
                                                right: Box::new(right) } }
    }

    /// The node's computed value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The derivation string, e.g. `term -> term * fac : 4 * 2 = 8`.
    #[must_use]
    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    /// The node kind, including children for operations.
    #[must_use]
    pub const fn kind(&self) -> &AnnotatedKind {
        &self.kind
    }

    /// The operator, or `None` for a constant.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match &self.kind {
            AnnotatedKind::Constant => None,
            AnnotatedKind::Operation { op, .. } => Some(*op),
        }
    }

    /// The left and right operands, or `None` for a constant.
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match &self.kind {
            AnnotatedKind::Constant => None,
            AnnotatedKind::Operation { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// Returns `true` for a literal, `false` for an operation.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self.kind, AnnotatedKind::Constant)
    }

    /// Collects every node in post-order: left subtree, right subtree, node.
    ///
    /// This is the order in which the evaluator visited the nodes.
    ///
    /// # Example
    /// ```
    /// let tree = annota::annotate("1+2").unwrap();
    /// let values: Vec<i64> = tree.walk_post_order()
    ///                            .iter()
    ///                            .map(|n| n.value())
    ///                            .collect();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn walk_post_order(&self) -> Vec<&Self> {
        let mut nodes = Vec::new();
        self.collect_post_order(&mut nodes);
        nodes
    }

    fn collect_post_order<'a>(&'a self, nodes: &mut Vec<&'a Self>) {
        if let Some((left, right)) = self.children() {
            left.collect_post_order(nodes);
            right.collect_post_order(nodes);
        }
        nodes.push(self);
    }
}
