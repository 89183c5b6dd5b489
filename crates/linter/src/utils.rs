//! Shared node helpers for stylistic rules

use oxc_ast::ast::{
    BinaryExpression, LogicalExpression, TSIntersectionType, TSType, TSUnionType,
};
use oxc_span::{GetSpan, Span};

/// A construct whose right-hand side may continue on a later line.
///
/// Union and intersection types produce one value per member after the
/// first, each anchored on the member before it.
#[derive(Debug, Clone, Copy)]
pub enum ChainNode<'n, 'a> {
    Binary(&'n BinaryExpression<'a>),
    Logical(&'n LogicalExpression<'a>),
    UnionMember {
        union: &'n TSUnionType<'a>,
        member: &'n TSType<'a>,
    },
    IntersectionMember {
        intersection: &'n TSIntersectionType<'a>,
        member: &'n TSType<'a>,
    },
}

impl<'n, 'a> ChainNode<'n, 'a> {
    /// Span of the whole construct
    pub fn span(&self) -> Span {
        match self {
            Self::Binary(expr) => expr.span,
            Self::Logical(expr) => expr.span,
            Self::UnionMember { union, .. } => union.span,
            Self::IntersectionMember { intersection, .. } => intersection.span,
        }
    }

    /// Span of the operand that follows the operator
    pub fn right_span(&self) -> Span {
        match self {
            Self::Binary(expr) => expr.right.span(),
            Self::Logical(expr) => expr.right.span(),
            Self::UnionMember { member, .. } | Self::IntersectionMember { member, .. } => {
                member.span()
            }
        }
    }

    /// Operator text, for logging
    pub fn operator(&self) -> &'static str {
        match self {
            Self::Binary(expr) => expr.operator.as_str(),
            Self::Logical(expr) => expr.operator.as_str(),
            Self::UnionMember { .. } => "|",
            Self::IntersectionMember { .. } => "&",
        }
    }
}
