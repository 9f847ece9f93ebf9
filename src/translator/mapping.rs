use crate::pmml::{DataType, PmmlExpression};
use crate::source::Expression;

/// Result of translating one source node.
///
/// Borrows the source node it was produced from; the target tree is owned
/// and independent of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionMapping<'a> {
    pub from: &'a Expression,
    pub to: PmmlExpression,
    pub data_type: DataType,
}

impl<'a> ExpressionMapping<'a> {
    pub fn new(from: &'a Expression, to: impl Into<PmmlExpression>, data_type: DataType) -> Self {
        Self {
            from,
            to: to.into(),
            data_type,
        }
    }

    /// Release the target expression, dropping the link to the source
    pub fn into_target(self) -> PmmlExpression {
        self.to
    }
}
