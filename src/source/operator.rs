//! Binary operator vocabulary of the source expression tree.

use serde::{Deserialize, Serialize};

/// Broad family a binary operator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Logical,
    Arithmetic,
    Comparison,
    Bitwise,
}

/// Binary operators the pipeline can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Logical
    And,
    Or,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,

    // Comparison
    EqualTo,
    EqualNullSafe,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,

    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
}

impl BinaryOperator {
    pub fn kind(&self) -> OperatorKind {
        match self {
            BinaryOperator::And | BinaryOperator::Or => OperatorKind::Logical,

            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Remainder => OperatorKind::Arithmetic,

            BinaryOperator::EqualTo
            | BinaryOperator::EqualNullSafe
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterThanOrEqual
            | BinaryOperator::LessThan
            | BinaryOperator::LessThanOrEqual => OperatorKind::Comparison,

            BinaryOperator::BitwiseAnd | BinaryOperator::BitwiseOr | BinaryOperator::BitwiseXor => {
                OperatorKind::Bitwise
            }
        }
    }

    /// Whether the operator widens its operands, i.e. one of `+ - * /`
    pub fn is_widening_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Add
                | BinaryOperator::Subtract
                | BinaryOperator::Multiply
                | BinaryOperator::Divide
        )
    }

    /// Get the symbol for this operator as the pipeline spells it
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::EqualTo => "=",
            BinaryOperator::EqualNullSafe => "<=>",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
        }
    }

    /// Name of the source node class, used in diagnostics
    pub fn node_name(&self) -> &'static str {
        match self {
            BinaryOperator::And => "And",
            BinaryOperator::Or => "Or",
            BinaryOperator::Add => "Add",
            BinaryOperator::Subtract => "Subtract",
            BinaryOperator::Multiply => "Multiply",
            BinaryOperator::Divide => "Divide",
            BinaryOperator::Remainder => "Remainder",
            BinaryOperator::EqualTo => "EqualTo",
            BinaryOperator::EqualNullSafe => "EqualNullSafe",
            BinaryOperator::GreaterThan => "GreaterThan",
            BinaryOperator::GreaterThanOrEqual => "GreaterThanOrEqual",
            BinaryOperator::LessThan => "LessThan",
            BinaryOperator::LessThanOrEqual => "LessThanOrEqual",
            BinaryOperator::BitwiseAnd => "BitwiseAnd",
            BinaryOperator::BitwiseOr => "BitwiseOr",
            BinaryOperator::BitwiseXor => "BitwiseXor",
        }
    }
}

/// Null checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullCheckKind {
    IsNull,
    IsNotNull,
}

impl NullCheckKind {
    pub fn node_name(&self) -> &'static str {
        match self {
            NullCheckKind::IsNull => "IsNull",
            NullCheckKind::IsNotNull => "IsNotNull",
        }
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            NullCheckKind::IsNull => "isnull",
            NullCheckKind::IsNotNull => "isnotnull",
        }
    }
}
