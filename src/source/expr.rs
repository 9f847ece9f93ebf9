//! Source expression tree as handed over by the pipeline conversion.

use crate::source::data_type::SourceDataType;
use crate::source::inference::DeclaredTypes;
use crate::source::operator::{BinaryOperator, NullCheckKind};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expression tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Named wrapper around a child, transparent to translation
    Alias { child: Box<Expression>, name: String },

    /// Reference to a named input field
    FieldReference {
        name: String,
        data_type: SourceDataType,
    },

    /// Logical, arithmetic, comparison or bitwise operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// `if (predicate) true_value else false_value`
    If {
        predicate: Box<Expression>,
        true_value: Box<Expression>,
        false_value: Box<Expression>,
    },

    /// `value IN (list...)`
    In {
        value: Box<Expression>,
        list: Vec<Expression>,
    },

    /// Literal constant value
    Literal {
        value: Value,
        data_type: SourceDataType,
    },

    /// Logical negation
    Not(Box<Expression>),

    /// IS NULL / IS NOT NULL
    NullCheck {
        kind: NullCheckKind,
        child: Box<Expression>,
    },

    /// Type conversion
    Cast {
        child: Box<Expression>,
        data_type: SourceDataType,
    },

    /// Arithmetic negation
    UnaryMinus(Box<Expression>),

    /// Any other named function of the pipeline
    ScalarFunction {
        name: String,
        arguments: Vec<Expression>,
        data_type: SourceDataType,
    },
}

impl Expression {
    /// Create an alias expression
    pub fn alias(child: Expression, name: impl Into<String>) -> Self {
        Expression::Alias {
            child: Box::new(child),
            name: name.into(),
        }
    }

    /// Create a field reference expression
    pub fn field(name: impl Into<String>, data_type: SourceDataType) -> Self {
        Expression::FieldReference {
            name: name.into(),
            data_type,
        }
    }

    /// Create a literal expression
    pub fn literal(value: impl Into<Value>, data_type: SourceDataType) -> Self {
        Expression::Literal {
            value: value.into(),
            data_type,
        }
    }

    /// Create a typed null literal
    pub fn null(data_type: SourceDataType) -> Self {
        Expression::Literal {
            value: Value::Null,
            data_type,
        }
    }

    /// Create a binary operation expression
    pub fn binary_op(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Or, left, right)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Add, left, right)
    }

    pub fn subtract(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Subtract, left, right)
    }

    pub fn multiply(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Multiply, left, right)
    }

    pub fn divide(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Divide, left, right)
    }

    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::EqualTo, left, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::GreaterThan, left, right)
    }

    pub fn ge(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::GreaterThanOrEqual, left, right)
    }

    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::LessThan, left, right)
    }

    pub fn le(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::LessThanOrEqual, left, right)
    }

    /// Create a conditional expression
    pub fn if_else(predicate: Expression, true_value: Expression, false_value: Expression) -> Self {
        Expression::If {
            predicate: Box::new(predicate),
            true_value: Box::new(true_value),
            false_value: Box::new(false_value),
        }
    }

    /// Create a membership expression
    pub fn in_list(value: Expression, list: Vec<Expression>) -> Self {
        Expression::In {
            value: Box::new(value),
            list,
        }
    }

    /// Create a NOT expression
    pub fn not_expr(child: Expression) -> Self {
        Expression::Not(Box::new(child))
    }

    pub fn is_null(child: Expression) -> Self {
        Expression::NullCheck {
            kind: NullCheckKind::IsNull,
            child: Box::new(child),
        }
    }

    pub fn is_not_null(child: Expression) -> Self {
        Expression::NullCheck {
            kind: NullCheckKind::IsNotNull,
            child: Box::new(child),
        }
    }

    pub fn cast(child: Expression, data_type: SourceDataType) -> Self {
        Expression::Cast {
            child: Box::new(child),
            data_type,
        }
    }

    /// Name of the node class, used in diagnostics
    pub fn node_name(&self) -> &'static str {
        match self {
            Expression::Alias { .. } => "Alias",
            Expression::FieldReference { .. } => "AttributeReference",
            Expression::BinaryOp { op, .. } => op.node_name(),
            Expression::If { .. } => "If",
            Expression::In { .. } => "In",
            Expression::Literal { .. } => "Literal",
            Expression::Not(_) => "Not",
            Expression::NullCheck { kind, .. } => kind.node_name(),
            Expression::Cast { .. } => "Cast",
            Expression::UnaryMinus(_) => "UnaryMinus",
            Expression::ScalarFunction { .. } => "ScalarFunction",
        }
    }

    /// Declared output type of this node, inferred from the children where
    /// the node does not carry one itself.
    pub fn data_type(&self) -> SourceDataType {
        DeclaredTypes::infer(self).into_root()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut max_level = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, level)) = stack.pop() {
            max_level = max_level.max(level);
            stack.extend(expr.children().into_iter().map(|child| (child, level + 1)));
        }
        max_level
    }

    /// Whether the tree is deeper than `max_depth`, stopping at the first
    /// path that crosses it.
    pub fn exceeds_depth(&self, max_depth: usize) -> bool {
        let mut stack = vec![(self, 1)];
        while let Some((expr, level)) = stack.pop() {
            if level > max_depth {
                return true;
            }
            stack.extend(expr.children().into_iter().map(|child| (child, level + 1)));
        }
        false
    }

    /// Direct children in evaluation order
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::FieldReference { .. } | Expression::Literal { .. } => vec![],
            Expression::Alias { child, .. }
            | Expression::Not(child)
            | Expression::NullCheck { child, .. }
            | Expression::Cast { child, .. }
            | Expression::UnaryMinus(child) => vec![child.as_ref()],
            Expression::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expression::If {
                predicate,
                true_value,
                false_value,
            } => vec![predicate.as_ref(), true_value.as_ref(), false_value.as_ref()],
            Expression::In { value, list } => {
                let mut children = vec![value.as_ref()];
                children.extend(list.iter());
                children
            }
            Expression::ScalarFunction { arguments, .. } => arguments.iter().collect(),
        }
    }

    /// Rendering cut off below `SUMMARY_DEPTH` levels, for diagnostics
    pub fn summary(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_expression(&mut out, self, SUMMARY_DEPTH);
        out
    }
}

/// Levels rendered by [`Expression::summary`]
pub const SUMMARY_DEPTH: usize = 16;

fn write_list<W: fmt::Write>(out: &mut W, items: &[Expression], levels: usize) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write_expression(out, item, levels)?;
    }
    Ok(())
}

/// Render `expr`, replacing anything below `levels` nested nodes with `...`
fn write_expression<W: fmt::Write>(out: &mut W, expr: &Expression, levels: usize) -> fmt::Result {
    if levels == 0 {
        return write!(out, "...");
    }
    let next = levels - 1;

    match expr {
        Expression::Alias { child, name } => {
            write_expression(out, child, next)?;
            write!(out, " AS {}", name)
        }
        Expression::FieldReference { name, .. } => write!(out, "{}", name),
        Expression::BinaryOp { op, left, right } => {
            write!(out, "(")?;
            write_expression(out, left, next)?;
            write!(out, " {} ", op.symbol())?;
            write_expression(out, right, next)?;
            write!(out, ")")
        }
        Expression::If {
            predicate,
            true_value,
            false_value,
        } => {
            write!(out, "if (")?;
            write_expression(out, predicate, next)?;
            write!(out, ") ")?;
            write_expression(out, true_value, next)?;
            write!(out, " else ")?;
            write_expression(out, false_value, next)
        }
        Expression::In { value, list } => {
            write_expression(out, value, next)?;
            write!(out, " IN (")?;
            write_list(out, list, next)?;
            write!(out, ")")
        }
        Expression::Literal {
            value: Value::String(s),
            ..
        } => write!(out, "'{}'", s),
        Expression::Literal { value, .. } => write!(out, "{}", value),
        Expression::Not(child) => {
            write!(out, "NOT ")?;
            write_expression(out, child, next)
        }
        Expression::NullCheck { kind, child } => {
            write!(out, "{}(", kind.function_name())?;
            write_expression(out, child, next)?;
            write!(out, ")")
        }
        Expression::Cast { child, data_type } => {
            write!(out, "cast(")?;
            write_expression(out, child, next)?;
            write!(out, " as {})", data_type)
        }
        Expression::UnaryMinus(child) => {
            write!(out, "-")?;
            write_expression(out, child, next)
        }
        Expression::ScalarFunction {
            name, arguments, ..
        } => {
            write!(out, "{}(", name)?;
            write_list(out, arguments, next)?;
            write!(out, ")")
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expression(f, self, usize::MAX)
    }
}
