//! Target expression tree.

use crate::pmml::data_type::DataType;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Reference to an input field, resolved at evaluation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub field: String,
}

/// Named function applied to an ordered argument list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apply {
    pub function: String,
    pub arguments: Vec<PmmlExpression>,
}

impl Apply {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument, keeping the order of the calls
    pub fn with_argument(mut self, argument: PmmlExpression) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = PmmlExpression>) -> Self {
        self.arguments.extend(arguments);
        self
    }
}

/// Literal value together with its type tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub value: Value,
    pub data_type: DataType,
}

impl Constant {
    pub fn new(value: Value, data_type: DataType) -> Self {
        Self { value, data_type }
    }

    /// A null literal is emitted as a missing constant
    pub fn is_missing(&self) -> bool {
        self.value.is_null()
    }
}

/// Target expression tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PmmlExpression {
    FieldRef(FieldRef),
    Apply(Apply),
    Constant(Constant),
}

impl PmmlExpression {
    pub fn field_ref(name: impl Into<String>) -> Self {
        PmmlExpression::FieldRef(FieldRef { field: name.into() })
    }

    pub fn constant(value: Value, data_type: DataType) -> Self {
        PmmlExpression::Constant(Constant::new(value, data_type))
    }

    pub fn apply(function: impl Into<String>, arguments: Vec<PmmlExpression>) -> Self {
        PmmlExpression::Apply(Apply::new(function).with_arguments(arguments))
    }

    /// Function name if this is an `Apply` node
    pub fn function(&self) -> Option<&str> {
        match self {
            PmmlExpression::Apply(apply) => Some(&apply.function),
            _ => None,
        }
    }

    /// Arguments if this is an `Apply` node, empty otherwise
    pub fn arguments(&self) -> &[PmmlExpression] {
        match self {
            PmmlExpression::Apply(apply) => &apply.arguments,
            _ => &[],
        }
    }
}

impl From<FieldRef> for PmmlExpression {
    fn from(field_ref: FieldRef) -> Self {
        PmmlExpression::FieldRef(field_ref)
    }
}

impl From<Apply> for PmmlExpression {
    fn from(apply: Apply) -> Self {
        PmmlExpression::Apply(apply)
    }
}

impl From<Constant> for PmmlExpression {
    fn from(constant: Constant) -> Self {
        PmmlExpression::Constant(constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_argument_order() {
        let apply = Apply::new("isIn")
            .with_argument(PmmlExpression::field_ref("x"))
            .with_arguments(vec![
                PmmlExpression::constant(Value::Integer(3), DataType::Integer),
                PmmlExpression::constant(Value::Integer(1), DataType::Integer),
            ]);

        let expr = PmmlExpression::from(apply);
        assert_eq!(expr.function(), Some("isIn"));
        assert_eq!(
            expr.arguments(),
            &[
                PmmlExpression::field_ref("x"),
                PmmlExpression::constant(Value::Integer(3), DataType::Integer),
                PmmlExpression::constant(Value::Integer(1), DataType::Integer),
            ]
        );
    }

    #[test]
    fn test_missing_constant() {
        assert!(Constant::new(Value::Null, DataType::Double).is_missing());
        assert!(!Constant::new(Value::Double(0.0), DataType::Double).is_missing());
        assert_eq!(PmmlExpression::field_ref("a").function(), None);
        assert!(PmmlExpression::field_ref("a").arguments().is_empty());
    }
}
