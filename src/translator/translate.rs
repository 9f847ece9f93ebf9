//! Recursive translation of source expressions.

use crate::pmml::{Apply, DataType, PmmlExpression};
use crate::source::{
    BinaryOperator, DeclaredTypes, Expression, NullCheckKind, OperatorKind, SourceDataType,
};
use crate::translator::config::TranslatorConfig;
use crate::translator::error::{TranslationError, TranslationResult};
use crate::translator::mapping::ExpressionMapping;
use crate::translator::type_mapper::map_data_type;
use log::{debug, trace};

/// Translates source expression trees into target expression trees.
///
/// The translator holds no state besides its configuration, so one instance
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressionTranslator {
    config: TranslatorConfig,
}

impl ExpressionTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate an expression tree.
    ///
    /// The depth limit is checked up front with an explicit stack, before
    /// any type inference or rendering touches the tree. Children are then
    /// translated depth-first, left to right. The first failure aborts the
    /// whole translation.
    pub fn translate<'a>(&self, expr: &'a Expression) -> TranslationResult<ExpressionMapping<'a>> {
        if let Some(max_depth) = self.config.max_depth {
            if expr.exceeds_depth(max_depth) {
                debug!(
                    "Rejected expression '{}': nesting exceeds {}",
                    expr.summary(),
                    max_depth
                );
                return Err(TranslationError::DepthLimitExceeded { max_depth });
            }
        }

        let types = DeclaredTypes::infer(expr);
        self.translate_node(expr, &types).map_err(|err| {
            debug!("Failed to translate expression '{}': {}", expr.summary(), err);
            err
        })
    }

    /// Translate several named expressions, e.g. one per output field.
    pub fn translate_all<'a>(
        &self,
        exprs: &'a [(String, Expression)],
    ) -> TranslationResult<Vec<(&'a str, ExpressionMapping<'a>)>> {
        exprs
            .iter()
            .map(|(name, expr)| {
                self.translate(expr)
                    .map(|mapping| (name.as_str(), mapping))
            })
            .collect()
    }

    fn translate_node<'a>(
        &self,
        expr: &'a Expression,
        types: &DeclaredTypes<'_>,
    ) -> TranslationResult<ExpressionMapping<'a>> {
        trace!("Translating {}", expr.node_name());

        match expr {
            Expression::Alias { child, .. } => self.translate_node(child, types),

            Expression::FieldReference { name, data_type } => {
                let data_type = map_data_type(data_type)?;
                Ok(ExpressionMapping::new(
                    expr,
                    PmmlExpression::field_ref(name.clone()),
                    data_type,
                ))
            }

            Expression::BinaryOp { op, left, right } => {
                self.translate_binary(expr, *op, left, right, types)
            }

            Expression::If {
                predicate,
                true_value,
                false_value,
            } => self.translate_if(expr, predicate, true_value, false_value, types),

            Expression::In { value, list } => self.translate_in(expr, value, list, types),

            Expression::Literal { value, data_type } => {
                let data_type = map_data_type(data_type)?;
                Ok(ExpressionMapping::new(
                    expr,
                    PmmlExpression::constant(value.clone(), data_type),
                    data_type,
                ))
            }

            Expression::Not(child) => self.translate_predicate(expr, "not", child, types),

            Expression::NullCheck { kind, child } => {
                let function = match kind {
                    NullCheckKind::IsNull => "isMissing",
                    NullCheckKind::IsNotNull => "isNotMissing",
                };
                self.translate_predicate(expr, function, child, types)
            }

            Expression::Cast { .. }
            | Expression::UnaryMinus(_)
            | Expression::ScalarFunction { .. } => Err(unsupported(expr, expr.summary())),
        }
    }

    fn translate_child(
        &self,
        child: &Expression,
        types: &DeclaredTypes<'_>,
    ) -> TranslationResult<PmmlExpression> {
        self.translate_node(child, types)
            .map(ExpressionMapping::into_target)
    }

    #[inline(never)]
    fn translate_binary<'a>(
        &self,
        expr: &'a Expression,
        op: BinaryOperator,
        left: &Expression,
        right: &Expression,
        types: &DeclaredTypes<'_>,
    ) -> TranslationResult<ExpressionMapping<'a>> {
        let (function, data_type) = binary_operator_signature(expr, op, left, right, types)?;
        let apply = Apply::new(function)
            .with_argument(self.translate_child(left, types)?)
            .with_argument(self.translate_child(right, types)?);
        Ok(ExpressionMapping::new(expr, apply, data_type))
    }

    #[inline(never)]
    fn translate_if<'a>(
        &self,
        expr: &'a Expression,
        predicate: &Expression,
        true_value: &Expression,
        false_value: &Expression,
        types: &DeclaredTypes<'_>,
    ) -> TranslationResult<ExpressionMapping<'a>> {
        let true_type = types.of(true_value);
        let false_type = types.of(false_value);
        if !true_type.same_type(&false_type) {
            return Err(unsupported(
                expr,
                format!(
                    "{} (branch types {} and {} differ)",
                    expr.summary(),
                    true_type,
                    false_type
                ),
            ));
        }
        let data_type = map_data_type(&true_type)?;

        let apply = Apply::new("if")
            .with_argument(self.translate_child(predicate, types)?)
            .with_argument(self.translate_child(true_value, types)?)
            .with_argument(self.translate_child(false_value, types)?);
        Ok(ExpressionMapping::new(expr, apply, data_type))
    }

    #[inline(never)]
    fn translate_in<'a>(
        &self,
        expr: &'a Expression,
        value: &Expression,
        list: &[Expression],
        types: &DeclaredTypes<'_>,
    ) -> TranslationResult<ExpressionMapping<'a>> {
        let mut apply = Apply::new("isIn").with_argument(self.translate_child(value, types)?);
        for element in list {
            apply = apply.with_argument(self.translate_child(element, types)?);
        }
        Ok(ExpressionMapping::new(expr, apply, DataType::Boolean))
    }

    /// Single-argument boolean function such as `not` or `isMissing`
    #[inline(never)]
    fn translate_predicate<'a>(
        &self,
        expr: &'a Expression,
        function: &'static str,
        child: &Expression,
        types: &DeclaredTypes<'_>,
    ) -> TranslationResult<ExpressionMapping<'a>> {
        let apply = Apply::new(function).with_argument(self.translate_child(child, types)?);
        Ok(ExpressionMapping::new(expr, apply, DataType::Boolean))
    }
}

/// Function name and result type of a binary operator node.
///
/// Checked before any operand is translated.
fn binary_operator_signature(
    expr: &Expression,
    op: BinaryOperator,
    left: &Expression,
    right: &Expression,
    types: &DeclaredTypes<'_>,
) -> TranslationResult<(&'static str, DataType)> {
    match op.kind() {
        OperatorKind::Logical => {
            let function = match op {
                BinaryOperator::And => "and",
                _ => "or",
            };
            Ok((function, DataType::Boolean))
        }

        OperatorKind::Arithmetic if op.is_widening_arithmetic() => {
            let data_type = widen(expr, &types.of(left), &types.of(right))?;
            Ok((op.symbol(), map_data_type(&data_type)?))
        }

        OperatorKind::Comparison => {
            let function = comparison_function(op.symbol())
                .ok_or_else(|| unsupported(expr, expr.summary()))?;
            Ok((function, DataType::Boolean))
        }

        OperatorKind::Arithmetic | OperatorKind::Bitwise => Err(unsupported(expr, expr.summary())),
    }
}

/// Result type of an arithmetic operation: whichever side accepts the other,
/// trying left first.
fn widen(
    expr: &Expression,
    left: &SourceDataType,
    right: &SourceDataType,
) -> TranslationResult<SourceDataType> {
    if left.accepts_type(right) {
        Ok(left.clone())
    } else if right.accepts_type(left) {
        Ok(right.clone())
    } else {
        Err(unsupported(
            expr,
            format!(
                "{} (operand types {} and {} are incompatible)",
                expr.summary(),
                left,
                right
            ),
        ))
    }
}

fn comparison_function(symbol: &str) -> Option<&'static str> {
    match symbol {
        "=" => Some("equal"),
        ">" => Some("greaterThan"),
        ">=" => Some("greaterOrEqual"),
        "<" => Some("lessThan"),
        "<=" => Some("lessOrEqual"),
        _ => None,
    }
}

fn unsupported(expr: &Expression, description: String) -> TranslationError {
    TranslationError::unsupported(expr.node_name(), description)
}

/// Translate with the default configuration
pub fn translate(expr: &Expression) -> TranslationResult<ExpressionMapping<'_>> {
    ExpressionTranslator::default().translate(expr)
}
