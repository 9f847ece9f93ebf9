use sparkpmml::pmml::{to_markup, DataType, PmmlExpression};
use sparkpmml::source::{Expression, SourceDataType};
use sparkpmml::translator::{ExpressionTranslator, TranslationError};
use sparkpmml::translate;
use sparkpmml::value::Value;
use std::sync::Arc;
use std::thread;

fn field(name: &str, data_type: SourceDataType) -> Expression {
    Expression::field(name, data_type)
}

fn sample_expressions() -> Vec<Expression> {
    vec![
        field("age", SourceDataType::Integer),
        Expression::literal("x", SourceDataType::String),
        Expression::add(
            field("a", SourceDataType::Long),
            field("b", SourceDataType::Double),
        ),
        Expression::and(
            Expression::le(
                field("a", SourceDataType::Integer),
                Expression::literal(3, SourceDataType::Integer),
            ),
            Expression::is_not_null(field("s", SourceDataType::String)),
        ),
        Expression::if_else(
            Expression::not_expr(field("p", SourceDataType::Boolean)),
            Expression::literal(1.0, SourceDataType::Double),
            Expression::null(SourceDataType::Double),
        ),
    ]
}

#[test]
fn test_alias_transparency() {
    for expr in sample_expressions() {
        let aliased = Expression::alias(expr.clone(), "out");
        let a = translate(&aliased).unwrap();
        let b = translate(&expr).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_literal_round_trip() {
    let expr = Expression::literal(5, SourceDataType::Integer);
    let mapping = translate(&expr).unwrap();
    assert_eq!(
        mapping.to,
        PmmlExpression::constant(Value::Integer(5), DataType::Integer)
    );
    assert_eq!(mapping.data_type, DataType::Integer);
}

#[test]
fn test_comparison_mapping() {
    let expr = Expression::eq(
        field("a", SourceDataType::String),
        Expression::literal("b", SourceDataType::String),
    );
    let mapping = translate(&expr).unwrap();
    assert_eq!(
        mapping.to,
        PmmlExpression::apply(
            "equal",
            vec![
                PmmlExpression::field_ref("a"),
                PmmlExpression::constant(Value::from("b"), DataType::String),
            ]
        )
    );
    assert_eq!(mapping.data_type, DataType::Boolean);
}

#[test]
fn test_arithmetic_widening() {
    let expr = Expression::add(
        field("i", SourceDataType::Integer),
        field("d", SourceDataType::Double),
    );
    let mapping = translate(&expr).unwrap();
    assert_eq!(mapping.data_type, DataType::Double);
    assert_eq!(
        mapping.to,
        PmmlExpression::apply(
            "+",
            vec![PmmlExpression::field_ref("i"), PmmlExpression::field_ref("d")]
        )
    );

    let expr = Expression::add(
        field("s", SourceDataType::String),
        field("b", SourceDataType::Boolean),
    );
    assert!(matches!(
        translate(&expr),
        Err(TranslationError::UnsupportedExpression { .. })
    ));
}

#[test]
fn test_conditional_strictness() {
    let expr = Expression::if_else(
        field("p", SourceDataType::Boolean),
        field("t", SourceDataType::Integer),
        field("f", SourceDataType::Double),
    );
    assert!(matches!(
        translate(&expr),
        Err(TranslationError::UnsupportedExpression { .. })
    ));
}

#[test]
fn test_membership_order_preservation() {
    let expr = Expression::in_list(
        field("x", SourceDataType::Integer),
        vec![
            Expression::literal(30, SourceDataType::Integer),
            Expression::literal(10, SourceDataType::Integer),
            Expression::literal(20, SourceDataType::Integer),
        ],
    );
    let mapping = translate(&expr).unwrap();
    assert_eq!(
        mapping.to,
        PmmlExpression::apply(
            "isIn",
            vec![
                PmmlExpression::field_ref("x"),
                PmmlExpression::constant(Value::Integer(30), DataType::Integer),
                PmmlExpression::constant(Value::Integer(10), DataType::Integer),
                PmmlExpression::constant(Value::Integer(20), DataType::Integer),
            ]
        )
    );
    assert_eq!(mapping.data_type, DataType::Boolean);
}

#[test]
fn test_determinism() {
    for expr in sample_expressions() {
        let first = translate(&expr).unwrap();
        let second = translate(&expr).unwrap();
        assert_eq!(first.to, second.to);
        assert_eq!(first.data_type, second.data_type);
    }
}

#[test]
fn test_unsupported_types_are_named() {
    let expr = field("amount", SourceDataType::decimal(38, 18));
    let err = translate(&expr).unwrap_err();
    assert!(err.is_unsupported());
    assert!(err.to_string().contains("decimal(38,18)"));

    let expr = field("day", SourceDataType::Date);
    let err = translate(&expr).unwrap_err();
    assert!(err.to_string().contains("got date type"));
}

#[test]
fn test_source_tree_is_untouched() {
    let expr = Expression::or(
        Expression::is_null(field("a", SourceDataType::Integer)),
        Expression::gt(
            field("a", SourceDataType::Integer),
            Expression::literal(0, SourceDataType::Integer),
        ),
    );
    let before = expr.clone();
    translate(&expr).unwrap();
    assert_eq!(expr, before);
}

#[test]
fn test_concurrent_translation() {
    let translator = ExpressionTranslator::default();
    let exprs = Arc::new(sample_expressions());
    let expected: Vec<PmmlExpression> = exprs
        .iter()
        .map(|expr| translate(expr).unwrap().into_target())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let exprs = Arc::clone(&exprs);
            thread::spawn(move || {
                exprs
                    .iter()
                    .map(|expr| translator.translate(expr).unwrap().into_target())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_feature_markup() {
    let expr = Expression::alias(
        Expression::if_else(
            Expression::ge(
                field("income", SourceDataType::Double),
                Expression::literal(50000.0, SourceDataType::Double),
            ),
            Expression::literal("high", SourceDataType::String),
            Expression::literal("low", SourceDataType::String),
        ),
        "income_band",
    );

    let mapping = translate(&expr).unwrap();
    assert_eq!(mapping.data_type, DataType::String);

    let expected = "\
<Apply function=\"if\">
  <Apply function=\"greaterOrEqual\">
    <FieldRef field=\"income\"/>
    <Constant dataType=\"double\">50000.0</Constant>
  </Apply>
  <Constant dataType=\"string\">high</Constant>
  <Constant dataType=\"string\">low</Constant>
</Apply>
";
    assert_eq!(to_markup(&mapping.to), expected);
}
