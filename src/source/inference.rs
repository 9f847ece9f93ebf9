//! Declared-type inference over a whole expression tree.

use crate::source::data_type::SourceDataType;
use crate::source::expr::Expression;
use crate::source::operator::OperatorKind;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Declared types of every node of one tree, computed in a single
/// post-order walk with an explicit stack.
///
/// Nodes are keyed by address, so lookups are only meaningful for nodes of
/// the tree the table was built from.
#[derive(Debug)]
pub struct DeclaredTypes<'a> {
    types: HashMap<*const Expression, SourceDataType>,
    root: SourceDataType,
    _tree: PhantomData<&'a Expression>,
}

impl<'a> DeclaredTypes<'a> {
    pub fn infer(root: &'a Expression) -> Self {
        let mut types = HashMap::new();
        // Child results, pushed left to right
        let mut results: Vec<SourceDataType> = Vec::new();
        let mut stack = vec![(root, false)];

        while let Some((expr, children_done)) = stack.pop() {
            let children = expr.children();
            if !children_done && !children.is_empty() {
                stack.push((expr, true));
                stack.extend(children.into_iter().rev().map(|child| (child, false)));
                continue;
            }

            let child_types = results.split_off(results.len() - children.len());
            let data_type = declared_type(expr, &child_types);
            types.insert(expr as *const Expression, data_type.clone());
            results.push(data_type);
        }

        // The result stack holds exactly the root type
        let root = results.pop().unwrap_or(SourceDataType::Null);
        Self {
            types,
            root,
            _tree: PhantomData,
        }
    }

    /// Declared type of a node of this tree
    pub fn get(&self, expr: &Expression) -> Option<&SourceDataType> {
        self.types.get(&(expr as *const Expression))
    }

    /// Declared type of a node, falling back to a fresh inference for nodes
    /// outside this tree
    pub fn of(&self, expr: &Expression) -> SourceDataType {
        match self.get(expr) {
            Some(data_type) => data_type.clone(),
            None => expr.data_type(),
        }
    }

    pub fn root(&self) -> &SourceDataType {
        &self.root
    }

    pub fn into_root(self) -> SourceDataType {
        self.root
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn declared_type(expr: &Expression, child_types: &[SourceDataType]) -> SourceDataType {
    match (expr, child_types) {
        (
            Expression::FieldReference { data_type, .. }
            | Expression::Literal { data_type, .. }
            | Expression::Cast { data_type, .. }
            | Expression::ScalarFunction { data_type, .. },
            _,
        ) => data_type.clone(),

        (Expression::In { .. } | Expression::Not(_) | Expression::NullCheck { .. }, _) => {
            SourceDataType::Boolean
        }

        (Expression::BinaryOp { op, .. }, [left, right]) => match op.kind() {
            OperatorKind::Logical | OperatorKind::Comparison => SourceDataType::Boolean,
            OperatorKind::Arithmetic | OperatorKind::Bitwise => {
                if !left.accepts_type(right) && right.accepts_type(left) {
                    right.clone()
                } else {
                    left.clone()
                }
            }
        },

        (Expression::Alias { .. } | Expression::UnaryMinus(_), [child]) => child.clone(),

        (Expression::If { .. }, [_, true_type, _]) => true_type.clone(),

        // children() always yields the arities matched above
        _ => SourceDataType::Null,
    }
}
