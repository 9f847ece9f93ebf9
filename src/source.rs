//! Source side of the translation: the typed expression tree produced by the
//! analytics pipeline.
//!
//! This module provides:
//! - Source data types with the directional `accepts_type` relation
//! - The binary operator vocabulary
//! - The closed `Expression` tree with declared-type inference

pub mod data_type;
pub mod expr;
pub mod inference;
pub mod operator;

pub use data_type::{SourceDataType, StructField};
pub use expr::{Expression, SUMMARY_DEPTH};
pub use inference::DeclaredTypes;
pub use operator::{BinaryOperator, NullCheckKind, OperatorKind};
