//! Target side of the translation: expressions of the predictive model
//! markup grammar.

pub mod data_type;
pub mod expr;
pub mod markup;

pub use data_type::DataType;
pub use expr::{Apply, Constant, FieldRef, PmmlExpression};
pub use markup::to_markup;
