pub mod input;
pub mod pmml;
pub mod source;
pub mod translator;
pub mod value;

pub use translator::{translate, ExpressionMapping, ExpressionTranslator, TranslationError};
