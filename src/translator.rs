//! Translation of source expression trees into target expression trees.
//!
//! This module provides:
//! - The recursive translator with per-shape type rules
//! - Mapping of source data types onto the four target types
//! - The error type shared by every failure mode

pub mod config;
pub mod error;
pub mod mapping;
pub mod translate;
pub mod type_mapper;

pub use config::{TranslatorConfig, DEFAULT_MAX_DEPTH};
pub use error::{TranslationError, TranslationResult};
pub use mapping::ExpressionMapping;
pub use translate::{translate, ExpressionTranslator};
pub use type_mapper::map_data_type;
