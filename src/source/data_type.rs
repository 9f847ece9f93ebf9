//! Data types of the source expression tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of a struct type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub data_type: SourceDataType,
    pub nullable: bool,
}

impl StructField {
    pub fn new(name: impl Into<String>, data_type: SourceDataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
        }
    }
}

/// Data types declared by the upstream pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceDataType {
    String,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Decimal { precision: u8, scale: u8 },
    Date,
    Timestamp,
    Binary,
    Null,
    Array {
        element: Box<SourceDataType>,
        contains_null: bool,
    },
    Struct(Vec<StructField>),
}

impl SourceDataType {
    pub fn array(element: SourceDataType) -> Self {
        SourceDataType::Array {
            element: Box::new(element),
            contains_null: true,
        }
    }

    pub fn decimal(precision: u8, scale: u8) -> Self {
        SourceDataType::Decimal { precision, scale }
    }

    /// Whether this is one of the fixed-width integer types
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            SourceDataType::Byte
                | SourceDataType::Short
                | SourceDataType::Integer
                | SourceDataType::Long
        )
    }

    /// Structural equality that ignores nullability flags of complex types.
    pub fn same_type(&self, other: &SourceDataType) -> bool {
        match (self, other) {
            (
                SourceDataType::Array { element: left, .. },
                SourceDataType::Array { element: right, .. },
            ) => left.same_type(right),
            (SourceDataType::Struct(left), SourceDataType::Struct(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right.iter()).all(|(l, r)| {
                        l.name == r.name && l.data_type.same_type(&r.data_type)
                    })
            }
            _ => self == other,
        }
    }

    /// Whether a value of `other` can be used where `self` is expected.
    ///
    /// Directional and non-transitive: only the pairs listed here widen,
    /// there is no promotion lattice behind it.
    pub fn accepts_type(&self, other: &SourceDataType) -> bool {
        if self.same_type(other) {
            return true;
        }

        match self {
            SourceDataType::Short => matches!(other, SourceDataType::Byte),
            SourceDataType::Integer => {
                matches!(other, SourceDataType::Byte | SourceDataType::Short)
            }
            SourceDataType::Long => matches!(
                other,
                SourceDataType::Byte | SourceDataType::Short | SourceDataType::Integer
            ),
            SourceDataType::Float => other.is_integral(),
            SourceDataType::Double => other.is_integral() || *other == SourceDataType::Float,
            _ => false,
        }
    }

    /// Lower-case name used in diagnostics
    pub fn type_name(&self) -> String {
        match self {
            SourceDataType::String => "string".to_string(),
            SourceDataType::Byte => "tinyint".to_string(),
            SourceDataType::Short => "smallint".to_string(),
            SourceDataType::Integer => "int".to_string(),
            SourceDataType::Long => "bigint".to_string(),
            SourceDataType::Float => "float".to_string(),
            SourceDataType::Double => "double".to_string(),
            SourceDataType::Boolean => "boolean".to_string(),
            SourceDataType::Decimal { precision, scale } => {
                format!("decimal({},{})", precision, scale)
            }
            SourceDataType::Date => "date".to_string(),
            SourceDataType::Timestamp => "timestamp".to_string(),
            SourceDataType::Binary => "binary".to_string(),
            SourceDataType::Null => "void".to_string(),
            SourceDataType::Array { element, .. } => format!("array<{}>", element.type_name()),
            SourceDataType::Struct(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|field| format!("{}:{}", field.name, field.data_type.type_name()))
                    .collect();
                format!("struct<{}>", fields.join(","))
            }
        }
    }
}

impl fmt::Display for SourceDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_type_ignores_nullability() {
        let nullable = SourceDataType::array(SourceDataType::Integer);
        let non_nullable = SourceDataType::Array {
            element: Box::new(SourceDataType::Integer),
            contains_null: false,
        };
        assert!(nullable.same_type(&non_nullable));
        assert_ne!(nullable, non_nullable);

        let mut field = StructField::new("a", SourceDataType::Long);
        let left = SourceDataType::Struct(vec![field.clone()]);
        field.nullable = false;
        let right = SourceDataType::Struct(vec![field]);
        assert!(left.same_type(&right));

        assert!(!SourceDataType::Integer.same_type(&SourceDataType::Long));
        assert!(!SourceDataType::decimal(10, 2).same_type(&SourceDataType::decimal(10, 3)));
    }

    #[test]
    fn test_accepts_type_widening() {
        assert!(SourceDataType::Double.accepts_type(&SourceDataType::Integer));
        assert!(SourceDataType::Double.accepts_type(&SourceDataType::Float));
        assert!(SourceDataType::Long.accepts_type(&SourceDataType::Integer));
        assert!(SourceDataType::Integer.accepts_type(&SourceDataType::Short));
        assert!(SourceDataType::Float.accepts_type(&SourceDataType::Long));
        assert!(SourceDataType::String.accepts_type(&SourceDataType::String));
    }

    #[test]
    fn test_accepts_type_is_directional() {
        assert!(!SourceDataType::Integer.accepts_type(&SourceDataType::Double));
        assert!(!SourceDataType::Byte.accepts_type(&SourceDataType::Short));
        assert!(!SourceDataType::Float.accepts_type(&SourceDataType::Double));
        assert!(!SourceDataType::String.accepts_type(&SourceDataType::Boolean));
        assert!(!SourceDataType::Boolean.accepts_type(&SourceDataType::String));
        assert!(!SourceDataType::decimal(10, 2).accepts_type(&SourceDataType::Integer));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(SourceDataType::Integer.type_name(), "int");
        assert_eq!(SourceDataType::decimal(10, 2).type_name(), "decimal(10,2)");
        assert_eq!(
            SourceDataType::array(SourceDataType::String).type_name(),
            "array<string>"
        );
        assert_eq!(
            SourceDataType::Struct(vec![
                StructField::new("x", SourceDataType::Double),
                StructField::new("y", SourceDataType::Date),
            ])
            .to_string(),
            "struct<x:double,y:date>"
        );
    }
}
