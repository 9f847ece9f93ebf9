use crate::pmml::DataType;
use crate::source::SourceDataType;
use crate::translator::error::{TranslationError, TranslationResult};

/// Map a source data type onto one of the four target types.
///
/// Any integral width maps to `Integer`; single precision floats, decimals,
/// temporal, binary and complex types are rejected.
pub fn map_data_type(data_type: &SourceDataType) -> TranslationResult<DataType> {
    match data_type {
        SourceDataType::String => Ok(DataType::String),
        SourceDataType::Byte
        | SourceDataType::Short
        | SourceDataType::Integer
        | SourceDataType::Long => Ok(DataType::Integer),
        SourceDataType::Double => Ok(DataType::Double),
        SourceDataType::Boolean => Ok(DataType::Boolean),
        SourceDataType::Float
        | SourceDataType::Decimal { .. }
        | SourceDataType::Date
        | SourceDataType::Timestamp
        | SourceDataType::Binary
        | SourceDataType::Null
        | SourceDataType::Array { .. }
        | SourceDataType::Struct(_) => Err(TranslationError::unsupported(
            "DataType",
            format!(
                "Expected string, integral, double or boolean type, got {} type",
                data_type.type_name()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        assert_eq!(map_data_type(&SourceDataType::String), Ok(DataType::String));
        assert_eq!(map_data_type(&SourceDataType::Byte), Ok(DataType::Integer));
        assert_eq!(map_data_type(&SourceDataType::Short), Ok(DataType::Integer));
        assert_eq!(map_data_type(&SourceDataType::Integer), Ok(DataType::Integer));
        assert_eq!(map_data_type(&SourceDataType::Long), Ok(DataType::Integer));
        assert_eq!(map_data_type(&SourceDataType::Double), Ok(DataType::Double));
        assert_eq!(map_data_type(&SourceDataType::Boolean), Ok(DataType::Boolean));
    }

    #[test]
    fn test_unsupported_types_name_the_type() {
        let err = map_data_type(&SourceDataType::decimal(10, 2)).unwrap_err();
        assert_eq!(
            err,
            TranslationError::unsupported(
                "DataType",
                "Expected string, integral, double or boolean type, got decimal(10,2) type"
            )
        );

        for data_type in [
            SourceDataType::Float,
            SourceDataType::Date,
            SourceDataType::Timestamp,
            SourceDataType::Binary,
            SourceDataType::array(SourceDataType::Integer),
        ] {
            let err = map_data_type(&data_type).unwrap_err();
            assert!(err.is_unsupported());
            assert!(err.to_string().contains(&data_type.type_name()));
        }
    }
}
