//! Primitive scalar types understood by the schema.

use std::{fmt, str::FromStr};

/// Known primitive field types.
///
/// This is a language-agnostic representation of the schema's scalars.
/// Use a `TypeMapper` to convert to language-specific type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    String,
    DateTime,
    Boolean,
    Json,
    BigInt,
    Float,
    Decimal,
    Bytes,
}

impl ScalarType {
    pub const ALL: [ScalarType; 9] = [
        ScalarType::Int,
        ScalarType::String,
        ScalarType::DateTime,
        ScalarType::Boolean,
        ScalarType::Json,
        ScalarType::BigInt,
        ScalarType::Float,
        ScalarType::Decimal,
        ScalarType::Bytes,
    ];

    /// Get the schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Int => "Int",
            ScalarType::String => "String",
            ScalarType::DateTime => "DateTime",
            ScalarType::Boolean => "Boolean",
            ScalarType::Json => "Json",
            ScalarType::BigInt => "BigInt",
            ScalarType::Float => "Float",
            ScalarType::Decimal => "Decimal",
            ScalarType::Bytes => "Bytes",
        }
    }

    /// Look up a schema type name, returning `None` for enums and models.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.as_str() == name)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("'{}' is not a scalar type", s))
    }
}
