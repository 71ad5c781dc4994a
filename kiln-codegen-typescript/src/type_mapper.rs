//! TypeScript type mapper implementation.

use kiln_codegen::language::TypeMapper;
use kiln_core::ScalarType;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::Int => "number",
            ScalarType::String => "string",
            ScalarType::DateTime => "Date",
            ScalarType::Boolean => "boolean",
            ScalarType::Json => "any",
            ScalarType::BigInt => "bigint",
            ScalarType::Float => "number",
            ScalarType::Decimal => "number",
            ScalarType::Bytes => "Buffer",
        }
    }

    // Runtime constructors, not the capitalized type names
    fn doc_type(&self, scalar: ScalarType) -> String {
        match scalar {
            ScalarType::Int | ScalarType::Float | ScalarType::Decimal => "Number",
            ScalarType::String => "String",
            ScalarType::DateTime => "Date",
            ScalarType::Boolean => "Boolean",
            ScalarType::Json => "Object",
            ScalarType::BigInt => "BigInt",
            ScalarType::Bytes => "Buffer",
        }
        .to_string()
    }
}
