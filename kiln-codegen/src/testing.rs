//! Shared fixtures for unit tests.

use kiln_core::ScalarType;
use kiln_schema::{Document, RawField, RawModel};

use crate::language::TypeMapper;

/// TypeScript-flavoured mapper so unit tests read like real output.
pub(crate) struct TestMapper;

impl TypeMapper for TestMapper {
    fn language(&self) -> &'static str {
        "test"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::Int | ScalarType::Float | ScalarType::Decimal => "number",
            ScalarType::String => "string",
            ScalarType::DateTime => "Date",
            ScalarType::Boolean => "boolean",
            ScalarType::Json => "any",
            ScalarType::BigInt => "bigint",
            ScalarType::Bytes => "Buffer",
        }
    }
}

/// `User` ⇄ `Post`, plus a `Role` enum on `User`.
pub(crate) fn blog() -> Document {
    Document::new([
        RawModel::new(
            "User",
            [
                RawField::scalar("id", "Int"),
                RawField::enumeration("role", "Role"),
                RawField::relation("posts", "Post", "PostToUser").list(),
            ],
        ),
        RawModel::new(
            "Post",
            [
                RawField::scalar("id", "Int"),
                RawField::relation("author", "User", "PostToUser"),
            ],
        ),
    ])
}
