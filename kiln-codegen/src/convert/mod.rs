//! Conversion of raw schema models into internal entities.

mod entity;
mod field;

pub use entity::{convert_model, convert_models};
pub use field::FieldConverter;
use kiln_schema::{DEFAULT_DECORATOR_MODULE, GeneratorConfig};

/// Symbol of the per-field documentation decorator.
pub const FIELD_DOC_TAG: &str = "ApiProperty";

/// Symbol of the entity-level decorator every class carries.
pub const ENTITY_TAG: &str = "ApiExtraModels";

/// Settings that shape conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Attach a documentation tag to every field.
    pub document_fields: bool,
    /// Module the decorators are imported from.
    pub decorator_module: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            document_fields: false,
            decorator_module: DEFAULT_DECORATOR_MODULE.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Options with field documentation turned on.
    pub fn documented() -> Self {
        Self {
            document_fields: true,
            ..Self::default()
        }
    }
}

impl From<&GeneratorConfig> for ConvertOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            document_fields: config.swagger,
            decorator_module: config.decorator_module.clone(),
        }
    }
}
