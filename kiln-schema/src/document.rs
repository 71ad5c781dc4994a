//! The already-parsed schema document fed to the generator.

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext, validate::validate_document};

/// What a field's declared type refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A built-in scalar such as `Int` or `DateTime`.
    #[default]
    #[serde(alias = "primitive")]
    Scalar,
    /// A reference to an enum declared elsewhere.
    Enum,
    /// A reference to another model.
    #[serde(alias = "relation")]
    Object,
}

/// One field of a model as it appears in the input document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub name: String,

    #[serde(default)]
    pub kind: FieldKind,

    /// Declared base type: a scalar name, an enum name or a model name.
    #[serde(default, rename = "type")]
    pub base_type: Option<String>,

    #[serde(default)]
    pub is_list: bool,

    /// Present on relation fields only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,
}

impl RawField {
    /// A scalar field, e.g. `RawField::scalar("id", "Int")`.
    pub fn scalar(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar,
            base_type: Some(base_type.into()),
            is_list: false,
            relation_name: None,
        }
    }

    /// A field typed by an enum.
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Enum,
            ..Self::scalar(name, enum_name)
        }
    }

    /// A relation field pointing at `target`.
    pub fn relation(
        name: impl Into<String>,
        target: impl Into<String>,
        relation_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: FieldKind::Object,
            relation_name: Some(relation_name.into()),
            ..Self::scalar(name, target)
        }
    }

    /// Mark the field as a list.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }

    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }
}

/// One model of the input document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawModel {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<RawField>,
}

impl RawModel {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = RawField>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into_iter().collect(),
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&RawField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The full input document: every model of one generation batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub models: Vec<RawModel>,
}

/// Accepts both `{ "models": [...] }` and the `{ "datamodel": { "models": [...] } }`
/// envelope emitted by schema tooling.
#[derive(Deserialize)]
struct DocumentRepr {
    #[serde(default)]
    models: Option<Vec<RawModel>>,
    #[serde(default)]
    datamodel: Option<Datamodel>,
}

#[derive(Deserialize)]
struct Datamodel {
    #[serde(default)]
    models: Vec<RawModel>,
}

impl Document {
    pub fn new(models: impl IntoIterator<Item = RawModel>) -> Self {
        Self {
            models: models.into_iter().collect(),
        }
    }

    /// Parse a schema document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Look up a model by name.
    pub fn model(&self, name: &str) -> Option<&RawModel> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn has_model(&self, name: &str) -> bool {
        self.model(name).is_some()
    }
}

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "schema.json")
    }
}

/// Parse and validate a document.
pub fn parse_document(content: &str, filename: &str) -> Result<Document> {
    let source_ctx = SourceContext::new(content, filename);
    let repr: DocumentRepr =
        serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?;

    let models = match (repr.models, repr.datamodel) {
        (Some(models), None) => models,
        (None, Some(datamodel)) => datamodel.models,
        (Some(_), Some(_)) => {
            return Err(source_ctx.validation_error(
                "document declares both `models` and `datamodel`; keep only one",
                None,
            ));
        }
        (None, None) => {
            return Err(source_ctx.validation_error("document has no `models` list", None));
        }
    };

    let document = Document { models };
    validate_document(&document, &source_ctx)?;
    Ok(document)
}
