use std::path::PathBuf;

use thiserror::Error;

/// Fatal conversion and resolution failures.
///
/// Every variant aborts the whole batch: no output file of a failing batch
/// should be considered valid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("field '{model}.{field}' has no base type")]
    MissingBaseType { model: String, field: String },

    #[error("field '{model}.{field}' relates to '{target}', which is not part of the batch")]
    UnknownRelation {
        model: String,
        field: String,
        target: String,
    },

    #[error("'{first}' and '{second}' would both be written to '{}'", path.display())]
    PathCollision {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("'{entity}' has no output location; place every file before resolving imports")]
    Unplaced { entity: String },

    #[error("'{entity}' imports '{target}', but the batch has no output file for it")]
    MissingTarget { entity: String, target: String },

    #[error("'{entity}' still imports from placeholder '{origin}'; resolve imports before rendering")]
    UnresolvedImport { entity: String, origin: String },

    #[error("template for '{entity}' has no imports placeholder")]
    MissingPlaceholder { entity: String },
}
