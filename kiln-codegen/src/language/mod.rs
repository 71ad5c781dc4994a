//! Language-specific abstractions.

mod traits;

pub use traits::{
    FileTemplate, GenerateResult, IMPORTS_PLACEHOLDER, LanguageCodegen, PreviewFile, TypeMapper,
};
