use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for kiln-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a document parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `span` when known.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn missing_type_error(
        &self,
        model: impl Into<String>,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingBaseType {
            src: self.named_source(),
            span,
            model: model.into(),
            field: field.into(),
        })
    }

    pub fn unknown_relation_error(
        &self,
        model: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownRelation {
            src: self.named_source(),
            span,
            model: model.into(),
            field: field.into(),
            target: target.into(),
        })
    }

    pub fn duplicate_error(
        &self,
        kind: impl Into<String>,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            span,
            kind: kind.into(),
            name: name.into(),
        })
    }

    pub fn name_collision_error(
        &self,
        first: impl Into<String>,
        second: impl Into<String>,
        generated: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::NameCollision {
            src: self.named_source(),
            span,
            first: first.into(),
            second: second.into(),
            generated: generated.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

/// Translate a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the `input` path in kiln.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema document")]
    #[diagnostic(code(kiln::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse kiln.toml")]
    #[diagnostic(code(kiln::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("field '{model}.{field}' has no type")]
    #[diagnostic(
        code(kiln::missing_type),
        help("every field needs a `type`: a scalar, an enum or a model name")
    )]
    MissingBaseType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        model: String,
        field: String,
    },

    #[error("field '{model}.{field}' relates to unknown model '{target}'")]
    #[diagnostic(
        code(kiln::unknown_relation),
        help("declare a model named '{target}' or remove the relation")
    )]
    UnknownRelation {
        #[source_code]
        src: NamedSource<String>,
        #[label("relation declared here")]
        span: Option<SourceSpan>,
        model: String,
        field: String,
        target: String,
    },

    #[error("duplicate {kind} '{name}'")]
    #[diagnostic(code(kiln::duplicate))]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: Option<SourceSpan>,
        kind: String,
        name: String,
    },

    #[error("models '{first}' and '{second}' both generate '{generated}'")]
    #[diagnostic(
        code(kiln::name_collision),
        help("class and file names are derived from model names; rename one of the models")
    )]
    NameCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("collides with '{first}'")]
        span: Option<SourceSpan>,
        first: String,
        second: String,
        generated: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, `_` and `$`, not starting with a number."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(kiln::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("{ \"models\": 1 }", 1, 3), Some(2));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "{\n  \"models\": [\n    oops\n  ]\n}";
        // line 3, column 5 is the 'o' of "oops"
        let offset = offset_of(src, 3, 5).unwrap();
        assert_eq!(&src[offset..offset + 4], "oops");
    }

    #[test]
    fn test_offset_of_unknown_position() {
        assert_eq!(offset_of("{}", 0, 0), None);
        assert_eq!(offset_of("{}", 1, 10), None);
    }
}
