//! `kiln.toml` generator configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Layout, Result, error::SourceContext};

/// Module that exports the enums referenced by the schema.
pub const DEFAULT_ENUM_MODULE: &str = "@prisma/client";

/// Module that exports the documentation decorators.
pub const DEFAULT_DECORATOR_MODULE: &str = "@nestjs/swagger";

/// Root of kiln.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
}

/// The `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path to the schema document, relative to kiln.toml
    pub input: PathBuf,

    /// Output directory, relative to kiln.toml
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub layout: Layout,

    /// Attach `ApiProperty` documentation decorators to every field
    #[serde(default)]
    pub swagger: bool,

    #[serde(default = "default_enum_module")]
    pub enum_module: String,

    #[serde(default = "default_decorator_module")]
    pub decorator_module: String,

    #[serde(default)]
    pub dry_run: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

fn default_enum_module() -> String {
    DEFAULT_ENUM_MODULE.to_string()
}

fn default_decorator_module() -> String {
    DEFAULT_DECORATOR_MODULE.to_string()
}

impl GeneratorConfig {
    /// Configuration with defaults for everything but the input document.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: default_output(),
            layout: Layout::default(),
            swagger: false,
            enum_module: default_enum_module(),
            decorator_module: default_decorator_module(),
            dry_run: false,
        }
    }

    /// Input path anchored at `base` (usually the directory holding kiln.toml).
    pub fn input_path(&self, base: &Path) -> PathBuf {
        base.join(&self.input)
    }

    /// Output path anchored at `base`.
    pub fn output_path(&self, base: &Path) -> PathBuf {
        base.join(&self.output)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "kiln.toml")
    }
}

impl Config {
    /// Parse a kiln.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?;

    let generator = &config.generator;
    for (key, value) in [
        ("enum_module", &generator.enum_module),
        ("decorator_module", &generator.decorator_module),
    ] {
        if value.trim().is_empty() {
            let span = find_toml_key_span(content, key);
            return Err(source_ctx.validation_error(format!("`{}` cannot be empty", key), span));
        }
    }
    if generator.input.as_os_str().is_empty() {
        let span = find_toml_key_span(content, "input");
        return Err(source_ctx.validation_error("`input` cannot be empty", span));
    }

    Ok(config)
}

fn find_toml_key_span(src: &str, key: &str) -> Option<miette::SourceSpan> {
    src.lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find(|(_, line)| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|(start, line)| {
            let indent = line.len() - line.trim_start().len();
            miette::SourceSpan::from((start + indent, key.len()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_str(
            r#"
            [generator]
            input = "schema.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.generator, GeneratorConfig::new("schema.json"));
        assert_eq!(config.generator.enum_module, "@prisma/client");
        assert_eq!(config.generator.decorator_module, "@nestjs/swagger");
        assert_eq!(config.generator.layout, Layout::Flat);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str(
            r#"
            [generator]
            input = "prisma/schema.json"
            output = "src/models"
            layout = "nested"
            swagger = true
            enum_module = "../enums"
            decorator_module = "@acme/docs"
            dry_run = true
            "#,
        )
        .unwrap();

        let generator = config.generator;
        assert_eq!(generator.output, PathBuf::from("src/models"));
        assert_eq!(generator.layout, Layout::Nested);
        assert!(generator.swagger);
        assert!(generator.dry_run);
        assert_eq!(generator.enum_module, "../enums");
        assert_eq!(generator.decorator_module, "@acme/docs");
    }

    #[test]
    fn test_unknown_layout_is_parse_error() {
        let err = Config::from_str(
            r#"
            [generator]
            input = "schema.json"
            layout = "tree"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_str(
            r#"
            [generator]
            input = "schema.json"
            colour = "blue"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_empty_module_is_rejected() {
        let src = "[generator]\ninput = \"schema.json\"\nenum_module = \"\"\n";
        let err = Config::from_str(src).unwrap_err();
        match *err {
            Error::Validation { span, .. } => {
                let span = span.expect("span should point at the key");
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "enum_module");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_paths_anchor_at_base() {
        let generator = GeneratorConfig::new("schema.json");
        let base = Path::new("/project");
        assert_eq!(generator.input_path(base), PathBuf::from("/project/schema.json"));
        assert_eq!(generator.output_path(base), PathBuf::from("/project/generated"));
    }
}
