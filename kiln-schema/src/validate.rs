//! Structural validation of a parsed schema document.

use std::collections::{HashMap, HashSet};

use kiln_core::{to_kebab_case, to_pascal_case};
use miette::SourceSpan;

use crate::{Document, RawField, RawModel, Result, error::SourceContext};

/// TypeScript reserved words that cannot name a generated class.
pub(crate) const TS_RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield",
];

pub(crate) fn validate_document(document: &Document, ctx: &SourceContext) -> Result<()> {
    let mut seen = HashSet::new();
    for model in &document.models {
        if !seen.insert(model.name.as_str()) {
            let span = find_value_span(ctx.src(), "name", &model.name, 1);
            return Err(ctx.duplicate_error("model", &model.name, span));
        }
        validate_model_name(&model.name, ctx)?;
    }
    validate_generated_names(document, ctx)?;

    for model in &document.models {
        validate_fields(model, document, ctx)?;
    }
    Ok(())
}

fn validate_model_name(name: &str, ctx: &SourceContext) -> Result<()> {
    let span = || find_value_span(ctx.src(), "name", name, 0);

    if TS_RESERVED.contains(&name) {
        return Err(ctx.invalid_identifier_error(
            name,
            "model",
            "name is a TypeScript reserved word",
            span(),
        ));
    }
    if let Some(reason) = validate_identifier(name) {
        return Err(ctx.invalid_identifier_error(name, "model", reason, span()));
    }
    Ok(())
}

/// Distinct model names must not map to the same class or file name.
fn validate_generated_names(document: &Document, ctx: &SourceContext) -> Result<()> {
    let mut classes: HashMap<String, &str> = HashMap::new();
    let mut files: HashMap<String, &str> = HashMap::new();

    for model in &document.models {
        let name = model.name.as_str();
        for (taken, generated) in [
            (&mut classes, to_pascal_case(name)),
            (&mut files, to_kebab_case(name)),
        ] {
            if let Some(first) = taken.get(&generated) {
                let span = find_value_span(ctx.src(), "name", name, 0);
                return Err(ctx.name_collision_error(*first, name, generated, span));
            }
            taken.insert(generated, name);
        }
    }
    Ok(())
}

fn validate_fields(model: &RawModel, document: &Document, ctx: &SourceContext) -> Result<()> {
    let mut seen = HashSet::new();

    for field in &model.fields {
        let span = || find_value_span(ctx.src(), "name", &field.name, 0);

        if !seen.insert(field.name.as_str()) {
            let span = find_value_span(ctx.src(), "name", &field.name, 1);
            return Err(ctx.duplicate_error(
                format!("field in model '{}'", model.name),
                &field.name,
                span,
            ));
        }

        if let Some(reason) = validate_identifier(&field.name) {
            let context = format!("field in model '{}'", model.name);
            return Err(ctx.invalid_identifier_error(&field.name, context, reason, span()));
        }

        let Some(base_type) = field.base_type() else {
            return Err(ctx.missing_type_error(&model.name, &field.name, span()));
        };

        if field.is_enum() || field.is_relation() {
            if let Some(reason) = validate_identifier(base_type) {
                let span = find_value_span(ctx.src(), "type", base_type, 0);
                let context = format!("type of field '{}.{}'", model.name, field.name);
                return Err(ctx.invalid_identifier_error(base_type, context, reason, span));
            }
        }

        if is_dangling_relation(field, document) {
            let span = find_value_span(ctx.src(), "type", base_type, 0);
            return Err(ctx.unknown_relation_error(&model.name, &field.name, base_type, span));
        }
    }
    Ok(())
}

fn is_dangling_relation(field: &RawField, document: &Document) -> bool {
    field.is_relation()
        && field
            .base_type()
            .is_some_and(|target| !document.has_model(target))
}

/// Validate that a name is a valid TypeScript identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, `_` or `$`"),
        None => return Some("name cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        None
    } else {
        Some("name must contain only letters, numbers, `_` and `$`")
    }
}

/// Find the span of the `nth` JSON string value `value` stored under `key`.
///
/// Matches `"key": "value"` with any whitespace around the colon.
pub(crate) fn find_value_span(
    src: &str,
    key: &str,
    value: &str,
    nth: usize,
) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", value);
    let key_pattern = format!("\"{}\"", key);

    src.match_indices(&needle)
        .filter(|(pos, _)| {
            let before = src[..*pos].trim_end();
            before
                .strip_suffix(':')
                .is_some_and(|rest| rest.trim_end().ends_with(&key_pattern))
        })
        .nth(nth)
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
}
