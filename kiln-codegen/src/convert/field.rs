//! Field conversion.

use indexmap::IndexMap;
use kiln_core::{ScalarType, to_pascal_case};
use kiln_schema::RawField;

use super::{ConvertOptions, FIELD_DOC_TAG};
use crate::{
    GenerateError,
    ir::{Field, Tag, TagArg, TagValue},
    language::TypeMapper,
};

/// Converts the fields of one model.
pub struct FieldConverter<'a> {
    model: &'a str,
    options: &'a ConvertOptions,
    mapper: &'a dyn TypeMapper,
}

impl<'a> FieldConverter<'a> {
    pub fn new(model: &'a str, options: &'a ConvertOptions, mapper: &'a dyn TypeMapper) -> Self {
        Self {
            model,
            options,
            mapper,
        }
    }

    /// Convert one raw field.
    ///
    /// Scalars map through the [`TypeMapper`]; relations resolve to the
    /// related class name; enums keep their name. Lists get the mapper's list
    /// marker in every case.
    pub fn convert(&self, raw: &RawField) -> Result<Field, GenerateError> {
        let base = raw
            .base_type()
            .ok_or_else(|| GenerateError::MissingBaseType {
                model: self.model.to_string(),
                field: raw.name.clone(),
            })?;

        let ty = match ScalarType::parse(base) {
            Some(scalar) => self.mapper.map_scalar(scalar).to_string(),
            None if raw.is_relation() => to_pascal_case(base),
            None => base.to_string(),
        };
        let ty = if raw.is_list {
            self.mapper.map_list(&ty)
        } else {
            ty
        };

        let mut tags = Vec::new();
        if self.options.document_fields {
            tags.push(self.documentation_tag(raw, base));
        }

        Ok(Field {
            name: raw.name.clone(),
            ty,
            kind: raw.kind,
            tags,
        })
    }

    /// Describe the field's shape for API documentation.
    fn documentation_tag(&self, raw: &RawField, base: &str) -> Tag {
        let mut props = IndexMap::new();

        if let Some(scalar) = ScalarType::parse(base) {
            props.insert("type".to_string(), TagValue::Ident(self.mapper.doc_type(scalar)));
            if raw.is_list {
                props.insert("isArray".to_string(), TagValue::Bool(true));
            }
        } else {
            if raw.is_list {
                props.insert("isArray".to_string(), TagValue::Bool(true));
            }
            if raw.is_relation() {
                props.insert("type".to_string(), TagValue::Lazy(to_pascal_case(base)));
            } else if raw.is_enum() {
                props.insert("enum".to_string(), TagValue::Ident(base.to_string()));
                props.insert("enumName".to_string(), TagValue::Str(base.to_string()));
            }
        }

        Tag::new(FIELD_DOC_TAG, &self.options.decorator_module).arg(TagArg::Object(props))
    }
}

#[cfg(test)]
mod tests {
    use kiln_schema::FieldKind;

    use super::*;
    use crate::testing::TestMapper;

    fn convert(raw: &RawField, options: &ConvertOptions) -> Result<Field, GenerateError> {
        FieldConverter::new("User", options, &TestMapper).convert(raw)
    }

    #[test]
    fn test_scalars_follow_mapping_table() {
        let options = ConvertOptions::default();
        for scalar in ScalarType::ALL {
            let field = convert(&RawField::scalar("value", scalar.as_str()), &options).unwrap();
            assert_eq!(field.ty(), TestMapper.map_scalar(scalar));

            let list = convert(&RawField::scalar("values", scalar.as_str()).list(), &options)
                .unwrap();
            assert_eq!(list.ty(), format!("{}[]", TestMapper.map_scalar(scalar)));
        }
    }

    #[test]
    fn test_relation_uses_class_name() {
        let options = ConvertOptions::default();

        let single = convert(&RawField::relation("author", "user_account", "A"), &options).unwrap();
        assert_eq!(single.ty(), "UserAccount");
        assert_eq!(single.kind(), FieldKind::Object);

        let many = convert(&RawField::relation("posts", "Post", "B").list(), &options).unwrap();
        assert_eq!(many.ty(), "Post[]");
    }

    #[test]
    fn test_enum_keeps_its_name() {
        let options = ConvertOptions::default();
        let role = convert(&RawField::enumeration("role", "Role"), &options).unwrap();
        assert_eq!(role.ty(), "Role");

        let roles = convert(&RawField::enumeration("roles", "Role").list(), &options).unwrap();
        assert_eq!(roles.ty(), "Role[]");
    }

    #[test]
    fn test_missing_base_type() {
        let mut raw = RawField::scalar("id", "Int");
        raw.base_type = None;

        let err = convert(&raw, &ConvertOptions::default()).unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingBaseType {
                model: "User".into(),
                field: "id".into()
            }
        );
    }

    #[test]
    fn test_no_tags_without_documentation() {
        let field = convert(&RawField::scalar("id", "Int"), &ConvertOptions::default()).unwrap();
        assert!(field.tags().is_empty());
    }

    #[test]
    fn test_scalar_documentation_tag() {
        let options = ConvertOptions::documented();
        let field = convert(&RawField::scalar("createdAt", "DateTime"), &options).unwrap();

        let tag = &field.tags()[0];
        assert_eq!(tag.name(), "ApiProperty");
        assert_eq!(tag.origin(), "@nestjs/swagger");
        assert_eq!(tag.property("type"), Some(&TagValue::Ident("Date".into())));
        assert_eq!(tag.property("isArray"), None);
    }

    #[test]
    fn test_relation_documentation_tag_is_lazy() {
        let options = ConvertOptions::documented();
        let field = convert(&RawField::relation("posts", "Post", "PostToUser").list(), &options)
            .unwrap();

        let tag = &field.tags()[0];
        assert_eq!(tag.property("isArray"), Some(&TagValue::Bool(true)));
        assert_eq!(tag.property("type"), Some(&TagValue::Lazy("Post".into())));
    }

    #[test]
    fn test_enum_documentation_tag() {
        let options = ConvertOptions::documented();
        let field = convert(&RawField::enumeration("role", "Role"), &options).unwrap();

        let tag = &field.tags()[0];
        assert_eq!(tag.property("enum"), Some(&TagValue::Ident("Role".into())));
        assert_eq!(tag.property("enumName"), Some(&TagValue::Str("Role".into())));
        assert_eq!(tag.property("type"), None);
    }

    #[test]
    fn test_custom_decorator_module() {
        let options = ConvertOptions {
            document_fields: true,
            decorator_module: "@acme/docs".into(),
        };
        let field = convert(&RawField::scalar("id", "Int"), &options).unwrap();
        assert_eq!(field.tags()[0].origin(), "@acme/docs");
    }
}
