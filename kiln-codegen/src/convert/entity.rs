//! Entity conversion.

use indexmap::IndexSet;
use kiln_schema::{Document, RawModel};

use super::{ConvertOptions, ENTITY_TAG, FieldConverter};
use crate::{
    GenerateError,
    ir::{Entity, Tag, TagArg},
    language::TypeMapper,
};

/// Convert one raw model into an entity.
///
/// Relation targets are collected without duplicates and without the model
/// itself; a self-relation needs no import. Relation targets are not checked
/// against other models here, see [`convert_models`].
pub fn convert_model(
    model: &RawModel,
    options: &ConvertOptions,
    mapper: &dyn TypeMapper,
) -> Result<Entity, GenerateError> {
    let converter = FieldConverter::new(&model.name, options, mapper);
    let fields = model
        .fields
        .iter()
        .map(|raw| converter.convert(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut relations = IndexSet::new();
    let mut enums = IndexSet::new();
    for raw in &model.fields {
        let Some(base) = raw.base_type() else {
            continue;
        };
        if raw.is_relation() {
            if base != model.name {
                relations.insert(base.to_string());
            }
        } else if raw.is_enum() {
            enums.insert(base.to_string());
        }
    }

    let class_name = kiln_core::to_pascal_case(&model.name);
    let tags = vec![Tag::new(ENTITY_TAG, &options.decorator_module).arg(TagArg::Ident(class_name))];

    tracing::debug!(
        entity = %model.name,
        fields = fields.len(),
        relations = relations.len(),
        enums = enums.len(),
        "converted model"
    );

    Ok(Entity {
        name: model.name.clone(),
        fields,
        relations,
        enums,
        tags,
    })
}

/// Convert every model of a document.
///
/// Fails on the first malformed model, or when a relation points at a model
/// that is not part of the document.
pub fn convert_models(
    document: &Document,
    options: &ConvertOptions,
    mapper: &dyn TypeMapper,
) -> Result<Vec<Entity>, GenerateError> {
    for model in &document.models {
        for raw in model.fields.iter().filter(|f| f.is_relation()) {
            if let Some(target) = raw.base_type()
                && !document.has_model(target)
            {
                return Err(GenerateError::UnknownRelation {
                    model: model.name.clone(),
                    field: raw.name.clone(),
                    target: target.to_string(),
                });
            }
        }
    }

    document
        .models
        .iter()
        .map(|model| convert_model(model, options, mapper))
        .collect()
}

#[cfg(test)]
mod tests {
    use kiln_schema::RawField;

    use super::*;
    use crate::{
        ir::TagValue,
        testing::{TestMapper, blog},
    };

    #[test]
    fn test_blog_entities() {
        let entities = convert_models(&blog(), &ConvertOptions::default(), &TestMapper).unwrap();
        let user = &entities[0];
        let post = &entities[1];

        assert_eq!(user.relations().collect::<Vec<_>>(), ["Post"]);
        assert_eq!(user.enums().collect::<Vec<_>>(), ["Role"]);
        assert_eq!(user.field("posts").unwrap().ty(), "Post[]");

        assert_eq!(post.relations().collect::<Vec<_>>(), ["User"]);
        assert_eq!(post.enums().count(), 0);
        assert_eq!(post.field("author").unwrap().ty(), "User");
    }

    #[test]
    fn test_self_relation_is_not_a_dependency() {
        let node = RawModel::new(
            "Node",
            [
                RawField::relation("parent", "Node", "Tree"),
                RawField::relation("children", "Node", "Tree").list(),
            ],
        );
        let entity = convert_model(&node, &ConvertOptions::default(), &TestMapper).unwrap();

        assert_eq!(entity.relations().count(), 0);
        assert!(!entity.relates_to("Node"));
        assert_eq!(entity.field("children").unwrap().ty(), "Node[]");
    }

    #[test]
    fn test_relations_and_enums_are_distinct() {
        let model = RawModel::new(
            "Post",
            [
                RawField::relation("author", "User", "Author"),
                RawField::relation("editor", "User", "Editor"),
                RawField::enumeration("status", "Status"),
                RawField::enumeration("previousStatus", "Status"),
            ],
        );
        let entity = convert_model(&model, &ConvertOptions::default(), &TestMapper).unwrap();

        assert_eq!(entity.relations().collect::<Vec<_>>(), ["User"]);
        assert_eq!(entity.enums().collect::<Vec<_>>(), ["Status"]);
    }

    #[test]
    fn test_entity_tag_is_unconditional() {
        let model = RawModel::new("user_profile", [RawField::scalar("id", "Int")]);
        let entity = convert_model(&model, &ConvertOptions::default(), &TestMapper).unwrap();

        let tag = &entity.tags()[0];
        assert_eq!(tag.name(), "ApiExtraModels");
        assert_eq!(tag.args(), [TagArg::Ident("UserProfile".into())]);
        assert_eq!(entity.class_name(), "UserProfile");
    }

    #[test]
    fn test_field_tags_follow_options() {
        let entities = convert_models(&blog(), &ConvertOptions::documented(), &TestMapper).unwrap();
        let posts = entities[0].field("posts").unwrap();

        assert_eq!(posts.tags().len(), 1);
        assert_eq!(
            posts.tags()[0].property("type"),
            Some(&TagValue::Lazy("Post".into()))
        );
    }

    #[test]
    fn test_unknown_relation_target_aborts_batch() {
        let document = Document::new([RawModel::new(
            "User",
            [RawField::relation("posts", "Post", "PostToUser").list()],
        )]);

        let err = convert_models(&document, &ConvertOptions::default(), &TestMapper).unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnknownRelation {
                model: "User".into(),
                field: "posts".into(),
                target: "Post".into(),
            }
        );
    }

    #[test]
    fn test_missing_base_type_aborts_batch() {
        let mut field = RawField::scalar("id", "Int");
        field.base_type = None;
        let document = Document::new([RawModel::new("User", [field])]);

        let err = convert_models(&document, &ConvertOptions::default(), &TestMapper).unwrap_err();
        assert!(matches!(err, GenerateError::MissingBaseType { .. }));
    }
}
