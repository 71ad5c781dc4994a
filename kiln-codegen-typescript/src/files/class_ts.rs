//! Template for one `<entity>.ts` class file.

use kiln_codegen::{
    builder::CodeBuilder,
    generation::ImportRecord,
    ir::Entity,
    language::{FileTemplate, IMPORTS_PLACEHOLDER},
};

use crate::ast::{Class, Decorator, Import, Property};

/// Renders an entity as an exported, decorated TypeScript class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassTs;

impl ClassTs {
    fn class(entity: &Entity) -> Class {
        let class = entity
            .tags()
            .iter()
            .fold(Class::new(entity.class_name()), |class, tag| {
                class.decorator(Decorator::from_tag(tag))
            });

        entity.fields().iter().fold(class, |class, field| {
            let property = field
                .tags()
                .iter()
                .fold(Property::new(field.name(), field.ty()), |p, tag| {
                    p.decorator(Decorator::from_tag(tag))
                });
            class.property(property)
        })
    }
}

impl FileTemplate for ClassTs {
    fn body(&self, entity: &Entity) -> String {
        let builder = CodeBuilder::typescript().line(IMPORTS_PLACEHOLDER).blank();
        Self::class(entity).render(builder).build()
    }

    fn render_import(&self, record: &ImportRecord) -> String {
        Import::from_record(record).statement()
    }
}
