//! One generated class file and its import resolution.

use std::{collections::HashMap, path::PathBuf};

use kiln_core::to_pascal_case;

use super::{ImportList, Location, PathResolver, Placement, placeholder_origin};
use crate::{
    GenerateError,
    ir::Entity,
    language::{FileTemplate, IMPORTS_PLACEHOLDER},
};

/// An entity on its way to becoming a source file.
///
/// Lifecycle: [`place`](Self::place), then
/// [`register_imports`](Self::register_imports), then
/// [`resolve_imports`](Self::resolve_imports) once every file of the batch
/// is placed, then [`render`](Self::render).
#[derive(Debug, Clone)]
pub struct OutputFile {
    entity: Entity,
    location: Option<Location>,
    imports: ImportList,
}

impl OutputFile {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            location: None,
            imports: ImportList::new(),
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.location.as_ref().map(Location::path)
    }

    /// Assign the location. A file is placed at most once; later calls keep
    /// the first location.
    pub fn place(&mut self, placement: &dyn Placement) -> &Location {
        let entity = &self.entity;
        self.location.get_or_insert_with(|| placement.place(entity))
    }

    pub fn imports(&self) -> &ImportList {
        &self.imports
    }

    /// Register every import the class needs.
    ///
    /// Order: related entities (deferred), enums, entity tags, then field
    /// tags in field order. Registering twice changes nothing.
    pub fn register_imports(&mut self, enum_module: &str) {
        for relation in self.entity.relations() {
            self.imports
                .register(to_pascal_case(relation), &placeholder_origin(relation));
        }
        for name in self.entity.enums() {
            self.imports.register(name, enum_module);
        }
        for tag in self.entity.tags() {
            self.imports.register(tag.name(), tag.origin());
        }
        for field in self.entity.fields() {
            for tag in field.tags() {
                self.imports.register(tag.name(), tag.origin());
            }
        }
    }

    /// Rewrite deferred imports to paths relative to this file.
    ///
    /// `locations` maps entity names to their placed file paths. Returns the
    /// number of rewritten records; running it again returns 0.
    pub fn resolve_imports(
        &mut self,
        locations: &HashMap<String, PathBuf>,
        resolver: &PathResolver,
    ) -> Result<usize, GenerateError> {
        let entity = self.entity.name();
        let from = self
            .location
            .as_ref()
            .map(Location::path)
            .ok_or_else(|| GenerateError::Unplaced {
                entity: entity.to_string(),
            })?;

        let count = self.imports.rewrite_placeholders(|target| {
            locations
                .get(target)
                .map(|to| resolver.resolve(&from, to))
                .ok_or_else(|| GenerateError::MissingTarget {
                    entity: entity.to_string(),
                    target: target.to_string(),
                })
        })?;

        if count > 0 {
            tracing::debug!(entity, count, "resolved imports");
        }
        Ok(count)
    }

    /// Render the file text.
    ///
    /// The import statements replace [`IMPORTS_PLACEHOLDER`] in the
    /// template body. A file without imports starts at the body.
    pub fn render(&self, template: &dyn FileTemplate) -> Result<String, GenerateError> {
        let entity = self.entity.name();
        if self.location.is_none() {
            return Err(GenerateError::Unplaced {
                entity: entity.to_string(),
            });
        }
        if let Some(record) = self.imports.unresolved().next() {
            return Err(GenerateError::UnresolvedImport {
                entity: entity.to_string(),
                origin: record.origin().to_string(),
            });
        }

        let body = template.body(&self.entity);
        if !body.contains(IMPORTS_PLACEHOLDER) {
            return Err(GenerateError::MissingPlaceholder {
                entity: entity.to_string(),
            });
        }

        if self.imports.is_empty() {
            let body = body.replacen(IMPORTS_PLACEHOLDER, "", 1);
            return Ok(body.trim_start_matches('\n').to_string());
        }

        let imports = self
            .imports
            .iter()
            .map(|record| template.render_import(record))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(body.replacen(IMPORTS_PLACEHOLDER, &imports, 1))
    }
}
