//! All output files of one generation run.

use std::{collections::HashMap, path::PathBuf};

use indexmap::IndexMap;
use kiln_core::File;

use super::{OutputFile, PathResolver, Placement};
use crate::{GenerateError, ir::Entity, language::FileTemplate};

/// Output files keyed by entity name, in document order.
///
/// Import resolution is a batch-wide step: every file must be placed before
/// any deferred import can be rewritten.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    files: IndexMap<String, OutputFile>,
}

impl Batch {
    pub fn new(entities: impl IntoIterator<Item = Entity>) -> Self {
        let files = entities
            .into_iter()
            .map(|entity| (entity.name().to_string(), OutputFile::new(entity)))
            .collect();
        Self { files }
    }

    /// Place every file. Two entities landing on the same path is fatal,
    /// since the second write would replace the first class.
    pub fn place_all(&mut self, placement: &dyn Placement) -> Result<(), GenerateError> {
        let mut taken: HashMap<PathBuf, &str> = HashMap::new();
        for (name, file) in self.files.iter_mut() {
            let path = file.place(placement).path();
            if let Some(first) = taken.insert(path.clone(), name) {
                return Err(GenerateError::PathCollision {
                    path,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Phase 1 for every file.
    pub fn register_all(&mut self, enum_module: &str) {
        for file in self.files.values_mut() {
            file.register_imports(enum_module);
        }
    }

    /// Placed path of every file. Fails if any file is unplaced.
    pub fn locations(&self) -> Result<HashMap<String, PathBuf>, GenerateError> {
        self.files
            .iter()
            .map(|(name, file)| {
                file.path()
                    .map(|path| (name.clone(), path))
                    .ok_or_else(|| GenerateError::Unplaced {
                        entity: name.clone(),
                    })
            })
            .collect()
    }

    /// Phase 2 for every file. Returns the number of rewritten records.
    pub fn resolve_all(&mut self, resolver: &PathResolver) -> Result<usize, GenerateError> {
        let locations = self.locations()?;
        let mut total = 0;
        for file in self.files.values_mut() {
            total += file.resolve_imports(&locations, resolver)?;
        }
        Ok(total)
    }

    /// Render every file. Nothing is written.
    pub fn render_all(&self, template: &dyn FileTemplate) -> Result<Vec<File>, GenerateError> {
        self.files
            .values()
            .map(|file| {
                let content = file.render(template)?;
                let path = file.path().ok_or_else(|| GenerateError::Unplaced {
                    entity: file.entity().name().to_string(),
                })?;
                Ok(File::new(path, content))
            })
            .collect()
    }

    pub fn get(&self, entity: &str) -> Option<&OutputFile> {
        self.files.get(entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputFile> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use kiln_core::WriteMode;
    use kiln_schema::{Document, RawField, RawModel};

    use super::*;
    use crate::{
        convert::{ConvertOptions, convert_models},
        generation::{FlatPlacement, ImportRecord, NestedPlacement},
        language::IMPORTS_PLACEHOLDER,
        testing::{TestMapper, blog},
    };

    struct Imports;

    impl FileTemplate for Imports {
        fn body(&self, _entity: &Entity) -> String {
            IMPORTS_PLACEHOLDER.to_string()
        }

        fn render_import(&self, record: &ImportRecord) -> String {
            let symbols: Vec<_> = record.symbols().collect();
            format!("{} <- {}", symbols.join(","), record.origin())
        }
    }

    fn batch(document: &Document) -> Batch {
        Batch::new(convert_models(document, &ConvertOptions::default(), &TestMapper).unwrap())
    }

    #[test]
    fn test_user_post_flat() {
        let mut batch = batch(&blog());
        batch.place_all(&FlatPlacement::new("out", "ts")).unwrap();
        batch.register_all("@prisma/client");
        assert_eq!(batch.resolve_all(&PathResolver::new("/")).unwrap(), 2);

        let user = batch.get("User").unwrap();
        assert!(user.imports().has_symbol("./post", "Post"));
        let post = batch.get("Post").unwrap();
        assert!(post.imports().has_symbol("./user", "User"));

        let files = batch.render_all(&Imports).unwrap();
        assert_eq!(files[0].path(), std::path::Path::new("out/user.ts"));
        assert_eq!(
            files[0].content(),
            "Post <- ./post\nRole <- @prisma/client\nApiExtraModels <- @nestjs/swagger"
        );
        assert_eq!(
            files[1].content(),
            "User <- ./user\nApiExtraModels <- @nestjs/swagger"
        );
    }

    #[test]
    fn test_user_post_nested() {
        let mut batch = batch(&blog());
        batch.place_all(&NestedPlacement::new("out", "ts")).unwrap();
        batch.register_all("@prisma/client");
        batch.resolve_all(&PathResolver::new("/")).unwrap();

        let user = batch.get("User").unwrap();
        assert!(user.imports().has_symbol("../post/post.entity", "Post"));
    }

    #[test]
    fn test_resolution_requires_placement() {
        let mut batch = batch(&blog());
        batch.register_all("@prisma/client");

        assert!(matches!(
            batch.resolve_all(&PathResolver::new("/")),
            Err(GenerateError::Unplaced { .. })
        ));
    }

    #[test]
    fn test_missing_target() {
        let user = RawModel::new(
            "User",
            [RawField::relation("posts", "Post", "PostToUser").list()],
        );
        let entity = crate::convert::convert_model(&user, &ConvertOptions::default(), &TestMapper)
            .unwrap();
        let mut batch = Batch::new([entity]);
        batch.place_all(&FlatPlacement::new("out", "ts")).unwrap();
        batch.register_all("@prisma/client");

        assert_eq!(
            batch.resolve_all(&PathResolver::new("/")).unwrap_err(),
            GenerateError::MissingTarget {
                entity: "User".into(),
                target: "Post".into()
            }
        );
    }

    #[test]
    fn test_colliding_paths_are_fatal() {
        let document = Document::new([
            RawModel::new("UserProfile", [RawField::scalar("id", "Int")]),
            RawModel::new("user_profile", [RawField::scalar("label", "String")]),
        ]);
        let mut batch = batch(&document);

        assert_eq!(
            batch.place_all(&FlatPlacement::new("out", "ts")).unwrap_err(),
            GenerateError::PathCollision {
                path: PathBuf::from("out/user-profile.ts"),
                first: "UserProfile".into(),
                second: "user_profile".into(),
            }
        );
    }

    #[test]
    fn test_rendered_files_reach_the_sink() {
        let dir = tempfile::tempdir().unwrap();
        let mut batch = batch(&blog());
        batch.place_all(&FlatPlacement::new(dir.path(), "ts")).unwrap();
        batch.register_all("@prisma/client");
        batch.resolve_all(&PathResolver::new(dir.path())).unwrap();

        for file in batch.render_all(&Imports).unwrap() {
            file.write(WriteMode::Persist).unwrap();
        }

        let post = std::fs::read_to_string(dir.path().join("post.ts")).unwrap();
        assert!(post.starts_with("User <- ./user"));
    }
}
