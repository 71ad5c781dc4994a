//! Output locations for generated files.

use std::path::{Path, PathBuf};

use kiln_core::to_kebab_case;
use kiln_schema::Layout;

use crate::ir::Entity;

/// Where a generated file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub dir: PathBuf,
    pub filename: String,
}

impl Location {
    pub fn new(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Assigns each entity its output location.
pub trait Placement {
    fn place(&self, entity: &Entity) -> Location;
}

/// Every file directly in the output directory: `<dir>/<kebab>.<ext>`.
#[derive(Debug, Clone)]
pub struct FlatPlacement {
    dir: PathBuf,
    extension: String,
}

impl FlatPlacement {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }
}

impl Placement for FlatPlacement {
    fn place(&self, entity: &Entity) -> Location {
        let name = to_kebab_case(entity.name());
        Location::new(&self.dir, format!("{}.{}", name, self.extension))
    }
}

/// One directory per entity: `<dir>/<kebab>/<kebab>.entity.<ext>`.
#[derive(Debug, Clone)]
pub struct NestedPlacement {
    dir: PathBuf,
    extension: String,
}

impl NestedPlacement {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }
}

impl Placement for NestedPlacement {
    fn place(&self, entity: &Entity) -> Location {
        let name = to_kebab_case(entity.name());
        Location::new(
            self.dir.join(&name),
            format!("{}.entity.{}", name, self.extension),
        )
    }
}

/// Built-in placement for `layout`.
pub fn placement_for(layout: Layout, dir: &Path, extension: &str) -> Box<dyn Placement> {
    match layout {
        Layout::Flat => Box::new(FlatPlacement::new(dir, extension)),
        Layout::Nested => Box::new(NestedPlacement::new(dir, extension)),
    }
}
