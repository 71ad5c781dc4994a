//! Output files and cross-file import resolution.
//!
//! - [`ImportRecord`] / [`ImportList`] - Merge-on-insert import tracking
//! - [`relative_module_path`] / [`PathResolver`] - Module specifiers between files
//! - [`Placement`] - Output locations ([`FlatPlacement`], [`NestedPlacement`])
//! - [`OutputFile`] - One class file through registration, resolution and rendering
//! - [`Batch`] - Every output file of a run

mod batch;
mod class_file;
mod imports;
mod paths;
mod placement;

pub use batch::Batch;
pub use class_file::OutputFile;
pub use imports::{ImportList, ImportRecord, PLACEHOLDER_PREFIX, placeholder_origin};
pub use paths::{PathResolver, normalize, relative_module_path};
pub use placement::{FlatPlacement, Location, NestedPlacement, Placement, placement_for};
