//! Just enough TypeScript syntax to emit decorated classes.

mod class;
mod decorators;
mod imports;

pub use class::{Class, Property};
pub use decorators::Decorator;
pub use imports::Import;
