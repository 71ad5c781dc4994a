//! File templates for generated TypeScript sources.

mod class_ts;

pub use class_ts::ClassTs;
