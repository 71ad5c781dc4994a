//! TypeScript class generator for kiln.
//!
//! This crate renders the entities of a schema document as TypeScript
//! classes, one file per model, with NestJS Swagger decorators when
//! documentation is enabled.
//!
//! # Usage
//!
//! This crate is used internally by the `kiln` CLI tool. You typically don't need
//! to use it directly.
//!
//! ```ignore
//! use kiln_codegen_typescript::{Generator, LanguageCodegen};
//! use kiln_core::WriteMode;
//! use kiln_schema::{Config, Document};
//!
//! let config = Config::from_file("kiln.toml")?.generator;
//! let document = Document::from_file(&config.input)?;
//! let generator = Generator::from_document(document, config, ".")?;
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(WriteMode::Persist)?;
//! ```
//!
//! # Generated Output
//!
//! ```text
//! import { Post } from "./post";
//! import { Role } from "@prisma/client";
//! import { ApiExtraModels, ApiProperty } from "@nestjs/swagger";
//!
//! @ApiExtraModels(User)
//! export class User {
//!   @ApiProperty({ type: Number })
//!   id: number;
//!
//!   @ApiProperty({ enum: Role, enumName: "Role" })
//!   role: Role;
//!
//!   @ApiProperty({ isArray: true, type: () => Post })
//!   posts: Post[];
//! }
//! ```

mod generator;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Class, Decorator, Import, Property};
pub use generator::Generator;
pub use kiln_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;
