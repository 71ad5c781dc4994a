use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use kiln_codegen_typescript::{Generator, LanguageCodegen};
use kiln_core::WriteMode;
use kiln_schema::{Document, Layout};

use super::{Project, UnwrapOrExit};
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,

    /// Schema document (overrides kiln.toml setting)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (overrides kiln.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File layout (overrides kiln.toml setting)
    #[arg(long)]
    pub layout: Option<Layout>,

    /// Add Swagger documentation decorators to every field
    #[arg(long)]
    pub swagger: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let Project { mut config, root } = Project::load(&self.config, self.input.as_deref())?;

        if let Some(input) = &self.input {
            config.input = Project::cli_path(input)?;
        }
        if let Some(output) = &self.output {
            config.output = Project::cli_path(output)?;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        config.swagger |= self.swagger;
        config.dry_run |= self.dry_run;

        tracing::debug!(
            input = %config.input_path(&root).display(),
            output = %config.output_path(&root).display(),
            layout = %config.layout,
            "resolved configuration"
        );

        let document = Document::from_file(config.input_path(&root)).unwrap_or_exit();
        let mode = WriteMode::from_dry_run(config.dry_run);
        let output_dir = config.output_path(&root);

        let ctx = Generator::pipeline()
            .run(document, config, root)
            .wrap_err("Pipeline failed")?;

        let warnings = ctx.warnings().map(ToString::to_string).collect();

        let generator = Generator::from_context(ctx)?;
        let result = generator
            .generate(mode)
            .wrap_err("Failed to generate code")?;
        tracing::info!(
            written = result.written.len(),
            previewed = result.previewed.len(),
            "generation finished"
        );

        GenerateReport {
            warnings,
            output_dir,
            written: result.written,
            previewed: result.previewed,
        }
        .render(&mut TerminalOutput::new());

        Ok(())
    }
}
