use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use kiln_codegen_typescript::Generator;
use kiln_schema::Document;

use super::{Project, UnwrapOrExit};
use crate::reports::{CheckReport, ModelSummary, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let Project { config, root } = Project::load(&self.config, None)?;
        let document = Document::from_file(config.input_path(&root)).unwrap_or_exit();
        tracing::debug!(models = document.models.len(), "document loaded");

        let models = document
            .models
            .iter()
            .map(|model| ModelSummary {
                name: model.name.clone(),
                fields: model.fields.len(),
                relations: model.fields.iter().filter(|f| f.is_relation()).count(),
            })
            .collect();

        // Runs every phase so resolution problems surface too
        let ctx = Generator::pipeline()
            .run(document, config, root)
            .wrap_err("Validation failed")?;

        let report = CheckReport {
            config_path: self.config.clone(),
            diagnostics: ctx.diagnostics,
            models,
        };
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
