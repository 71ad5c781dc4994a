//! Generate command report.

use std::path::PathBuf;

use kiln_codegen_typescript::PreviewFile;

use super::output::{Line, Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning diagnostics from the pipeline, already formatted.
    pub warnings: Vec<String>,
    pub output_dir: PathBuf,
    /// Files written to disk.
    pub written: Vec<PathBuf>,
    /// Files rendered in dry-run mode.
    pub previewed: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.line(Line::Warning(warning));
        }
        if !self.warnings.is_empty() {
            out.line(Line::Blank);
        }

        if !self.previewed.is_empty() {
            for file in &self.previewed {
                out.line(Line::Rule(&file.path.display().to_string()));
                out.line(Line::Text(&file.content));
            }
            out.line(Line::Rule("Summary"));
            out.line(Line::Text(&format!(
                "{} {} would be generated",
                self.previewed.len(),
                plural(self.previewed.len(), "file")
            )));
            return;
        }

        out.line(Line::Heading(&format!(
            "Generated {} {} in {}",
            self.written.len(),
            plural(self.written.len(), "file"),
            self.output_dir.display()
        )));
        for path in &self.written {
            let shown = path.strip_prefix(&self.output_dir).unwrap_or(path);
            out.line(Line::Added(&shown.display().to_string()));
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
