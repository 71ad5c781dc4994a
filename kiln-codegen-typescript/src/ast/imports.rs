//! Named ES module imports.

use std::fmt;

use kiln_codegen::generation::ImportRecord;

/// `import { A, B } from "origin";`
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    /// Symbols come out in the order the record collected them.
    pub fn from_record(record: &ImportRecord) -> Self {
        Self {
            from: record.origin().to_string(),
            named: record.symbols().map(str::to_string).collect(),
        }
    }

    pub fn statement(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.named.is_empty() {
            return write!(f, "import \"{}\";", self.from);
        }
        write!(f, "import {{ {} }} from \"{}\";", self.named.join(", "), self.from)
    }
}
