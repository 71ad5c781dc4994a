//! Indentation unit for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    /// Two spaces, the prevailing TypeScript style.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Write `depth` levels of indentation into `out`.
    pub fn write_to(&self, out: &mut String, depth: usize) {
        match self {
            Self::Spaces(width) => out.extend(std::iter::repeat_n(' ', width * depth)),
            Self::Tab => out.extend(std::iter::repeat_n('\t', depth)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indent(indent: Indent, depth: usize) -> String {
        let mut out = String::new();
        indent.write_to(&mut out, depth);
        out
    }

    #[test]
    fn test_write_to() {
        assert_eq!(indent(Indent::Spaces(2), 2), "    ");
        assert_eq!(indent(Indent::Spaces(4), 1), "    ");
        assert_eq!(indent(Indent::Tab, 2), "\t\t");
        assert_eq!(indent(Indent::TYPESCRIPT, 0), "");
    }
}
