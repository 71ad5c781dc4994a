//! TypeScript decorator rendering for tags.

use kiln_codegen::ir::{Tag, TagArg, TagValue};

/// A decorator invocation such as `@ApiProperty({ type: Number })`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    name: String,
    args: Vec<String>,
}

impl Decorator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn from_tag(tag: &Tag) -> Self {
        tag.args()
            .iter()
            .fold(Self::new(tag.name()), |decorator, arg| {
                decorator.arg(render_arg(arg))
            })
    }

    /// Append a raw argument expression.
    pub fn arg(mut self, expr: impl Into<String>) -> Self {
        self.args.push(expr.into());
        self
    }

    pub fn build(&self) -> String {
        format!("@{}({})", self.name, self.args.join(", "))
    }
}

fn render_arg(arg: &TagArg) -> String {
    match arg {
        TagArg::Ident(name) => name.clone(),
        TagArg::Object(props) if props.is_empty() => "{}".to_string(),
        TagArg::Object(props) => {
            let props: Vec<_> = props
                .iter()
                .map(|(key, value)| format!("{}: {}", key, render_value(value)))
                .collect();
            format!("{{ {} }}", props.join(", "))
        }
    }
}

fn render_value(value: &TagValue) -> String {
    match value {
        TagValue::Bool(b) => b.to_string(),
        TagValue::Ident(name) => name.clone(),
        TagValue::Str(s) => format!("\"{}\"", escape(s)),
        TagValue::Lazy(name) => format!("() => {}", name),
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
