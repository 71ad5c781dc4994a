//! Decorator metadata carried as plain data.

use indexmap::IndexMap;

/// A property value inside an object argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Bool(bool),
    /// A bare identifier such as `Number` or an enum name.
    Ident(String),
    /// A quoted string literal.
    Str(String),
    /// A deferred reference to another class, evaluated at runtime.
    ///
    /// Keeps forward and cyclic references between generated classes legal.
    Lazy(String),
}

/// One argument of a tag invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagArg {
    /// A bare identifier: `ApiExtraModels(User)`.
    Ident(String),
    /// An object literal: `ApiProperty({ type: Number })`.
    Object(IndexMap<String, TagValue>),
}

/// A unit of decorator metadata attached to an entity or field.
///
/// The core never interprets tags; it only imports `name` from `origin`
/// and hands the tag to the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    origin: String,
    args: Vec<TagArg>,
}

impl Tag {
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: TagArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Symbol imported from [`Tag::origin`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module the symbol is imported from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn args(&self) -> &[TagArg] {
        &self.args
    }

    /// Look up a property of the first object argument.
    pub fn property(&self, key: &str) -> Option<&TagValue> {
        self.args.iter().find_map(|arg| match arg {
            TagArg::Object(props) => props.get(key),
            TagArg::Ident(_) => None,
        })
    }
}
