//! TypeScript class builder.

use kiln_codegen::builder::CodeBuilder;

use super::Decorator;

/// A property declaration inside a class body.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub decorators: Vec<Decorator>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            decorators: Vec::new(),
        }
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }
}

/// Builder for exported TypeScript classes.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    decorators: Vec<Decorator>,
    properties: Vec<Property>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Render the class to a CodeBuilder.
    ///
    /// Decorated properties are separated by a blank line.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let header = format!("export class {} {{", self.name);
        builder
            .each(&self.decorators, |b, d| b.line(&d.build()))
            .block(&header, "}", |b| {
                let mut previous_decorated = false;
                self.properties
                    .iter()
                    .enumerate()
                    .fold(b, |b, (i, property)| {
                        let decorated = !property.decorators.is_empty();
                        let b = if i > 0 && (decorated || previous_decorated) {
                            b.blank()
                        } else {
                            b
                        };
                        previous_decorated = decorated;

                        b.each(&property.decorators, |b, d| b.line(&d.build()))
                            .line(&format!("{}: {};", property.name, property.ty))
                    })
            })
    }

    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
