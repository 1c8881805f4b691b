//! PlantUML body generation.
//!
//! Each descriptor becomes one block:
//!
//! ```text
//! '------------------------
//!
//! class app.User {
//! - String name
//! + getName()
//! }
//! app.User --|> app.Person
//! app.User ..> java.util.List
//!
//! ```
//!
//! Blocks are joined with `\n`.

use pgen_core::lang::modifiers::AccessLevel;

use crate::descriptor::{Descriptor, TypeKind, TypeName};

const SEPARATOR: &str = "'------------------------";

pub struct PumlBodyGenerator {
    show_package: bool,
}

impl PumlBodyGenerator {
    pub fn new(show_package: bool) -> Self {
        Self { show_package }
    }

    pub fn generate_puml_body(&self, descriptors: &[Descriptor]) -> String {
        descriptors
            .iter()
            .flat_map(|d| self.descriptor_lines(d))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn descriptor_lines(&self, descriptor: &Descriptor) -> Vec<String> {
        tracing::debug!(
            kind = descriptor.keyword(),
            name = descriptor.class_name(),
            extends = ?descriptor.extended_class().map(TypeName::qualified_name),
            implements = descriptor.implemented_classes().len(),
            "Rendering type"
        );

        let name = self.display_name(descriptor.package_name(), descriptor.class_name());
        let header = match descriptor {
            Descriptor::Class(c) if c.kind == TypeKind::Record => format!("class {name} <<record>> {{"),
            other => format!("{} {name} {{", other.keyword()),
        };

        let mut lines = vec![SEPARATOR.to_string(), String::new(), header];
        if let Descriptor::Enum(e) = descriptor {
            lines.extend(e.values.iter().map(|v| {
                if v.arguments.is_empty() {
                    v.name.clone()
                } else {
                    format!("{}({})", v.name, v.arguments)
                }
            }));
        }
        lines.extend(
            descriptor
                .attributes()
                .iter()
                .map(|a| format!("{} {} {}", visibility_sign(a.visibility), a.type_name, a.name)),
        );
        lines.extend(
            descriptor
                .methods()
                .iter()
                .map(|m| format!("{} {} {}", visibility_sign(m.visibility), m.return_type, m.signature)),
        );
        lines.push("}".to_string());

        let parents: Vec<&TypeName> = descriptor
            .extended_class()
            .into_iter()
            .chain(descriptor.implemented_classes())
            .filter(|t| !t.class_name.is_empty())
            .collect();
        for parent in &parents {
            lines.push(format!("{name} --|> {}", self.type_name(parent)));
        }
        for dependency in descriptor.dependencies() {
            if !parents.contains(&dependency) {
                lines.push(format!("{name} ..> {}", self.type_name(dependency)));
            }
        }

        lines.push(String::new());
        lines
    }

    fn type_name(&self, ty: &TypeName) -> String {
        self.display_name(&ty.package_name, &ty.class_name)
    }

    fn display_name(&self, package_name: &str, class_name: &str) -> String {
        if self.show_package && !package_name.is_empty() {
            format!("{package_name}.{class_name}")
        } else {
            class_name.to_string()
        }
    }
}

/// PlantUML visibility marker.
pub fn visibility_sign(access: AccessLevel) -> &'static str {
    match access {
        AccessLevel::Private => "-",
        AccessLevel::Protected => "#",
        AccessLevel::Package => "~",
        AccessLevel::Public => "+",
    }
}
