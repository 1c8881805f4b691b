//! Descriptor filters applied between generation and rendering.
//!
//! - [`PackageScope`] limits the diagram to (or removes) whole packages.
//! - [`filter_for_base_class`] reduces the diagram to one inheritance tree.

use std::collections::HashSet;

use thiserror::Error;

use crate::descriptor::{ClassDescriptor, Descriptor, TypeKind, TypeName};

// ============================================================================
// Package scope
// ============================================================================

/// Package limits: an allow-list and a deny-list, each matching a package and everything nested below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageScope {
    pub packages: Vec<String>,
    pub exclude_packages: Vec<String>,
}

impl PackageScope {
    pub fn new(packages: Vec<String>, exclude_packages: Vec<String>) -> Self {
        Self {
            packages,
            exclude_packages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.exclude_packages.is_empty()
    }

    /// Keep descriptors inside the allowed packages, drop excluded ones, and strip references into excluded
    /// packages.
    pub fn apply(&self, descriptors: Vec<Descriptor>) -> Vec<Descriptor> {
        if self.is_empty() {
            return descriptors;
        }
        let before = descriptors.len();
        let kept: Vec<Descriptor> = descriptors
            .into_iter()
            .filter(|d| self.packages.is_empty() || self.packages.iter().any(|p| in_package(d.package_name(), p)))
            .filter(|d| !self.is_excluded(d.package_name()))
            .map(|d| self.strip_excluded_references(d))
            .collect();
        tracing::debug!(before, after = kept.len(), "Applied package scope");
        kept
    }

    fn is_excluded(&self, package: &str) -> bool {
        self.exclude_packages.iter().any(|p| in_package(package, p))
    }

    fn strip_excluded_references(&self, descriptor: Descriptor) -> Descriptor {
        if self.exclude_packages.is_empty() {
            return descriptor;
        }
        let keep = |t: &TypeName| !self.is_excluded(&t.package_name);
        match descriptor {
            Descriptor::Class(mut class) => {
                class.extended_class = class.extended_class.filter(|t| keep(t));
                class.implemented_classes.retain(keep);
                class.dependencies.retain(keep);
                Descriptor::Class(class)
            }
            Descriptor::Enum(mut enumeration) => {
                enumeration.implemented_classes.retain(keep);
                enumeration.dependencies.retain(keep);
                Descriptor::Enum(enumeration)
            }
        }
    }
}

/// `package` equals `scope` or is nested below it (`a.b` is in `a`, `ab` is not).
fn in_package(package: &str, scope: &str) -> bool {
    package == scope || package.strip_prefix(scope).is_some_and(|rest| rest.starts_with('.'))
}

// ============================================================================
// Base class tree
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaseClassError {
    #[error("Base class {0} could not be found in package")]
    NotFound(String),
}

/// Reduce `descriptors` to `base` and every type that (transitively) extends it.
///
/// The result lists the base first, then the types extending it directly, then for each of those in turn its own
/// extending subtree. Matching is by simple class name, so same-named subtypes from different packages are all kept. If `base` is not among the descriptors, `fallback` supplies
/// the kind of a synthetic, empty base descriptor; without one the base is reported missing.
pub fn filter_for_base_class(
    descriptors: &[Descriptor],
    base: &str,
    fallback: Option<TypeKind>,
) -> Result<Vec<Descriptor>, BaseClassError> {
    let base_descriptor = match descriptors.iter().find(|d| d.class_name() == base) {
        Some(found) => found.clone(),
        None => {
            let kind = fallback.ok_or_else(|| BaseClassError::NotFound(base.to_string()))?;
            tracing::info!(base, %kind, "Base class not in scope, using an empty placeholder");
            Descriptor::Class(ClassDescriptor::new("", base, kind))
        }
    };

    let mut visited = HashSet::new();
    visited.insert(base_descriptor.qualified_name());
    let mut result = vec![base_descriptor];
    result.extend(extending_tree(descriptors, base, &mut visited));
    Ok(result)
}

fn extending_tree(descriptors: &[Descriptor], parent: &str, visited: &mut HashSet<String>) -> Vec<Descriptor> {
    let direct: Vec<&Descriptor> = descriptors
        .iter()
        .filter(|d| d.extended_class().is_some_and(|e| e.class_name == parent))
        .filter(|d| visited.insert(d.qualified_name()))
        .collect();

    let mut tree: Vec<Descriptor> = direct.iter().map(|d| (*d).clone()).collect();
    for child in direct {
        tree.extend(extending_tree(descriptors, child.class_name(), visited));
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EnumDescriptor;

    fn class(package: &str, name: &str, extends: Option<&str>) -> Descriptor {
        let mut descriptor = ClassDescriptor::new(package, name, TypeKind::Class);
        descriptor.extended_class = extends.map(|e| TypeName::new("", e));
        Descriptor::Class(descriptor)
    }

    fn names(descriptors: &[Descriptor]) -> Vec<&str> {
        descriptors.iter().map(Descriptor::class_name).collect()
    }

    #[test]
    fn test_base_class_tree() {
        let descriptors = vec![
            class("", "Exception", None),
            class("", "class1", Some("Exception")),
            class("", "class2", Some("Exception")),
            class("", "unrelatedClass", Some("OtherClass")),
            class("", "UnrelatedClass2", None),
        ];
        let filtered = filter_for_base_class(&descriptors, "Exception", None).unwrap();
        assert_eq!(names(&filtered), vec!["Exception", "class1", "class2"]);
    }

    #[test]
    fn test_base_class_tree_order_is_level_then_subtree() {
        let descriptors = vec![
            class("", "Grandchild", Some("ChildA")),
            class("", "ChildA", Some("Base")),
            class("", "Base", None),
            class("", "ChildB", Some("Base")),
            class("", "GrandchildB", Some("ChildB")),
        ];
        let filtered = filter_for_base_class(&descriptors, "Base", None).unwrap();
        assert_eq!(
            names(&filtered),
            vec!["Base", "ChildA", "ChildB", "Grandchild", "GrandchildB"]
        );
    }

    #[test]
    fn test_base_class_cycle_terminates() {
        let descriptors = vec![class("", "A", Some("B")), class("", "B", Some("A"))];
        let filtered = filter_for_base_class(&descriptors, "A", None).unwrap();
        assert_eq!(names(&filtered), vec!["A", "B"]);
    }

    #[test]
    fn test_base_class_tree_keeps_same_name_in_other_packages() {
        let descriptors = vec![
            class("a", "Foo", Some("Base")),
            class("b", "Foo", Some("Base")),
            class("", "Base", None),
        ];
        let filtered = filter_for_base_class(&descriptors, "Base", None).unwrap();
        let qualified: Vec<String> = filtered.iter().map(Descriptor::qualified_name).collect();
        assert_eq!(qualified, vec!["Base", "a.Foo", "b.Foo"]);
    }

    #[test]
    fn test_missing_base_class() {
        let descriptors = vec![class("", "Child", Some("Missing"))];
        assert_eq!(
            filter_for_base_class(&descriptors, "Missing", None),
            Err(BaseClassError::NotFound("Missing".to_string()))
        );

        let filtered = filter_for_base_class(&descriptors, "Missing", Some(TypeKind::Interface)).unwrap();
        assert_eq!(names(&filtered), vec!["Missing", "Child"]);
        assert_eq!(filtered[0].keyword(), "interface");
    }

    #[test]
    fn test_package_allow_list_includes_subpackages() {
        let scope = PackageScope::new(vec!["app.core".to_string()], Vec::new());
        let filtered = scope.apply(vec![
            class("app.core", "A", None),
            class("app.core.io", "B", None),
            class("app.corex", "C", None),
            class("app", "D", None),
        ]);
        assert_eq!(names(&filtered), vec!["A", "B"]);
    }

    #[test]
    fn test_package_exclusion_strips_references() {
        let mut user = ClassDescriptor::new("app", "User", TypeKind::Class);
        user.extended_class = Some(TypeName::new("app.internal", "Base"));
        user.implemented_classes = vec![TypeName::new("app.api", "Named"), TypeName::new("app.internal", "Hidden")];
        user.dependencies = vec![TypeName::new("app.internal.db", "Row"), TypeName::new("java.util", "List")];
        let status = Descriptor::Enum(EnumDescriptor {
            package_name: "app".to_string(),
            class_name: "Status".to_string(),
            implemented_classes: vec![TypeName::new("app.internal", "Coded")],
            methods: Vec::new(),
            attributes: Vec::new(),
            dependencies: Vec::new(),
            values: Vec::new(),
        });

        let scope = PackageScope::new(Vec::new(), vec!["app.internal".to_string()]);
        let filtered = scope.apply(vec![Descriptor::Class(user), class("app.internal", "Base", None), status]);

        assert_eq!(names(&filtered), vec!["User", "Status"]);
        let user = filtered[0].as_class().unwrap();
        assert_eq!(user.extended_class, None);
        assert_eq!(user.implemented_classes, vec![TypeName::new("app.api", "Named")]);
        assert_eq!(user.dependencies, vec![TypeName::new("java.util", "List")]);
        assert!(filtered[1].implemented_classes().is_empty());
    }

    #[test]
    fn test_empty_scope_keeps_everything() {
        let descriptors = vec![class("a", "A", None), class("", "B", None)];
        assert_eq!(PackageScope::default().apply(descriptors.clone()), descriptors);
    }
}
