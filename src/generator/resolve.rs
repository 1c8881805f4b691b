//! Lightweight type resolution.
//!
//! Turns a class type as written in a declaration (`List<String>`, `Outer.Inner`, `ExceptionBase`) into a qualified
//! name, using only what the scanned sources declare plus their imports. There is no classpath: a name the resolver
//! cannot place is returned as written.
//!
//! ## Resolution order
//!
//! 1. Multi-segment names: resolve the first segment as a type and append the rest, otherwise the name is taken as
//!    already qualified.
//! 2. Types declared in the same compilation unit, innermost enclosing type first (always on).
//! 3. Scanned types via single-type imports, the same package and wildcard imports (dependency level `Internal`
//!    and up, or whenever packages are shown).
//! 4. Single-type imports by simple name (`External` and up; `java*` imports only at `All`).
//! 5. Implicit `java.lang` types (`All`).

use std::collections::HashSet;

use pgen_core::lang::java_lang;
use pgen_syntax::ast::{ClassType, CompilationUnit, ImportDecl, TypeDecl};

use crate::descriptor::{DependencyLevel, qualify};

/// Qualified names of every type declared in the scanned sources, nested types included.
#[derive(Debug, Default, Clone)]
pub struct SymbolIndex {
    types: HashSet<String>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every type declared in `unit`.
    pub fn add_unit(&mut self, unit: &CompilationUnit) {
        let package = unit.package_name();
        for decl in &unit.types {
            self.add_type(&package, &decl.node);
        }
    }

    fn add_type(&mut self, prefix: &str, decl: &TypeDecl) {
        let qualified = qualify(prefix, &decl.name);
        for nested in decl.nested_types() {
            self.add_type(&qualified, nested);
        }
        self.types.insert(qualified);
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.types.contains(qualified)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Resolves class types written inside one compilation unit.
pub struct TypeResolver<'a> {
    index: &'a SymbolIndex,
    unit: &'a CompilationUnit,
    package: String,
    level: DependencyLevel,
    scan_sources: bool,
}

impl<'a> TypeResolver<'a> {
    pub fn new(index: &'a SymbolIndex, unit: &'a CompilationUnit, level: DependencyLevel, show_package: bool) -> Self {
        Self {
            index,
            unit,
            package: unit.package_name(),
            level,
            scan_sources: level >= DependencyLevel::Internal || show_package,
        }
    }

    /// Package of the compilation unit (`""` for the default package).
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Qualified name of `ty` as seen from inside `enclosing` (outermost type first), or the written name.
    pub fn resolve(&self, ty: &ClassType, enclosing: &[&TypeDecl]) -> String {
        let written = ty.erased_name();
        let Some((first, rest)) = ty.segments.split_first() else {
            return written;
        };
        match self.resolve_simple(&first.name, enclosing) {
            Some(head) if rest.is_empty() => head,
            Some(head) => {
                let tail: Vec<&str> = rest.iter().map(|s| s.name.as_str()).collect();
                format!("{head}.{}", tail.join("."))
            }
            None => {
                if rest.is_empty() {
                    tracing::trace!(name = %written, "could not resolve qualified name, using simple name");
                }
                written
            }
        }
    }

    fn resolve_simple(&self, name: &str, enclosing: &[&TypeDecl]) -> Option<String> {
        if let Some(local) = self.resolve_local(name, enclosing) {
            return Some(local);
        }
        if self.scan_sources {
            if let Some(scanned) = self.resolve_scanned(name) {
                return Some(scanned);
            }
        }
        if self.level >= DependencyLevel::External {
            if let Some(imported) = self.resolve_import(name) {
                return Some(imported);
            }
        }
        if self.level == DependencyLevel::All {
            return java_lang::qualify(name);
        }
        None
    }

    /// Types declared in this compilation unit, searching from the innermost enclosing type outwards.
    fn resolve_local(&self, name: &str, enclosing: &[&TypeDecl]) -> Option<String> {
        for depth in (0..=enclosing.len()).rev() {
            let found = if depth == 0 {
                self.unit.types.iter().any(|t| t.node.name == name)
            } else {
                enclosing[depth - 1].nested_types().any(|t| t.name == name)
            };
            if found {
                let mut prefix = self.package.clone();
                for outer in &enclosing[..depth] {
                    prefix = qualify(&prefix, &outer.name);
                }
                return Some(qualify(&prefix, name));
            }
        }
        None
    }

    fn resolve_scanned(&self, name: &str) -> Option<String> {
        let single = self
            .single_imports()
            .find(|import| import.simple_name() == Some(name))
            .map(|import| import.path.to_string())
            .filter(|path| self.index.contains(path));
        if single.is_some() {
            return single;
        }

        let same_package = qualify(&self.package, name);
        if self.index.contains(&same_package) {
            return Some(same_package);
        }

        self.unit
            .imports
            .iter()
            .map(|i| &i.node)
            .filter(|import| import.is_wildcard && !import.is_static)
            .map(|import| format!("{}.{name}", import.path))
            .find(|candidate| self.index.contains(candidate))
    }

    fn resolve_import(&self, name: &str) -> Option<String> {
        let include_java = self.level == DependencyLevel::All;
        self.single_imports()
            .filter(|import| import.simple_name() == Some(name))
            .map(|import| import.path.to_string())
            .find(|path| include_java || !path.starts_with("java"))
    }

    fn single_imports(&self) -> impl Iterator<Item = &'a ImportDecl> + use<'a> {
        let unit = self.unit;
        unit.imports.iter().map(|i| &i.node).filter(|import| !import.is_wildcard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgen_syntax::{lexer, parser};

    fn unit(source: &str) -> CompilationUnit {
        let tokens = lexer::lex(source).unwrap();
        parser::parse(&tokens).unwrap()
    }

    fn index_of(units: &[&CompilationUnit]) -> SymbolIndex {
        let mut index = SymbolIndex::new();
        for unit in units {
            index.add_unit(unit);
        }
        index
    }

    const MAIN: &str = r#"
package app;

import java.time.LocalDate;
import org.lib.Widget;
import app.model.Entity;
import app.util.*;

public class Main {
    static class Inner { class Deeper {} }
}
"#;

    const SIBLING: &str = "package app; class Sibling {}";
    const MODEL: &str = "package app.model; public class Entity {}";
    const UTIL: &str = "package app.util; public class Helper {}";

    fn resolve_with(level: DependencyLevel, show_package: bool, name: &str) -> String {
        let main = unit(MAIN);
        let others = [unit(SIBLING), unit(MODEL), unit(UTIL)];
        let index = index_of(&[&main, &others[0], &others[1], &others[2]]);
        let resolver = TypeResolver::new(&index, &main, level, show_package);
        let outer = &main.types[0].node;
        let ty = ClassType {
            segments: name
                .split('.')
                .map(|s| pgen_syntax::ast::TypeSegment {
                    name: s.to_string(),
                    args: None,
                })
                .collect(),
        };
        resolver.resolve(&ty, &[outer])
    }

    #[test]
    fn test_index_contains_nested_types() {
        let main = unit(MAIN);
        let index = index_of(&[&main]);
        assert!(index.contains("app.Main"));
        assert!(index.contains("app.Main.Inner"));
        assert!(index.contains("app.Main.Inner.Deeper"));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_local_types_resolve_at_every_level() {
        assert_eq!(resolve_with(DependencyLevel::None, false, "Inner"), "app.Main.Inner");
        assert_eq!(resolve_with(DependencyLevel::None, false, "Main"), "app.Main");
        assert_eq!(resolve_with(DependencyLevel::None, false, "Inner.Deeper"), "app.Main.Inner.Deeper");
    }

    #[test]
    fn test_scanned_types_need_internal_or_show_package() {
        assert_eq!(resolve_with(DependencyLevel::None, false, "Sibling"), "Sibling");
        assert_eq!(resolve_with(DependencyLevel::Internal, false, "Sibling"), "app.Sibling");
        assert_eq!(resolve_with(DependencyLevel::None, true, "Sibling"), "app.Sibling");
        assert_eq!(resolve_with(DependencyLevel::Internal, false, "Entity"), "app.model.Entity");
        assert_eq!(resolve_with(DependencyLevel::Internal, false, "Helper"), "app.util.Helper");
    }

    #[test]
    fn test_external_imports_exclude_java_below_all() {
        assert_eq!(resolve_with(DependencyLevel::Internal, false, "Widget"), "Widget");
        assert_eq!(resolve_with(DependencyLevel::External, false, "Widget"), "org.lib.Widget");
        assert_eq!(resolve_with(DependencyLevel::External, false, "LocalDate"), "LocalDate");
        assert_eq!(resolve_with(DependencyLevel::All, false, "LocalDate"), "java.time.LocalDate");
    }

    #[test]
    fn test_java_lang_only_at_all() {
        assert_eq!(resolve_with(DependencyLevel::External, false, "String"), "String");
        assert_eq!(resolve_with(DependencyLevel::All, false, "String"), "java.lang.String");
        assert_eq!(resolve_with(DependencyLevel::All, false, "Unknown"), "Unknown");
    }

    #[test]
    fn test_qualified_names_are_kept() {
        assert_eq!(resolve_with(DependencyLevel::All, false, "java.util.List"), "java.util.List");
    }
}
