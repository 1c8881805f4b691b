//! AST to descriptor conversion for one compilation unit.

use std::collections::HashSet;

use pgen_core::lang::modifiers::AccessLevel;
use pgen_syntax::ast::{
    BodyRefs, ClassType, CompilationUnit, Member, Modifiers, Spanned, TypeDecl, TypeDeclKind, TypeExpr, TypeParam,
};

use super::GeneratorConfig;
use super::resolve::{SymbolIndex, TypeResolver};
use crate::descriptor::{
    ClassDescriptor, DependencyLevel, Descriptor, EnumDescriptor, FieldDescriptor, MethodDescriptor, TypeKind,
    TypeName, ValueDescriptor, Visibility, package_of, qualify,
};

pub(super) struct Describer<'a> {
    unit: &'a CompilationUnit,
    source: &'a str,
    resolver: TypeResolver<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> Describer<'a> {
    pub(super) fn new(
        index: &'a SymbolIndex,
        unit: &'a CompilationUnit,
        source: &'a str,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            unit,
            source,
            resolver: TypeResolver::new(index, unit, config.dependency_level, config.show_package),
            config,
        }
    }

    /// Descriptors in declaration pre-order: each type, then its nested types.
    pub(super) fn describe_unit(&self) -> Vec<Descriptor> {
        let mut out = Vec::new();
        let mut enclosing = Vec::new();
        for decl in &self.unit.types {
            self.describe_type(&decl.node, &mut enclosing, &mut out);
        }
        out
    }

    fn describe_type(&self, decl: &'a TypeDecl, enclosing: &mut Vec<&'a TypeDecl>, out: &mut Vec<Descriptor>) {
        if decl.kind == TypeDeclKind::Annotation {
            tracing::trace!(name = %decl.name, "Skipping annotation type");
            return;
        }

        let package_name = enclosing
            .iter()
            .fold(self.resolver.package().to_string(), |prefix, outer| qualify(&prefix, &outer.name));
        enclosing.push(decl);

        let descriptor = if decl.kind == TypeDeclKind::Enum {
            Descriptor::Enum(self.enum_descriptor(decl, enclosing, package_name))
        } else {
            Descriptor::Class(self.class_descriptor(decl, enclosing, package_name))
        };
        tracing::debug!(
            kind = descriptor.keyword(),
            name = %descriptor.qualified_name(),
            methods = descriptor.methods().len(),
            attributes = descriptor.attributes().len(),
            dependencies = descriptor.dependencies().len(),
            "Parsed type"
        );
        out.push(descriptor);

        for nested in decl.nested_types() {
            self.describe_type(nested, enclosing, out);
        }
        enclosing.pop();
    }

    fn class_descriptor(&self, decl: &'a TypeDecl, enclosing: &[&'a TypeDecl], package_name: String) -> ClassDescriptor {
        let kind = match decl.kind {
            TypeDeclKind::Interface => TypeKind::Interface,
            TypeDeclKind::Record => TypeKind::Record,
            _ if decl.is_abstract() => TypeKind::AbstractClass,
            _ => TypeKind::Class,
        };

        // Interfaces may extend several interfaces; everything after the first is drawn like an implementation.
        let mut parents = decl.extends.iter();
        let extended_class = parents.next().map(|ty| self.type_name(&ty.node, enclosing));
        let implemented_classes = parents
            .chain(decl.implements.iter())
            .map(|ty| self.type_name(&ty.node, enclosing))
            .collect();

        ClassDescriptor {
            package_name,
            class_name: decl.name.clone(),
            kind,
            extended_class,
            implemented_classes,
            methods: self.methods(decl),
            attributes: self.attributes(decl),
            dependencies: self.dependencies(decl, enclosing),
        }
    }

    fn enum_descriptor(&self, decl: &'a TypeDecl, enclosing: &[&'a TypeDecl], package_name: String) -> EnumDescriptor {
        let values = decl
            .enum_constants
            .iter()
            .map(|constant| {
                let arguments = if self.config.show_enum_arguments {
                    let texts: Vec<&str> = constant.node.arguments.iter().map(|span| span.text(self.source)).collect();
                    texts.join(", ")
                } else {
                    String::new()
                };
                ValueDescriptor::new(constant.node.name.clone(), arguments)
            })
            .collect();

        EnumDescriptor {
            package_name,
            class_name: decl.name.clone(),
            implemented_classes: decl.implements.iter().map(|ty| self.type_name(&ty.node, enclosing)).collect(),
            methods: self.methods(decl),
            attributes: self.attributes(decl),
            dependencies: self.dependencies(decl, enclosing),
            values,
        }
    }

    fn type_name(&self, ty: &ClassType, enclosing: &[&'a TypeDecl]) -> TypeName {
        let qualified = self.resolver.resolve(ty, enclosing);
        TypeName::new(package_of(&qualified), ty.simple_name())
    }

    // ========================================================================
    // Members
    // ========================================================================

    fn methods(&self, decl: &TypeDecl) -> Vec<MethodDescriptor> {
        let threshold = self.config.method_visibility;
        if threshold == Visibility::None {
            return Vec::new();
        }
        let is_interface = decl.kind == TypeDeclKind::Interface;
        decl.methods()
            .filter_map(|method| {
                let access = member_access(&method.modifiers, decl.kind);
                (is_interface || threshold.includes(access)).then(|| {
                    MethodDescriptor::new(method.signature(), access, method.return_type.to_string())
                })
            })
            .collect()
    }

    fn attributes(&self, decl: &TypeDecl) -> Vec<FieldDescriptor> {
        let threshold = self.config.attribute_visibility;
        if threshold == Visibility::None {
            return Vec::new();
        }
        let components = decl
            .record_components
            .iter()
            .filter(|_| threshold.includes(AccessLevel::Private))
            .map(|component| FieldDescriptor::new(component.name.clone(), component.type_string(), AccessLevel::Private));
        let fields = decl.fields().filter_map(|field| {
            let access = member_access(&field.modifiers, decl.kind);
            threshold.includes(access).then(|| {
                let names: Vec<&str> = field.declarators.iter().map(|d| d.name.as_str()).collect();
                FieldDescriptor::new(names.join(", "), field.ty.to_string(), access)
            })
        });
        components.chain(fields).collect()
    }

    // ========================================================================
    // Dependencies
    // ========================================================================

    fn dependencies(&self, decl: &'a TypeDecl, enclosing: &[&'a TypeDecl]) -> Vec<TypeName> {
        if self.config.dependency_level == DependencyLevel::None {
            return Vec::new();
        }
        let mut collector = DependencyCollector {
            resolver: &self.resolver,
            enclosing,
            own_name: qualify(self.resolver.package(), &enclosing_path(enclosing)),
            keep_unqualified: self.config.dependency_level == DependencyLevel::All,
            seen: HashSet::new(),
            found: Vec::new(),
        };

        for component in &decl.record_components {
            collector.visit_type(&component.ty, &[]);
        }
        for constant in &decl.enum_constants {
            collector.visit_body(&constant.node.argument_refs, &[]);
            for member in constant.node.body.iter().flatten() {
                collector.visit_member(member);
            }
        }
        for member in &decl.members {
            collector.visit_member(member);
        }
        for ty in decl.extends.iter().chain(decl.implements.iter()) {
            collector.visit_class_type(&ty.node, &[]);
        }
        for param in &decl.type_params {
            for bound in &param.bounds {
                collector.visit_class_type(bound, &[]);
            }
        }
        collector.found
    }
}

/// Implicit access: interface and annotation members are public, everything else package-private.
fn member_access(modifiers: &Modifiers, owner: TypeDeclKind) -> AccessLevel {
    modifiers.access().unwrap_or(match owner {
        TypeDeclKind::Interface | TypeDeclKind::Annotation => AccessLevel::Public,
        _ => AccessLevel::Package,
    })
}

fn enclosing_path(enclosing: &[&TypeDecl]) -> String {
    enclosing.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(".")
}

/// Walks one type's signatures and skipped bodies, collecting resolved references in visiting order.
struct DependencyCollector<'r, 'a> {
    resolver: &'r TypeResolver<'a>,
    enclosing: &'r [&'a TypeDecl],
    own_name: String,
    keep_unqualified: bool,
    seen: HashSet<String>,
    found: Vec<TypeName>,
}

impl DependencyCollector<'_, '_> {
    fn visit_member(&mut self, member: &Spanned<Member>) {
        match &member.node {
            Member::Field(field) => {
                self.visit_type(&field.ty, &[]);
                for declarator in &field.declarators {
                    if let Some(init) = &declarator.initializer {
                        self.visit_body(init, &[]);
                    }
                }
            }
            Member::Method(method) => {
                let params = &method.type_params;
                for bound in params.iter().flat_map(|p| &p.bounds) {
                    self.visit_class_type(bound, params);
                }
                self.visit_type(&method.return_type, params);
                for param in &method.params {
                    self.visit_type(&param.ty, params);
                }
                for thrown in &method.throws {
                    self.visit_class_type(thrown, params);
                }
                if let Some(body) = &method.body {
                    self.visit_body(body, params);
                }
            }
            Member::Constructor(ctor) => {
                let params = &ctor.type_params;
                for param in &ctor.params {
                    self.visit_type(&param.ty, params);
                }
                for thrown in &ctor.throws {
                    self.visit_class_type(thrown, params);
                }
                self.visit_body(&ctor.body, params);
            }
            Member::Initializer(block) => self.visit_body(&block.body, &[]),
            // Nested types are described on their own.
            Member::Type(_) => {}
        }
    }

    fn visit_body(&mut self, body: &BodyRefs, type_params: &[TypeParam]) {
        for ty in body.types() {
            self.visit_class_type(ty, type_params);
        }
    }

    fn visit_type(&mut self, ty: &TypeExpr, type_params: &[TypeParam]) {
        let mut refs = Vec::new();
        ty.walk_class_types(&mut |ct| refs.push(ct));
        for ct in refs {
            self.record(ct, type_params);
        }
    }

    fn visit_class_type(&mut self, ty: &ClassType, type_params: &[TypeParam]) {
        let mut refs = Vec::new();
        ty.walk(&mut |ct| refs.push(ct));
        for ct in refs {
            self.record(ct, type_params);
        }
    }

    fn record(&mut self, ty: &ClassType, type_params: &[TypeParam]) {
        if self.is_type_param(ty, type_params) {
            return;
        }
        let qualified = self.resolver.resolve(ty, self.enclosing);
        if qualified == self.own_name {
            return;
        }
        // References whose package could not be resolved are out of scope below `All`.
        if !self.keep_unqualified && !qualified.contains('.') {
            return;
        }
        if self.seen.insert(qualified.clone()) {
            tracing::trace!(dependency = %qualified, "Found dependency");
            self.found.push(TypeName::new(package_of(&qualified), ty.simple_name()));
        }
    }

    fn is_type_param(&self, ty: &ClassType, type_params: &[TypeParam]) -> bool {
        let [segment] = ty.segments.as_slice() else {
            return false;
        };
        let name = segment.name.as_str();
        type_params.iter().any(|p| p.name == name)
            || self
                .enclosing
                .iter()
                .any(|decl| decl.type_params.iter().any(|p| p.name == name))
    }
}
