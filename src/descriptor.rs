//! Descriptor model: what the diagram knows about each Java type.
//!
//! A descriptor is the flattened, diagram-ready view of one class, interface, record or enum. The generator builds
//! descriptors from parsed compilation units, the filters prune them, and the PlantUML renderer prints them.
//!
//! ## Notes
//!
//! - Type references (extended class, implemented interfaces, dependencies) all share one shape, [`TypeName`]: the
//!   package of the resolved qualified name plus the simple name as written.
//! - Visibility thresholds and dependency levels double as CLI value enums.

use std::fmt;

use clap::ValueEnum;
use pgen_core::lang::modifiers::AccessLevel;

// ============================================================================
// Type references
// ============================================================================

/// A referenced type: package (possibly empty) and simple class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeName {
    pub package_name: String,
    pub class_name: String,
}

impl TypeName {
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
        }
    }

    /// `package.Class`, or just `Class` in the default package.
    pub fn qualified_name(&self) -> String {
        qualify(&self.package_name, &self.class_name)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// Text before the last `.` of a qualified name, or `""`.
pub fn package_of(qualified: &str) -> &str {
    qualified.rfind('.').map(|i| &qualified[..i]).unwrap_or("")
}

/// Join a package and a name, skipping the dot for the default package.
pub fn qualify(package_name: &str, name: &str) -> String {
    if package_name.is_empty() {
        name.to_string()
    } else {
        format!("{package_name}.{name}")
    }
}

// ============================================================================
// Members
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// `name(ParamType, ParamType)`
    pub signature: String,
    pub visibility: AccessLevel,
    pub return_type: String,
}

impl MethodDescriptor {
    pub fn new(signature: impl Into<String>, visibility: AccessLevel, return_type: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            visibility,
            return_type: return_type.into(),
        }
    }
}

/// One field declaration. `int a, b;` is a single descriptor named `a, b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_name: String,
    pub visibility: AccessLevel,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, visibility: AccessLevel) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            visibility,
        }
    }
}

/// An enum constant and (optionally) the source text of its constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDescriptor {
    pub name: String,
    /// Arguments joined with `", "`, or `""` when hidden or absent.
    pub arguments: String,
}

impl ValueDescriptor {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

// ============================================================================
// Types
// ============================================================================

/// Diagram kind of a non-enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TypeKind {
    Class,
    AbstractClass,
    Interface,
    #[value(skip)]
    Record,
}

impl TypeKind {
    /// PlantUML keyword that opens the type block.
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class | TypeKind::Record => "class",
            TypeKind::AbstractClass => "abstract class",
            TypeKind::Interface => "interface",
        }
    }

    /// Parse a diagram keyword as typed at the base-class prompt.
    pub fn from_keyword(keyword: &str) -> Option<TypeKind> {
        match keyword.trim() {
            "class" => Some(TypeKind::Class),
            "abstract class" => Some(TypeKind::AbstractClass),
            "interface" => Some(TypeKind::Interface),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Record => write!(f, "record"),
            other => write!(f, "{}", other.keyword()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub package_name: String,
    pub class_name: String,
    pub kind: TypeKind,
    pub extended_class: Option<TypeName>,
    pub implemented_classes: Vec<TypeName>,
    pub methods: Vec<MethodDescriptor>,
    pub attributes: Vec<FieldDescriptor>,
    pub dependencies: Vec<TypeName>,
}

impl ClassDescriptor {
    /// An empty descriptor of the given kind, as used for a base class outside the scanned sources.
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            kind,
            extended_class: None,
            implemented_classes: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub package_name: String,
    pub class_name: String,
    pub implemented_classes: Vec<TypeName>,
    pub methods: Vec<MethodDescriptor>,
    pub attributes: Vec<FieldDescriptor>,
    pub dependencies: Vec<TypeName>,
    pub values: Vec<ValueDescriptor>,
}

/// A described type: either a class-like type or an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Class(ClassDescriptor),
    Enum(EnumDescriptor),
}

impl Descriptor {
    pub fn package_name(&self) -> &str {
        match self {
            Descriptor::Class(c) => &c.package_name,
            Descriptor::Enum(e) => &e.package_name,
        }
    }

    pub fn class_name(&self) -> &str {
        match self {
            Descriptor::Class(c) => &c.class_name,
            Descriptor::Enum(e) => &e.class_name,
        }
    }

    pub fn qualified_name(&self) -> String {
        qualify(self.package_name(), self.class_name())
    }

    /// Extended class; enums never have one.
    pub fn extended_class(&self) -> Option<&TypeName> {
        match self {
            Descriptor::Class(c) => c.extended_class.as_ref(),
            Descriptor::Enum(_) => None,
        }
    }

    pub fn implemented_classes(&self) -> &[TypeName] {
        match self {
            Descriptor::Class(c) => &c.implemented_classes,
            Descriptor::Enum(e) => &e.implemented_classes,
        }
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        match self {
            Descriptor::Class(c) => &c.methods,
            Descriptor::Enum(e) => &e.methods,
        }
    }

    pub fn attributes(&self) -> &[FieldDescriptor] {
        match self {
            Descriptor::Class(c) => &c.attributes,
            Descriptor::Enum(e) => &e.attributes,
        }
    }

    pub fn dependencies(&self) -> &[TypeName] {
        match self {
            Descriptor::Class(c) => &c.dependencies,
            Descriptor::Enum(e) => &e.dependencies,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDescriptor> {
        match self {
            Descriptor::Class(c) => Some(c),
            Descriptor::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDescriptor> {
        match self {
            Descriptor::Enum(e) => Some(e),
            Descriptor::Class(_) => None,
        }
    }

    /// Diagram keyword (`class`, `abstract class`, `interface`, `enum`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Descriptor::Class(c) => c.kind.keyword(),
            Descriptor::Enum(_) => "enum",
        }
    }
}

impl From<ClassDescriptor> for Descriptor {
    fn from(value: ClassDescriptor) -> Self {
        Descriptor::Class(value)
    }
}

impl From<EnumDescriptor> for Descriptor {
    fn from(value: EnumDescriptor) -> Self {
        Descriptor::Enum(value)
    }
}

// ============================================================================
// Thresholds
// ============================================================================

/// Minimum access level a member needs to appear in the diagram.
///
/// The threshold ranks `Public` 4, `Package` 3, `Protected` 2, `Private` 1, `None` 0. A member is included when
/// its own rank is at least the threshold's, so `Private` shows everything and `Public` only public members.
/// `None` switches the member category off entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum Visibility {
    #[default]
    None,
    Private,
    Protected,
    Package,
    Public,
}

impl Visibility {
    pub fn rank(self) -> u8 {
        match self {
            Visibility::None => 0,
            Visibility::Private => 1,
            Visibility::Protected => 2,
            Visibility::Package => 3,
            Visibility::Public => 4,
        }
    }

    /// Does a member with `access` pass this threshold?
    pub fn includes(self, access: AccessLevel) -> bool {
        self != Visibility::None && access_rank(access) >= self.rank()
    }
}

fn access_rank(access: AccessLevel) -> u8 {
    match access {
        AccessLevel::Public => 4,
        AccessLevel::Package => 3,
        AccessLevel::Protected => 2,
        AccessLevel::Private => 1,
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::None => "NONE",
            Visibility::Private => "PRIVATE",
            Visibility::Protected => "PROTECTED",
            Visibility::Package => "PACKAGE",
            Visibility::Public => "PUBLIC",
        };
        write!(f, "{s}")
    }
}

/// How far dependency arrows reach.
///
/// - `Internal`: types of the scanned sources.
/// - `External`: additionally types named by single-type imports outside `java*`.
/// - `All`: every reference, including `java.*` imports and implicit `java.lang` types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum DependencyLevel {
    #[default]
    None,
    Internal,
    External,
    All,
}

impl fmt::Display for DependencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DependencyLevel::None => "NONE",
            DependencyLevel::Internal => "INTERNAL",
            DependencyLevel::External => "EXTERNAL",
            DependencyLevel::All => "ALL",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_LEVELS: [AccessLevel; 4] = [
        AccessLevel::Public,
        AccessLevel::Package,
        AccessLevel::Protected,
        AccessLevel::Private,
    ];

    fn included(threshold: Visibility) -> Vec<AccessLevel> {
        ACCESS_LEVELS.into_iter().filter(|a| threshold.includes(*a)).collect()
    }

    #[test]
    fn test_visibility_thresholds() {
        assert!(included(Visibility::None).is_empty());
        assert_eq!(included(Visibility::Public), vec![AccessLevel::Public]);
        assert_eq!(included(Visibility::Package), vec![AccessLevel::Public, AccessLevel::Package]);
        assert_eq!(
            included(Visibility::Protected),
            vec![AccessLevel::Public, AccessLevel::Package, AccessLevel::Protected]
        );
        assert_eq!(included(Visibility::Private), ACCESS_LEVELS.to_vec());
    }

    #[test]
    fn test_dependency_level_ordering() {
        assert!(DependencyLevel::None < DependencyLevel::Internal);
        assert!(DependencyLevel::Internal < DependencyLevel::External);
        assert!(DependencyLevel::External < DependencyLevel::All);
    }

    #[test]
    fn test_type_name_qualification() {
        assert_eq!(package_of("java.util.List"), "java.util");
        assert_eq!(package_of("Foo"), "");
        assert_eq!(TypeName::new("", "Foo").qualified_name(), "Foo");
        assert_eq!(TypeName::new("a.b", "C").to_string(), "a.b.C");
    }

    #[test]
    fn test_type_kind_keywords() {
        assert_eq!(TypeKind::AbstractClass.keyword(), "abstract class");
        assert_eq!(TypeKind::Record.keyword(), "class");
        assert_eq!(TypeKind::from_keyword("interface"), Some(TypeKind::Interface));
        assert_eq!(TypeKind::from_keyword(" abstract class "), Some(TypeKind::AbstractClass));
        assert_eq!(TypeKind::from_keyword("record"), None);
    }

    #[test]
    fn test_value_enums_parse_case_insensitively() {
        assert_eq!(Visibility::from_str("PUBLIC", true), Ok(Visibility::Public));
        assert_eq!(DependencyLevel::from_str("external", true), Ok(DependencyLevel::External));
        assert_eq!(TypeKind::from_str("abstract-class", true), Ok(TypeKind::AbstractClass));
        assert!(TypeKind::from_str("record", true).is_err());
    }

    #[test]
    fn test_descriptor_accessors() {
        let mut class = ClassDescriptor::new("a.b", "C", TypeKind::Class);
        class.extended_class = Some(TypeName::new("a", "Base"));
        let descriptor = Descriptor::from(class);
        assert_eq!(descriptor.qualified_name(), "a.b.C");
        assert_eq!(descriptor.extended_class().map(|t| t.class_name.as_str()), Some("Base"));
        assert_eq!(descriptor.keyword(), "class");
        assert!(descriptor.as_enum().is_none());
    }
}
