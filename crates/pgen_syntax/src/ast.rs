//! Abstract Syntax Tree definitions for the structural Java parser.
//!
//! The tree keeps declarations and signatures in full and replaces every body (method blocks, initializer
//! expressions, enum constant class bodies) with a [`BodyRefs`] summary.

use std::fmt;

use pgen_core::lang::modifiers::{AccessLevel, ModifierId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Slice the spanned text out of `source`, or `""` if the span is out of range.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// Dotted name such as a package (`java.util`) or an import path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualifiedName {
    pub segments: Vec<Ident>,
}

impl QualifiedName {
    pub fn new(segments: Vec<Ident>) -> Self {
        Self { segments }
    }

    /// Last segment, or `""` for an empty name.
    pub fn last(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// One `.java` file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    pub package: Option<Spanned<QualifiedName>>,
    pub imports: Vec<Spanned<ImportDecl>>,
    pub types: Vec<Spanned<TypeDecl>>,
}

impl CompilationUnit {
    /// Declared package, or `""` for the default package.
    pub fn package_name(&self) -> String {
        self.package.as_ref().map(|p| p.node.to_string()).unwrap_or_default()
    }
}

// ============================================================================
// Imports
// ============================================================================

/// `import [static] a.b.C;` or `import [static] a.b.*;`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub path: QualifiedName,
    pub is_static: bool,
    /// `.*` on-demand import; `path` then names the package (or type) being opened.
    pub is_wildcard: bool,
}

impl ImportDecl {
    /// Simple name a single-type import brings into scope.
    pub fn simple_name(&self) -> Option<&str> {
        (!self.is_wildcard).then(|| self.path.last())
    }
}

// ============================================================================
// Modifiers
// ============================================================================

/// An annotation use. Arguments are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub name: QualifiedName,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Modifiers {
    pub flags: Vec<ModifierId>,
    pub annotations: Vec<Spanned<Annotation>>,
}

impl Modifiers {
    pub fn has(&self, id: ModifierId) -> bool {
        self.flags.contains(&id)
    }

    /// Explicit access modifier, if any.
    pub fn access(&self) -> Option<AccessLevel> {
        self.flags.iter().find_map(|m| m.access())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.annotations.is_empty()
    }
}

// ============================================================================
// Type declarations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
    Record,
    /// `@interface`
    Annotation,
}

/// `<T extends Bound & Other>`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub name: Ident,
    pub bounds: Vec<ClassType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub kind: TypeDeclKind,
    pub modifiers: Modifiers,
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    /// One entry for classes, any number for interfaces.
    pub extends: Vec<Spanned<ClassType>>,
    pub implements: Vec<Spanned<ClassType>>,
    pub permits: Vec<Spanned<ClassType>>,
    pub record_components: Vec<Param>,
    pub enum_constants: Vec<Spanned<EnumConstant>>,
    pub members: Vec<Spanned<Member>>,
}

impl TypeDecl {
    pub fn new(kind: TypeDeclKind, modifiers: Modifiers, name: Ident) -> Self {
        Self {
            kind,
            modifiers,
            name,
            type_params: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            permits: Vec::new(),
            record_components: Vec::new(),
            enum_constants: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.has(ModifierId::Abstract)
    }

    /// Nested type declarations, in source order.
    pub fn nested_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.members.iter().filter_map(|m| match &m.node {
            Member::Type(t) => Some(t),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match &m.node {
            Member::Field(f) => Some(f),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match &m.node {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }
}

/// `A("label") { ... }` inside an enum body.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstant {
    pub name: Ident,
    /// One span per constructor argument, so callers can recover the exact source text.
    pub arguments: Vec<Span>,
    pub argument_refs: BodyRefs,
    /// Constant-specific class body, if present.
    pub body: Option<Vec<Spanned<Member>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Initializer(InitializerBlock),
    Type(TypeDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub ty: TypeExpr,
    pub declarators: Vec<VarDeclarator>,
}

/// `name[] = initializer` within a field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclarator {
    pub name: Ident,
    /// C-style dimensions after the name (`int a[]`).
    pub extra_dims: usize,
    pub initializer: Option<BodyRefs>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub type_params: Vec<TypeParam>,
    pub return_type: TypeExpr,
    pub name: Ident,
    pub params: Vec<Param>,
    pub throws: Vec<ClassType>,
    /// `None` for abstract, native and interface methods without a body.
    pub body: Option<BodyRefs>,
}

impl MethodDecl {
    /// `name(Type, Type)` as shown in diagrams.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(Param::type_string).collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub modifiers: Modifiers,
    pub type_params: Vec<TypeParam>,
    pub name: Ident,
    pub params: Vec<Param>,
    pub throws: Vec<ClassType>,
    pub body: BodyRefs,
    /// Record compact canonical constructor (`Point { ... }`).
    pub is_compact: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitializerBlock {
    pub is_static: bool,
    pub body: BodyRefs,
}

/// Formal parameter (also used for record components).
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub modifiers: Modifiers,
    pub ty: TypeExpr,
    pub is_varargs: bool,
    pub name: Ident,
}

impl Param {
    /// Parameter type as written, with `...` for varargs.
    pub fn type_string(&self) -> String {
        if self.is_varargs {
            format!("{}...", self.ty)
        } else {
            self.ty.to_string()
        }
    }
}

/// What survives of a skipped body: the class types it uses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyRefs {
    /// Types instantiated with `new`.
    pub created: Vec<ClassType>,
    /// Types named in local declarations, casts, `catch` clauses, `instanceof` tests, class literals and explicit
    /// type arguments.
    pub referenced: Vec<ClassType>,
}

impl BodyRefs {
    /// Every recorded type, instantiations first.
    pub fn types(&self) -> impl Iterator<Item = &ClassType> {
        self.created.iter().chain(&self.referenced)
    }
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        };
        write!(f, "{s}")
    }
}

/// A type as written in a declaration. Annotations on types are dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Primitive(PrimitiveType),
    Class(ClassType),
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    /// Visit every class type reachable from this type, including type arguments and wildcard bounds.
    pub fn walk_class_types<'a>(&'a self, f: &mut impl FnMut(&'a ClassType)) {
        match self {
            TypeExpr::Primitive(_) => {}
            TypeExpr::Class(ct) => ct.walk(f),
            TypeExpr::Array(inner) => inner.walk_class_types(f),
        }
    }

    /// Strip array dimensions.
    pub fn element_type(&self) -> &TypeExpr {
        match self {
            TypeExpr::Array(inner) => inner.element_type(),
            other => other,
        }
    }

    /// Wrap in `dims` array dimensions.
    pub fn with_dims(self, dims: usize) -> TypeExpr {
        (0..dims).fold(self, |ty, _| TypeExpr::Array(Box::new(ty)))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Primitive(p) => write!(f, "{p}"),
            TypeExpr::Class(ct) => write!(f, "{ct}"),
            TypeExpr::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

/// `Outer.Inner<A, B>`: one segment per dotted name part.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    pub segments: Vec<TypeSegment>,
}

impl ClassType {
    pub fn simple(name: impl Into<Ident>) -> Self {
        Self {
            segments: vec![TypeSegment {
                name: name.into(),
                args: None,
            }],
        }
    }

    /// Simple name of the referenced type (last segment, without type arguments).
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(|s| s.name.as_str()).unwrap_or("")
    }

    /// Dotted name without type arguments (`Map.Entry`).
    pub fn erased_name(&self) -> String {
        self.segments.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(".")
    }

    /// Visit this type and then every class type nested in its type arguments.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a ClassType)) {
        f(self);
        for segment in &self.segments {
            for arg in segment.args.iter().flatten() {
                arg.walk_class_types(f);
            }
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSegment {
    pub name: Ident,
    /// `None` without type arguments, `Some(vec![])` for the diamond `<>`.
    pub args: Option<Vec<TypeArg>>,
}

impl fmt::Display for TypeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(args) = &self.args {
            let args: Vec<String> = args.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeArg {
    Type(TypeExpr),
    Wildcard(Option<WildcardBound>),
}

impl TypeArg {
    fn walk_class_types<'a>(&'a self, f: &mut impl FnMut(&'a ClassType)) {
        match self {
            TypeArg::Type(ty) => ty.walk_class_types(f),
            TypeArg::Wildcard(Some(WildcardBound::Extends(ty) | WildcardBound::Super(ty))) => ty.walk_class_types(f),
            TypeArg::Wildcard(None) => {}
        }
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArg::Type(ty) => write!(f, "{ty}"),
            TypeArg::Wildcard(None) => write!(f, "?"),
            TypeArg::Wildcard(Some(WildcardBound::Extends(ty))) => write!(f, "? extends {ty}"),
            TypeArg::Wildcard(Some(WildcardBound::Super(ty))) => write!(f, "? super {ty}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WildcardBound {
    Extends(Box<TypeExpr>),
    Super(Box<TypeExpr>),
}
