//! Types implicitly imported from `java.lang`.
//!
//! Every Java compilation unit sees the public top-level types of `java.lang` without an import. The generator only
//! needs to know their names to qualify references such as `String` or `Exception` when dependency resolution is
//! asked to cover the JDK.
//!
//! ## Examples
//! ```rust
//! use pgen_core::lang::java_lang;
//!
//! assert!(java_lang::is_java_lang("String"));
//! assert_eq!(java_lang::qualify("Exception").as_deref(), Some("java.lang.Exception"));
//! assert!(!java_lang::is_java_lang("List"));
//! ```

/// Package name of the implicit import.
pub const PACKAGE: &str = "java.lang";

/// Public top-level types of `java.lang` (Java 21).
pub const TYPES: &[&str] = &[
    // Core
    "Object",
    "Class",
    "ClassLoader",
    "ClassValue",
    "Enum",
    "Record",
    "String",
    "StringBuilder",
    "StringBuffer",
    "CharSequence",
    "Comparable",
    "Iterable",
    "AutoCloseable",
    "Cloneable",
    "Readable",
    "Appendable",
    "Runnable",
    "Thread",
    "ThreadGroup",
    "ThreadLocal",
    "InheritableThreadLocal",
    "System",
    "Runtime",
    "Process",
    "ProcessBuilder",
    "ProcessHandle",
    "Math",
    "StrictMath",
    "Module",
    "ModuleLayer",
    "Package",
    "StackTraceElement",
    "StackWalker",
    "SecurityManager",
    "ScopedValue",
    // Boxed primitives
    "Boolean",
    "Byte",
    "Character",
    "Short",
    "Integer",
    "Long",
    "Float",
    "Double",
    "Number",
    "Void",
    // Annotations
    "Deprecated",
    "FunctionalInterface",
    "Override",
    "SafeVarargs",
    "SuppressWarnings",
    // Throwables
    "Throwable",
    "Exception",
    "Error",
    "RuntimeException",
    "ArithmeticException",
    "ArrayIndexOutOfBoundsException",
    "ArrayStoreException",
    "ClassCastException",
    "ClassNotFoundException",
    "CloneNotSupportedException",
    "EnumConstantNotPresentException",
    "IllegalAccessException",
    "IllegalArgumentException",
    "IllegalCallerException",
    "IllegalMonitorStateException",
    "IllegalStateException",
    "IllegalThreadStateException",
    "IndexOutOfBoundsException",
    "InstantiationException",
    "InterruptedException",
    "LayerInstantiationException",
    "MatchException",
    "NegativeArraySizeException",
    "NoSuchFieldException",
    "NoSuchMethodException",
    "NullPointerException",
    "NumberFormatException",
    "ReflectiveOperationException",
    "SecurityException",
    "StringIndexOutOfBoundsException",
    "TypeNotPresentException",
    "UnsupportedOperationException",
    "WrongThreadException",
    "AbstractMethodError",
    "AssertionError",
    "BootstrapMethodError",
    "ClassCircularityError",
    "ClassFormatError",
    "ExceptionInInitializerError",
    "IllegalAccessError",
    "IncompatibleClassChangeError",
    "InstantiationError",
    "InternalError",
    "LinkageError",
    "NoClassDefFoundError",
    "NoSuchFieldError",
    "NoSuchMethodError",
    "OutOfMemoryError",
    "StackOverflowError",
    "UnknownError",
    "UnsatisfiedLinkError",
    "UnsupportedClassVersionError",
    "VerifyError",
    "VirtualMachineError",
];

/// Return `true` if `simple_name` is a public top-level type of `java.lang`.
pub fn is_java_lang(simple_name: &str) -> bool {
    TYPES.contains(&simple_name)
}

/// Qualify a `java.lang` simple name, or `None` if it is not one.
pub fn qualify(simple_name: &str) -> Option<String> {
    is_java_lang(simple_name).then(|| format!("{PACKAGE}.{simple_name}"))
}
