#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the declaration forms that shape a class diagram and on the parser's
/// error recovery behavior (avoiding cascaded errors).
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<CompilationUnit, Vec<CompileError>> {
        let tokens = lexer::lex(source).map_err(|_| vec![])?;
        parse(&tokens)
    }

    fn single_type(source: &str) -> TypeDecl {
        let unit = parse_str(source).unwrap_or_else(|errs| panic!("parse failed: {errs:?}"));
        assert_eq!(unit.types.len(), 1);
        unit.types.into_iter().next().map(|t| t.node).unwrap()
    }

    #[test]
    fn test_package_and_imports() {
        let unit = parse_str(
            r#"
package com.example.app;

import java.util.List;
import java.util.*;
import static java.lang.Math.max;

class A {}
"#,
        )
        .unwrap();
        assert_eq!(unit.package_name(), "com.example.app");
        assert_eq!(unit.imports.len(), 3);
        assert_eq!(unit.imports[0].node.simple_name(), Some("List"));
        assert!(unit.imports[1].node.is_wildcard);
        assert_eq!(unit.imports[1].node.path.to_string(), "java.util");
        assert!(unit.imports[2].node.is_static);
    }

    #[test]
    fn test_default_package_and_annotated_type() {
        let unit = parse_str("@Deprecated public class A {}").unwrap();
        assert!(unit.package.is_none());
        assert_eq!(unit.package_name(), "");
        let decl = &unit.types[0].node;
        assert_eq!(decl.modifiers.annotations.len(), 1);
        assert_eq!(decl.modifiers.access(), Some(pgen_core::lang::modifiers::AccessLevel::Public));
    }

    #[test]
    fn test_class_header() {
        let decl = single_type(
            "public abstract class Repo<T extends Entity & Serializable> extends Base<T> implements Store<T>, Closeable {}",
        );
        assert_eq!(decl.kind, TypeDeclKind::Class);
        assert!(decl.is_abstract());
        assert_eq!(decl.name, "Repo");
        assert_eq!(decl.type_params.len(), 1);
        assert_eq!(decl.type_params[0].bounds.len(), 2);
        assert_eq!(decl.extends[0].node.to_string(), "Base<T>");
        let implemented: Vec<String> = decl.implements.iter().map(|t| t.node.to_string()).collect();
        assert_eq!(implemented, vec!["Store<T>", "Closeable"]);
    }

    #[test]
    fn test_interface_extends_many_and_sealed() {
        let decl = single_type("public sealed interface Shape extends A, B permits Circle, Square {}");
        assert_eq!(decl.kind, TypeDeclKind::Interface);
        assert_eq!(decl.extends.len(), 2);
        assert_eq!(decl.permits.len(), 2);
        assert!(decl.modifiers.has(ModifierId::Sealed));
    }

    #[test]
    fn test_non_sealed_modifier() {
        let decl = single_type("non-sealed class Circle extends Shape {}");
        assert!(decl.modifiers.has(ModifierId::NonSealed));
    }

    #[test]
    fn test_fields() {
        let decl = single_type(
            r#"
class Fields {
    private int a, b = 2, c[];
    protected final java.util.Map<String, List<? extends Number>> map = new HashMap<>();
    String[] names = { "x", "y" };
    static final long SERIAL = 1L << 3;
}
"#,
        );
        let fields: Vec<&FieldDecl> = decl.fields().collect();
        assert_eq!(fields.len(), 4);

        let names: Vec<&str> = fields[0].declarators.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(fields[0].declarators[2].extra_dims, 1);

        assert_eq!(fields[1].ty.to_string(), "java.util.Map<String, List<? extends Number>>");
        let created = &fields[1].declarators[0].initializer.as_ref().unwrap().created;
        assert_eq!(created[0].to_string(), "HashMap<>");

        assert_eq!(fields[2].ty.to_string(), "String[]");
    }

    #[test]
    fn test_methods() {
        let decl = single_type(
            r#"
abstract class Methods {
    public abstract void run();
    protected <T> List<T> wrap(T value, int... rest) throws IOException, Exception { return null; }
    int legacy(String args[])[] { return new int[0]; }
    @Override
    public String toString() { return "x"; }
}
"#,
        );
        let methods: Vec<&MethodDecl> = decl.methods().collect();
        assert_eq!(methods.len(), 4);
        assert_eq!(methods[0].signature(), "run()");
        assert!(methods[0].body.is_none());

        assert_eq!(methods[1].signature(), "wrap(T, int...)");
        assert_eq!(methods[1].return_type.to_string(), "List<T>");
        assert_eq!(methods[1].throws.len(), 2);
        assert_eq!(methods[1].type_params[0].name, "T");

        assert_eq!(methods[2].signature(), "legacy(String[])");
        assert_eq!(methods[2].return_type.to_string(), "int[]");

        assert_eq!(methods[3].modifiers.annotations[0].node.name.to_string(), "Override");
    }

    #[test]
    fn test_constructors_and_initializers() {
        let decl = single_type(
            r#"
class Ctors {
    static { init(); }
    { count++; }
    public Ctors() { this(1); }
    private Ctors(int n) throws Exception { helper = new Helper(n); }
}
"#,
        );
        let mut ctors = 0;
        let mut inits = Vec::new();
        for member in &decl.members {
            match &member.node {
                Member::Constructor(c) => {
                    ctors += 1;
                    assert_eq!(c.name, "Ctors");
                }
                Member::Initializer(i) => inits.push(i.is_static),
                other => panic!("unexpected member {other:?}"),
            }
        }
        assert_eq!(ctors, 2);
        assert_eq!(inits, vec![true, false]);
    }

    #[test]
    fn test_body_records_new_references() {
        let decl = single_type(
            r#"
class Factory {
    Object make() {
        Runnable r = new Runnable() { public void run() { new Inner(); } };
        int[] xs = new int[4];
        return new java.util.ArrayList<String>(List.of(new Thing[2]));
    }
}
"#,
        );
        let method = decl.methods().next().unwrap();
        let created: Vec<String> = method.body.as_ref().unwrap().created.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            created,
            vec!["Runnable", "Inner", "java.util.ArrayList<String>", "Thing"]
        );
    }

    #[test]
    fn test_explicit_type_arguments_do_not_split_declarators() {
        let decl = single_type(
            r#"
class A {
    Map<String, Integer> m = Collections.<String, Integer>emptyMap(), n;
}
"#,
        );
        let fields: Vec<&FieldDecl> = decl.fields().collect();
        assert_eq!(fields.len(), 1);
        let names: Vec<&str> = fields[0].declarators.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["m", "n"]);
        let init = fields[0].declarators[0].initializer.as_ref().unwrap();
        let referenced: Vec<String> = init.referenced.iter().map(|c| c.to_string()).collect();
        assert_eq!(referenced, vec!["String", "Integer"]);
    }

    #[test]
    fn test_body_records_declared_and_cast_types() {
        let decl = single_type(
            r#"
class Worker {
    void work(Object input) {
        java.util.List<Job> jobs = load();
        for (Job job : jobs) {
            if (input instanceof Task task) { run(task); }
        }
        var count = (Counter) input;
        try (Lock lock = acquire()) {
            process(lock, count);
        } catch (IOException | TimeoutException e) {
            log(Worker.class, (int) 3);
        }
        if (ready) return;
        int total = a < b ? 1 : 2;
    }
}
"#,
        );
        let method = decl.methods().next().unwrap();
        let body = method.body.as_ref().unwrap();
        assert!(body.created.is_empty());
        let referenced: Vec<String> = body.referenced.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            referenced,
            vec![
                "java.util.List<Job>",
                "Job",
                "Task",
                "Counter",
                "Lock",
                "IOException",
                "TimeoutException",
                "TimeoutException",
                "Worker",
            ]
        );
    }

    #[test]
    fn test_enum_constants_with_arguments() {
        let decl = single_type(
            r#"
public enum TestEnum implements Labeled {
    A("TestA"),
    B("TestB", 2) { @Override public String label() { return "b"; } },
    @Deprecated C;

    private final String label;
    TestEnum(String label) { this.label = label; }
}
"#,
        );
        assert_eq!(decl.kind, TypeDeclKind::Enum);
        assert_eq!(decl.implements.len(), 1);
        let names: Vec<&str> = decl.enum_constants.iter().map(|c| c.node.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let b = &decl.enum_constants[1].node;
        assert_eq!(b.arguments.len(), 2);
        assert!(b.body.is_some());
        assert_eq!(decl.fields().count(), 1);
    }

    #[test]
    fn test_enum_argument_spans_recover_source() {
        let source = r#"enum E { A("x, y", new Foo(1, 2)), B() }"#;
        let decl = single_type(source);
        let a = &decl.enum_constants[0].node;
        let texts: Vec<&str> = a.arguments.iter().map(|s| s.text(source)).collect();
        assert_eq!(texts, vec![r#""x, y""#, "new Foo(1, 2)"]);
        assert_eq!(a.argument_refs.created[0].to_string(), "Foo");
        assert!(decl.enum_constants[1].node.arguments.is_empty());
    }

    #[test]
    fn test_enum_without_constants() {
        let decl = single_type("enum Empty { ; void f() {} }");
        assert!(decl.enum_constants.is_empty());
        assert_eq!(decl.methods().count(), 1);
    }

    #[test]
    fn test_record() {
        let decl = single_type(
            r#"
public record Point<T>(int x, @NotNull T y) implements Comparable<Point<T>> {
    public Point { if (x < 0) throw new IllegalArgumentException(); }
    static Point<Integer> origin() { return new Point<>(0, 0); }
}
"#,
        );
        assert_eq!(decl.kind, TypeDeclKind::Record);
        assert_eq!(decl.record_components.len(), 2);
        assert_eq!(decl.record_components[1].ty.to_string(), "T");
        let compact = decl.members.iter().find_map(|m| match &m.node {
            Member::Constructor(c) => Some(c),
            _ => None,
        });
        assert!(compact.is_some_and(|c| c.is_compact));
    }

    #[test]
    fn test_field_named_record_is_not_a_record() {
        let decl = single_type("class A { Record record; record r; }");
        assert_eq!(decl.fields().count(), 2);
    }

    #[test]
    fn test_nested_types() {
        let decl = single_type(
            r#"
class Outer {
    static class Nested { class Deeper {} }
    interface Callback { void call(); }
    enum Mode { ON, OFF }
    @interface Marker { int value() default 1; String[] tags() default {}; }
}
"#,
        );
        let nested: Vec<(&str, TypeDeclKind)> = decl.nested_types().map(|t| (t.name.as_str(), t.kind)).collect();
        assert_eq!(
            nested,
            vec![
                ("Nested", TypeDeclKind::Class),
                ("Callback", TypeDeclKind::Interface),
                ("Mode", TypeDeclKind::Enum),
                ("Marker", TypeDeclKind::Annotation),
            ]
        );
        let marker = decl.nested_types().last().unwrap();
        assert_eq!(marker.methods().count(), 2);
    }

    #[test]
    fn test_interface_default_and_static_methods() {
        let decl = single_type(
            r#"
interface Greeter {
    String NAME = "g";
    String greet(String who);
    default String hello() { return greet("hello"); }
    static Greeter create() { return who -> who; }
    private void helper() {}
}
"#,
        );
        let methods: Vec<&MethodDecl> = decl.methods().collect();
        assert_eq!(methods.len(), 4);
        assert!(methods[1].modifiers.has(ModifierId::Default));
        assert_eq!(decl.fields().count(), 1);
    }

    #[test]
    fn test_receiver_parameter_is_dropped() {
        let decl = single_type("class A { void f(A this, int x) {} }");
        assert_eq!(decl.methods().next().unwrap().signature(), "f(int)");
    }

    #[test]
    fn test_module_info_yields_no_types() {
        let unit = parse_str("open module com.example { requires java.base; exports com.example.api; }").unwrap();
        assert!(unit.types.is_empty());
    }

    #[test]
    fn test_top_level_garbage_is_single_error() {
        let err = parse_str("class A {} int x = 1; class B {}").expect_err("top-level field is not a type");
        assert_eq!(err.len(), 1, "no cascade: {err:?}");
        assert!(err[0].message.contains("Expected class, interface, enum or record declaration"));
    }

    #[test]
    fn test_member_errors_recover_inside_body() {
        let err = parse_str(
            r#"
class A {
    int = 3;
    void ok() {}
    String 42 broken;
    void alsoOk() {}
}
class B {}
"#,
        )
        .expect_err("two broken members");
        assert_eq!(err.len(), 2, "{err:?}");
    }

    #[test]
    fn test_unclosed_body_reports_error() {
        let err = parse_str("class A { void f() { if (x) { }").expect_err("unclosed");
        assert!(err.iter().any(|e| e.message.contains("Unclosed '{'")), "{err:?}");
    }

    #[test]
    fn test_empty_input() {
        let unit = parse_str("").unwrap();
        assert!(unit.types.is_empty());
        assert!(parse(&[]).unwrap().types.is_empty());
    }
}
