//! Property-based tests for pgen
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use std::path::Path;

use pgen::{ClassDescriptorGenerator, GeneratorConfig, Scope, Visibility};
use pgen_core::lang::keywords;
use pgen_core::lang::modifiers::AccessLevel;
use proptest::prelude::*;

// =============================================================================
// Frontend robustness
// =============================================================================

proptest! {
    /// Property: arbitrary input never panics the lexer or parser
    #[test]
    fn frontend_never_panics(source in "\\PC{0,200}") {
        if let Ok(tokens) = pgen::lexer::lex(&source) {
            let _ = pgen::parser::parse(&tokens);
        }
    }

    /// Property: Java-looking noise never panics the parser
    #[test]
    fn parser_survives_java_fragments(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "class", "interface", "enum", "record", "@interface", "A", "B", "<", ">", "{", "}", "(", ")",
                ";", ",", "extends", "implements", "public", "static", "int", "String", "=", "new", "@Override",
                "?", "[]", ".", "...", "\"s\"", "42",
            ]),
            0..60,
        )
    ) {
        let source = parts.join(" ");
        // Stray closers are lexer errors; everything else reaches the parser.
        if let Ok(tokens) = pgen::lexer::lex(&source) {
            let _ = pgen::parser::parse(&tokens);
        }
    }
}

// =============================================================================
// Descriptor generation
// =============================================================================

#[cfg(test)]
mod generation_properties {
    use super::*;

    fn ident_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-zA-Z0-9]{0,8}".prop_filter("Not a keyword", |s| {
            keywords::from_str(s).is_none()
                && !matches!(
                    s.as_str(),
                    "true" | "false" | "null" | "record" | "sealed" | "permits" | "var" | "yield"
                )
        })
    }

    fn access_strategy() -> impl Strategy<Value = AccessLevel> {
        prop::sample::select(vec![
            AccessLevel::Public,
            AccessLevel::Protected,
            AccessLevel::Package,
            AccessLevel::Private,
        ])
    }

    fn modifier(access: AccessLevel) -> &'static str {
        match access {
            AccessLevel::Public => "public ",
            AccessLevel::Protected => "protected ",
            AccessLevel::Package => "",
            AccessLevel::Private => "private ",
        }
    }

    fn class_with_fields(fields: &[(String, AccessLevel)]) -> String {
        let body: Vec<String> = fields
            .iter()
            .enumerate()
            .map(|(i, (name, access))| format!("    {}int {name}{i};", modifier(*access)))
            .collect();
        format!("package gen;\n\nclass Generated {{\n{}\n}}\n", body.join("\n"))
    }

    fn attribute_count(source: &str, visibility: Visibility) -> usize {
        let generator = ClassDescriptorGenerator::new(
            Scope::default(),
            GeneratorConfig::new().with_attribute_visibility(visibility),
        );
        let descriptors = generator
            .generate_for_source(Path::new("Generated.java"), source)
            .expect("generated class parses");
        descriptors[0].attributes().len()
    }

    proptest! {
        /// Property: widening the visibility threshold never hides a field
        #[test]
        fn attribute_visibility_is_monotonic(
            fields in prop::collection::vec((ident_strategy(), access_strategy()), 0..12)
        ) {
            let source = class_with_fields(&fields);
            let counts: Vec<usize> = [
                Visibility::None,
                Visibility::Public,
                Visibility::Package,
                Visibility::Protected,
                Visibility::Private,
            ]
            .into_iter()
            .map(|v| attribute_count(&source, v))
            .collect();

            prop_assert_eq!(counts[0], 0);
            prop_assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{:?}", counts);
            prop_assert_eq!(counts[4], fields.len());
        }

        /// Property: every declared class is described exactly once, in declaration order
        #[test]
        fn declared_classes_are_described_in_order(
            names in prop::collection::btree_set("[A-Z][a-z]{0,6}", 1..8)
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let source: String = names.iter().map(|n| format!("class {n} {{}}\n")).collect();
            let descriptors = ClassDescriptorGenerator::new(Scope::default(), GeneratorConfig::new())
                .generate_for_source(Path::new("Many.java"), &source)
                .expect("classes parse");
            let described: Vec<&str> = descriptors.iter().map(|d| d.class_name()).collect();
            prop_assert_eq!(described, names.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
