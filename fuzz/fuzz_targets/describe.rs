#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use pgen::{ClassDescriptorGenerator, DependencyLevel, GeneratorConfig, PumlBodyGenerator, Scope, Visibility};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let config = GeneratorConfig::new()
            .with_method_visibility(Visibility::Private)
            .with_attribute_visibility(Visibility::Private)
            .with_dependency_level(DependencyLevel::All)
            .with_show_enum_arguments(true);
        let generator = ClassDescriptorGenerator::new(Scope::default(), config);
        if let Ok(descriptors) = generator.generate_for_source(Path::new("Fuzz.java"), source) {
            let _ = PumlBodyGenerator::new(true).generate_puml_body(&descriptors);
        }
    }
});
