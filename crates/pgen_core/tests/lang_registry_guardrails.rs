use std::collections::{HashMap, HashSet};

use pgen_core::lang::{java_lang, keywords, modifiers, operators, punctuation};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operator_spellings_unique_and_disjoint_from_punctuation() {
    let mut seen: HashSet<&'static str> = HashSet::new();

    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        assert!(seen.insert(info.spelling), "duplicate operator spelling {:?}", info.spelling);
        assert_eq!(
            punctuation::from_str(info.spelling),
            None,
            "operator spelling {:?} collides with punctuation",
            info.spelling
        );
    }
}

#[test]
fn operators_never_merge_closing_angles() {
    for spelling in [">>", ">>>", ">>=", ">>>="] {
        assert_eq!(operators::from_str(spelling), None, "{spelling} must stay split");
    }
}

#[test]
fn keyword_modifiers_round_trip_through_keyword_registry() {
    for info in modifiers::MODIFIERS {
        match info.keyword {
            Some(keyword) => {
                assert_eq!(keywords::as_str(keyword), info.canonical);
                assert_eq!(modifiers::from_keyword(keyword), Some(info.id));
                assert_eq!(
                    keywords::category(keyword),
                    keywords::KeywordCategory::Modifier,
                    "{} should be categorized as a modifier keyword",
                    info.canonical
                );
            }
            None => {
                assert_eq!(keywords::from_str(info.canonical), None);
                assert_eq!(modifiers::from_contextual(info.canonical), Some(info.id));
            }
        }
    }
}

#[test]
fn java_lang_types_are_unique_and_not_keywords() {
    let mut seen = HashSet::new();
    for &name in java_lang::TYPES {
        assert!(seen.insert(name), "duplicate java.lang type {name}");
        assert_eq!(keywords::from_str(name), None, "{name} collides with a keyword");
        assert!(name.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    }
}
