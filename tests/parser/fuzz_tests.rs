//! Property tests for crash resistance and determinism.
//!
//! The parser must never panic, whatever the input, and the order in which
//! modifiers are written must not change the result.

use proptest::prelude::*;

use xreflect_foundation::{DeclarationKind, ErrorKind, ImportTable, Modifier, Type};
use xreflect_parser::{DeclarationParser, FieldRef, MethodRef, split_name};

// =============================================================================
// Generators
// =============================================================================

/// Completely random strings.
fn arbitrary_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..200).prop_map(|chars| chars.into_iter().collect())
}

/// Strings built from declaration-like tokens.
fn declaration_like() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        "(public|private|protected|static|final|abstract|native)".prop_map(String::from),
        "(int|void|String|long|Foo|java.util.UUID)".prop_map(String::from),
        "[A-Za-z_$][A-Za-z0-9_$]{0,8}".prop_map(String::from),
        Just("package".to_string()),
        Just("class".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("<".to_string()),
        Just(">".to_string()),
        Just("[]".to_string()),
        Just(",".to_string()),
        Just(";".to_string()),
        Just("{}".to_string()),
    ];
    let sep = prop_oneof![Just(" "), Just(""), Just("\t")];
    prop::collection::vec((token, sep), 0..24).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(token, sep)| format!("{token}{sep}"))
            .collect::<String>()
    })
}

fn member_modifiers() -> impl Strategy<Value = Vec<Modifier>> {
    let non_visibility: Vec<Modifier> = Modifier::ALL
        .into_iter()
        .filter(|m| !m.is_visibility())
        .collect();
    (
        prop::option::of(prop::sample::select(Modifier::VISIBILITY.to_vec())),
        prop::sample::subsequence(non_visibility, 0..4),
    )
        .prop_map(|(visibility, rest)| visibility.into_iter().chain(rest).collect::<Vec<_>>())
        .prop_shuffle()
}

fn parse_every_kind(input: &str) {
    let imports = ImportTable::new().with("Foo", Type::class("a.Foo"));
    let parser = DeclarationParser::new(input).imports(&imports);
    for kind in DeclarationKind::ALL {
        let _ = parser.parse(kind);
    }
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(input in arbitrary_string()) {
        parse_every_kind(&input);
    }

    #[test]
    fn never_panics_on_declaration_like_input(input in declaration_like()) {
        parse_every_kind(&input);
    }

    #[test]
    fn parsing_is_deterministic(input in declaration_like()) {
        let imports = ImportTable::new().with("Foo", Type::class("a.Foo"));
        for kind in DeclarationKind::ALL {
            let first = DeclarationParser::new(input.as_str()).imports(&imports).parse(kind);
            let second = DeclarationParser::new(input.as_str()).imports(&imports).parse(kind);
            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                (a, b) => prop_assert!(false, "{:?} vs {:?}", a.is_ok(), b.is_ok()),
            }
        }
    }

    #[test]
    fn modifier_order_does_not_matter(modifiers in member_modifiers()) {
        let flags: String = modifiers.iter().map(|m| format!("{m} ")).collect();
        let input = format!("{flags}int value;");

        let field = DeclarationParser::new(input.as_str())
            .parse_field(FieldRef::new())
            .unwrap();

        prop_assert_eq!(
            field.accessible,
            modifiers.contains(&Modifier::Private) || modifiers.contains(&Modifier::Protected)
        );
        prop_assert_eq!(field.is_static, modifiers.contains(&Modifier::Static));
        prop_assert_eq!(field.is_final, modifiers.contains(&Modifier::Final));
    }

    #[test]
    fn any_repeated_modifier_is_rejected(
        modifiers in member_modifiers(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!modifiers.is_empty());
        let repeated = modifiers[pick.index(modifiers.len())];
        let flags: String = modifiers
            .iter()
            .chain(std::iter::once(&repeated))
            .map(|m| format!("{m} "))
            .collect();
        let input = format!("{flags}void run();");

        let err = DeclarationParser::new(input.as_str())
            .parse_method(MethodRef::new())
            .unwrap_err();
        prop_assert!(matches!(err.kind, ErrorKind::RepeatedModifier(_)));
    }

    #[test]
    fn array_depth_is_counted(depth in 0usize..6) {
        let input = format!("int{} grid();", "[]".repeat(depth));
        let method = DeclarationParser::new(input.as_str())
            .parse_method(MethodRef::new())
            .unwrap();
        prop_assert_eq!(method.return_type.map(|t| t.dimensions()), Some(depth));
    }

    #[test]
    fn split_name_rejoins(segments in prop::collection::vec("[A-Za-z0-9_]{1,6}", 1..5)) {
        let name = segments.join("$");
        prop_assert_eq!(split_name(&name), segments);
    }
}
