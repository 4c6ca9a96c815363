use categoria::{Category, Error, MAX_NAME_LEN};
use proptest::prelude::*;

/// Names whose trimmed length lies in `1..=MAX_NAME_LEN`.
fn valid_name() -> impl Strategy<Value = String> {
    (
        "[ \t]{0,4}",
        "[a-zA-Z0-9À-ÿ][a-zA-Z0-9À-ÿ ]{0,253}[a-zA-Z0-9À-ÿ]|[a-zA-Z0-9À-ÿ]",
        "[ \t\n]{0,4}",
    )
        .prop_map(|(lead, core, trail)| format!("{lead}{core}{trail}"))
}

proptest! {
    #[test]
    fn prop_valid_names_are_stored_trimmed(name in valid_name()) {
        let category = Category::new(&name, "", true).unwrap();

        prop_assert_eq!(category.name(), name.trim());
    }

    #[test]
    fn prop_blank_names_are_rejected(name in "[ \t\n\r]{0,20}") {
        prop_assert!(matches!(Category::new(&name, "", true), Err(Error::NameRequired)));
    }

    #[test]
    fn prop_long_names_are_rejected(extra in 1usize..50, pad in "[ ]{0,3}") {
        let name = format!("{pad}{}{pad}", "x".repeat(MAX_NAME_LEN + extra));

        prop_assert!(
            matches!(Category::new(&name, "", true), Err(Error::NameTooLong { .. })),
            "expected NameTooLong"
        );
    }

    #[test]
    fn prop_dict_round_trip(
        name in valid_name(),
        description in any::<String>(),
        is_active in any::<bool>(),
    ) {
        let original = Category::new(&name, description.clone(), is_active).unwrap();

        let reconstructed = Category::from_dict(&original.to_dict()).unwrap();

        prop_assert_eq!(&reconstructed, &original);
        prop_assert_eq!(reconstructed.name(), original.name());
        prop_assert_eq!(reconstructed.description(), description.as_str());
        prop_assert_eq!(reconstructed.is_active(), is_active);
    }

    #[test]
    fn prop_unchanged_update_records_nothing(name in valid_name(), description in any::<String>()) {
        let mut category = Category::new(&name, description.clone(), true).unwrap();
        category.clear_domain_events();

        let current = category.name().to_string();
        category.update(Some(&current), Some(&description)).unwrap();

        prop_assert!(category.domain_events().is_empty());
    }
}
