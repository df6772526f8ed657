//! Property tests for menu definition files.

use proptest::prelude::*;

use treemenu::{MenuEntryDef, MenuFile, TreeMenuResolver};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,12}").unwrap()
}

fn resolve() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[A-Z_]{1,10}").unwrap())
}

fn entry() -> impl Strategy<Value = MenuEntryDef> {
    let leaf = (label(), resolve()).prop_map(|(label, resolve)| MenuEntryDef {
        label: Some(label),
        resolve,
        ..Default::default()
    });
    leaf.prop_recursive(3, 24, 4, |inner| {
        (label(), resolve(), proptest::collection::vec(inner, 0..4)).prop_map(
            |(label, resolve, children)| MenuEntryDef {
                label: Some(label),
                resolve,
                children,
                ..Default::default()
            },
        )
    })
}

fn count(entries: &[MenuEntryDef]) -> usize {
    entries.iter().map(|e| 1 + count(&e.children)).sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a serialized menu file parses back to the same definition
    /// and flattens to one node per entry.
    #[test]
    fn property_menu_file_toml_round_trip(menu in proptest::collection::vec(entry(), 0..5)) {
        let file = MenuFile { menu, ..Default::default() };

        let text = toml::to_string(&file).unwrap();
        let parsed: MenuFile = toml::from_str(&text).unwrap();
        prop_assert_eq!(&parsed, &file);

        let resolver: TreeMenuResolver<()> = TreeMenuResolver::new(&parsed.to_menu()).unwrap();
        prop_assert_eq!(resolver.len(), count(&file.menu));

        let top: Vec<Option<String>> = resolver
            .displayable_menu()
            .iter()
            .map(|e| e.label().map(str::to_string))
            .collect();
        let expected: Vec<Option<String>> = file.menu.iter().map(|e| e.label.clone()).collect();
        prop_assert_eq!(top, expected);
    }
}
