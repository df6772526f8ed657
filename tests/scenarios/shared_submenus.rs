//! Scenario: one submenu reused under several parents, and a menu that
//! accidentally contains itself.

use std::collections::HashSet;

use treemenu::{label, MenuError, MenuItem, SequentialIds, TreeMenuResolver};

fn colour_menu() -> MenuItem<()> {
    MenuItem::parent(
        label("Colour"),
        vec![
            MenuItem::simple(label("Red"), "RED"),
            MenuItem::simple(label("Blue"), "BLUE"),
        ],
    )
}

#[test]
fn scenario_shared_submenu_gets_distinct_ids_per_parent() {
    let colour = colour_menu();
    let menu = vec![
        MenuItem::parent(label("Text"), vec![colour.clone()]),
        MenuItem::parent(label("Background"), vec![colour]),
    ];

    let mut resolver = TreeMenuResolver::builder()
        .id_generator(SequentialIds::new("s"))
        .build(&menu)
        .unwrap();
    assert_eq!(resolver.len(), 8);

    let ids: HashSet<_> = resolver.index().iter().map(|n| n.id().clone()).collect();
    assert_eq!(ids.len(), 8);

    // Each copy of "Colour" goes back to its own parent.
    for (parent, colour_id) in [("s-1", "s-2"), ("s-5", "s-6")] {
        resolver.choose(parent).unwrap();
        resolver.choose(colour_id).unwrap();
        resolver.go_back().unwrap();
        assert_eq!(
            resolver.current_node_id().map(|id| id.as_str()),
            Some(parent)
        );
        resolver.go_back().unwrap();
    }
}

#[test]
fn scenario_menu_containing_itself_is_rejected() {
    let root = MenuItem::<()>::parent(label("Root"), vec![]);
    let more = MenuItem::parent(label("More"), vec![]);
    root.push_child(more.clone());
    more.push_child(root.clone());

    let err = TreeMenuResolver::new(&[root]).unwrap_err();

    match err {
        MenuError::CircularReference { cycle } => {
            assert_eq!(cycle, vec!["Root", "More", "Root"]);
        }
        other => panic!("expected CircularReference, got {other:?}"),
    }
}

#[test]
fn scenario_fresh_resolvers_mint_fresh_ids() {
    let menu = vec![colour_menu()];

    let first = TreeMenuResolver::new(&menu).unwrap();
    let second = TreeMenuResolver::new(&menu).unwrap();

    let first_ids: HashSet<_> = first.index().iter().map(|n| n.id().clone()).collect();
    assert!(second.index().iter().all(|n| !first_ids.contains(n.id())));
}
