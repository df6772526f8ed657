//! Property tests for flattening and navigation.

use proptest::prelude::*;
use serde_json::json;

use treemenu::{MenuError, MenuItem, NodeId, SequentialIds, TreeMenuResolver};

/// Shape of a generated menu node; labels are assigned afterwards.
#[derive(Debug, Clone)]
struct Shape {
    action: bool,
    children: Vec<Shape>,
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = any::<bool>().prop_map(|action| Shape {
        action,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 48, 5, |inner| {
        (any::<bool>(), proptest::collection::vec(inner, 0..5))
            .prop_map(|(action, children)| Shape { action, children })
    })
}

fn forest() -> impl Strategy<Value = Vec<Shape>> {
    proptest::collection::vec(shape(), 0..6)
}

/// Build menu items labelled by their path ("0", "0.1", ...).
fn build(shapes: &[Shape], prefix: &str) -> Vec<MenuItem<()>> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let path = if prefix.is_empty() {
                i.to_string()
            } else {
                format!("{}.{}", prefix, i)
            };
            let data = Some(json!({ "label": path }));
            let children = build(&s.children, &path);
            if s.action {
                MenuItem::simple(data, format!("ACT:{}", path)).with_children(children)
            } else {
                MenuItem::parent(data, children)
            }
        })
        .collect()
}

fn resolver(shapes: &[Shape], inject: bool) -> TreeMenuResolver<()> {
    let mut builder = TreeMenuResolver::builder().id_generator(SequentialIds::new("p"));
    if inject {
        builder = builder.inject_id_key("id");
    }
    builder.build(&build(shapes, "")).unwrap()
}

fn listing(resolver: &TreeMenuResolver<()>) -> Vec<String> {
    resolver
        .displayable_menu()
        .iter()
        .map(|e| e.label().unwrap().to_string())
        .collect()
}

fn listing_ids(resolver: &TreeMenuResolver<()>) -> Vec<NodeId> {
    resolver
        .displayable_menu()
        .iter()
        .map(|e| e.id.clone())
        .collect()
}

/// Labels the children of the node at `path` must list, in input order.
fn child_labels(shapes: &[Shape], path: &str) -> Vec<String> {
    let mut level = shapes;
    let mut node = None;
    for step in path.split('.') {
        let shape = &level[step.parse::<usize>().unwrap()];
        level = &shape.children;
        node = Some(shape);
    }
    let width = node.map_or(0, |shape| shape.children.len());
    (0..width).map(|i| format!("{}.{}", path, i)).collect()
}

fn count(shapes: &[Shape]) -> usize {
    shapes.iter().map(|s| 1 + count(&s.children)).sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the top level lists exactly the input roots, in order.
    #[test]
    fn property_root_listing_matches_input(shapes in forest()) {
        let resolver = resolver(&shapes, false);

        let expected: Vec<String> = (0..shapes.len()).map(|i| i.to_string()).collect();
        prop_assert_eq!(listing(&resolver), expected);
        prop_assert_eq!(resolver.len(), count(&shapes));
    }

    /// PROPERTY: choosing an interior node lists its children; `go_back`
    /// restores the previous level.
    #[test]
    fn property_choose_then_back_restores_level(shapes in forest(), walk in proptest::collection::vec(any::<prop::sample::Index>(), 0..6)) {
        let mut resolver = resolver(&shapes, false);

        for pick in walk {
            let ids = listing_ids(&resolver);
            if ids.is_empty() {
                break;
            }
            let before = listing(&resolver);
            let id = pick.get(&ids).clone();
            let has_children = resolver.node(id.as_str()).unwrap().has_children();

            resolver.choose(id.as_str()).unwrap();

            if has_children {
                let label = resolver.node(id.as_str()).unwrap().label().unwrap().to_string();
                prop_assert_eq!(listing(&resolver), child_labels(&shapes, &label));

                resolver.go_back().unwrap();
                prop_assert_eq!(listing(&resolver), before);

                resolver.choose(id.as_str()).unwrap();
            } else {
                prop_assert_eq!(listing(&resolver), before);
            }
        }
    }

    /// PROPERTY: `go_back` at the top level always fails, whatever came before.
    #[test]
    fn property_back_at_root_fails(shapes in forest(), depth in 0usize..4) {
        let mut resolver = resolver(&shapes, false);

        for _ in 0..depth {
            let interior = listing_ids(&resolver)
                .into_iter()
                .find(|id| resolver.node(id.as_str()).unwrap().has_children());
            match interior {
                Some(id) => { resolver.choose(id.as_str()).unwrap(); }
                None => break,
            }
        }
        while resolver.current_node_id().is_some() {
            resolver.go_back().unwrap();
        }

        prop_assert!(matches!(resolver.go_back(), Err(MenuError::NoSelection)));
        prop_assert!(matches!(resolver.go_back(), Err(MenuError::NoSelection)));
    }

    /// PROPERTY: an unknown id is rejected and never moves the cursor.
    #[test]
    fn property_unknown_id_never_moves_cursor(shapes in forest(), bogus in "[a-z]{1,8}") {
        let mut resolver = resolver(&shapes, false);
        if let Some(id) = listing_ids(&resolver).into_iter().find(|id| resolver.node(id.as_str()).unwrap().has_children()) {
            resolver.choose(id.as_str()).unwrap();
        }
        let cursor = resolver.current_node_id().cloned();

        let err = resolver.choose(&bogus).unwrap_err();

        prop_assert!(err.to_string().contains(&bogus));
        prop_assert_eq!(resolver.current_node_id().cloned(), cursor);
    }

    /// PROPERTY: every injected id equals the node id and is choosable.
    #[test]
    fn property_injected_ids_are_choosable(shapes in forest()) {
        let mut resolver = resolver(&shapes, true);

        let mut seen = std::collections::HashSet::new();
        for node in resolver.index().iter() {
            prop_assert_eq!(node.data().unwrap()["id"].as_str(), Some(node.id().as_str()));
            prop_assert!(seen.insert(node.id().clone()));
        }

        let injected: Vec<String> = resolver
            .displayable_menu()
            .iter()
            .map(|e| e.data.unwrap()["id"].as_str().unwrap().to_string())
            .collect();
        for id in injected {
            prop_assert!(resolver.choose(&id).is_ok());
            if resolver.current_node_id().is_some() {
                resolver.go_back().unwrap();
            }
        }
    }
}
