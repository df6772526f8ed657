//! Scenario: a setup wizard whose actions navigate on their own.
//!
//! "Continue" callbacks descend into the next step through the handle they
//! receive, "Cancel" climbs back out, and "Finish" reports where it ran.

use std::cell::RefCell;
use std::rc::Rc;

use treemenu::{label, MenuItem, Resolution, ResolverApi, SequentialIds, TreeMenuResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Moved(String),
    Cancelled,
    Finished(String),
}

fn labels(resolver: &TreeMenuResolver<Outcome>) -> Vec<String> {
    resolver
        .displayable_menu()
        .iter()
        .filter_map(|e| e.label())
        .map(str::to_string)
        .collect()
}

fn id_of(resolver: &TreeMenuResolver<Outcome>, wanted: &str) -> String {
    resolver
        .displayable_menu()
        .iter()
        .find(|e| e.label() == Some(wanted))
        .map(|e| e.id.to_string())
        .unwrap_or_else(|| panic!("no '{wanted}' in {:?}", labels(resolver)))
}

/// Move into the sibling labelled `target` from inside a callback.
fn continue_to(target: &'static str) -> impl Fn(&mut ResolverApi<'_, Outcome>) -> Outcome {
    move |api| {
        api.go_back().unwrap();
        let id = id_of(api.resolver(), target);
        api.choose(&id).unwrap();
        Outcome::Moved(target.to_string())
    }
}

fn wizard(log: Rc<RefCell<Vec<String>>>) -> Vec<MenuItem<Outcome>> {
    let finish_log = Rc::clone(&log);
    vec![
        MenuItem::parent(
            label("License"),
            vec![
                MenuItem::custom(label("Accept"), continue_to("Location")),
                MenuItem::custom(label("Cancel"), |api| {
                    api.go_back().unwrap();
                    Outcome::Cancelled
                }),
            ],
        ),
        MenuItem::parent(
            label("Location"),
            vec![MenuItem::custom(label("Install here"), move |api| {
                let here = api.current_node().label().unwrap_or_default().to_string();
                finish_log.borrow_mut().push(here.clone());
                Outcome::Finished(here)
            })],
        ),
    ]
}

#[test]
fn scenario_accept_moves_to_next_step() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut resolver = TreeMenuResolver::builder()
        .id_generator(SequentialIds::new("w"))
        .build(&wizard(Rc::clone(&log)))
        .unwrap();
    assert_eq!(labels(&resolver), vec!["License", "Location"]);

    resolver.choose(&id_of(&resolver, "License")).unwrap();
    assert_eq!(labels(&resolver), vec!["Accept", "Cancel"]);

    let accepted = resolver.activate(&id_of(&resolver, "Accept")).unwrap();
    assert_eq!(
        accepted,
        Resolution::Custom(Outcome::Moved("Location".to_string()))
    );
    assert_eq!(labels(&resolver), vec!["Install here"]);

    let finished = resolver.activate(&id_of(&resolver, "Install here")).unwrap();
    assert_eq!(
        finished,
        Resolution::Custom(Outcome::Finished("Install here".to_string()))
    );
    assert_eq!(*log.borrow(), vec!["Install here".to_string()]);
}

#[test]
fn scenario_cancel_returns_to_top_level() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut resolver = TreeMenuResolver::new(&wizard(log)).unwrap();

    resolver.choose(&id_of(&resolver, "License")).unwrap();
    let cancelled = resolver.activate(&id_of(&resolver, "Cancel")).unwrap();

    assert_eq!(cancelled, Resolution::Custom(Outcome::Cancelled));
    assert_eq!(resolver.current_node_id(), None);
    assert_eq!(labels(&resolver), vec!["License", "Location"]);
}

#[test]
fn scenario_breadcrumbs_follow_the_wizard() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut resolver = TreeMenuResolver::new(&wizard(log)).unwrap();

    resolver.choose(&id_of(&resolver, "License")).unwrap();
    resolver.activate(&id_of(&resolver, "Accept")).unwrap();

    let trail: Vec<_> = resolver
        .breadcrumbs()
        .unwrap()
        .iter()
        .filter_map(|node| node.label())
        .map(str::to_string)
        .collect();
    assert_eq!(trail, vec!["Location"]);
}
