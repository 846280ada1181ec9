//! Integration tests for the database summary view.

mod common;

use common::{fixtures, recorder, registry};
use sqlite_console::components::{Node, NodeId};
use sqlite_console::error::Error;
use sqlite_console::views::{ACTION_MODULES, DatabaseEvent, DatabaseView};

fn view() -> DatabaseView {
    DatabaseView::new(&registry()).expect("standard registry has the badge templates")
}

fn module_ids(view: &DatabaseView) -> Vec<NodeId> {
    view.modules().iter().map(|(_, node)| node.id()).collect()
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_new_module_creates_one_node() {
    let mut view = view();
    view.set_database(&fixtures::database(&["main"], &[], None)).unwrap();
    let badges: Vec<_> = view.schemas().iter().map(|(_, node)| node.id()).collect();
    assert!(view.modules().is_empty());

    view.set_database(&fixtures::database(&["main"], &["m1"], None)).unwrap();

    assert_eq!(view.modules().keys(), ["m1".to_string()]);
    assert_eq!(view.modules().get(&"m1".to_string()).unwrap().text("module"), Some("m1"));
    let after: Vec<_> = view.schemas().iter().map(|(_, node)| node.id()).collect();
    assert_eq!(after, badges);
}

#[test]
fn test_unchanged_database_keeps_nodes() {
    let mut view = view();
    let database = fixtures::database(&["main", "temp"], &["json1", "fts5"], Some((1, 4)));
    view.set_database(&database).unwrap();
    let modules = module_ids(&view);

    view.set_database(&database).unwrap();

    assert_eq!(module_ids(&view), modules);
    assert_eq!(view.version(), "3.45.1");
}

#[test]
fn test_pool_gauge() {
    let mut view = view();
    view.set_database(&fixtures::database(&["main"], &[], Some((3, 10)))).unwrap();
    assert_eq!(view.pool(), Some("3/10"));

    view.set_database(&fixtures::database(&["main"], &[], None)).unwrap();
    assert_eq!(view.pool(), None);
}

#[test]
fn test_duplicate_schema_names_are_rejected() {
    let mut view = view();
    let result = view.set_database(&fixtures::database(&["main", "main"], &[], None));
    assert!(matches!(result, Err(Error::DuplicateKey(key)) if key == "main"));
    assert!(view.schemas().is_empty());
}

#[test]
fn test_rejected_update_keeps_previous_summary() {
    let mut view = view();
    view.set_database(&fixtures::database(&["main"], &["json1"], Some((1, 4)))).unwrap();

    let mut broken = fixtures::database(&["main", "temp"], &["fts5", "fts5"], Some((2, 4)));
    broken.version = "3.46.0".to_string();
    assert!(view.set_database(&broken).is_err());

    assert_eq!(view.version(), "3.45.1");
    assert_eq!(view.pool(), Some("1/4"));
    assert_eq!(view.modules().keys(), ["json1".to_string()]);
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_schema_badge_click() {
    let mut view = view();
    let (events, observer) = recorder::<DatabaseEvent>();
    view.subscribe(observer);
    view.set_database(&fixtures::database(&["main", "temp"], &[], None)).unwrap();

    let temp = view.schemas().get(&"temp".to_string()).map(Node::id).unwrap();
    view.click_schema(temp).unwrap();

    assert_eq!(*events.borrow(), vec![DatabaseEvent::SchemaSelected("temp".to_string())]);
}

#[test]
fn test_click_on_unknown_badge() {
    let mut view = view();
    view.set_database(&fixtures::database(&["main"], &[], None)).unwrap();
    assert!(matches!(view.click_schema(NodeId::new()), Err(Error::UnknownNode(_))));
}

#[test]
fn test_show_modules_displays_current_snapshot() {
    let mut view = view();
    let (events, observer) = recorder::<DatabaseEvent>();
    view.subscribe(observer);
    view.set_database(&fixtures::database(&["main"], &["json1"], None)).unwrap();
    assert!(!view.modules_open());

    view.click_action(ACTION_MODULES);
    assert_eq!(*events.borrow(), vec![DatabaseEvent::ActionRequested("modules".to_string())]);

    view.show_modules();
    assert!(view.modules_open());
    assert_eq!(view.modules().len(), 1);

    view.hide_modules();
    assert!(!view.modules_open());
}
