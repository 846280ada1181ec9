//! Integration tests for the schema view: tab reconciliation, default
//! selection and table click notifications.

mod common;

use common::{fixtures, recorder, registry, tab_id, tab_names};
use sqlite_console::components::{CLICK, NavEvent, Selection};
use sqlite_console::models::Schema;
use sqlite_console::views::{FileLabel, SchemaEvent, SchemaView};

fn view() -> SchemaView {
    SchemaView::new(&registry()).expect("standard registry has the tab template")
}

// =============================================================================
// Reconciliation scenarios
// =============================================================================

#[test]
fn test_replacing_a_table_keeps_survivor_identity() {
    let mut view = view();
    let (events, observer) = recorder::<SchemaEvent>();
    view.subscribe(observer);

    view.set_schema(&fixtures::schema("main", &[("a", 1), ("b", 2)])).unwrap();
    let a = tab_id(&view, "main", "a");
    let b = tab_id(&view, "main", "b");
    events.borrow_mut().clear();

    view.set_schema(&fixtures::schema("main", &[("b", 2), ("c", 3)])).unwrap();

    assert_eq!(tab_names(&view), vec!["b", "c"]);
    assert_eq!(tab_id(&view, "main", "b"), b);
    assert!(!view.tabs().items().contains_node(a));
    assert_eq!(*events.borrow(), vec![SchemaEvent::SchemaChanged]);
}

#[test]
fn test_count_change_is_not_structural() {
    let mut view = view();
    let (events, observer) = recorder::<SchemaEvent>();
    view.subscribe(observer);

    view.set_schema(&fixtures::schema("main", &[("a", 1), ("b", 2)])).unwrap();
    let ids = (tab_id(&view, "main", "a"), tab_id(&view, "main", "b"));
    events.borrow_mut().clear();

    view.set_schema(&fixtures::schema("main", &[("a", 10), ("b", 20)])).unwrap();

    assert_eq!((tab_id(&view, "main", "a"), tab_id(&view, "main", "b")), ids);
    assert!(events.borrow().is_empty());

    let a = view.tabs().items().get(&fixtures::table("main", "a", 0).key()).unwrap();
    assert_eq!(a.text("count"), Some("10"));
    assert_eq!(view.table(&fixtures::table("main", "a", 0).key()).unwrap().count, 10);
}

#[test]
fn test_removing_active_table_leaves_no_selection() {
    let mut view = view();
    view.set_schema(&fixtures::schema("main", &[("a", 1), ("b", 2)])).unwrap();
    let a = tab_id(&view, "main", "a");
    assert_eq!(view.tabs().selection(), Selection::ActiveAt(a));

    let (nav_events, observer) = recorder::<NavEvent>();
    view.subscribe_tabs(observer);

    view.set_schema(&fixtures::schema("main", &[("b", 2)])).unwrap();

    assert_eq!(view.tabs().selection(), Selection::NoActive);
    assert_eq!(*nav_events.borrow(), vec![NavEvent::Deactivated(a)]);
    assert!(view.tabs().items().iter().all(|(_, node)| !node.is_active()));
}

#[test]
fn test_first_attachment_selects_first_table() {
    let mut view = view();
    view.set_schema(&fixtures::schema("main", &[("a", 1), ("b", 2), ("c", 3)])).unwrap();

    assert_eq!(view.tabs().active(), Some(tab_id(&view, "main", "a")));
    assert_eq!(view.active_table().map(|table| table.name.as_str()), Some("a"));
}

#[test]
fn test_default_selection_only_on_first_attachment() {
    let mut view = view();
    view.set_schema(&fixtures::schema("main", &[])).unwrap();
    assert_eq!(view.tabs().selection(), Selection::NoActive);

    view.set_schema(&fixtures::schema("main", &[("a", 1)])).unwrap();
    assert_eq!(view.tabs().selection(), Selection::NoActive);
}

#[test]
fn test_empty_schema_clears_strip() {
    let mut view = view();
    let (events, observer) = recorder::<SchemaEvent>();
    view.subscribe(observer);
    view.set_schema(&fixtures::schema("main", &[("a", 1)])).unwrap();
    events.borrow_mut().clear();

    view.set_schema(&fixtures::schema("main", &[])).unwrap();

    assert!(view.tabs().items().is_empty());
    assert_eq!(*events.borrow(), vec![SchemaEvent::SchemaChanged]);

    view.set_schema(&fixtures::schema("main", &[])).unwrap();
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_same_name_in_other_schema_is_a_different_tab() {
    let mut view = view();
    let mut schema = fixtures::schema("main", &[("users", 1)]);
    schema.tables.push(fixtures::table("aux", "users", 2));

    view.set_schema(&schema).unwrap();

    assert_eq!(view.tabs().items().len(), 2);
    assert_ne!(tab_id(&view, "main", "users"), tab_id(&view, "aux", "users"));
}

// =============================================================================
// Scalar display
// =============================================================================

#[test]
fn test_file_label() {
    let mut view = view();
    assert_eq!(view.file_label(), &FileLabel::Blank);

    let mut schema = fixtures::schema("main", &[]);
    schema.filename = Some("/data/app.db".to_string());
    view.set_schema(&schema).unwrap();
    assert_eq!(view.name(), "main");
    assert_eq!(view.file_label(), &FileLabel::File("/data/app.db".to_string()));

    let memory: Schema =
        serde_json::from_str(r#"{"schema": "temp", "filename": "", "memory": true}"#).unwrap();
    view.set_schema(&memory).unwrap();
    assert_eq!(view.name(), "temp");
    assert_eq!(view.file_label(), &FileLabel::Memory);

    view.set_schema(&fixtures::schema("aux", &[])).unwrap();
    assert_eq!(view.file_label(), &FileLabel::Blank);
}

// =============================================================================
// Selection and clicks
// =============================================================================

#[test]
fn test_set_active_moves_selection() {
    let mut view = view();
    view.set_schema(&fixtures::schema("main", &[("a", 1), ("b", 2)])).unwrap();

    view.set_active(&fixtures::table("main", "b", 2)).unwrap();

    assert_eq!(view.tabs().active(), Some(tab_id(&view, "main", "b")));
    let active: Vec<_> = view.tabs().items().iter().filter(|(_, node)| node.is_active()).collect();
    assert_eq!(active.len(), 1);
}

#[test]
fn test_set_active_for_missing_table_is_noop() {
    let mut view = view();
    view.set_schema(&fixtures::schema("main", &[("a", 1)])).unwrap();
    let before = view.tabs().selection();

    view.set_active(&fixtures::table("aux", "gone", 0)).unwrap();

    assert_eq!(view.tabs().selection(), before);
}

#[test]
fn test_click_emits_latest_table_without_selecting() {
    let mut view = view();
    let (events, observer) = recorder::<SchemaEvent>();
    view.subscribe(observer);
    view.set_schema(&fixtures::schema("main", &[("a", 1), ("b", 2)])).unwrap();
    view.set_schema(&fixtures::schema("main", &[("a", 1), ("b", 5)])).unwrap();
    events.borrow_mut().clear();

    let b = tab_id(&view, "main", "b");
    view.click_tab(b).unwrap();

    assert_eq!(*events.borrow(), vec![SchemaEvent::TableClicked(fixtures::table("main", "b", 5))]);
    assert_eq!(view.tabs().active(), Some(tab_id(&view, "main", "a")));
}

#[test]
fn test_click_listener_attached_once() {
    let mut view = view();
    view.set_schema(&fixtures::schema("main", &[("a", 1)])).unwrap();
    view.set_schema(&fixtures::schema("main", &[("a", 2)])).unwrap();
    view.set_schema(&fixtures::schema("main", &[("a", 3)])).unwrap();

    let node = view.tabs().items().get(&fixtures::table("main", "a", 0).key()).unwrap();
    assert_eq!(node.listener_count(CLICK), 1);
}
