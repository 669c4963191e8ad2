use app_shell::{ActionOutcome, AppConfig, InventoryStore, MemoryStorage, ModeStore};
use futures::executor::block_on;
use inventory_core::{Mode, RowAction, TableState};
use inventory_feed::{FixedResponse, InventorySource, Unreachable};

fn load<S: InventorySource>(store: &mut InventoryStore, source: &S) -> bool {
    store.begin_load();
    let result = block_on(source.fetch());
    store.finish_load(result)
}

#[test]
fn widget_payload_produces_expected_cards() {
    let source = FixedResponse::ok(
        r#"[{"name":"Widget","category":"Tools","price":"$5","quantity":10,"value":"$50","stock":10}]"#,
    );
    let mut store = InventoryStore::new();
    assert!(load(&mut store, &source));

    let cards = store.stats().cards();
    let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["1", "50", "0", "1"]);
    assert!(!store.is_loading());
}

#[test]
fn server_error_leaves_empty_list() {
    let mut store = InventoryStore::new();
    assert!(!load(&mut store, &FixedResponse::new(500, "Internal Server Error")));
    assert!(store.products().is_empty());
    assert!(!store.is_loading());
    assert_eq!(store.stats().cards()[0].value, "0");
}

#[test]
fn transport_failure_keeps_stale_data() {
    let mut store = InventoryStore::new();
    load(&mut store, &FixedResponse::ok(r#"[{"name":"a","category":"x","value":"$1"}]"#));
    assert!(!load(&mut store, &Unreachable));
    assert_eq!(store.products().len(), 1);
}

#[test]
fn user_mode_blocks_every_row_action() {
    let storage = MemoryStorage::new();
    let config = AppConfig::default();
    let mut modes = ModeStore::open(storage, config.mode_key.clone());
    let mut store = InventoryStore::new();
    load(
        &mut store,
        &FixedResponse::ok(r#"[{"name":"a","category":"x"},{"name":"b","category":"y"}]"#),
    );
    let target = store.products()[0].clone();

    for action in RowAction::ALL {
        let outcome = store.run_action(modes.mode(), action, &target, || true);
        assert_eq!(outcome, ActionOutcome::Blocked, "{action:?}");
    }
    assert_eq!(store.products().len(), 2);

    modes.set(Mode::Admin).unwrap();
    let outcome = store.run_action(modes.mode(), RowAction::Delete, &target, || true);
    assert_eq!(outcome, ActionOutcome::Deleted(1));
    assert_eq!(store.products().len(), 1);
}

#[test]
fn delete_removes_every_same_named_product() {
    let mut store = InventoryStore::new();
    load(
        &mut store,
        &FixedResponse::ok(
            r#"[{"name":"Widget","category":"a"},{"name":"Widget","category":"b"},{"name":"Gadget","category":"c"}]"#,
        ),
    );
    let widget = store.products()[0].clone();

    let outcome = store.run_action(Mode::Admin, RowAction::Delete, &widget, || true);
    assert_eq!(outcome, ActionOutcome::Deleted(2));
    let names: Vec<&str> = store.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Gadget"]);

    // Deleting a name that is gone changes nothing.
    let outcome = store.run_action(Mode::Admin, RowAction::Delete, &widget, || true);
    assert_eq!(outcome, ActionOutcome::Deleted(0));
    assert_eq!(store.products().len(), 1);
}

#[test]
fn grid_projection_tracks_store() {
    let body = (0..15)
        .map(|i| format!(r#"{{"name":"p{i}","category":"c","value":"{i}"}}"#))
        .collect::<Vec<_>>()
        .join(",");
    let mut store = InventoryStore::new();
    load(&mut store, &FixedResponse::ok(format!("[{body}]")));

    let mut table = TableState::default();
    table.next_page(store.products().len());
    let model = table.row_model(store.products());
    assert_eq!(model.rows.len(), 5);

    let names: Vec<String> = model.rows.iter().map(|p| p.name.clone()).collect();
    for name in &names {
        store.apply_delete(name);
    }
    let model = table.row_model(store.products());
    assert_eq!(model.page_index, 0);
    assert_eq!(model.rows.len(), 10);
    assert!(!model.can_next);
}
