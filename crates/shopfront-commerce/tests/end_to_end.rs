//! Storefront scenarios driven through the public API only.

use shopfront_cache::Cache;
use shopfront_commerce::prelude::*;

const CATALOG: &str = r#"[
    {"id": 1, "title": "Red Shirt", "price": 20, "category": "clothing"},
    {"id": 2, "title": "Blue Mug", "price": 10, "category": "home"}
]"#;

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG).unwrap()
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}

fn criteria(json: &str) -> QueryCriteria {
    serde_json::from_str(json).unwrap()
}

fn memory_store() -> (CartStore<shopfront_cache::Slot<CartState>>, RecordingSink) {
    let sink = RecordingSink::new();
    let slot = cart_slot(Cache::memory(), DEFAULT_CART_NAME);
    (CartStore::open(slot, sink.clone()), sink)
}

#[test]
fn price_ascending_over_all_categories() {
    let criteria = criteria(r#"{"category":"all","searchTerm":"","sortOrder":"price-asc"}"#);
    let visible = catalog().query(&criteria);
    assert_eq!(titles(&visible), vec!["Blue Mug", "Red Shirt"]);
}

#[test]
fn single_category_in_catalog_order() {
    let criteria = criteria(r#"{"category":"clothing","searchTerm":"","sortOrder":"default"}"#);
    let visible = catalog().query(&criteria);
    assert_eq!(titles(&visible), vec!["Red Shirt"]);
}

#[test]
fn reset_criteria_show_everything() {
    let mut criteria = QueryCriteria::new()
        .with_category("home")
        .with_search("mug")
        .with_sort(SortOrder::NameDesc);
    criteria.reset();

    assert!(criteria.is_default());
    assert_eq!(catalog().query(&criteria), catalog().products());
}

#[test]
fn query_is_deterministic() {
    let criteria = QueryCriteria::new().with_sort(SortOrder::NameAsc);
    let catalog = catalog();
    assert_eq!(catalog.query(&criteria), catalog.query(&criteria));
}

#[test]
fn category_options_list_all_first() {
    assert_eq!(catalog().category_options(), vec!["all", "clothing", "home"]);
}

#[test]
fn cart_totals_follow_adds_and_updates() {
    let catalog = catalog();
    let shirt = catalog.get(ProductId::new(1)).unwrap().clone();
    let mug = catalog.get(ProductId::new(2)).unwrap().clone();
    let (mut store, _) = memory_store();

    store.add_item(shirt.clone());
    store.add_item(shirt.clone());
    store.add_item(mug);

    let cart = store.snapshot();
    assert_eq!(cart.total_quantity(), 3);
    assert_eq!(cart.total_price(), Money::from_decimal(50.0));
    assert_eq!(cart.unique_item_count(), 2);
    assert_eq!(cart.quantity_of(shirt.id), 2);

    store.update_quantity(shirt.id, 1);
    let cart = store.snapshot();
    assert_eq!(cart.total_quantity(), 2);
    assert_eq!(cart.total_price(), Money::from_decimal(30.0));
}

#[test]
fn non_positive_quantity_removes_line() {
    for quantity in [0, -5] {
        let (mut store, _) = memory_store();
        let shirt = catalog().get(ProductId::new(1)).unwrap().clone();
        store.add_item(shirt.clone());

        let change = store.update_quantity(shirt.id, quantity);

        assert_eq!(change, CartChange::Removed { id: shirt.id });
        assert!(store.state().is_empty());
        assert_eq!(store.state().total_quantity(), 0);
        assert!(store.state().total_price().is_zero());
    }
}

#[test]
fn removing_absent_product_changes_nothing() {
    let (mut store, sink) = memory_store();
    store.add_item(catalog().products()[0].clone());
    let before = store.snapshot();
    sink.take();

    assert_eq!(store.remove_item(ProductId::new(404)), CartChange::Unchanged);
    assert_eq!(store.snapshot(), before);
    assert!(sink.notifications().is_empty());
}

#[test]
fn clear_then_snapshot_is_empty() {
    let (mut store, sink) = memory_store();
    for product in catalog().products() {
        store.add_item(product.clone());
    }

    store.clear_cart();

    assert_eq!(store.snapshot(), CartState::new());
    assert_eq!(
        sink.notifications().last(),
        Some(&Notification::warning("Cart cleared!"))
    );
}

#[test]
fn raw_actions_drive_the_same_transitions() {
    let (mut store, _) = memory_store();
    store
        .dispatch_json(r#"{"type":"ADD_ITEM","payload":{"id":1,"title":"Red Shirt","price":20}}"#)
        .unwrap();
    store
        .dispatch_json(r#"{"type":"UPDATE_QUANTITY","payload":{"id":1,"quantity":4}}"#)
        .unwrap();

    assert_eq!(store.state().total_price(), Money::new(8000));
    assert!(store.dispatch_json(r#"{"type":"CHECKOUT"}"#).is_err());
    assert_eq!(store.state().total_quantity(), 4);
}

#[test]
fn cart_survives_reopening_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let shirt = catalog().products()[0].clone();

    {
        let slot = cart_slot(Cache::open_dir(dir.path()).unwrap(), DEFAULT_CART_NAME);
        let mut store = CartStore::open(slot, NullSink);
        store.add_item(shirt.clone());
        store.add_item(shirt.clone());
        assert!(store.is_persisted());
    }

    let slot = cart_slot(Cache::open_dir(dir.path()).unwrap(), DEFAULT_CART_NAME);
    let store = CartStore::open(slot, NullSink);
    assert_eq!(store.state().quantity_of(shirt.id), 2);
    assert_eq!(store.state().total_price(), Money::new(4000));
}

#[test]
fn unreadable_saved_cart_starts_empty_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::open_dir(dir.path()).unwrap();
    cache.set("shopfront:cart", &vec![1, 2, 3]).unwrap();

    let sink = RecordingSink::new();
    let store = CartStore::open(cart_slot(cache, DEFAULT_CART_NAME), sink.clone());

    assert!(store.state().is_empty());
    assert_eq!(sink.notifications()[0].severity, Severity::Warning);
}
