use rust_decimal::Decimal;
use std::sync::Arc;
use storefront::{
    CartStore, Catalog, CheckoutSummary, Config, KvStore, MemoryKvStore, NotificationBus,
    NotificationKind, Notifier, Slot, StoreError, StorefrontState, WishlistStore,
};

fn memory_cart(kv: &Arc<MemoryKvStore>, bus: &NotificationBus) -> CartStore {
    let kv: Arc<dyn KvStore> = kv.clone();
    let notifier: Arc<dyn Notifier> = Arc::new(bus.clone());
    CartStore::open(Slot::new(kv, "cart"), notifier).expect("Failed to open cart")
}

#[test]
fn test_shopping_session_survives_restart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), "production");

    // 1. Shop
    let (cart_before, wishlist_before) = {
        let state = StorefrontState::initialize(&config).expect("Failed to initialize");
        let mut rx = state.subscribe();

        let keychain = state.catalog.product_by_id("1").expect("seed product 1").clone();
        let tulips = state.catalog.product_by_id("11").expect("seed product 11").clone();
        let rose = state.catalog.product_by_id("7").expect("seed product 7").clone();

        {
            let mut cart = state.cart.lock();
            cart.add_item(&keychain, 2).unwrap();
            cart.add_item(&tulips, 10).unwrap();
            cart.update_quantity("1", 3).unwrap();
        }
        state.wishlist.lock().toggle_item(&rose).unwrap();

        let mut kinds = Vec::new();
        while let Ok(n) = rx.try_recv() {
            kinds.push(n.kind);
        }
        assert_eq!(
            kinds,
            [
                NotificationKind::ItemAdded,
                NotificationKind::LimitedStock,
                NotificationKind::QuantityUpdated,
                NotificationKind::WishlistAdded,
            ]
        );

        let summary = state.checkout_summary();
        // 3 x 12.99 + 3 x 44.99
        assert_eq!(summary.total, "173.94".parse::<Decimal>().unwrap());
        assert_eq!(summary.total_items, 6);
        assert_eq!(summary.form_url, config.checkout_form_url);

        let cart = state.cart.lock().items();
        let wishlist = state.wishlist.lock().items();
        (cart, wishlist)
    };

    // 2. Restart on the same work dir
    let state = StorefrontState::initialize(&config).expect("Failed to reinitialize");
    assert_eq!(state.cart.lock().items(), cart_before);
    assert_eq!(state.wishlist.lock().items(), wishlist_before);
    assert!(state.wishlist.lock().is_in_wishlist("7"));
}

#[test]
fn test_inventory_edits_do_not_touch_catalog() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), "production");

    {
        let state = StorefrontState::initialize(&config).unwrap();
        let mut inventory = state.inventory.lock();
        assert!(inventory.update_inventory_count("4", 0));
        inventory.save().unwrap();
        assert!(inventory.export_csv().contains("4,\"Sunflower Wall Hanging\""));
    }

    let state = StorefrontState::initialize(&config).unwrap();
    assert_eq!(state.inventory.lock().product("4").unwrap().inventory_count, 0);
    assert_eq!(state.catalog.product_by_id("4").unwrap().inventory_count, 10);
}

#[test]
fn test_write_failure_is_reported_and_memory_kept() {
    let kv = Arc::new(MemoryKvStore::new());
    let bus = NotificationBus::new();
    let catalog = Catalog::seeded().unwrap();
    let mut cart = memory_cart(&kv, &bus);

    cart.add_one(catalog.product_by_id("2").unwrap()).unwrap();
    kv.set_fail_writes(true);

    let err = cart
        .add_one(catalog.product_by_id("3").unwrap())
        .unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(cart.len(), 2);

    // the snapshot still holds the last successful write
    assert_eq!(memory_cart(&kv, &bus).len(), 1);

    kv.set_fail_writes(false);
    cart.clear_cart().unwrap();
    assert!(memory_cart(&kv, &bus).is_empty());
}

#[test]
fn test_wishlist_and_cart_are_independent() {
    let kv = Arc::new(MemoryKvStore::new());
    let bus = NotificationBus::new();
    let catalog = Catalog::seeded().unwrap();
    let mut cart = memory_cart(&kv, &bus);
    let shared_kv: Arc<dyn KvStore> = kv.clone();
    let mut wishlist =
        WishlistStore::open(Slot::new(shared_kv, "wishlist"), Arc::new(bus.clone())).unwrap();

    let bowl = catalog.product_by_id("10").unwrap();
    wishlist.add_item(bowl).unwrap();
    cart.add_one(bowl).unwrap();

    cart.clear_cart().unwrap();
    assert!(wishlist.is_in_wishlist("10"));

    let summary = CheckoutSummary::from_cart(&cart, "https://forms.example.com");
    assert!(summary.is_empty());
}
