//! End-to-end tests for the data service in fallback mode.
//!
//! Each test gets its own scratch data directory, so the suite runs
//! anywhere with no setup and tests never see each other's state.

use meteor_core::{Price, ProductId, Role};
use meteor_store::models::{NewProduct, ProductPatch};
use meteor_store::{Mode, Store, StoreConfig};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Open a fallback-mode store in a fresh scratch directory.
///
/// Returns the directory guard alongside the store - dropping it deletes
/// the data.
fn scratch_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("Failed to create scratch dir");
    let config = StoreConfig::local(dir.path());
    let store = Store::connect(&config).expect("Failed to connect store");
    assert_eq!(store.mode(), Mode::Fallback);
    (dir, store)
}

fn draft(name: &str, rupees: i64) -> NewProduct {
    NewProduct {
        name: name.to_owned(),
        price: Price::new(Decimal::new(rupees * 100, 2)).expect("non-negative"),
        category: "Casual".to_owned(),
        image: "https://example.com/img.jpg".to_owned(),
        description: format!("{name} description"),
    }
}

// ============================================================================
// Catalog CRUD
// ============================================================================

#[tokio::test]
async fn test_create_then_get_by_id_returns_equal_record() {
    let (_dir, store) = scratch_store();

    let input = draft("Monsoon Wellies", 1800);
    let created = store.products().create(input.clone()).await.expect("create");
    let fetched = store
        .products()
        .get_by_id(created.id)
        .await
        .expect("get_by_id");

    // Equal to the input except for the assigned id.
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.price, input.price);
    assert_eq!(fetched.category, input.category);
    assert_eq!(fetched.image, input.image);
    assert_eq!(fetched.description, input.description);
}

#[tokio::test]
async fn test_get_all_returns_creates_in_ascending_id_order() {
    let (_dir, store) = scratch_store();
    let before = store.products().get_all().await.expect("get_all").len();

    let a = store.products().create(draft("A", 100)).await.expect("create");
    let b = store.products().create(draft("B", 200)).await.expect("create");
    let c = store.products().create(draft("C", 300)).await.expect("create");

    let all = store.products().get_all().await.expect("get_all");
    assert_eq!(all.len(), before + 3);

    let ids: Vec<i64> = all.iter().map(|p| p.id.as_i64()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    let created_ids: Vec<ProductId> = all
        .iter()
        .filter(|p| ["A", "B", "C"].contains(&p.name.as_str()))
        .map(|p| p.id)
        .collect();
    assert_eq!(created_ids, vec![a.id, b.id, c.id]);
}

#[tokio::test]
async fn test_update_changes_only_patched_fields() {
    let (_dir, store) = scratch_store();

    let created = store
        .products()
        .create(draft("Original", 1000))
        .await
        .expect("create");

    let new_price = Price::new(Decimal::new(750_00, 2)).expect("non-negative");
    let updated = store
        .products()
        .update(
            created.id,
            ProductPatch {
                price: Some(new_price),
                ..ProductPatch::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.price, new_price);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.image, created.image);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn test_delete_then_get_by_id_is_not_found() {
    let (_dir, store) = scratch_store();

    let created = store
        .products()
        .create(draft("Ephemeral", 500))
        .await
        .expect("create");
    store.products().delete(created.id).await.expect("delete");

    let err = store.products().get_by_id(created.id).await.unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got {err}");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (_dir, store) = scratch_store();
    store
        .products()
        .delete(ProductId::new(404_404))
        .await
        .expect("deleting an absent id succeeds");
}

#[tokio::test]
async fn test_slides_are_an_independent_collection() {
    let (_dir, store) = scratch_store();

    let slides_before = store.slides().get_all().await.expect("get_all").len();
    let product = store
        .products()
        .create(draft("No slide", 100))
        .await
        .expect("create");

    // Product churn must not touch the slide collection.
    store.products().delete(product.id).await.expect("delete");
    assert_eq!(
        store.slides().get_all().await.expect("get_all").len(),
        slides_before
    );
}

#[tokio::test]
async fn test_seeded_catalog_is_browsable() {
    let (_dir, store) = scratch_store();

    let products = store.products().get_all().await.expect("get_all");
    assert_eq!(products.len(), 8);

    let slides = store.slides().get_all().await.expect("get_all");
    assert_eq!(slides.len(), 3);
}

// ============================================================================
// Demo authentication
// ============================================================================

#[tokio::test]
async fn test_hardcoded_logins_and_roles() {
    let (_dir, store) = scratch_store();

    let admin = store
        .auth()
        .login("admin@store.com", "admin123")
        .await
        .expect("admin login");
    assert_eq!(admin.role, Role::Admin);

    let user = store
        .auth()
        .login("user@store.com", "user123")
        .await
        .expect("user login");
    assert_eq!(user.role, Role::User);

    assert!(
        store
            .auth()
            .login("nobody@store.com", "password")
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_register_twice_conflicts_and_first_identity_survives() {
    let (_dir, store) = scratch_store();
    let email = format!("{}@example.com", uuid::Uuid::new_v4());

    let first = store
        .auth()
        .register(&email, "pw-one", "First")
        .await
        .expect("first registration");

    assert!(store.auth().register(&email, "pw-two", "Second").await.is_err());

    let logged_in = store.auth().login(&email, "pw-one").await.expect("login");
    assert_eq!(logged_in, first);
    assert_eq!(logged_in.role, Role::User);
}

#[tokio::test]
async fn test_session_identity_roundtrip() {
    let (_dir, store) = scratch_store();

    let identity = store
        .auth()
        .login("admin@store.com", "admin123")
        .await
        .expect("login");
    store.session().save(&identity).expect("save");

    assert_eq!(store.session().load().expect("load"), Some(identity));

    store.session().clear().expect("clear");
    assert_eq!(store.session().load().expect("load"), None);
}

// ============================================================================
// Persistence across reconnects
// ============================================================================

#[tokio::test]
async fn test_data_survives_reconnect_without_reseeding() {
    let dir = TempDir::new().expect("scratch dir");
    let config = StoreConfig::local(dir.path());

    let created = {
        let store = Store::connect(&config).expect("connect");
        store
            .products()
            .create(draft("Persistent", 999))
            .await
            .expect("create")
    };

    let store = Store::connect(&config).expect("reconnect");
    let all = store.products().get_all().await.expect("get_all");

    // Seed (8) + the created record; reconnecting must not reseed or dupe.
    assert_eq!(all.len(), 9);
    let fetched = store
        .products()
        .get_by_id(created.id)
        .await
        .expect("get_by_id");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_ids_stay_monotonic_across_reconnect() {
    let dir = TempDir::new().expect("scratch dir");
    let config = StoreConfig::local(dir.path());

    let first = {
        let store = Store::connect(&config).expect("connect");
        store.products().create(draft("One", 1)).await.expect("create")
    };

    let store = Store::connect(&config).expect("reconnect");
    let second = store.products().create(draft("Two", 2)).await.expect("create");
    assert!(second.id > first.id);
}
