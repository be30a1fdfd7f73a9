// End to end flows over real storage adapters.
//
// - Mount a provider over file system storage, mutate the cart, unmount.
// - Mount again over the same directory and expect the same cart back.

use go_marketplace_cart::modules::cart::adapters::outbound::persisted_cart::CART_STORAGE_KEY;
use go_marketplace_cart::modules::cart::core::cart_item::{CartItem, ProductCandidate};
use go_marketplace_cart::modules::cart::errors::CartError;
use go_marketplace_cart::modules::cart::provider::CartProvider;
use go_marketplace_cart::modules::cart::use_cases::load_cart::handler::LoadOutcome;
use go_marketplace_cart::shared::infrastructure::key_value_storage::KeyValueStorage;
use go_marketplace_cart::shared::infrastructure::key_value_storage::file_system::FileSystemStorage;
use go_marketplace_cart::shell::bootstrap;
use go_marketplace_cart::shell::config::{CartConfig, StorageBackend};
use rstest::{fixture, rstest};
use std::sync::Arc;
use tempfile::TempDir;

fn product(id: &str, title: &str, price: f64) -> ProductCandidate {
    ProductCandidate {
        id: id.to_string(),
        title: title.to_string(),
        image_url: format!("https://cdn.gomarketplace.test/products/{id}.png"),
        price,
    }
}

#[fixture]
fn storage_dir() -> TempDir {
    tempfile::tempdir().expect("tempdir failed")
}

#[rstest]
#[tokio::test]
async fn cart_survives_a_restart(storage_dir: TempDir) {
    let storage = Arc::new(FileSystemStorage::new(storage_dir.path()));
    let (provider, outcome) = CartProvider::mount_and_load(storage.clone()).await;
    assert_eq!(outcome, LoadOutcome::Empty);

    let cart = provider.context().use_cart().unwrap();
    cart.add_to_cart(product("p1", "Shirt", 50.0));
    cart.add_to_cart(product("p2", "Mug", 12.5));
    cart.add_to_cart(product("p1", "Shirt", 50.0));
    cart.increment("p2");
    cart.decrement("p1");
    let expected = cart.items().to_vec();
    drop(cart);
    provider.unmount().await;

    let (provider, outcome) = CartProvider::mount_and_load(storage).await;
    assert_eq!(outcome, LoadOutcome::Restored { count: 2 });
    let restored = provider.context().use_cart().unwrap().items();
    assert_eq!(*restored, expected);
    assert_eq!(
        restored.iter().map(|i| i.quantity).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[rstest]
#[tokio::test]
async fn first_add_is_persisted_with_the_new_item(storage_dir: TempDir) {
    let storage = Arc::new(FileSystemStorage::new(storage_dir.path()));
    let (provider, _) = CartProvider::mount_and_load(storage.clone()).await;
    provider
        .context()
        .use_cart()
        .unwrap()
        .add_to_cart(product("p1", "Shirt", 50.0));
    provider.unmount().await;

    let raw = storage.get(CART_STORAGE_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": "p1",
            "title": "Shirt",
            "image_url": "https://cdn.gomarketplace.test/products/p1.png",
            "price": 50.0,
            "quantity": 1
        }])
    );
}

#[rstest]
#[tokio::test]
async fn malformed_saved_cart_does_not_block_startup(storage_dir: TempDir) {
    let storage = Arc::new(FileSystemStorage::new(storage_dir.path()));
    storage.set(CART_STORAGE_KEY, "[{\"id\":").await.unwrap();

    let (provider, outcome) = CartProvider::mount_and_load(storage.clone()).await;
    assert_eq!(outcome, LoadOutcome::Discarded);
    let cart = provider.context().use_cart().unwrap();
    assert!(cart.items().is_empty());

    cart.add_to_cart(product("p1", "Shirt", 50.0));
    drop(cart);
    provider.unmount().await;
    let raw = storage.get(CART_STORAGE_KEY).await.unwrap().unwrap();
    let items: Vec<CartItem> = serde_json::from_str(&raw).unwrap();
    assert_eq!(items.len(), 1);
}

#[rstest]
#[tokio::test]
async fn bootstrap_mounts_over_the_configured_directory(storage_dir: TempDir) {
    let config = CartConfig {
        storage: StorageBackend::File(storage_dir.path().to_path_buf()),
    };
    let (provider, outcome) = bootstrap(&config).await;
    assert_eq!(outcome, LoadOutcome::Empty);
    let context = provider.context();
    context.use_cart().unwrap().add_to_cart(product("p1", "Shirt", 50.0));
    provider.unmount().await;

    assert!(matches!(context.use_cart(), Err(CartError::ContextUnavailable)));
    let (provider, outcome) = bootstrap(&config).await;
    assert_eq!(outcome, LoadOutcome::Restored { count: 1 });
    provider.unmount().await;
}
