// Composition root for the cart.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete storage adapter.
// - Mount the cart provider, which spawns the persistence writer and restores the saved cart.

pub mod config;
pub mod state;

use crate::modules::cart::provider::CartProvider;
use crate::modules::cart::use_cases::load_cart::handler::LoadOutcome;
use crate::shell::config::CartConfig;
use crate::shell::state::build_storage;

pub async fn bootstrap(config: &CartConfig) -> (CartProvider, LoadOutcome) {
    CartProvider::mount_and_load(build_storage(config)).await
}
