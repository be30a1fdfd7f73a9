// Shared test fixtures for cart products.
// Compiled only for tests, exposed under `crate::tests::fixtures::products`.

use crate::modules::cart::core::cart_item::{CartItem, ProductCandidate};

pub const PRODUCT_CANDIDATE_JSON: &str = include_str!("json/product_candidate.json");
pub const PERSISTED_CART_JSON: &str = include_str!("json/persisted_cart.json");

pub struct ProductCandidateBuilder {
    inner: ProductCandidate,
}

impl Default for ProductCandidateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductCandidateBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(PRODUCT_CANDIDATE_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn image_url(mut self, v: impl Into<String>) -> Self {
        self.inner.image_url = v.into();
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = v;
        self
    }

    pub fn build(self) -> ProductCandidate {
        self.inner
    }
}

pub fn persisted_cart_items() -> Vec<CartItem> {
    serde_json::from_str(PERSISTED_CART_JSON).unwrap()
}

#[cfg(test)]
mod product_candidate_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ProductCandidateBuilder::default().build();
        assert_eq!(built.id, "p-fixed-0001");
        assert_eq!(built.title, "Camiseta Go Marketplace");
        assert_eq!(
            built.image_url,
            "https://cdn.gomarketplace.test/products/p-fixed-0001.png"
        );
        assert_eq!(built.price, 49.9);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ProductCandidateBuilder::new()
            .id("p1")
            .title("Shirt")
            .image_url("u")
            .price(50.0)
            .build();
        assert_eq!(custom.id, "p1");
        assert_eq!(custom.title, "Shirt");
        assert_eq!(custom.image_url, "u");
        assert_eq!(custom.price, 50.0);
    }

    #[rstest]
    fn persisted_cart_fixture_has_two_lines() {
        let items = persisted_cart_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
    }
}
