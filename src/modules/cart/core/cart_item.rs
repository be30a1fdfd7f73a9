use serde::{Deserialize, Serialize};

/// One line in the cart. `quantity` is never below 1 and `id` is unique within a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    pub price: f64,
    pub quantity: u32,
}

/// Product fields as offered to `add_to_cart`, everything but the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCandidate {
    pub id: String,
    pub title: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    pub price: f64,
}

impl ProductCandidate {
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

pub fn total_quantity(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}
