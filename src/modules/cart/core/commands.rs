use crate::modules::cart::core::cart_item::ProductCandidate;

#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    AddToCart(ProductCandidate),
    Increment(String),
    Decrement(String),
}

impl CartCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::AddToCart(_) => "add_to_cart",
            CartCommand::Increment(_) => "increment",
            CartCommand::Decrement(_) => "decrement",
        }
    }

    pub fn product_id(&self) -> &str {
        match self {
            CartCommand::AddToCart(candidate) => &candidate.id,
            CartCommand::Increment(id) | CartCommand::Decrement(id) => id,
        }
    }
}
