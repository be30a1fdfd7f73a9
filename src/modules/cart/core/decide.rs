// Pure decision function for cart mutations.
//
// Purpose
// - Compute the next list of items for a command, given the current list.
//
// Responsibilities
// - AddToCart appends a new item with quantity 1, or increments the existing one.
// - Increment bumps the matching item. An unknown id still yields a (equal) replacement list,
//   which the store persists.
// - Decrement lowers the matching item, never below 1. An unknown id yields Unchanged.
// - Never perform input or output.

use crate::modules::cart::core::cart_item::CartItem;
use crate::modules::cart::core::commands::CartCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Replace(Vec<CartItem>),
    Unchanged,
}

pub fn decide(items: &[CartItem], command: CartCommand) -> Decision {
    match command {
        CartCommand::AddToCart(candidate) => {
            if items.iter().any(|item| item.id == candidate.id) {
                Decision::Replace(with_quantity(items, &candidate.id, |q| q.saturating_add(1)))
            } else {
                let mut next = items.to_vec();
                next.push(candidate.into_item());
                Decision::Replace(next)
            }
        }
        CartCommand::Increment(id) => {
            Decision::Replace(with_quantity(items, &id, |q| q.saturating_add(1)))
        }
        CartCommand::Decrement(id) => {
            if items.iter().any(|item| item.id == id) {
                Decision::Replace(with_quantity(items, &id, |q| q.saturating_sub(1).max(1)))
            } else {
                Decision::Unchanged
            }
        }
    }
}

fn with_quantity(items: &[CartItem], id: &str, next: impl Fn(u32) -> u32) -> Vec<CartItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                CartItem {
                    quantity: next(item.quantity),
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}
