//! Session-backed shopping cart.
//!
//! The cart lives entirely inside the tower-sessions record. There is no
//! server-side order storage; checkout hands the cart off as a WhatsApp
//! enquiry, so a session-scoped cart is all the persistence needed.

use hibhana_core::{Price, ProductId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable line identifier, assigned when the line is added.
    pub id: Uuid,
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
    pub size: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Total price for this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A shopping cart stored in the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add a product to the cart.
    ///
    /// Lines merge on (product, size): adding the same product in the same
    /// size bumps the existing quantity instead of creating a new line.
    /// Returns the ID of the affected line.
    pub fn add(
        &mut self,
        product_id: ProductId,
        name: String,
        price: Price,
        image: Option<String>,
        size: Option<String>,
        quantity: u32,
    ) -> Uuid {
        let quantity = quantity.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id && l.size == size)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return line.id;
        }

        let id = Uuid::new_v4();
        self.lines.push(CartLine {
            id,
            product_id,
            name,
            price,
            image,
            size,
            quantity,
        });
        id
    }

    /// Set the quantity of a line. A quantity of zero removes the line.
    ///
    /// Returns `false` if no line with that ID exists.
    pub fn update_quantity(&mut self, line_id: Uuid, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(line_id);
        }

        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line from the cart. Returns `false` if it was not present.
    pub fn remove(&mut self, line_id: Uuid) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        self.lines.len() != before
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart subtotal.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
