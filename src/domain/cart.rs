use super::catalog::Catalog;
use super::product::{Price, ProductId, Quantity};
use crate::error::{Result, ShopError};

/// One line of the cart: a product reference and how many units were reserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartEntry {
    pub product: ProductId,
    pub quantity: Quantity,
}

/// A cart line resolved against the catalog, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Price,
    pub line_total: Price,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Price,
}

/// The per-session, insertion-ordered shopping cart.
///
/// Holds at most one entry per product. Entries only reference products by
/// id; prices and names are always read back from the `Catalog`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `quantity` units of `product` and records them in the cart.
    ///
    /// On `InsufficientStock` neither the catalog nor the cart is modified.
    pub fn add(
        &mut self,
        catalog: &mut Catalog,
        product: ProductId,
        quantity: Quantity,
    ) -> Result<()> {
        catalog.reserve(product, quantity)?;

        match self.entries.iter_mut().find(|entry| entry.product == product) {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(CartEntry { product, quantity }),
        }
        Ok(())
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every entry against `catalog` and computes the running total.
    pub fn summary(&self, catalog: &Catalog) -> Result<CartSummary> {
        let lines = self
            .entries
            .iter()
            .map(|entry| {
                let product = catalog
                    .get(entry.product)
                    .ok_or(ShopError::UnknownProduct(entry.product))?;
                Ok(CartLine {
                    name: product.name.clone(),
                    quantity: entry.quantity,
                    unit_price: product.price,
                    line_total: product.price.checked_mul(entry.quantity)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total = Price::checked_sum(lines.iter().map(|line| line.line_total))?;
        Ok(CartSummary { lines, total })
    }
}
