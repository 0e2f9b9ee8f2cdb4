use super::product::{Price, Product, ProductId, Quantity};
use crate::error::{Result, ShopError};
use rust_decimal_macros::dec;
use std::collections::HashSet;
use tracing::debug;

/// The fixed set of purchasable products and their authoritative stock counts.
///
/// Products are addressed by the `ProductId` handed out at construction.
/// Stock only ever goes down: `reserve` is the single way to take units out,
/// and there is no release path.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from `(name, price, stock)` records, in order.
    ///
    /// Names must be non-empty and unique.
    pub fn new<I, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Price, u64)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut products = Vec::new();

        for (name, price, available) in records {
            let name = name.into();
            if name.is_empty() {
                return Err(ShopError::InvalidCatalog(
                    "product name must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(ShopError::DuplicateProduct(name));
            }
            products.push(Product {
                id: ProductId(products.len()),
                name,
                price,
                available,
            });
        }

        Ok(Self { products })
    }

    /// The catalog used when no catalog file is given.
    pub fn builtin() -> Self {
        Self {
            products: [
                ("Product A", Price(dec!(10.99)), 5),
                ("Product B", Price(dec!(5.99)), 10),
                ("Product C", Price(dec!(7.49)), 8),
            ]
            .into_iter()
            .enumerate()
            .map(|(idx, (name, price, available))| Product {
                id: ProductId(idx),
                name: name.to_string(),
                price,
                available,
            })
            .collect(),
        }
    }

    /// Looks a product up by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Takes `quantity` units of a product out of stock.
    ///
    /// Fails without touching the stock when fewer units are available.
    pub fn reserve(&mut self, id: ProductId, quantity: Quantity) -> Result<()> {
        let product = self
            .products
            .get_mut(id.0)
            .ok_or(ShopError::UnknownProduct(id))?;

        if quantity.value() > product.available {
            return Err(ShopError::InsufficientStock {
                product: product.name.clone(),
                requested: quantity.value(),
                available: product.available,
            });
        }

        product.available -= quantity.value();
        debug!(
            product = %product.name,
            reserved = quantity.value(),
            remaining = product.available,
            "stock reserved"
        );
        Ok(())
    }
}
