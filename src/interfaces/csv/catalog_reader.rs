use crate::domain::catalog::Catalog;
use crate::domain::product::Price;
use crate::error::{Result, ShopError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a catalog file: `name, price, quantity`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ProductRecord {
    pub name: String,
    /// Parsed from the field text, never through a float.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub quantity: u64,
}

/// Reads product definitions from a CSV source.
///
/// Expects a header row. Surrounding whitespace in every field is trimmed.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes product rows.
    pub fn records(self) -> impl Iterator<Item = Result<ProductRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ShopError::from))
    }

    /// Loads every row into a `Catalog`, failing on the first bad row.
    pub fn into_catalog(self) -> Result<Catalog> {
        let products = self
            .records()
            .map(|record| {
                let record = record?;
                Ok((record.name, Price::new(record.price)?, record.quantity))
            })
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(products)
    }
}
