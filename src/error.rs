use crate::domain::product::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Insufficient stock: stock is less than the quantity you needed")]
    InsufficientStock {
        product: String,
        requested: u64,
        available: u64,
    },
    #[error("Invalid Input: Enter a valid quantity")]
    InvalidInput,
    #[error("payment failed..")]
    PaymentFailure,
    #[error("Amount too large: cart total overflowed")]
    Overflow,
    #[error("Unknown product id: {0}")]
    UnknownProduct(ProductId),
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;
