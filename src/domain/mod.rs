//! Domain layer: products, the stock-owning catalog, the cart and the ports
//! the application layer depends on.

pub mod cart;
pub mod catalog;
pub mod ports;
pub mod product;
