pub mod cart_writer;
pub mod prompt;
