use crate::application::checkout::Checkout;
use crate::domain::cart::{Cart, CartSummary};
use crate::domain::catalog::Catalog;
use crate::domain::product::{Price, ProductId, Quantity};
use crate::error::{Result, ShopError};
use crate::interfaces::console::cart_writer::CartWriter;
use crate::interfaces::console::prompt::Console;
use std::io::{BufRead, Write};
use tracing::debug;

/// Where the session loop currently is.
#[derive(Debug, Clone, PartialEq)]
enum State {
    Prompting,
    Validating(String),
    Committing(ProductId, Quantity),
    AskingForMore,
    Finalizing,
}

/// What a completed session leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub summary: CartSummary,
    pub charged: Price,
}

/// One interactive shopping session.
///
/// Drives the prompt → lookup → reserve loop, then shows the cart and runs
/// checkout once. Any failure ends the whole session; the caller decides how
/// to report it.
pub struct Session<R: BufRead, W: Write, E: Write> {
    console: Console<R, W, E>,
    catalog: Catalog,
    cart: Cart,
    checkout: Checkout,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(console: Console<R, W, E>, catalog: Catalog, checkout: Checkout) -> Self {
        Self {
            console,
            catalog,
            cart: Cart::new(),
            checkout,
        }
    }

    pub fn run(mut self) -> Result<SessionOutcome> {
        let mut state = State::Prompting;

        loop {
            state = match state {
                State::Prompting => self.prompt_for_product()?,
                State::Validating(name) => self.validate(&name)?,
                State::Committing(product, quantity) => {
                    self.cart.add(&mut self.catalog, product, quantity)?;
                    self.console.say("Item added Successfully")?;
                    State::AskingForMore
                }
                State::AskingForMore => self.ask_for_more()?,
                State::Finalizing => return self.finalize(),
            };
        }
    }

    fn prompt_for_product(&mut self) -> Result<State> {
        self.console.say("add item to the cart")?;
        self.console.say("Enter the product name")?;

        Ok(match self.console.read_line()? {
            Some(name) => State::Validating(name),
            None => {
                debug!("input closed while prompting for a product");
                State::Finalizing
            }
        })
    }

    fn validate(&mut self, name: &str) -> Result<State> {
        let Some(product) = self.catalog.find(name) else {
            debug!(name, "product lookup missed");
            self.console.report("Product not found")?;
            return Ok(State::Prompting);
        };
        let product = product.id;

        self.console.say("Enter the product quantity")?;
        let token = self.console.read_token()?.ok_or(ShopError::InvalidInput)?;
        let quantity = Quantity::parse(&token)?;

        Ok(State::Committing(product, quantity))
    }

    fn ask_for_more(&mut self) -> Result<State> {
        self.console.say("Do you want to add more item? (y/n)")?;
        let answer = self.console.read_token()?;
        self.console.discard_line();

        let more = answer
            .and_then(|token| token.chars().next())
            .is_some_and(|c| c.eq_ignore_ascii_case(&'y'));

        Ok(if more {
            State::Prompting
        } else {
            State::Finalizing
        })
    }

    fn finalize(mut self) -> Result<SessionOutcome> {
        let summary = self.cart.summary(&self.catalog)?;
        CartWriter::new(self.console.out()).write_summary(&summary)?;

        let charged = self.checkout.process(summary.total)?;
        self.console.say("Payment successful")?;

        Ok(SessionOutcome { summary, charged })
    }
}
