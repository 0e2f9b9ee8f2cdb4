use crate::domain::ports::RandomSourceBox;
use crate::domain::product::Price;
use crate::error::{Result, ShopError};
use tracing::info;

/// Chance, in percent, that a payment attempt is declined.
pub const DEFAULT_FAILURE_PERCENT: u8 = 10;

/// Simulated payment step run once at the end of a session.
pub struct Checkout {
    random: RandomSourceBox,
    failure_percent: u8,
}

impl Checkout {
    /// Creates a `Checkout` that declines `failure_percent` percent of payments.
    ///
    /// Values above 100 are treated as 100.
    pub fn new(random: RandomSourceBox, failure_percent: u8) -> Self {
        Self {
            random,
            failure_percent: failure_percent.min(100),
        }
    }

    /// Attempts to charge `total`.
    ///
    /// A single draw decides the outcome; there is no retry.
    pub fn process(&mut self, total: Price) -> Result<Price> {
        let draw = self.random.next_below(100);
        if draw < u32::from(self.failure_percent) {
            info!(%total, draw, "payment declined");
            return Err(ShopError::PaymentFailure);
        }
        info!(%total, draw, "payment accepted");
        Ok(total)
    }
}
