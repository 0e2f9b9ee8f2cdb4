use crate::error::ShopError;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::AddAssign;

/// Position of a product inside the catalog that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub(crate) usize);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A non-negative monetary value.
///
/// Wraps `rust_decimal::Decimal` so cart totals are computed exactly,
/// to the cent, regardless of how many lines are summed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(pub(crate) Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, ShopError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ShopError::InvalidCatalog(format!(
                "price must not be negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, ShopError> {
        self.0.checked_add(rhs.0).map(Self).ok_or(ShopError::Overflow)
    }

    /// Price of `quantity` units at this unit price.
    pub fn checked_mul(self, quantity: Quantity) -> Result<Self, ShopError> {
        self.0
            .checked_mul(Decimal::from(quantity.0))
            .map(Self)
            .ok_or(ShopError::Overflow)
    }

    /// Adds up prices, failing instead of overflowing.
    pub fn checked_sum<I: IntoIterator<Item = Self>>(prices: I) -> Result<Self, ShopError> {
        prices
            .into_iter()
            .try_fold(Self::ZERO, |acc, price| acc.checked_add(price))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

/// A strictly positive number of units.
///
/// Merged cart quantities never exceed the stock they were reserved from, so
/// adding them cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(value: u64) -> Result<Self, ShopError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(ShopError::InvalidInput)
        }
    }

    /// Parses a quantity typed by the user.
    ///
    /// Anything that is not a whole number greater than zero is rejected
    /// with `InvalidInput`.
    pub fn parse(token: &str) -> Result<Self, ShopError> {
        let value: i64 = token.trim().parse().map_err(|_| ShopError::InvalidInput)?;
        let value = u64::try_from(value).map_err(|_| ShopError::InvalidInput)?;
        Self::new(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A purchasable item together with its live stock counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Units still available for reservation in this session.
    pub available: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::new(dec!(0)).is_ok());
        assert!(Price::new(dec!(10.99)).is_ok());
        assert!(matches!(
            Price::new(dec!(-0.01)),
            Err(ShopError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_price_times_quantity() {
        let price = Price::new(dec!(10.99)).unwrap();
        let quantity = Quantity::new(3).unwrap();
        assert_eq!(
            price.checked_mul(quantity).unwrap(),
            Price::new(dec!(32.97)).unwrap()
        );
    }

    #[test]
    fn test_price_sum_is_exact() {
        let total = Price::checked_sum(std::iter::repeat_n(Price::new(dec!(0.1)).unwrap(), 10));
        assert_eq!(total.unwrap().value(), dec!(1.0));
    }

    #[test]
    fn test_price_arithmetic_overflow_is_an_error() {
        let max = Price::new(Decimal::MAX).unwrap();
        let two = Quantity::new(2).unwrap();

        assert!(matches!(max.checked_mul(two), Err(ShopError::Overflow)));
        assert!(matches!(max.checked_add(max), Err(ShopError::Overflow)));
        assert!(matches!(Price::checked_sum([max, max]), Err(ShopError::Overflow)));
        assert_eq!(
            max.checked_mul(Quantity::new(1).unwrap()).unwrap(),
            max
        );
    }

    #[test]
    fn test_price_display_two_decimals() {
        assert_eq!(Price::new(dec!(5)).unwrap().to_string(), "5.00");
        assert_eq!(Price::new(dec!(32.97)).unwrap().to_string(), "32.97");
        assert_eq!(Price::new(dec!(7.4900)).unwrap().to_string(), "7.49");
    }

    #[test]
    fn test_quantity_validation() {
        assert!(Quantity::new(1).is_ok());
        assert!(matches!(Quantity::new(0), Err(ShopError::InvalidInput)));
    }

    #[test]
    fn test_quantity_parse() {
        assert_eq!(Quantity::parse("3").unwrap().value(), 3);
        assert_eq!(Quantity::parse(" 12 ").unwrap().value(), 12);
        for bad in ["0", "-1", "-999", "abc", "", "2.5", "99999999999999999999"] {
            assert!(
                matches!(Quantity::parse(bad), Err(ShopError::InvalidInput)),
                "{bad:?} should be rejected"
            );
        }
    }
}
