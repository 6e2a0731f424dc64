//! Line item quantity.

use serde::Serialize;

use super::CheckoutError;

/// Number of units in the single checkout line item. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest quantity, used when the caller omits one.
    pub const ONE: Quantity = Quantity(1);

    /// Validates a caller-supplied quantity.
    ///
    /// Zero, negative and values beyond `u32::MAX` are rejected.
    pub fn new(value: i64) -> Result<Self, CheckoutError> {
        match u32::try_from(value) {
            Ok(n) if n >= 1 => Ok(Quantity(n)),
            _ => Err(CheckoutError::InvalidQuantity(value)),
        }
    }

    /// Resolves an optional quantity, defaulting to one.
    pub fn from_optional(value: Option<i64>) -> Result<Self, CheckoutError> {
        value.map_or(Ok(Quantity::ONE), Quantity::new)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn omitted_quantity_defaults_to_one() {
        assert_eq!(Quantity::from_optional(None).unwrap().get(), 1);
        assert_eq!(Quantity::default(), Quantity::ONE);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            Quantity::new(0),
            Err(CheckoutError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn negative_is_rejected() {
        assert!(matches!(
            Quantity::new(-3),
            Err(CheckoutError::InvalidQuantity(-3))
        ));
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(Quantity::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Quantity::new(3).unwrap().to_string(), "3");
    }

    proptest! {
        #[test]
        fn every_positive_quantity_round_trips_through_text(n in 1u32..=u32::MAX) {
            let quantity = Quantity::new(i64::from(n)).unwrap();
            prop_assert_eq!(quantity.get(), n);
            prop_assert_eq!(quantity.to_string(), n.to_string());
        }

        #[test]
        fn every_non_positive_quantity_is_rejected(n in i64::MIN..=0i64) {
            prop_assert!(Quantity::new(n).is_err());
        }
    }
}
