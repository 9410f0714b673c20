use crate::error::CartError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-unit price snapshot taken when a product is added to the cart.
///
/// This is a wrapper around `rust_decimal::Decimal` that enforces the
/// non-negativity rule at construction and at deserialization, so a persisted
/// line with a negative price never makes it past the storage boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct UnitPrice(Decimal);

impl UnitPrice {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CartError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CartError::ValidationError(
                "Unit price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for UnitPrice {
    type Error = CartError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitPrice> for Decimal {
    fn from(price: UnitPrice) -> Self {
        price.0
    }
}

impl<'de> Deserialize<'de> for UnitPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
        UnitPrice::new(value).map_err(serde::de::Error::custom)
    }
}

/// Product data captured at add-time.
///
/// The engine never re-fetches product data: whatever the caller hands in here
/// is what the cart line carries for the rest of the session, even if the
/// catalog changes underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: UnitPrice,
    pub image: String,
}

/// One distinct product in the cart, with its quantity.
///
/// This is also the persisted record format: exactly these six fields, all
/// required. Unknown fields in stored data are a structural error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartLine {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: UnitPrice,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: ProductSnapshot, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            quantity,
        }
    }

    /// The extended price for this line: `price * quantity`.
    pub fn line_total(&self) -> Decimal {
        self.price.value() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pho() -> ProductSnapshot {
        ProductSnapshot {
            id: 1,
            name: "Pho Bo".to_string(),
            description: "Beef noodle soup".to_string(),
            price: UnitPrice::new(dec!(12.99)).unwrap(),
            image: "/img/pho-bo.jpg".to_string(),
        }
    }

    #[test]
    fn test_unit_price_validation() {
        assert!(UnitPrice::new(dec!(1.0)).is_ok());
        assert!(UnitPrice::new(dec!(0.0)).is_ok());
        assert!(matches!(
            UnitPrice::new(dec!(-1.0)),
            Err(CartError::ValidationError(_))
        ));
    }

    #[test]
    fn test_line_total() {
        let line = CartLine::new(pho(), 3);
        assert_eq!(line.line_total(), dec!(38.97));
    }

    #[test]
    fn test_line_round_trip() {
        let line = CartLine::new(pho(), 2);
        let json = serde_json::to_string(&line).unwrap();
        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_negative_price_rejected_on_deserialize() {
        let json = r#"{"id":1,"name":"x","description":"","price":"-1.0","image":"","quantity":1}"#;
        assert!(serde_json::from_str::<CartLine>(json).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json =
            r#"{"id":1,"name":"x","description":"","price":"1.0","image":"","quantity":1,"extra":true}"#;
        assert!(serde_json::from_str::<CartLine>(json).is_err());
    }
}
