//! Shipment request and exporter profile.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Incoterm, Product};
use crate::error::{Result, SimulatorError};

/// Exporter's international trade experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    Beginner,
    Intermediate,
    Expert,
}

impl Experience {
    /// Anything that isn't recognised as beginner or intermediate counts as expert.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "novice" | "principiante" => Self::Beginner,
            "intermediate" | "intermedio" => Self::Intermediate,
            _ => Self::Expert,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Expert => "Expert",
        }
    }
}

/// One shipment to be priced.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentRequest {
    pub product: &'static Product,

    /// Destination name; may be outside the country catalog
    pub destination: String,

    /// Goods value excluding international freight and insurance (USD)
    pub fob_value: Decimal,

    pub weight_tons: Decimal,

    /// Manually chosen term; `None` defers to the advisor
    pub trade_term: Option<Incoterm>,

    pub experience: Experience,
}

impl ShipmentRequest {
    /// Request pre-filled with the product's reference value and volume.
    pub fn for_product(product: &'static Product, destination: impl Into<String>) -> Self {
        Self {
            product,
            destination: destination.into(),
            fob_value: product.default_fob_value(),
            weight_tons: product.default_weight_tons(),
            trade_term: None,
            experience: Experience::Intermediate,
        }
    }

    /// Reject non-positive value or weight.
    pub fn validate(&self) -> Result<()> {
        validate_amounts(self.fob_value, self.weight_tons)
    }
}

pub(crate) fn validate_amounts(fob_value: Decimal, weight_tons: Decimal) -> Result<()> {
    if weight_tons <= Decimal::ZERO {
        return Err(SimulatorError::InvalidInput(format!(
            "weight must be positive, got {weight_tons} t"
        )));
    }
    if fob_value <= Decimal::ZERO {
        return Err(SimulatorError::InvalidInput(format!(
            "FOB value must be positive, got {fob_value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_product;
    use rust_decimal_macros::dec;

    #[test]
    fn test_experience_fallback_is_expert() {
        assert_eq!(Experience::from_str("Beginner"), Experience::Beginner);
        assert_eq!(Experience::from_str(" INTERMEDIATE "), Experience::Intermediate);
        assert_eq!(Experience::from_str("expert"), Experience::Expert);
        assert_eq!(Experience::from_str("guru"), Experience::Expert);
        assert_eq!(Experience::from_str(""), Experience::Expert);
    }

    #[test]
    fn test_for_product_defaults() {
        let product = find_product("Rice").unwrap();
        let request = ShipmentRequest::for_product(product, "Peru");
        assert_eq!(request.fob_value, dec!(600));
        assert_eq!(request.weight_tons, dec!(900));
        assert!(request.trade_term.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let product = find_product("Rice").unwrap();
        let mut request = ShipmentRequest::for_product(product, "Peru");

        request.weight_tons = Decimal::ZERO;
        assert!(matches!(request.validate(), Err(SimulatorError::InvalidInput(_))));

        request.weight_tons = dec!(-3);
        assert!(matches!(request.validate(), Err(SimulatorError::InvalidInput(_))));

        request.weight_tons = dec!(10);
        request.fob_value = Decimal::ZERO;
        assert!(matches!(request.validate(), Err(SimulatorError::InvalidInput(_))));
    }
}
