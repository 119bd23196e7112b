//! Export product catalog.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{Result, SimulatorError};

/// An exportable product with its reference figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,

    /// Average FOB value in USD per ton
    pub average_value_per_ton: u32,

    /// Typical shipment volume in tons
    pub reference_volume_tons: u32,
}

impl Product {
    /// Default FOB value offered for a new simulation.
    pub fn default_fob_value(&self) -> Decimal {
        Decimal::from(self.average_value_per_ton)
    }

    /// Default shipment weight offered for a new simulation.
    pub fn default_weight_tons(&self) -> Decimal {
        Decimal::from(self.reference_volume_tons)
    }
}

static PRODUCTS: [Product; 10] = [
    Product { name: "Pulp", category: "Paper and pulp", average_value_per_ton: 2500, reference_volume_tons: 1200 },
    Product { name: "Beef", category: "Meat", average_value_per_ton: 4500, reference_volume_tons: 450 },
    Product { name: "Soybeans", category: "Agricultural commodities", average_value_per_ton: 500, reference_volume_tons: 2400 },
    Product { name: "Dairy products", category: "Food", average_value_per_ton: 3200, reference_volume_tons: 180 },
    Product { name: "Beverage concentrates", category: "Beverages", average_value_per_ton: 8500, reference_volume_tons: 75 },
    Product { name: "Rice", category: "Agricultural commodities", average_value_per_ton: 600, reference_volume_tons: 900 },
    Product { name: "Vehicles", category: "Automotive", average_value_per_ton: 15000, reference_volume_tons: 150 },
    Product { name: "Meat by-products", category: "Meat", average_value_per_ton: 2800, reference_volume_tons: 120 },
    Product { name: "Timber", category: "Forestry", average_value_per_ton: 350, reference_volume_tons: 800 },
    Product { name: "Wheat", category: "Agricultural commodities", average_value_per_ton: 280, reference_volume_tons: 500 },
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Case-insensitive lookup by product name.
pub fn find_product(name: &str) -> Result<&'static Product> {
    let trimmed = name.trim();
    PRODUCTS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| SimulatorError::UnknownProduct(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_find_product() {
        let beef = find_product("BEEF").unwrap();
        assert_eq!(beef.category, "Meat");
        assert_eq!(beef.default_fob_value(), dec!(4500));
        assert_eq!(beef.default_weight_tons(), dec!(450));
    }

    #[test]
    fn test_unknown_product() {
        assert_eq!(
            find_product("Unobtainium"),
            Err(SimulatorError::UnknownProduct("Unobtainium".to_string()))
        );
    }
}
