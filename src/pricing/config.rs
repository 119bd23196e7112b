//! Pricing and advisory configuration.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Rates and flat fees used by the cost calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Insurance premium as a fraction of CIF value
    pub insurance_rate: Decimal,

    /// Banking fee as a fraction of FOB value
    pub banking_rate: Decimal,

    /// Flat certification cost per shipment (USD)
    pub certification_fee: Decimal,

    /// Export customs clearance (USD)
    pub export_clearance_fee: Decimal,

    /// Import customs clearance (USD)
    pub import_clearance_fee: Decimal,

    /// Import clearance for delivered terms (USD)
    pub delivered_import_clearance_fee: Decimal,

    /// Freight per ton for destinations without a listed rate
    pub fallback_freight_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            insurance_rate: dec!(0.003),         // 0.3% of CIF
            banking_rate: dec!(0.002),           // 0.2% of FOB
            certification_fee: dec!(180),
            export_clearance_fee: dec!(350),
            import_clearance_fee: dec!(280),
            delivered_import_clearance_fee: dec!(420),
            fallback_freight_rate: dec!(60),
        }
    }
}

/// Operation-value thresholds for the term advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Intermediate exporters below this value get FCA
    pub small_operation_limit: Decimal,

    /// Expert exporters above this value get CIF
    pub large_operation_limit: Decimal,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            small_operation_limit: dec!(50000),
            large_operation_limit: dec!(200000),
        }
    }
}

/// Top-level simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub pricing: PricingConfig,
    pub advisor: AdvisorConfig,

    /// Suggested margin over total cost (0.0 to 1.0)
    pub margin_pct: Decimal,

    /// Value per ton above which a product counts as high value
    pub high_value_per_ton: Decimal,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            advisor: AdvisorConfig::default(),
            margin_pct: dec!(0.15),              // 15% suggested margin
            high_value_per_ton: dec!(1000),
        }
    }
}

impl SimulatorConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        if config.margin_pct < Decimal::ZERO {
            anyhow::bail!("margin_pct must not be negative");
        }
        Ok(config)
    }
}
