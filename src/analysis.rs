//! Market and operation analysis derived from a priced shipment.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{Result, SimulatorError};
use crate::models::{find_country, validate_amounts, CostBreakdown, CostLine, MERCOSUR};

/// How much tariff preference a trade agreement gives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementTier {
    /// Customs union member, zero tariff
    Preferential,
    /// Recently signed agreement with new preferences
    NewAgreement,
    /// Economic complementation agreement (ACE), limited preferences
    Partial,
    NoPreference,
}

impl AgreementTier {
    pub fn classify(agreement: &str) -> Self {
        if agreement == MERCOSUR {
            Self::Preferential
        } else if agreement.contains("EU-MERCOSUR") {
            Self::NewAgreement
        } else if agreement.contains("ACE") {
            Self::Partial
        } else {
            Self::NoPreference
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            AgreementTier::Preferential => "Advantage: 0% tariff under MERCOSUR",
            AgreementTier::NewAgreement => "Advantage: preferences under the new EU-MERCOSUR agreement",
            AgreementTier::Partial => "Neutral: limited preferences under ACE",
            AgreementTier::NoPreference => "Disadvantage: no tariff preferences",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductProfile {
    HighValue,
    Commodity,
}

impl ProductProfile {
    pub fn hint(&self) -> &'static str {
        match self {
            ProductProfile::HighValue => "High-value product: consider CIF for more control",
            ProductProfile::Commodity => "Commodity: FOB is usually more efficient",
        }
    }
}

/// Destination and product-type observations for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketAnalysis {
    pub agreement: Option<&'static str>,
    pub tier: AgreementTier,
    pub value_per_ton: Decimal,
    pub profile: ProductProfile,
}

impl MarketAnalysis {
    /// Fails on non-positive weight, which would make value per ton undefined.
    pub fn analyze(
        destination: &str,
        fob_value: Decimal,
        weight_tons: Decimal,
        high_value_per_ton: Decimal,
    ) -> Result<Self> {
        validate_amounts(fob_value, weight_tons)?;

        let agreement = find_country(destination).map(|c| c.trade_agreement);
        let tier = agreement
            .map(AgreementTier::classify)
            .unwrap_or(AgreementTier::NoPreference);
        let value_per_ton = fob_value
            .checked_div(weight_tons)
            .ok_or_else(|| SimulatorError::out_of_range("value per ton"))?;
        let profile = if value_per_ton > high_value_per_ton {
            ProductProfile::HighValue
        } else {
            ProductProfile::Commodity
        };

        Ok(Self {
            agreement,
            tier,
            value_per_ton,
            profile,
        })
    }
}

/// A cost line with its share of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineShare {
    pub line: CostLine,
    pub amount: Decimal,
    pub share_pct: Decimal,
}

/// Totals and suggested pricing for a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSummary {
    pub total_cost: Decimal,
    pub suggested_margin: Decimal,
    pub suggested_price: Decimal,
    pub shares: Vec<LineShare>,
}

impl OperationSummary {
    pub fn from_breakdown(costs: &CostBreakdown, margin_pct: Decimal) -> Result<Self> {
        let total_cost = costs
            .checked_total()
            .ok_or_else(|| SimulatorError::out_of_range("total cost"))?;
        let suggested_margin = total_cost
            .checked_mul(margin_pct)
            .ok_or_else(|| SimulatorError::out_of_range("suggested margin"))?;
        let suggested_price = total_cost
            .checked_add(suggested_margin)
            .ok_or_else(|| SimulatorError::out_of_range("suggested price"))?;

        let shares = costs
            .lines()
            .into_iter()
            .map(|(line, amount)| {
                let share_pct = if total_cost.is_zero() {
                    Decimal::ZERO
                } else {
                    amount
                        .checked_div(total_cost)
                        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                        .ok_or_else(|| SimulatorError::out_of_range("cost share"))?
                };
                Ok(LineShare {
                    line,
                    amount,
                    share_pct,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            total_cost,
            suggested_margin,
            suggested_price,
            shares,
        })
    }
}
