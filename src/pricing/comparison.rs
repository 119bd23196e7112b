//! Side-by-side comparison of what the seller pays under different terms.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::CostCalculator;
use crate::error::Result;
use crate::models::{CostBreakdown, Incoterm, ShipmentRequest};

/// Terms shown in the default comparison.
pub const REFERENCE_TERMS: [Incoterm; 5] = [
    Incoterm::Exw,
    Incoterm::Fob,
    Incoterm::Cfr,
    Incoterm::Cif,
    Incoterm::Dap,
];

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermComparison {
    pub term: Incoterm,
    pub seller_pays: Decimal,
    pub total_cost: Decimal,
    pub risk_label: &'static str,
}

impl TermComparison {
    /// Share of the presented costs left to the buyer.
    pub fn buyer_pays(&self) -> Decimal {
        self.total_cost - self.seller_pays
    }
}

pub struct ComparisonEngine {
    calculator: CostCalculator,
}

impl ComparisonEngine {
    pub fn new(calculator: CostCalculator) -> Self {
        Self { calculator }
    }

    /// Price the shipment under each term, keeping the input order.
    ///
    /// The request's own `trade_term` is ignored.
    pub fn compare_terms(
        &self,
        terms: &[Incoterm],
        request: &ShipmentRequest,
    ) -> Result<Vec<TermComparison>> {
        request.validate()?;

        terms
            .iter()
            .map(|&term| {
                let costs = self.calculator.compute_costs(
                    request.product,
                    &request.destination,
                    request.fob_value,
                    term,
                    request.weight_tons,
                )?;
                let row = TermComparison {
                    term,
                    seller_pays: seller_share(&costs),
                    total_cost: costs.total(),
                    risk_label: term.info().risk_level,
                };
                debug!(term = %term, seller_pays = %row.seller_pays, total = %row.total_cost, "Compared term");
                Ok(row)
            })
            .collect()
    }

    /// Comparison over [`REFERENCE_TERMS`].
    pub fn compare_reference(&self, request: &ShipmentRequest) -> Result<Vec<TermComparison>> {
        self.compare_terms(&REFERENCE_TERMS, request)
    }
}

/// Seller-borne part of a breakdown, by term family.
pub fn seller_share(costs: &CostBreakdown) -> Decimal {
    let total = costs.total();
    match costs.term {
        Incoterm::Exw => costs.fob_value + costs.banking_fee + costs.certification_fee,
        Incoterm::Fob | Incoterm::Fca => {
            total - costs.ocean_freight - costs.insurance - costs.tariffs - costs.import_clearance_fee
        }
        Incoterm::Cfr | Incoterm::Cpt => {
            total - costs.insurance - costs.tariffs - costs.import_clearance_fee
        }
        Incoterm::Cif | Incoterm::Cip => total - costs.tariffs - costs.import_clearance_fee,
        Incoterm::Dap | Incoterm::Dpu | Incoterm::Ddp | Incoterm::Fas => total,
    }
}
