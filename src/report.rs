//! Full simulation of one operation: term choice, costs, analysis and comparison.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::info;

use crate::analysis::{MarketAnalysis, OperationSummary};
use crate::error::Result;
use crate::models::{
    find_country, products, CostBreakdown, CountryProfile, Incoterm, ShipmentRequest, TradeTermInfo,
};
use crate::pricing::{
    ComparisonEngine, CostCalculator, Recommendation, SimulatorConfig, TermAdvisor, TermComparison,
};

/// Background facts on Uruguayan exports shown with every report.
const EXPORT_FACTS: &[&str] = &[
    "Uruguay exported USD 12,845 million in 2024, 13% growth",
    "Pulp displaced beef as the main export product",
    "China remains the main trading partner (24% of exports)",
    "The EU-MERCOSUR agreement will liberalize 92% of imports",
];

/// Export facts plus the catalog's share of exports.
pub fn insights() -> Vec<String> {
    EXPORT_FACTS
        .iter()
        .map(|fact| fact.to_string())
        .chain(std::iter::once(format!(
            "{} products represent 80% of exports",
            products().len()
        )))
        .collect()
}

/// How the trade term for a report was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TermChoice {
    Manual { term: Incoterm },
    Recommended(Recommendation),
}

impl TermChoice {
    pub fn term(&self) -> Incoterm {
        match self {
            TermChoice::Manual { term } => *term,
            TermChoice::Recommended(rec) => rec.term,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub generated_at: DateTime<Utc>,
    pub request: ShipmentRequest,
    pub country: Option<&'static CountryProfile>,
    pub choice: TermChoice,
    pub term_info: &'static TradeTermInfo,
    pub costs: CostBreakdown,
    pub summary: OperationSummary,
    pub analysis: MarketAnalysis,
    pub comparison: Vec<TermComparison>,
    pub insights: Vec<String>,
}

/// Wires the pricing units together under one configuration.
pub struct Simulator {
    config: SimulatorConfig,
    calculator: CostCalculator,
    advisor: TermAdvisor,
    comparison: ComparisonEngine,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let calculator = CostCalculator::new(config.pricing.clone());
        Self {
            advisor: TermAdvisor::new(config.advisor.clone()),
            comparison: ComparisonEngine::new(calculator.clone()),
            calculator,
            config,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn advisor(&self) -> &TermAdvisor {
        &self.advisor
    }

    pub fn comparison(&self) -> &ComparisonEngine {
        &self.comparison
    }

    /// The manual term if one was given, otherwise the advisor's pick.
    pub fn choose_term(&self, request: &ShipmentRequest) -> TermChoice {
        match request.trade_term {
            Some(term) => TermChoice::Manual { term },
            None => TermChoice::Recommended(self.advisor.recommend_term(
                &request.destination,
                request.experience,
                request.fob_value,
            )),
        }
    }

    /// Cost breakdown under the chosen term.
    pub fn costs(&self, request: &ShipmentRequest) -> Result<(TermChoice, CostBreakdown)> {
        request.validate()?;
        let choice = self.choose_term(request);
        let costs = self.calculator.compute_costs(
            request.product,
            &request.destination,
            request.fob_value,
            choice.term(),
            request.weight_tons,
        )?;
        Ok((choice, costs))
    }

    pub fn simulate(&self, request: ShipmentRequest) -> Result<SimulationReport> {
        let (choice, costs) = self.costs(&request)?;
        let summary = OperationSummary::from_breakdown(&costs, self.config.margin_pct)?;
        let analysis = MarketAnalysis::analyze(
            &request.destination,
            request.fob_value,
            request.weight_tons,
            self.config.high_value_per_ton,
        )?;
        let comparison = self.comparison.compare_reference(&request)?;

        info!(
            product = request.product.name,
            destination = %request.destination,
            term = %choice.term(),
            total = %summary.total_cost,
            "Simulation complete"
        );

        Ok(SimulationReport {
            generated_at: Utc::now(),
            country: find_country(&request.destination),
            term_info: choice.term().info(),
            request,
            choice,
            costs,
            summary,
            analysis,
            comparison,
            insights: insights(),
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

/// Write a cost table with per-line shares.
pub fn write_costs(f: &mut std::fmt::Formatter<'_>, summary: &OperationSummary) -> std::fmt::Result {
    writeln!(f, "{:<20} {:>14} {:>8}", "CONCEPT", "USD", "SHARE")?;
    writeln!(f, "{}", "-".repeat(44))?;
    for share in &summary.shares {
        writeln!(
            f,
            "{:<20} {:>14.2} {:>7.1}%",
            share.line.label(),
            share.amount,
            share.share_pct
        )?;
    }
    writeln!(f, "{}", "-".repeat(44))?;
    writeln!(f, "{:<20} {:>14.2}", "Total cost", summary.total_cost)?;
    writeln!(f, "{:<20} {:>14.2}", "Suggested margin", summary.suggested_margin)?;
    writeln!(f, "{:<20} {:>14.2}", "Suggested price", summary.suggested_price)?;
    Ok(())
}

/// Write the seller/buyer comparison table.
pub fn write_comparison(f: &mut std::fmt::Formatter<'_>, rows: &[TermComparison]) -> std::fmt::Result {
    writeln!(
        f,
        "{:<6} {:>14} {:>14} {:>14}  {}",
        "TERM", "SELLER PAYS", "BUYER PAYS", "TOTAL", "SELLER RISK"
    )?;
    writeln!(f, "{}", "-".repeat(78))?;
    for row in rows {
        writeln!(
            f,
            "{:<6} {:>14.2} {:>14.2} {:>14.2}  {}",
            row.term.code(),
            row.seller_pays,
            row.buyer_pays(),
            row.total_cost,
            row.risk_label
        )?;
    }
    Ok(())
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let req = &self.request;
        writeln!(f, "\n{:=^78}", " EXPORT SIMULATION ")?;
        writeln!(f, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f)?;

        writeln!(f, "--- Operation ---")?;
        writeln!(f, "Product:     {} ({})", req.product.name, req.product.category)?;
        writeln!(f, "Destination: {}", req.destination)?;
        writeln!(f, "FOB value:   ${:.2}", req.fob_value)?;
        writeln!(f, "Weight:      {} t", req.weight_tons.normalize())?;
        writeln!(f, "Experience:  {}", req.experience.as_str())?;
        writeln!(f)?;

        writeln!(f, "--- Destination Market ---")?;
        match self.country {
            Some(c) => {
                writeln!(f, "Export share:    {}%", c.export_share_pct)?;
                writeln!(f, "Agreement:       {}", c.trade_agreement)?;
                writeln!(f, "Base tariff:     {}%", c.base_tariff_pct)?;
            }
            None => writeln!(f, "Not in catalog: fallback freight, no tariff")?,
        }
        writeln!(f, "Assessment:      {}", self.analysis.tier.verdict())?;
        writeln!(f)?;

        writeln!(f, "--- Trade Term ---")?;
        match &self.choice {
            TermChoice::Manual { term } => writeln!(f, "Selected manually: {term}")?,
            TermChoice::Recommended(rec) => {
                writeln!(f, "Recommended: {} ({})", rec.term, rec.rationale)?
            }
        }
        write_term_info(f, self.term_info)?;
        writeln!(f)?;

        writeln!(f, "--- Costs ({}) ---", self.costs.term)?;
        write_costs(f, &self.summary)?;
        writeln!(f)?;

        writeln!(f, "--- Term Comparison ---")?;
        write_comparison(f, &self.comparison)?;
        writeln!(f)?;

        writeln!(f, "--- Insight ---")?;
        writeln!(f, "Value per ton: ${:.2}", self.analysis.value_per_ton)?;
        writeln!(f, "{}", self.analysis.profile.hint())?;
        writeln!(f)?;

        writeln!(f, "--- Did You Know? ---")?;
        for insight in &self.insights {
            writeln!(f, "- {insight}")?;
        }
        writeln!(f, "{:=^78}", "")?;
        Ok(())
    }
}

/// Write a trade term's attributes.
pub fn write_term_info(f: &mut std::fmt::Formatter<'_>, info: &TradeTermInfo) -> std::fmt::Result {
    writeln!(f, "{} - {}", info.code, info.full_name)?;
    writeln!(f, "  Seller responsibility: {}", info.seller_responsibility)?;
    writeln!(f, "  Transport:             {}", info.transport_party)?;
    writeln!(f, "  Insurance:             {}", info.insurance_party)?;
    writeln!(f, "  Export clearance:      {}", info.export_clearance_party)?;
    writeln!(f, "  Import clearance:      {}", info.import_clearance_party)?;
    writeln!(f, "  Seller risk:           {}", info.risk_level)?;
    writeln!(f, "  Recommended use:       {}", info.recommended_use)?;
    Ok(())
}

/// Percent display for a fractional rate.
pub fn pct(rate: Decimal) -> Decimal {
    rate.saturating_mul(dec!(100)).normalize()
}
