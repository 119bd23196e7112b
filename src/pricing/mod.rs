//! Pricing logic: cost breakdown, term advice, term comparison.

mod advisor;
mod comparison;
mod config;
mod cost_calculator;

pub use advisor::{Recommendation, TermAdvisor};
pub use comparison::{ComparisonEngine, TermComparison};
pub use config::{AdvisorConfig, PricingConfig, SimulatorConfig};
pub use cost_calculator::CostCalculator;
