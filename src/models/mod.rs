//! Data models: reference catalogs, shipment requests and cost breakdowns.

mod breakdown;
mod country;
mod incoterm;
mod product;
mod shipment;

pub use breakdown::{CostBreakdown, CostLine};
pub use country::{countries, find_country, freight_rate, CountryProfile, EU_MERCOSUR, MERCOSUR};
pub use incoterm::{trade_terms, Incoterm, TradeTermInfo};
pub use product::{find_product, products, Product};
pub use shipment::{Experience, ShipmentRequest};
pub(crate) use shipment::validate_amounts;
