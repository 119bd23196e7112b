//! Destination markets and the per-destination ocean freight table.

use rust_decimal::Decimal;
use serde::Serialize;

/// Trade profile of a destination market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryProfile {
    /// Display name, also the lookup key
    pub name: &'static str,

    /// Share of national exports going to this destination (percent)
    pub export_share_pct: u32,

    /// Trade agreement in force with this destination
    pub trade_agreement: &'static str,

    /// Base import tariff applied on the CIF value (percent)
    pub base_tariff_pct: u32,
}

impl CountryProfile {
    /// Base tariff as a Decimal percentage.
    pub fn tariff_pct(&self) -> Decimal {
        Decimal::from(self.base_tariff_pct)
    }
}

pub const MERCOSUR: &str = "MERCOSUR";
pub const EU_MERCOSUR: &str = "EU-MERCOSUR (2024)";

static COUNTRIES: [CountryProfile; 10] = [
    CountryProfile { name: "China", export_share_pct: 24, trade_agreement: "No agreement", base_tariff_pct: 15 },
    CountryProfile { name: "Brazil", export_share_pct: 18, trade_agreement: MERCOSUR, base_tariff_pct: 0 },
    CountryProfile { name: "European Union", export_share_pct: 14, trade_agreement: EU_MERCOSUR, base_tariff_pct: 2 },
    CountryProfile { name: "United States", export_share_pct: 9, trade_agreement: "No agreement", base_tariff_pct: 12 },
    CountryProfile { name: "Argentina", export_share_pct: 5, trade_agreement: MERCOSUR, base_tariff_pct: 0 },
    CountryProfile { name: "Mexico", export_share_pct: 3, trade_agreement: "ACE-54", base_tariff_pct: 5 },
    CountryProfile { name: "Chile", export_share_pct: 2, trade_agreement: "ACE-35", base_tariff_pct: 3 },
    CountryProfile { name: "India", export_share_pct: 2, trade_agreement: "Framework Agreement", base_tariff_pct: 8 },
    CountryProfile { name: "Peru", export_share_pct: 1, trade_agreement: "ACE-58", base_tariff_pct: 4 },
    CountryProfile { name: "Colombia", export_share_pct: 1, trade_agreement: "ACE-72", base_tariff_pct: 6 },
];

/// Flat ocean freight in USD per ton.
static FREIGHT_RATES: [(&str, u32); 10] = [
    ("China", 85),
    ("Brazil", 25),
    ("European Union", 65),
    ("United States", 75),
    ("Argentina", 20),
    ("Mexico", 55),
    ("Chile", 30),
    ("India", 90),
    ("Peru", 35),
    ("Colombia", 50),
];

/// All destinations, ordered by export share.
pub fn countries() -> &'static [CountryProfile] {
    &COUNTRIES
}

/// Case-insensitive lookup by destination name.
pub fn find_country(name: &str) -> Option<&'static CountryProfile> {
    let name = name.trim();
    COUNTRIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Freight rate for a destination, `None` if the destination is not listed.
pub fn freight_rate(destination: &str) -> Option<Decimal> {
    let destination = destination.trim();
    FREIGHT_RATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(destination))
        .map(|(_, rate)| Decimal::from(*rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let brazil = find_country("  brazil ").unwrap();
        assert_eq!(brazil.trade_agreement, MERCOSUR);
        assert_eq!(brazil.tariff_pct(), Decimal::ZERO);
        assert!(find_country("Atlantis").is_none());
    }

    #[test]
    fn test_every_country_has_a_freight_rate() {
        for country in countries() {
            assert!(freight_rate(country.name).is_some(), "{}", country.name);
        }
        assert_eq!(freight_rate("india"), Some(dec!(90)));
        assert_eq!(freight_rate("Atlantis"), None);
    }
}
