//! Shipment cost breakdown per trade term.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::PricingConfig;
use crate::error::{Result, SimulatorError};
use crate::models::{find_country, freight_rate, validate_amounts, CostBreakdown, Incoterm, Product};

/// Computes itemized costs for a shipment.
#[derive(Debug, Clone, Default)]
pub struct CostCalculator {
    config: PricingConfig,
}

impl CostCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Cost breakdown for shipping `weight_tons` of `product` to `destination` under `term`.
    ///
    /// Freight is a flat per-ton rate by destination; insurance and tariffs are
    /// levied on the CIF value. Term rules then zero out what the seller does
    /// not pay for. Unknown destinations price with the fallback freight rate
    /// and no tariff.
    pub fn compute_costs(
        &self,
        product: &Product,
        destination: &str,
        fob_value: Decimal,
        term: Incoterm,
        weight_tons: Decimal,
    ) -> Result<CostBreakdown> {
        validate_amounts(fob_value, weight_tons)?;

        let cfg = &self.config;
        let country = find_country(destination);
        let tariff_pct = match country {
            Some(c) => c.tariff_pct(),
            None => {
                warn!(destination = %destination, "Destination not in catalog, assuming no tariff");
                Decimal::ZERO
            }
        };
        let rate = freight_rate(destination).unwrap_or(cfg.fallback_freight_rate);

        let mut ocean_freight = rate
            .checked_mul(weight_tons)
            .ok_or_else(|| SimulatorError::out_of_range("ocean freight"))?;
        let cif_value = fob_value
            .checked_add(ocean_freight)
            .ok_or_else(|| SimulatorError::out_of_range("CIF value"))?;
        let mut insurance = cif_value
            .checked_mul(cfg.insurance_rate)
            .ok_or_else(|| SimulatorError::out_of_range("insurance"))?;
        let tariffs = cif_value
            .checked_mul(tariff_pct)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| SimulatorError::out_of_range("tariffs"))?;
        let banking_fee = fob_value
            .checked_mul(cfg.banking_rate)
            .ok_or_else(|| SimulatorError::out_of_range("banking fee"))?;
        let mut export_clearance_fee = cfg.export_clearance_fee;
        let mut import_clearance_fee = cfg.import_clearance_fee;

        match term {
            Incoterm::Exw => {
                export_clearance_fee = Decimal::ZERO;
                ocean_freight = Decimal::ZERO;
                insurance = Decimal::ZERO;
            }
            Incoterm::Fca | Incoterm::Fob => {
                ocean_freight = Decimal::ZERO;
                insurance = Decimal::ZERO;
            }
            Incoterm::Cfr | Incoterm::Cpt => {
                insurance = Decimal::ZERO;
            }
            Incoterm::Dap | Incoterm::Dpu | Incoterm::Ddp => {
                import_clearance_fee = cfg.delivered_import_clearance_fee;
            }
            Incoterm::Fas | Incoterm::Cif | Incoterm::Cip => {}
        }

        // Only DDP keeps the delivered clearance fee; DAP/DPU are reset here.
        if term != Incoterm::Ddp {
            import_clearance_fee = cfg.import_clearance_fee;
        }

        let breakdown = CostBreakdown {
            term,
            fob_value,
            ocean_freight,
            insurance,
            tariffs,
            export_clearance_fee,
            import_clearance_fee,
            banking_fee,
            certification_fee: cfg.certification_fee,
        };

        let total = breakdown
            .checked_total()
            .ok_or_else(|| SimulatorError::out_of_range("total cost"))?;

        debug!(
            product = product.name,
            destination = %destination,
            term = %term,
            total = %total,
            "Computed cost breakdown"
        );

        Ok(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{countries, find_product, MERCOSUR};
    use rust_decimal_macros::dec;

    fn calc() -> CostCalculator {
        CostCalculator::default()
    }

    fn pulp() -> &'static Product {
        find_product("Pulp").unwrap()
    }

    #[test]
    fn test_argentina_fob_example() {
        let costs = calc()
            .compute_costs(pulp(), "Argentina", dec!(10000), Incoterm::Fob, dec!(100))
            .unwrap();

        assert_eq!(costs.tariffs, Decimal::ZERO);
        assert_eq!(costs.ocean_freight, Decimal::ZERO);
        assert_eq!(costs.insurance, Decimal::ZERO);
        assert_eq!(costs.banking_fee, dec!(20));
        assert_eq!(costs.certification_fee, dec!(180));
        assert_eq!(costs.export_clearance_fee, dec!(350));
        assert_eq!(costs.import_clearance_fee, dec!(280));
        assert_eq!(costs.total(), dec!(10830));
    }

    #[test]
    fn test_cif_to_china_keeps_freight_and_insurance() {
        let costs = calc()
            .compute_costs(pulp(), "China", dec!(10000), Incoterm::Cif, dec!(100))
            .unwrap();

        // freight 85 * 100, CIF 18500
        assert_eq!(costs.ocean_freight, dec!(8500));
        assert_eq!(costs.insurance, dec!(55.5));
        assert_eq!(costs.tariffs, dec!(2775));
        assert_eq!(costs.total(), dec!(10000) + dec!(8500) + dec!(55.5) + dec!(2775) + dec!(350) + dec!(280) + dec!(20) + dec!(180));
    }

    #[test]
    fn test_tariff_uses_cif_value_even_when_freight_zeroed() {
        let costs = calc()
            .compute_costs(pulp(), "United States", dec!(1000), Incoterm::Exw, dec!(10))
            .unwrap();
        // CIF = 1000 + 75 * 10
        assert_eq!(costs.tariffs, dec!(210));
    }

    #[test]
    fn test_mercosur_tariff_always_zero() {
        for country in countries().iter().filter(|c| c.trade_agreement == MERCOSUR) {
            for term in Incoterm::ALL {
                let costs = calc()
                    .compute_costs(pulp(), country.name, dec!(54321), term, dec!(77))
                    .unwrap();
                assert_eq!(costs.tariffs, Decimal::ZERO, "{} {}", country.name, term);
            }
        }
    }

    #[test]
    fn test_exw_zeroes_seller_logistics() {
        for country in countries() {
            let costs = calc()
                .compute_costs(pulp(), country.name, dec!(25000), Incoterm::Exw, dec!(12.5))
                .unwrap();
            assert_eq!(costs.ocean_freight, Decimal::ZERO);
            assert_eq!(costs.insurance, Decimal::ZERO);
            assert_eq!(costs.export_clearance_fee, Decimal::ZERO);
        }
    }

    #[test]
    fn test_import_clearance_only_raised_for_ddp() {
        for term in Incoterm::ALL {
            let costs = calc()
                .compute_costs(pulp(), "Chile", dec!(5000), term, dec!(20))
                .unwrap();
            let expected = if term == Incoterm::Ddp { dec!(420) } else { dec!(280) };
            assert_eq!(costs.import_clearance_fee, expected, "{term}");
        }
    }

    #[test]
    fn test_cfr_and_cpt_drop_insurance_only() {
        for term in [Incoterm::Cfr, Incoterm::Cpt] {
            let costs = calc()
                .compute_costs(pulp(), "Peru", dec!(5000), term, dec!(20))
                .unwrap();
            assert_eq!(costs.insurance, Decimal::ZERO);
            assert_eq!(costs.ocean_freight, dec!(700));
        }
    }

    #[test]
    fn test_fas_keeps_base_values() {
        let costs = calc()
            .compute_costs(pulp(), "Brazil", dec!(1000), Incoterm::Fas, dec!(10))
            .unwrap();
        assert_eq!(costs.ocean_freight, dec!(250));
        assert_eq!(costs.insurance, dec!(3.75));
        assert_eq!(costs.export_clearance_fee, dec!(350));
    }

    #[test]
    fn test_unknown_destination_uses_fallback_rate() {
        let costs = calc()
            .compute_costs(pulp(), "Atlantis", dec!(1000), Incoterm::Cif, dec!(10))
            .unwrap();
        assert_eq!(costs.ocean_freight, dec!(600));
        assert_eq!(costs.tariffs, Decimal::ZERO);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        for weight in [Decimal::ZERO, dec!(-1)] {
            let err = calc()
                .compute_costs(pulp(), "China", dec!(1000), Incoterm::Fob, weight)
                .unwrap_err();
            assert!(matches!(err, SimulatorError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_huge_weight_is_rejected_not_overflowed() {
        let err = calc()
            .compute_costs(pulp(), "China", dec!(1000), Incoterm::Cif, Decimal::MAX / dec!(10))
            .unwrap_err();
        assert_eq!(err, SimulatorError::out_of_range("ocean freight"));
    }

    #[test]
    fn test_huge_fob_value_is_rejected() {
        // freight fits, but FOB + freight does not
        let err = calc()
            .compute_costs(pulp(), "China", Decimal::MAX, Incoterm::Fob, dec!(10))
            .unwrap_err();
        assert_eq!(err, SimulatorError::out_of_range("CIF value"));

        // each line fits, but insurance pushes the sum over the limit
        let err = calc()
            .compute_costs(pulp(), "Brazil", Decimal::MAX - dec!(10000), Incoterm::Cif, dec!(1))
            .unwrap_err();
        assert_eq!(err, SimulatorError::out_of_range("total cost"));
    }

    #[test]
    fn test_custom_config() {
        let config = PricingConfig {
            certification_fee: dec!(0),
            fallback_freight_rate: dec!(100),
            ..Default::default()
        };
        let costs = CostCalculator::new(config)
            .compute_costs(pulp(), "Nowhere", dec!(1000), Incoterm::Cpt, dec!(2))
            .unwrap();
        assert_eq!(costs.certification_fee, Decimal::ZERO);
        assert_eq!(costs.ocean_freight, dec!(200));
    }
}
