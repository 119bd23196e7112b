//! Itemized cost breakdown for one shipment under one trade term.

use rust_decimal::Decimal;
use serde::Serialize;

use super::Incoterm;

/// A single line of the cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostLine {
    FobValue,
    OceanFreight,
    Insurance,
    Tariffs,
    ExportClearance,
    ImportClearance,
    BankingFee,
    Certification,
}

impl CostLine {
    pub fn label(&self) -> &'static str {
        match self {
            CostLine::FobValue => "FOB value",
            CostLine::OceanFreight => "Ocean freight",
            CostLine::Insurance => "Insurance",
            CostLine::Tariffs => "Tariffs",
            CostLine::ExportClearance => "Export clearance",
            CostLine::ImportClearance => "Import clearance",
            CostLine::BankingFee => "Banking fee",
            CostLine::Certification => "Certifications",
        }
    }
}

/// Costs in USD, one field per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub term: Incoterm,
    pub fob_value: Decimal,
    pub ocean_freight: Decimal,
    pub insurance: Decimal,
    pub tariffs: Decimal,
    pub export_clearance_fee: Decimal,
    pub import_clearance_fee: Decimal,
    pub banking_fee: Decimal,
    pub certification_fee: Decimal,
}

impl CostBreakdown {
    /// Lines in presentation order.
    pub fn lines(&self) -> [(CostLine, Decimal); 8] {
        [
            (CostLine::FobValue, self.fob_value),
            (CostLine::OceanFreight, self.ocean_freight),
            (CostLine::Insurance, self.insurance),
            (CostLine::Tariffs, self.tariffs),
            (CostLine::ExportClearance, self.export_clearance_fee),
            (CostLine::ImportClearance, self.import_clearance_fee),
            (CostLine::BankingFee, self.banking_fee),
            (CostLine::Certification, self.certification_fee),
        ]
    }

    /// Sum of all lines, `None` if it overflows.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.lines()
            .iter()
            .try_fold(Decimal::ZERO, |acc, (_, amount)| acc.checked_add(*amount))
    }

    /// Sum of all lines.
    pub fn total(&self) -> Decimal {
        self.lines().iter().map(|(_, amount)| *amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_and_order() {
        let breakdown = CostBreakdown {
            term: Incoterm::Cif,
            fob_value: dec!(1000),
            ocean_freight: dec!(200),
            insurance: dec!(3.6),
            tariffs: dec!(0),
            export_clearance_fee: dec!(350),
            import_clearance_fee: dec!(280),
            banking_fee: dec!(2),
            certification_fee: dec!(180),
        };

        assert_eq!(breakdown.total(), dec!(2015.6));

        let lines = breakdown.lines();
        assert_eq!(lines[0].0, CostLine::FobValue);
        assert_eq!(lines[7].0, CostLine::Certification);
        assert_eq!(lines[1].1, dec!(200));
    }

    #[test]
    fn test_checked_total_overflow() {
        let breakdown = CostBreakdown {
            term: Incoterm::Ddp,
            fob_value: Decimal::MAX,
            ocean_freight: Decimal::ZERO,
            insurance: Decimal::ZERO,
            tariffs: Decimal::ZERO,
            export_clearance_fee: dec!(350),
            import_clearance_fee: dec!(420),
            banking_fee: Decimal::ZERO,
            certification_fee: dec!(180),
        };
        assert_eq!(breakdown.checked_total(), None);
    }
}
