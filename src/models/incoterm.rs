//! Incoterms 2020 codes and their responsibility split.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};

/// Standard trade term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    Exw,
    Fca,
    Fas,
    Fob,
    Cfr,
    Cif,
    Cpt,
    Cip,
    Dap,
    Dpu,
    Ddp,
}

impl Incoterm {
    pub const ALL: [Incoterm; 11] = [
        Incoterm::Exw,
        Incoterm::Fca,
        Incoterm::Fas,
        Incoterm::Fob,
        Incoterm::Cfr,
        Incoterm::Cif,
        Incoterm::Cpt,
        Incoterm::Cip,
        Incoterm::Dap,
        Incoterm::Dpu,
        Incoterm::Ddp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Incoterm::Exw => "EXW",
            Incoterm::Fca => "FCA",
            Incoterm::Fas => "FAS",
            Incoterm::Fob => "FOB",
            Incoterm::Cfr => "CFR",
            Incoterm::Cif => "CIF",
            Incoterm::Cpt => "CPT",
            Incoterm::Cip => "CIP",
            Incoterm::Dap => "DAP",
            Incoterm::Dpu => "DPU",
            Incoterm::Ddp => "DDP",
        }
    }

    /// Parse a three-letter code, ignoring case and surrounding whitespace.
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        Self::ALL
            .into_iter()
            .find(|term| term.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SimulatorError::UnknownTerm(code.to_string()))
    }

    /// Catalog entry describing who does what under this term.
    pub fn info(&self) -> &'static TradeTermInfo {
        // TERMS is laid out in declaration order
        &TERMS[*self as usize]
    }
}

impl std::fmt::Display for Incoterm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Responsibility split and guidance for a trade term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeTermInfo {
    pub code: Incoterm,
    pub full_name: &'static str,
    pub seller_responsibility: &'static str,
    pub transport_party: &'static str,
    pub insurance_party: &'static str,
    pub export_clearance_party: &'static str,
    pub import_clearance_party: &'static str,
    pub risk_level: &'static str,
    pub recommended_use: &'static str,
}

const BUYER: &str = "Buyer";
const SELLER: &str = "Seller";
const SELLER_TO_DESTINATION: &str = "Seller (to destination)";
const SELLER_FULL: &str = "Seller (door to door)";

static TERMS: [TradeTermInfo; 11] = [
    TradeTermInfo {
        code: Incoterm::Exw,
        full_name: "Ex Works",
        seller_responsibility: "Minimal - goods made available at the factory",
        transport_party: BUYER,
        insurance_party: BUYER,
        export_clearance_party: BUYER,
        import_clearance_party: BUYER,
        risk_level: "Low for seller",
        recommended_use: "Sellers with little international experience",
    },
    TradeTermInfo {
        code: Incoterm::Fca,
        full_name: "Free Carrier",
        seller_responsibility: "Until handed over to the carrier",
        transport_party: BUYER,
        insurance_party: BUYER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "Medium for seller",
        recommended_use: "Multimodal transport, containers",
    },
    TradeTermInfo {
        code: Incoterm::Fas,
        full_name: "Free Alongside Ship",
        seller_responsibility: "Until placed alongside the vessel",
        transport_party: BUYER,
        insurance_party: BUYER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "Medium for seller",
        recommended_use: "Bulk and heavy cargo by sea",
    },
    TradeTermInfo {
        code: Incoterm::Fob,
        full_name: "Free On Board",
        seller_responsibility: "Until loaded on board the vessel",
        transport_party: BUYER,
        insurance_party: BUYER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "Medium for seller",
        recommended_use: "Sea transport only",
    },
    TradeTermInfo {
        code: Incoterm::Cfr,
        full_name: "Cost and Freight",
        seller_responsibility: "Includes ocean freight",
        transport_party: SELLER_TO_DESTINATION,
        insurance_party: BUYER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "Medium-high for seller",
        recommended_use: "When the seller gets better freight rates",
    },
    TradeTermInfo {
        code: Incoterm::Cif,
        full_name: "Cost, Insurance and Freight",
        seller_responsibility: "Includes freight and insurance",
        transport_party: SELLER_TO_DESTINATION,
        insurance_party: SELLER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "High for seller",
        recommended_use: "Buyers with little experience",
    },
    TradeTermInfo {
        code: Incoterm::Cpt,
        full_name: "Carriage Paid To",
        seller_responsibility: "Carriage paid to destination",
        transport_party: SELLER_TO_DESTINATION,
        insurance_party: BUYER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "Medium-high for seller",
        recommended_use: "Multimodal transport",
    },
    TradeTermInfo {
        code: Incoterm::Cip,
        full_name: "Carriage and Insurance Paid To",
        seller_responsibility: "Carriage and insurance paid",
        transport_party: SELLER_TO_DESTINATION,
        insurance_party: SELLER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "High for seller",
        recommended_use: "Multimodal transport with insurance",
    },
    TradeTermInfo {
        code: Incoterm::Dap,
        full_name: "Delivered at Place",
        seller_responsibility: "Until the named place of destination",
        transport_party: SELLER_FULL,
        insurance_party: SELLER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "High for seller",
        recommended_use: "Sellers with their own logistics",
    },
    TradeTermInfo {
        code: Incoterm::Dpu,
        full_name: "Delivered at Place Unloaded",
        seller_responsibility: "Until unloaded at destination",
        transport_party: SELLER_FULL,
        insurance_party: SELLER,
        export_clearance_party: SELLER,
        import_clearance_party: BUYER,
        risk_level: "Very high for seller",
        recommended_use: "Specific terminals",
    },
    TradeTermInfo {
        code: Incoterm::Ddp,
        full_name: "Delivered Duty Paid",
        seller_responsibility: "Maximal - everything included",
        transport_party: SELLER_FULL,
        insurance_party: SELLER,
        export_clearance_party: SELLER,
        import_clearance_party: SELLER,
        risk_level: "Maximum for seller",
        recommended_use: "Very experienced sellers",
    },
];

/// Every trade term entry, in Incoterms 2020 order.
pub fn trade_terms() -> &'static [TradeTermInfo] {
    &TERMS
}
