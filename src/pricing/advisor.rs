//! Trade term recommendation from the exporter's profile.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::AdvisorConfig;
use crate::models::{find_country, Experience, Incoterm, EU_MERCOSUR, MERCOSUR};

/// Destinations far enough that controlling the freight pays off.
const DISTANT_DESTINATIONS: [&str; 2] = ["China", "European Union"];

/// Suggested term and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub term: Incoterm,
    pub rationale: &'static str,
}

impl Recommendation {
    fn new(term: Incoterm, rationale: &'static str) -> Self {
        Self { term, rationale }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TermAdvisor {
    config: AdvisorConfig,
}

impl TermAdvisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Recommend a term. Rules are checked top-down and the first match wins.
    pub fn recommend_term(
        &self,
        destination: &str,
        experience: Experience,
        operation_value: Decimal,
    ) -> Recommendation {
        let country = find_country(destination);
        let agreement = country.map(|c| c.trade_agreement);
        let is_distant = country.is_some_and(|c| DISTANT_DESTINATIONS.contains(&c.name));

        let recommendation = match experience {
            Experience::Beginner if agreement == Some(MERCOSUR) => {
                Recommendation::new(Incoterm::Fob, "low risk, known market")
            }
            Experience::Beginner => Recommendation::new(Incoterm::Exw, "minimal risk to start"),

            Experience::Intermediate if operation_value < self.config.small_operation_limit => {
                Recommendation::new(Incoterm::Fca, "good cost-benefit")
            }
            Experience::Intermediate if is_distant => {
                Recommendation::new(Incoterm::Cfr, "freight control on distant destinations")
            }
            Experience::Intermediate => {
                Recommendation::new(Incoterm::Fob, "standard for medium operations")
            }

            Experience::Expert if operation_value > self.config.large_operation_limit => {
                Recommendation::new(Incoterm::Cif, "full logistics control")
            }
            Experience::Expert if agreement.is_some_and(|a| a == MERCOSUR || a == EU_MERCOSUR) => {
                Recommendation::new(Incoterm::Dap, "leverage tariff preferences")
            }
            Experience::Expert => {
                Recommendation::new(Incoterm::Cpt, "flexibility in complex markets")
            }
        };

        debug!(
            destination = %destination,
            experience = experience.as_str(),
            value = %operation_value,
            term = %recommendation.term,
            "Recommended trade term"
        );

        recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn advise(destination: &str, experience: Experience, value: Decimal) -> (Incoterm, &'static str) {
        let rec = TermAdvisor::default().recommend_term(destination, experience, value);
        (rec.term, rec.rationale)
    }

    #[test]
    fn test_beginner() {
        for value in [dec!(1), dec!(60000), dec!(1000000)] {
            assert_eq!(
                advise("Brazil", Experience::Beginner, value),
                (Incoterm::Fob, "low risk, known market")
            );
            assert_eq!(
                advise("China", Experience::Beginner, value),
                (Incoterm::Exw, "minimal risk to start")
            );
        }
        // EU-MERCOSUR is not plain MERCOSUR
        assert_eq!(advise("European Union", Experience::Beginner, dec!(1)).0, Incoterm::Exw);
    }

    #[test]
    fn test_intermediate() {
        assert_eq!(
            advise("China", Experience::Intermediate, dec!(60000)),
            (Incoterm::Cfr, "freight control on distant destinations")
        );
        assert_eq!(
            advise("China", Experience::Intermediate, dec!(49999)),
            (Incoterm::Fca, "good cost-benefit")
        );
        assert_eq!(
            advise("european union", Experience::Intermediate, dec!(50000)).0,
            Incoterm::Cfr
        );
        assert_eq!(
            advise("Mexico", Experience::Intermediate, dec!(50000)),
            (Incoterm::Fob, "standard for medium operations")
        );
    }

    #[test]
    fn test_expert() {
        assert_eq!(
            advise("Brazil", Experience::Expert, dec!(200001)),
            (Incoterm::Cif, "full logistics control")
        );
        assert_eq!(
            advise("Brazil", Experience::Expert, dec!(200000)),
            (Incoterm::Dap, "leverage tariff preferences")
        );
        assert_eq!(
            advise("European Union", Experience::Expert, dec!(100)).0,
            Incoterm::Dap
        );
        assert_eq!(
            advise("India", Experience::Expert, dec!(100)),
            (Incoterm::Cpt, "flexibility in complex markets")
        );
    }

    #[test]
    fn test_unknown_destination_has_no_agreement() {
        assert_eq!(advise("Atlantis", Experience::Beginner, dec!(1)).0, Incoterm::Exw);
        assert_eq!(advise("Atlantis", Experience::Intermediate, dec!(90000)).0, Incoterm::Fob);
        assert_eq!(advise("Atlantis", Experience::Expert, dec!(1)).0, Incoterm::Cpt);
    }

    #[test]
    fn test_unrecognised_experience_routes_to_expert() {
        let experience = Experience::from_str("seasoned");
        assert_eq!(advise("Argentina", experience, dec!(1000)).0, Incoterm::Dap);
    }
}
