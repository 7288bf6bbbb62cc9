//! Closed intent taxonomy for legal queries.
//!
//! The classifier emits free text; `Intent::from_label` maps it into this
//! enum totally: an unrecognized label lands on `General`, never on an
//! unconstrained set.

use serde::{Deserialize, Serialize};

/// Query intent categories recognized by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Questions about laws, acts, sections, statutes.
    StatutoryInterpretation,
    /// Questions about precedents, court decisions, case law.
    CaseResearch,
    /// Contract review, clause extraction, risk analysis.
    ContractReview,
    /// Regulatory compliance, rule matching.
    ComplianceCheck,
    /// General legal questions not fitting the above.
    General,
}

impl Intent {
    /// Stable label used in prompts, logs, and audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::StatutoryInterpretation => "statutory_interpretation",
            Intent::CaseResearch => "case_research",
            Intent::ContractReview => "contract_review",
            Intent::ComplianceCheck => "compliance_check",
            Intent::General => "general",
        }
    }

    /// Total mapping from classifier labels. Accepts the aliases the
    /// completion model has been observed to produce; anything else is
    /// `General`.
    pub fn from_label(label: &str) -> Intent {
        match label.trim().to_ascii_lowercase().as_str() {
            "statutory_interpretation" | "statutory" => Intent::StatutoryInterpretation,
            "case_research" | "case_law_research" | "case_law" => Intent::CaseResearch,
            "contract_review" | "contract_analysis" => Intent::ContractReview,
            "compliance_check" | "compliance" => Intent::ComplianceCheck,
            _ => Intent::General,
        }
    }

    /// All intents, in taxonomy order.
    pub const ALL: [Intent; 5] = [
        Intent::StatutoryInterpretation,
        Intent::CaseResearch,
        Intent::ContractReview,
        Intent::ComplianceCheck,
        Intent::General,
    ];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_label(intent.as_str()), intent);
        }
    }

    #[test]
    fn unknown_label_maps_to_general() {
        assert_eq!(Intent::from_label("tax_wizardry"), Intent::General);
        assert_eq!(Intent::from_label(""), Intent::General);
    }

    #[test]
    fn legacy_aliases_accepted() {
        assert_eq!(Intent::from_label("case_law_research"), Intent::CaseResearch);
        assert_eq!(Intent::from_label("contract_analysis"), Intent::ContractReview);
    }
}
