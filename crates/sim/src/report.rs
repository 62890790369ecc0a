use crate::SimError;
use ruccordion_core::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EconomicsReport {
    pub gross_total: f64,
    pub net_total: f64,
    pub gross_average: f64,
    pub net_average: f64,
}

/// Reduced result of a whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateResult {
    pub variant: Variant,
    pub seed: u64,
    pub requested: u64,
    pub completed: u64,
    pub failed: u64,
    pub wins: u64,
    pub total_cards: u64,
    pub average_cards: f64,
    pub win_rate: f64,
    pub economics: Option<EconomicsReport>,
}

impl AggregateResult {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("variant: {}", variant_label(self.variant)),
            format!(
                "games played: {} of {} requested",
                self.completed, self.requested
            ),
        ];
        if self.failed > 0 {
            lines.push(format!("failed runs: {}", self.failed));
        }
        lines.push(format!(
            "{}: {} total, {:.3} average",
            counted_label(self.variant),
            self.total_cards,
            self.average_cards
        ));
        lines.push(format!(
            "wins: {} ({:.2}%)",
            self.wins,
            self.win_rate * 100.0
        ));
        if let Some(economics) = &self.economics {
            lines.push(format!(
                "total gross earnings: ${:.2}",
                economics.gross_total
            ));
            lines.push(format!("total net earnings: ${:.2}", economics.net_total));
            lines.push(format!(
                "average gross earnings: ${:.2}",
                economics.gross_average
            ));
            lines.push(format!(
                "average net earnings: ${:.2}",
                economics.net_average
            ));
        }
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn variant_label(variant: Variant) -> &'static str {
    match variant {
        Variant::Accordion => "accordion",
        Variant::OnceInALifetime => "once in a lifetime",
    }
}

fn counted_label(variant: Variant) -> &'static str {
    match variant {
        Variant::Accordion => "cards in the first pile",
        Variant::OnceInALifetime => "cards remaining",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_lists_the_batch_summary() {
        let result = AggregateResult {
            variant: Variant::Accordion,
            seed: 1,
            requested: 4,
            completed: 3,
            failed: 1,
            wins: 1,
            total_cards: 60,
            average_cards: 20.0,
            win_rate: 1.0 / 3.0,
            economics: Some(EconomicsReport {
                gross_total: 15.0,
                net_total: 12.0,
                gross_average: 5.0,
                net_average: 4.0,
            }),
        };
        let report = result.to_text_report();
        assert!(report.contains("games played: 3 of 4 requested"));
        assert!(report.contains("failed runs: 1"));
        assert!(report.contains("cards in the first pile: 60 total, 20.000 average"));
        assert!(report.contains("total net earnings: $12.00"));
    }

    #[test]
    fn json_round_trips() {
        let result = AggregateResult {
            variant: Variant::OnceInALifetime,
            seed: 9,
            requested: 2,
            completed: 2,
            failed: 0,
            wins: 0,
            total_cards: 20,
            average_cards: 10.0,
            win_rate: 0.0,
            economics: None,
        };
        let json = result.to_json().unwrap();
        let parsed: AggregateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
