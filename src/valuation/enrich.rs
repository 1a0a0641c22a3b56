//! Best-effort enrichment join: auxiliary table entries matched onto
//! player records by name.
//!
//! The join key is a heuristic, not a stable identifier. The policy is
//! deliberately explicit here so an exact-ID join could replace it without
//! touching call sites.

use tracing::debug;

use crate::extract::depth_chart::DepthChartEntry;
use crate::extract::injuries::InjuryReport;
use crate::extract::quality_starts::QualityStarts;

use super::record::PlayerRecord;

/// Finds the first record whose name contains `name` as a case-sensitive
/// substring. Iteration order is the only tie-break.
fn match_player<'a>(
    players: &'a mut [PlayerRecord],
    name: &str,
) -> Option<&'a mut PlayerRecord> {
    players.iter_mut().find(|p| p.name.contains(name))
}

/// Applies quality-start facts to matching records. Returns how many
/// entries found a player; misses are non-fatal.
pub fn apply_quality_starts(players: &mut [PlayerRecord], entries: &[QualityStarts]) -> usize {
    let mut matched = 0;
    for entry in entries {
        match match_player(players, &entry.name) {
            Some(player) => {
                player.games_played = Some(entry.games_played());
                player.quality_start_score = Some(entry.score());
                player.quality_start_pct = Some(entry.percentage.clone());
                matched += 1;
            }
            None => debug!(name = %entry.name, "Quality-start entry matched no player"),
        }
    }
    matched
}

/// Applies depth-chart slots to matching records.
pub fn apply_depth_chart(players: &mut [PlayerRecord], entries: &[DepthChartEntry]) -> usize {
    let mut matched = 0;
    for entry in entries {
        match match_player(players, &entry.name) {
            Some(player) => {
                player.depth_chart = Some(entry.slot.clone());
                matched += 1;
            }
            None => debug!(name = %entry.name, "Depth-chart entry matched no player"),
        }
    }
    matched
}

/// Applies injury descriptions and statuses to matching records. The
/// beat-writer detail, when present, rides along in the injury text.
pub fn apply_injuries(players: &mut [PlayerRecord], entries: &[InjuryReport]) -> usize {
    let mut matched = 0;
    for entry in entries {
        match match_player(players, &entry.name) {
            Some(player) => {
                let injury = if entry.detail.is_empty() {
                    entry.injury.clone()
                } else {
                    format!("{} - {}", entry.injury, entry.detail)
                };
                player.injury = Some(injury);
                player.injury_status = Some(entry.status.clone());
                matched += 1;
            }
            None => debug!(name = %entry.name, "Injury entry matched no player"),
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::record::{Position, StatLine};

    fn player(name: &str) -> PlayerRecord {
        PlayerRecord::new(
            name.into(),
            String::new(),
            Position::Rb,
            StatLine::default(),
            String::new(),
        )
    }

    fn quality(name: &str) -> QualityStarts {
        QualityStarts {
            name: name.into(),
            bad: 2,
            good: 8,
            great: 4,
            percentage: "75.0%".into(),
        }
    }

    #[test]
    fn test_substring_match_first_wins() {
        let mut players = vec![player("Adrian Peterson Sr."), player("Adrian Peterson")];
        let matched = apply_quality_starts(&mut players, &[quality("Adrian Peterson")]);
        assert_eq!(matched, 1);
        // First record containing the name takes the entry.
        assert!(players[0].quality_start_pct.is_some());
        assert!(players[1].quality_start_pct.is_none());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut players = vec![player("adrian peterson")];
        let matched = apply_quality_starts(&mut players, &[quality("Adrian Peterson")]);
        assert_eq!(matched, 0);
        assert!(players[0].games_played.is_none());
    }

    #[test]
    fn test_miss_leaves_absent_defaults() {
        let mut players = vec![player("Jamaal Charles")];
        apply_quality_starts(&mut players, &[quality("Arian Foster")]);
        assert!(players[0].games_played.is_none());
        assert!(players[0].quality_start_score.is_none());
    }

    #[test]
    fn test_quality_start_fields_copied() {
        let mut players = vec![player("Arian Foster")];
        apply_quality_starts(&mut players, &[quality("Arian Foster")]);
        assert_eq!(players[0].games_played, Some(14));
        assert_eq!(players[0].quality_start_score, Some(10));
        assert_eq!(players[0].quality_start_pct.as_deref(), Some("75.0%"));
    }

    #[test]
    fn test_depth_chart_applied() {
        let mut players = vec![player("Knowshon Moreno")];
        let entries = vec![DepthChartEntry {
            slot: "RB1".into(),
            name: "Knowshon Moreno".into(),
        }];
        assert_eq!(apply_depth_chart(&mut players, &entries), 1);
        assert_eq!(players[0].depth_chart.as_deref(), Some("RB1"));
    }

    #[test]
    fn test_injury_detail_folded_into_text() {
        let mut players = vec![player("Arian Foster")];
        let entries = vec![InjuryReport {
            position: Position::Rb,
            name: "Arian Foster".into(),
            injury: "Hamstring".into(),
            status: "Questionable".into(),
            detail: "Limited in practice".into(),
        }];
        apply_injuries(&mut players, &entries);
        assert_eq!(
            players[0].injury.as_deref(),
            Some("Hamstring - Limited in practice")
        );
        assert_eq!(players[0].injury_status.as_deref(), Some("Questionable"));
    }

    #[test]
    fn test_record_can_take_updates_from_multiple_tables() {
        let mut players = vec![player("Arian Foster")];
        apply_quality_starts(&mut players, &[quality("Arian Foster")]);
        let depth = vec![DepthChartEntry {
            slot: "RB1".into(),
            name: "Arian Foster".into(),
        }];
        apply_depth_chart(&mut players, &depth);
        assert!(players[0].quality_start_pct.is_some());
        assert!(players[0].depth_chart.is_some());
    }
}
