//! Player record and supporting types shared across the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four drafted positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Qb, Position::Rb, Position::Wr, Position::Te];

    pub fn code(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
        }
    }

    pub fn parse(s: &str) -> Option<Position> {
        match s.trim() {
            p if p.eq_ignore_ascii_case("QB") => Some(Position::Qb),
            p if p.eq_ignore_ascii_case("RB") => Some(Position::Rb),
            p if p.eq_ignore_ascii_case("WR") => Some(Position::Wr),
            p if p.eq_ignore_ascii_case("TE") => Some(Position::Te),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Highest roster-breakpoint tier a player cleared. The label tracks only
/// the strictest tier; marginal value still accumulates surplus over every
/// cleared tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tier {
    #[default]
    Unranked,
    Roster,
    TopReserve,
    Starter,
    EliteStarter,
}

impl Tier {
    pub fn code(&self) -> &'static str {
        match self {
            Tier::Unranked => "",
            Tier::Roster => "R",
            Tier::TopReserve => "TR",
            Tier::Starter => "S",
            Tier::EliteStarter => "ES",
        }
    }
}

/// Raw projected counting stats for one player. Positions only fill their
/// own subset; the rest stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatLine {
    pub pass_attempts: f64,
    pub pass_completions: f64,
    pub pass_yards: f64,
    pub pass_touchdowns: f64,
    pub interceptions: f64,
    pub rush_attempts: f64,
    pub rush_yards: f64,
    pub rush_touchdowns: f64,
    pub receptions: f64,
    pub receiving_yards: f64,
    pub receiving_touchdowns: f64,
    pub fumbles: f64,
}

/// One scraped player, carried through scoring, tiering, enrichment, and
/// pricing. Name and position never change after creation.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub name: String,
    /// Team abbreviation; empty for free agents.
    pub team: String,
    pub position: Position,
    pub stats: StatLine,
    /// Source-projected points, kept as displayed.
    pub projected_points: String,
    pub custom_points: f64,
    pub tier: Tier,
    pub marginal_value: f64,
    /// Whole-dollar auction price, assigned once by the pricing engine.
    pub auction_value: f64,

    // Enrichment; None until the matching auxiliary entry is found.
    pub games_played: Option<u32>,
    pub quality_start_score: Option<i64>,
    pub quality_start_pct: Option<String>,
    pub depth_chart: Option<String>,
    pub injury: Option<String>,
    pub injury_status: Option<String>,
}

impl PlayerRecord {
    pub fn new(
        name: String,
        team: String,
        position: Position,
        stats: StatLine,
        projected_points: String,
    ) -> Self {
        PlayerRecord {
            name,
            team,
            position,
            stats,
            projected_points,
            custom_points: 0.0,
            tier: Tier::default(),
            marginal_value: 0.0,
            auction_value: 0.0,
            games_played: None,
            quality_start_score: None,
            quality_start_pct: None,
            depth_chart: None,
            injury: None,
            injury_status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse() {
        assert_eq!(Position::parse("QB"), Some(Position::Qb));
        assert_eq!(Position::parse(" te "), Some(Position::Te));
        assert_eq!(Position::parse("K"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn test_tier_codes() {
        assert_eq!(Tier::Unranked.code(), "");
        assert_eq!(Tier::EliteStarter.code(), "ES");
    }

    #[test]
    fn test_new_record_has_absent_enrichment() {
        let p = PlayerRecord::new(
            "A. Player".into(),
            "DEN".into(),
            Position::Rb,
            StatLine::default(),
            "101.5".into(),
        );
        assert!(p.games_played.is_none());
        assert!(p.depth_chart.is_none());
        assert_eq!(p.tier, Tier::Unranked);
        assert_eq!(p.marginal_value, 0.0);
    }
}
