//! Custom fantasy-point scoring: a dot product of raw stats and the
//! league's point weights.

use crate::config::ScoringWeights;

use super::record::{Position, StatLine};

/// Scores one stat line under the league rules. Pure; rounding is left to
/// presentation. Every position carries the fumble penalty.
pub fn custom_points(position: Position, stats: &StatLine, w: &ScoringWeights) -> f64 {
    let fumbles = w.fumble * stats.fumbles;
    match position {
        Position::Qb => {
            w.pass_completion * stats.pass_completions
                + w.passing_yard * stats.pass_yards
                + w.passing_touchdown * stats.pass_touchdowns
                + w.interception * stats.interceptions
                + w.rushing_attempt * stats.rush_attempts
                + w.rushing_yard * stats.rush_yards
                + w.rushing_touchdown * stats.rush_touchdowns
                + fumbles
        }
        Position::Rb | Position::Wr => {
            w.rushing_attempt * stats.rush_attempts
                + w.rushing_yard * stats.rush_yards
                + w.rushing_touchdown * stats.rush_touchdowns
                + w.reception * stats.receptions
                + w.receiving_yard * stats.receiving_yards
                + w.receiving_touchdown * stats.receiving_touchdowns
                + fumbles
        }
        Position::Te => {
            w.reception * stats.receptions
                + w.receiving_yard * stats.receiving_yards
                + w.receiving_touchdown * stats.receiving_touchdowns
                + fumbles
        }
    }
}
