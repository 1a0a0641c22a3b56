//! Tier thresholds and marginal-value assignment.
//!
//! Marginal value is the cumulative surplus of a player's points over every
//! roster-breakpoint cut-off the player clears, approximating the economic
//! value of being draftable at increasingly scarce roster slots. The tier
//! label records only the strictest breakpoint cleared.

use anyhow::{Result, ensure};
use tracing::debug;

use crate::config::LeagueConfig;

use super::record::{PlayerRecord, Position, Tier};

/// Zero-based rank indices into a position's point-sorted list, one per
/// roster breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub roster: usize,
    pub top_reserve: usize,
    pub starter: usize,
    pub elite_starter: usize,
}

impl TierThresholds {
    /// Derives the breakpoint indices for one position:
    /// `ceil(teams x multiplier) - 1`, with the expected-drafted multiplier
    /// for Roster and the starting-slot multiplier (x1.5 / x1.0 / x0.5)
    /// for the other three.
    ///
    /// Nothing guarantees the resulting indices are ordered; a league
    /// configuration that inverts them still computes, just with
    /// counter-intuitive marginal values.
    pub fn for_position(config: &LeagueConfig, position: Position) -> Self {
        let teams = config.teams as f64;
        let expected = config.roster.expected_drafted.get(position);
        let starting = config.roster.starting.get(position);
        let index = |multiplier: f64| ((teams * multiplier).ceil() as usize).saturating_sub(1);

        TierThresholds {
            roster: index(expected),
            top_reserve: index(starting * 1.5),
            starter: index(starting),
            elite_starter: index(starting * 0.5),
        }
    }

    fn max_index(&self) -> usize {
        self.roster
            .max(self.top_reserve)
            .max(self.starter)
            .max(self.elite_starter)
    }
}

/// Cut-off point values for one position, read at the threshold indices.
/// Ordered loosest first: Roster, TopReserve, Starter, EliteStarter.
pub type TierCutoffs = [f64; 4];

/// Sorts a position subset by descending custom points. The sort is stable,
/// so ties keep their original scrape order.
pub fn sort_by_points(players: &mut [PlayerRecord]) {
    players.sort_by(|a, b| b.custom_points.total_cmp(&a.custom_points));
}

/// Reads the four tier cut-off point values for a point-sorted position
/// subset.
///
/// Fails when any threshold index falls outside the subset: the scrape did
/// not produce enough players to support the configured roster shape, and
/// pricing on a clamped list would be silently wrong.
pub fn tier_cutoffs(
    players: &[PlayerRecord],
    thresholds: &TierThresholds,
    position: Position,
) -> Result<TierCutoffs> {
    ensure!(
        thresholds.max_index() < players.len(),
        "{position}: tier threshold index {} exceeds the {} players scraped; \
         league configuration does not fit the player pool",
        thresholds.max_index(),
        players.len()
    );

    let cutoffs = [
        players[thresholds.roster].custom_points,
        players[thresholds.top_reserve].custom_points,
        players[thresholds.starter].custom_points,
        players[thresholds.elite_starter].custom_points,
    ];
    debug!(
        %position,
        roster = cutoffs[0],
        top_reserve = cutoffs[1],
        starter = cutoffs[2],
        elite_starter = cutoffs[3],
        "Tier cut-offs"
    );
    Ok(cutoffs)
}

/// Assigns tier labels and marginal value for every player in a position
/// subset, and returns the subset's marginal-value sum for the caller to
/// fold into the league total.
///
/// A player accumulates surplus from every cut-off it clears; the label is
/// overwritten on each clear so it ends at the strictest tier reached.
pub fn assign_marginal_value(players: &mut [PlayerRecord], cutoffs: &TierCutoffs) -> f64 {
    let steps = [
        (Tier::Roster, cutoffs[0]),
        (Tier::TopReserve, cutoffs[1]),
        (Tier::Starter, cutoffs[2]),
        (Tier::EliteStarter, cutoffs[3]),
    ];

    let mut partial_sum = 0.0;
    for player in players.iter_mut() {
        for (tier, cutoff) in steps {
            let surplus = player.custom_points - cutoff;
            if surplus >= 0.0 {
                player.tier = tier;
                player.marginal_value += surplus;
            }
        }
        partial_sum += player.marginal_value;
    }
    partial_sum
}
