//! League configuration: scoring weights, roster shape, keeper money, and
//! source document addresses.
//!
//! Loaded once from a JSON file and passed explicitly into every pipeline
//! stage; no component reads ambient global state.

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::valuation::record::Position;

/// Points awarded per unit of each raw statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub pass_completion: f64,
    pub passing_yard: f64,
    pub passing_touchdown: f64,
    pub interception: f64,
    pub rushing_attempt: f64,
    pub rushing_yard: f64,
    pub rushing_touchdown: f64,
    pub reception: f64,
    pub receiving_yard: f64,
    pub receiving_touchdown: f64,
    pub fumble: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            pass_completion: 0.05,
            passing_yard: 0.04,
            passing_touchdown: 4.0,
            interception: -3.0,
            rushing_attempt: 0.1,
            rushing_yard: 0.1,
            rushing_touchdown: 6.0,
            reception: 1.0,
            receiving_yard: 0.1,
            receiving_touchdown: 6.0,
            fumble: -2.0,
        }
    }
}

impl ScoringWeights {
    fn all(&self) -> [f64; 11] {
        [
            self.pass_completion,
            self.passing_yard,
            self.passing_touchdown,
            self.interception,
            self.rushing_attempt,
            self.rushing_yard,
            self.rushing_touchdown,
            self.reception,
            self.receiving_yard,
            self.receiving_touchdown,
            self.fumble,
        ]
    }
}

/// One per-position multiplier (expected-drafted count or starting-slot
/// count per team).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionRates {
    pub qb: f64,
    pub rb: f64,
    pub wr: f64,
    pub te: f64,
}

impl Default for PositionRates {
    fn default() -> Self {
        PositionRates {
            qb: 1.0,
            rb: 1.0,
            wr: 1.0,
            te: 1.0,
        }
    }
}

impl PositionRates {
    pub fn get(&self, position: Position) -> f64 {
        match position {
            Position::Qb => self.qb,
            Position::Rb => self.rb,
            Position::Wr => self.wr,
            Position::Te => self.te,
        }
    }

    fn all(&self) -> [f64; 4] {
        [self.qb, self.rb, self.wr, self.te]
    }
}

/// Per-position roster expectations driving the tier thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterShape {
    /// Expected number of players drafted at each position, per team.
    pub expected_drafted: PositionRates,
    /// Starting slots available at each position, per team.
    pub starting: PositionRates,
}

impl Default for RosterShape {
    fn default() -> Self {
        RosterShape {
            expected_drafted: PositionRates {
                qb: 2.25,
                rb: 5.0,
                wr: 5.0,
                te: 1.68,
            },
            starting: PositionRates {
                qb: 1.0,
                rb: 2.83,
                wr: 2.83,
                te: 1.33,
            },
        }
    }
}

/// Money already committed to kept players before the draft starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperSettings {
    /// Total auction money spent across the league on keepers.
    pub money_spent: f64,
    /// Total projected auction value absorbed by kept players.
    pub value_absorbed: f64,
}

/// One source document address per position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionSources {
    pub qb: String,
    pub rb: String,
    pub wr: String,
    pub te: String,
}

impl PositionSources {
    pub fn get(&self, position: Position) -> &str {
        match position {
            Position::Qb => &self.qb,
            Position::Rb => &self.rb,
            Position::Wr => &self.wr,
            Position::Te => &self.te,
        }
    }
}

impl Default for PositionSources {
    fn default() -> Self {
        PositionSources {
            qb: String::new(),
            rb: String::new(),
            wr: String::new(),
            te: String::new(),
        }
    }
}

fn projection_sources() -> PositionSources {
    PositionSources {
        qb: "https://www.fantasypros.com/nfl/projections/qb.php".into(),
        rb: "https://www.fantasypros.com/nfl/projections/rb.php".into(),
        wr: "https://www.fantasypros.com/nfl/projections/wr.php".into(),
        te: "https://www.fantasypros.com/nfl/projections/te.php".into(),
    }
}

fn quality_start_sources() -> PositionSources {
    PositionSources {
        qb: "https://www.fantasypros.com/nfl/players/quality-starts.php?position=QB".into(),
        rb: "https://www.fantasypros.com/nfl/players/quality-starts.php?position=RB".into(),
        wr: "https://www.fantasypros.com/nfl/players/quality-starts.php?position=WR".into(),
        te: "https://www.fantasypros.com/nfl/players/quality-starts.php?position=TE".into(),
    }
}

/// Addresses of the source documents. Each may be an HTTP URL or a local
/// file path (useful for dry runs against saved pages).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceAddresses {
    pub projections: PositionSources,
    pub quality_starts: PositionSources,
    pub depth_chart: String,
    pub injuries: String,
}

impl Default for SourceAddresses {
    fn default() -> Self {
        SourceAddresses {
            projections: projection_sources(),
            quality_starts: quality_start_sources(),
            depth_chart: "https://www.fantasypros.com/nfl/depth-charts.php".into(),
            injuries: "https://www.fantasypros.com/nfl/injury-report.php".into(),
        }
    }
}

/// Complete, immutable league configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Teams in the league.
    pub teams: u32,
    /// Auction money allotted to each team, in dollars.
    pub auction_budget: f64,
    /// Roster slots per team (total).
    pub roster_slots: u32,
    pub scoring: ScoringWeights,
    pub roster: RosterShape,
    pub keepers: KeeperSettings,
    pub sources: SourceAddresses,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig {
            teams: 12,
            auction_budget: 220.0,
            roster_slots: 17,
            scoring: ScoringWeights::default(),
            roster: RosterShape::default(),
            keepers: KeeperSettings::default(),
            sources: SourceAddresses::default(),
        }
    }
}

impl LeagueConfig {
    /// Loads and validates a configuration file, or falls back to the
    /// built-in defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("reading league config {}", p.display()))?;
                let config: LeagueConfig = serde_json::from_str(&text)
                    .with_context(|| format!("parsing league config {}", p.display()))?;
                info!(path = %p.display(), "League config loaded");
                config
            }
            None => {
                info!("No league config given, using defaults");
                LeagueConfig::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Auction money across the whole league, in dollars.
    pub fn total_league_money(&self) -> f64 {
        self.teams as f64 * self.auction_budget
    }

    /// Money not already guaranteed to the cheapest roster fill: every team
    /// must hold back $1 per remaining roster slot.
    pub fn discretionary_money(&self) -> f64 {
        self.total_league_money() - self.teams as f64 * self.roster_slots as f64
    }

    /// Checks internal consistency. An inconsistent configuration would
    /// produce silently wrong prices, so every run validates up front.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.teams > 0, "league must have at least one team");
        ensure!(self.roster_slots > 0, "roster_slots must be positive");
        ensure!(
            self.auction_budget.is_finite() && self.auction_budget > 0.0,
            "auction_budget must be a positive dollar amount"
        );
        ensure!(
            self.scoring.all().iter().all(|w| w.is_finite()),
            "scoring weights must all be finite"
        );
        ensure!(
            self.roster
                .expected_drafted
                .all()
                .iter()
                .chain(self.roster.starting.all().iter())
                .all(|m| m.is_finite() && *m > 0.0),
            "roster multipliers must all be finite and positive"
        );
        ensure!(
            self.discretionary_money() > 0.0,
            "discretionary money is not positive: {} teams x ${} budget leaves nothing \
             beyond the ${} roster-slot floor",
            self.teams,
            self.auction_budget,
            self.roster_slots
        );
        ensure!(
            self.keepers.money_spent.is_finite() && self.keepers.value_absorbed.is_finite(),
            "keeper settings must be finite"
        );
        ensure!(
            self.keepers.value_absorbed != self.total_league_money(),
            "keeper value absorbed equals the total league money; inflation is undefined"
        );
        Ok(())
    }
}
