//! Pipeline orchestration: per-position extract, normalize, score, tier;
//! then enrichment and pricing over the combined pool.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::LeagueConfig;
use crate::extract::depth_chart::extract_depth_chart;
use crate::extract::injuries::extract_injuries;
use crate::extract::projections::{ExpertSource, extract_projections};
use crate::extract::quality_starts::extract_quality_starts;
use crate::fetch::{HttpClient, load_source};
use crate::valuation::pricing::{self, AuctionRates};
use crate::valuation::record::{PlayerRecord, Position};
use crate::valuation::tiers::{self, TierThresholds};
use crate::valuation::{enrich, normalize, scoring};

/// The finished draft board: every player scored, tiered, enriched, and
/// priced, in final output order.
#[derive(Debug)]
pub struct DraftBoard {
    pub players: Vec<PlayerRecord>,
    pub rates: AuctionRates,
    pub total_marginal_value: f64,
    /// Consensus contributors, deduplicated across the four documents.
    pub experts: Vec<ExpertSource>,
    pub enriched: bool,
}

/// Run-level figures, logged and printable as JSON.
#[derive(Debug, Serialize)]
pub struct BoardSummary {
    pub generated_at: DateTime<Utc>,
    pub players: usize,
    pub total_marginal_value: f64,
    pub marginal_points_per_dollar: f64,
    pub keeper_inflation: f64,
}

impl DraftBoard {
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            generated_at: Utc::now(),
            players: self.players.len(),
            total_marginal_value: self.total_marginal_value,
            marginal_points_per_dollar: self.rates.marginal_points_per_dollar,
            keeper_inflation: self.rates.keeper_inflation,
        }
    }
}

/// Runs the whole pipeline against the configured sources.
///
/// Positions are processed strictly in sequence; each position's
/// marginal-value partial sum folds into the league total, and pricing
/// only runs once every position has completed.
pub async fn run<C: HttpClient>(
    client: &C,
    config: &LeagueConfig,
    enrich_records: bool,
) -> Result<DraftBoard> {
    let mut players = Vec::new();
    let mut experts: Vec<ExpertSource> = Vec::new();
    let mut total_marginal_value = 0.0;

    for position in Position::ALL {
        let (pos_players, partial, pos_experts) = position_stage(client, config, position).await?;
        total_marginal_value += partial;
        players.extend(pos_players);
        for expert in pos_experts {
            if !experts.contains(&expert) {
                experts.push(expert);
            }
        }
    }

    let enriched = if enrich_records {
        enrichment_stage(client, config, &mut players).await?;
        true
    } else {
        false
    };

    let rates = pricing::compute_rates(config, total_marginal_value)?;
    pricing::sort_by_value(&mut players);
    pricing::price_players(&mut players, &rates);

    info!(
        players = players.len(),
        total_marginal_value, "Draft board complete"
    );
    Ok(DraftBoard {
        players,
        rates,
        total_marginal_value,
        experts,
        enriched,
    })
}

/// Extract, normalize, score, and tier one position. Returns the position's
/// records, its marginal-value partial sum, and the experts it listed.
async fn position_stage<C: HttpClient>(
    client: &C,
    config: &LeagueConfig,
    position: Position,
) -> Result<(Vec<PlayerRecord>, f64, Vec<ExpertSource>)> {
    let address = config.sources.projections.get(position);
    info!(%position, address, "Fetching projections");
    let html = load_source(client, address).await?;
    let table = extract_projections(&html);

    let mut players = Vec::with_capacity(table.rows.len());
    let mut rejected = 0usize;
    for row in &table.rows {
        match normalize::player_from_row(position, row) {
            Ok(mut player) => {
                player.custom_points =
                    scoring::custom_points(position, &player.stats, &config.scoring);
                players.push(player);
            }
            Err(e) => {
                rejected += 1;
                warn!(%position, error = %e, "Row rejected, shape mismatch");
            }
        }
    }
    if rejected > 0 {
        warn!(
            %position,
            rejected,
            kept = players.len(),
            "Rows did not match the expected position shape"
        );
    }

    tiers::sort_by_points(&mut players);
    let thresholds = TierThresholds::for_position(config, position);
    let cutoffs = tiers::tier_cutoffs(&players, &thresholds, position)?;
    let partial = tiers::assign_marginal_value(&mut players, &cutoffs);

    info!(
        %position,
        players = players.len(),
        partial_marginal_value = partial,
        "Position valued"
    );
    Ok((players, partial, table.experts))
}

/// Merge the three auxiliary fact tables onto the combined player pool.
async fn enrichment_stage<C: HttpClient>(
    client: &C,
    config: &LeagueConfig,
    players: &mut [PlayerRecord],
) -> Result<()> {
    for position in Position::ALL {
        let html = load_source(client, config.sources.quality_starts.get(position)).await?;
        let entries = extract_quality_starts(&html);
        let matched = enrich::apply_quality_starts(players, &entries);
        info!(%position, entries = entries.len(), matched, "Quality starts applied");
    }

    let html = load_source(client, &config.sources.depth_chart).await?;
    let entries = extract_depth_chart(&html);
    let matched = enrich::apply_depth_chart(players, &entries);
    info!(entries = entries.len(), matched, "Depth chart applied");

    let html = load_source(client, &config.sources.injuries).await?;
    let entries = extract_injuries(&html);
    let matched = enrich::apply_injuries(players, &entries);
    info!(entries = entries.len(), matched, "Injury report applied");

    Ok(())
}
