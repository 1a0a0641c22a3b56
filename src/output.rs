//! Draft-board output: one tab-separated table, importable into a
//! spreadsheet for draft-day tracking.

use anyhow::{Context, Result};
use clap::ValueEnum;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

use crate::config::LeagueConfig;
use crate::pipeline::DraftBoard;
use crate::valuation::pricing::budget_percentage;
use crate::valuation::record::PlayerRecord;

/// Column-set switch: snake drafts have no auction economics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DraftType {
    Auction,
    Snake,
}

const BASE_COLUMNS: [&str; 7] = [
    "Player Name",
    "Team",
    "Position",
    "Category",
    "Projected Fantasy Points",
    "Custom Fantasy Points",
    "Marginal Value",
];

const AUCTION_COLUMNS: [&str; 3] = ["Auction Value", "Budget Percentage", "Static Inflation"];

const ENRICHMENT_COLUMNS: [&str; 6] = [
    "Depth Chart",
    "Games Played",
    "Quality Start Score",
    "Quality Start %",
    "Injury",
    "Status",
];

fn header(draft_type: DraftType, enriched: bool) -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = BASE_COLUMNS.to_vec();
    if draft_type == DraftType::Auction {
        columns.extend(AUCTION_COLUMNS);
    }
    if enriched {
        columns.extend(ENRICHMENT_COLUMNS);
    }
    columns
}

fn player_row(
    player: &PlayerRecord,
    board: &DraftBoard,
    config: &LeagueConfig,
    draft_type: DraftType,
) -> Vec<String> {
    let mut row = vec![
        player.name.clone(),
        player.team.clone(),
        player.position.code().to_string(),
        player.tier.code().to_string(),
        player.projected_points.clone(),
        format!("{:.2}", player.custom_points),
        format!("{:.2}", player.marginal_value),
    ];
    if draft_type == DraftType::Auction {
        row.push(format!("${}", player.auction_value as i64));
        row.push(format!(
            "{:.1}%",
            budget_percentage(player.auction_value, config)
        ));
        // Inflated dollars truncate rather than round; only the base price
        // carries the ceil.
        row.push(format!(
            "${}",
            board.rates.inflated_price(player.auction_value) as i64
        ));
    }
    if board.enriched {
        row.push(player.depth_chart.clone().unwrap_or_default());
        row.push(
            player
                .games_played
                .map(|g| g.to_string())
                .unwrap_or_default(),
        );
        row.push(
            player
                .quality_start_score
                .map(|s| s.to_string())
                .unwrap_or_default(),
        );
        row.push(player.quality_start_pct.clone().unwrap_or_default());
        row.push(player.injury.clone().unwrap_or_default());
        row.push(player.injury_status.clone().unwrap_or_default());
    }
    row
}

/// Writes the board as tab-separated rows: one header, one row per player,
/// in the board's final order.
pub fn write_board<W: Write>(
    writer: W,
    board: &DraftBoard,
    config: &LeagueConfig,
    draft_type: DraftType,
) -> Result<()> {
    let mut out = WriterBuilder::new().delimiter(b'\t').from_writer(writer);

    out.write_record(header(draft_type, board.enriched))?;
    for player in &board.players {
        out.write_record(player_row(player, board, config, draft_type))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_board_file(
    path: &Path,
    board: &DraftBoard,
    config: &LeagueConfig,
    draft_type: DraftType,
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    write_board(file, board, config, draft_type)
        .with_context(|| format!("writing draft board to {}", path.display()))
}
