//! Record normalization: raw extractor rows into typed [`PlayerRecord`]s.

use anyhow::{Result, anyhow, bail};

use super::record::{PlayerRecord, Position, StatLine};

/// Strips thousands separators and backslash escapes the source wraps
/// around quotes and apostrophes.
pub fn clean_field(s: &str) -> String {
    s.replace(',', "").replace('\\', "")
}

fn parse_stat(row: &[String], idx: usize) -> Result<f64> {
    let raw = row
        .get(idx)
        .ok_or_else(|| anyhow!("missing field {idx}"))?;
    clean_field(raw)
        .trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("field {idx} is not numeric: {raw:?}"))
}

/// Expected field counts, name and team included.
fn expected_len(position: Position) -> usize {
    match position {
        Position::Qb => 12,
        Position::Rb | Position::Wr => 10,
        Position::Te => 7,
    }
}

/// Builds a [`PlayerRecord`] from one raw row for the given position.
///
/// A wrong field count or a non-numeric stat means the document shape does
/// not match this position; the row is rejected so the caller can warn and
/// move on rather than silently score a zero.
pub fn player_from_row(position: Position, row: &[String]) -> Result<PlayerRecord> {
    let expected = expected_len(position);
    if row.len() != expected {
        bail!(
            "{} row has {} fields, expected {expected}",
            position,
            row.len()
        );
    }

    let mut stats = StatLine::default();
    match position {
        Position::Qb => {
            stats.pass_attempts = parse_stat(row, 2)?;
            stats.pass_completions = parse_stat(row, 3)?;
            stats.pass_yards = parse_stat(row, 4)?;
            stats.pass_touchdowns = parse_stat(row, 5)?;
            stats.interceptions = parse_stat(row, 6)?;
            stats.rush_attempts = parse_stat(row, 7)?;
            stats.rush_yards = parse_stat(row, 8)?;
            stats.rush_touchdowns = parse_stat(row, 9)?;
            stats.fumbles = parse_stat(row, 10)?;
        }
        Position::Rb | Position::Wr => {
            stats.rush_attempts = parse_stat(row, 2)?;
            stats.rush_yards = parse_stat(row, 3)?;
            stats.rush_touchdowns = parse_stat(row, 4)?;
            stats.receptions = parse_stat(row, 5)?;
            stats.receiving_yards = parse_stat(row, 6)?;
            stats.receiving_touchdowns = parse_stat(row, 7)?;
            stats.fumbles = parse_stat(row, 8)?;
        }
        Position::Te => {
            stats.receptions = parse_stat(row, 2)?;
            stats.receiving_yards = parse_stat(row, 3)?;
            stats.receiving_touchdowns = parse_stat(row, 4)?;
            stats.fumbles = parse_stat(row, 5)?;
        }
    }

    Ok(PlayerRecord::new(
        clean_field(&row[0]),
        row[1].clone(),
        position,
        stats,
        clean_field(&row[expected - 1]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field("4,300"), "4300");
        assert_eq!(clean_field(r"O\'Brien"), "O'Brien");
        assert_eq!(clean_field("12.5"), "12.5");
    }

    #[test]
    fn test_qb_row() {
        let r = row(&[
            r"Le\'Veon Passer",
            "DEN",
            "659",
            "435",
            "4,852",
            "38",
            "11",
            "25",
            "110",
            "1",
            "2",
            "367.9",
        ]);
        let p = player_from_row(Position::Qb, &r).unwrap();
        assert_eq!(p.name, "Le'Veon Passer");
        assert_eq!(p.team, "DEN");
        assert_eq!(p.stats.pass_yards, 4852.0);
        assert_eq!(p.stats.pass_completions, 435.0);
        assert_eq!(p.stats.fumbles, 2.0);
        assert_eq!(p.projected_points, "367.9");
        // Receiving subset stays zero for a QB row.
        assert_eq!(p.stats.receptions, 0.0);
    }

    #[test]
    fn test_te_row() {
        let r = row(&["Jimmy Graham", "NO", "89", "1,099", "11", "1", "199.2"]);
        let p = player_from_row(Position::Te, &r).unwrap();
        assert_eq!(p.stats.receptions, 89.0);
        assert_eq!(p.stats.receiving_yards, 1099.0);
        assert_eq!(p.stats.fumbles, 1.0);
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        let r = row(&["Someone", "KC", "5"]);
        assert!(player_from_row(Position::Rb, &r).is_err());
    }

    #[test]
    fn test_non_numeric_stat_rejected_not_zeroed() {
        let r = row(&["Someone", "KC", "n/a", "900", "8", "30", "250", "1", "3", "150.0"]);
        let err = player_from_row(Position::Rb, &r).unwrap_err();
        assert!(err.to_string().contains("not numeric"));
    }

    #[test]
    fn test_empty_team_accepted() {
        let r = row(&["Free Agent", "", "20", "80", "1", "5", "40", "0", "0", "21.0"]);
        let p = player_from_row(Position::Wr, &r).unwrap();
        assert_eq!(p.team, "");
    }
}
