//! Quality-starts shape: per-player bad/good/great start counts and the
//! site's quality-start percentage.

use tracing::debug;

use super::scanner::{TagEvent, TagScanner, decode_text};

/// Quality-start line for one player, keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityStarts {
    pub name: String,
    pub bad: u32,
    pub good: u32,
    pub great: u32,
    /// Percentage as displayed by the source, e.g. `"62.5%"`.
    pub percentage: String,
}

impl QualityStarts {
    /// Starts of any quality equal games played.
    pub fn games_played(&self) -> u32 {
        self.bad + self.good + self.great
    }

    /// Net quality score: good and great starts credit, bad starts debit.
    pub fn score(&self) -> i64 {
        self.good as i64 + self.great as i64 - self.bad as i64
    }
}

/// Collects quality-start rows from a document. The team-abbreviation cell
/// between the name and the counts is discarded; rows whose counts fail to
/// parse are dropped.
pub fn extract_quality_starts(html: &str) -> Vec<QualityStarts> {
    let mut out = Vec::new();

    let mut in_table = false;
    let mut row_started = false;
    let mut in_name = false;
    let mut in_cell = false;

    let mut name = String::new();
    let mut cells: Vec<String> = Vec::new();

    for event in TagScanner::new(html) {
        match event {
            TagEvent::Open(tag) => {
                if tag.is("table") && tag.attr_is("id", "data") {
                    in_table = true;
                } else if tag.is("a") && in_table {
                    row_started = true;
                    in_name = true;
                    name.clear();
                } else if tag.is("td") && row_started {
                    in_cell = true;
                    cells.push(String::new());
                }
            }
            TagEvent::Text(text) => {
                if in_name {
                    name.push_str(&decode_text(text));
                } else if in_cell {
                    if let Some(buf) = cells.last_mut() {
                        buf.push_str(&decode_text(text));
                    }
                }
            }
            TagEvent::Close(tag) => {
                if tag.eq_ignore_ascii_case("a") {
                    in_name = false;
                } else if tag.eq_ignore_ascii_case("td") {
                    in_cell = false;
                } else if tag.eq_ignore_ascii_case("tr") && row_started {
                    // cells[0] is the team abbreviation, discarded.
                    if let Some(entry) = build_entry(&name, &cells) {
                        out.push(entry);
                    } else {
                        debug!(player = %name, cells = cells.len(), "Quality-start row skipped");
                    }
                    cells.clear();
                    row_started = false;
                } else if tag.eq_ignore_ascii_case("table") && in_table {
                    in_table = false;
                    row_started = false;
                    in_name = false;
                    in_cell = false;
                }
            }
        }
    }

    out
}

fn build_entry(name: &str, cells: &[String]) -> Option<QualityStarts> {
    if name.is_empty() || cells.len() < 5 {
        return None;
    }
    let count = |s: &str| s.replace(',', "").parse::<u32>().ok();
    Some(QualityStarts {
        name: name.to_string(),
        bad: count(&cells[1])?,
        good: count(&cells[2])?,
        great: count(&cells[3])?,
        percentage: cells[4].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <table id="data">
          <tr><th>Player</th><th>Team</th><th>Bad</th><th>Good</th><th>Great</th><th>QS%</th></tr>
          <tr><td><a>Peyton Manning</a></td><td>DEN</td><td>2</td><td>8</td><td>6</td><td>87.5%</td></tr>
          <tr><td><a>Eli Manning</a></td><td>NYG</td><td>9</td><td>5</td><td>2</td><td>43.8%</td></tr>
        </table>"#;

    #[test]
    fn test_rows_extracted_team_discarded() {
        let entries = extract_quality_starts(DOC);
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            QualityStarts {
                name: "Peyton Manning".into(),
                bad: 2,
                good: 8,
                great: 6,
                percentage: "87.5%".into(),
            }
        );
    }

    #[test]
    fn test_derived_games_and_score() {
        let entries = extract_quality_starts(DOC);
        assert_eq!(entries[0].games_played(), 16);
        assert_eq!(entries[0].score(), 12);
        assert_eq!(entries[1].score(), -2);
    }

    #[test]
    fn test_unparseable_counts_drop_row() {
        let doc = r#"<table id="data">
          <tr><td><a>Bad Row</a></td><td>DEN</td><td>-</td><td>8</td><td>6</td><td>87.5%</td></tr>
        </table>"#;
        assert!(extract_quality_starts(doc).is_empty());
    }

    #[test]
    fn test_no_table_is_empty() {
        assert!(extract_quality_starts("<html><body></body></html>").is_empty());
    }
}
