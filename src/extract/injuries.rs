//! Injury-report shape: striped report rows filtered to the four drafted
//! positions.

use super::scanner::{TagEvent, TagScanner, decode_text};
use crate::valuation::record::Position;

/// Row-style markers identifying real report rows; everything else in the
/// document (headers, ads, section breaks) is skipped.
const ROW_STYLES: [&str; 2] = ["tr1", "tr2"];

/// Placeholder cell emitted for teams with a clean bill of health.
const NO_INJURIES: &str = "no injuries reported";

/// One injury line for a drafted-position player.
#[derive(Debug, Clone, PartialEq)]
pub struct InjuryReport {
    pub position: Position,
    pub name: String,
    pub injury: String,
    pub status: String,
    /// Free-text beat-writer note; may be empty.
    pub detail: String,
}

/// Collects injury rows from a report document, keeping only rows whose
/// position parses as QB/RB/WR/TE.
pub fn extract_injuries(html: &str) -> Vec<InjuryReport> {
    let mut out = Vec::new();

    let mut in_row = false;
    let mut in_cell = false;
    let mut cells: Vec<String> = Vec::new();

    for event in TagScanner::new(html) {
        match event {
            TagEvent::Open(tag) => {
                if tag.is("tr") {
                    in_row = tag
                        .attr("class")
                        .is_some_and(|c| ROW_STYLES.contains(&c));
                    cells.clear();
                } else if tag.is("td") && in_row {
                    in_cell = true;
                    cells.push(String::new());
                }
            }
            TagEvent::Text(text) => {
                if in_cell {
                    if let Some(buf) = cells.last_mut() {
                        buf.push_str(&decode_text(text));
                    }
                }
            }
            TagEvent::Close(tag) => {
                if tag.eq_ignore_ascii_case("td") {
                    in_cell = false;
                    if cells
                        .last()
                        .is_some_and(|c| c.eq_ignore_ascii_case(NO_INJURIES))
                    {
                        cells.pop();
                    }
                } else if tag.eq_ignore_ascii_case("tr") && in_row {
                    if let Some(report) = build_report(&cells) {
                        out.push(report);
                    }
                    in_row = false;
                    cells.clear();
                }
            }
        }
    }

    out
}

fn build_report(cells: &[String]) -> Option<InjuryReport> {
    if cells.len() < 4 {
        return None;
    }
    let position = Position::parse(&cells[0])?;
    Some(InjuryReport {
        position,
        name: cells[1].clone(),
        injury: cells[2].clone(),
        status: cells[3].clone(),
        detail: cells.get(4).cloned().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <table>
          <tr class="header"><td>Pos</td><td>Player</td><td>Injury</td><td>Status</td><td>Notes</td></tr>
          <tr class="tr1"><td>RB</td><td>Arian Foster</td><td>Hamstring</td><td>Questionable</td><td>Limited in practice</td></tr>
          <tr class="tr2"><td>K</td><td>Some Kicker</td><td>Ankle</td><td>Out</td><td></td></tr>
          <tr class="tr1"><td>QB</td><td>Sam Bradford</td><td>Knee (ACL)</td><td>Out</td></tr>
          <tr class="tr2"><td>No injuries reported</td></tr>
        </table>"#;

    #[test]
    fn test_only_drafted_positions_kept() {
        let reports = extract_injuries(DOC);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "Arian Foster");
        assert_eq!(reports[0].position, Position::Rb);
        assert_eq!(reports[0].detail, "Limited in practice");
        assert_eq!(reports[1].name, "Sam Bradford");
        assert_eq!(reports[1].detail, "");
    }

    #[test]
    fn test_unstyled_rows_skipped() {
        let doc = r#"<tr><td>QB</td><td>Nobody</td><td>Toe</td><td>Out</td></tr>"#;
        assert!(extract_injuries(doc).is_empty());
    }

    #[test]
    fn test_placeholder_row_skipped() {
        let doc = r#"<tr class="tr1"><td>No injuries reported</td></tr>"#;
        assert!(extract_injuries(doc).is_empty());
    }
}
