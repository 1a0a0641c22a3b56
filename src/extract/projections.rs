//! Projections shape: the per-position stats table plus the "experts"
//! sub-table listing which sources fed the consensus.

use tracing::debug;

use super::scanner::{TagEvent, TagScanner, decode_text};

/// One consensus contributor: source name, site, publish date. Display
/// only; never joined against player records.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertSource {
    pub source: String,
    pub site: String,
    pub date: String,
}

/// Everything pulled from one projections document.
#[derive(Debug, Default)]
pub struct ProjectionsTable {
    /// One row per player: name, team, then the position's stat columns in
    /// source order, ending with the site's own projected points.
    pub rows: Vec<Vec<String>>,
    pub experts: Vec<ExpertSource>,
}

/// Walks a projections document and collects player rows and the experts
/// list. A document with no qualifying rows yields an empty table.
pub fn extract_projections(html: &str) -> ProjectionsTable {
    let mut out = ProjectionsTable::default();

    // Region flags, set and cleared on specific tag events.
    let mut in_stats = false;
    let mut in_experts = false;
    let mut row_started = false;
    let mut in_name = false;
    let mut in_team = false;
    let mut in_cell = false;
    let mut in_expert_cell = false;

    let mut name = String::new();
    let mut team = String::new();
    let mut fields: Vec<String> = Vec::new();
    let mut expert_fields: Vec<String> = Vec::new();

    for event in TagScanner::new(html) {
        match event {
            TagEvent::Open(tag) => {
                if tag.is("table") {
                    if tag.attr_is("id", "data") {
                        in_stats = true;
                    } else if tag.attr_is("id", "experts") {
                        in_experts = true;
                    }
                } else if tag.is("a") && in_stats {
                    // A name link marks the start of a player row.
                    row_started = true;
                    in_name = true;
                    name.clear();
                } else if tag.is("small") && row_started {
                    in_team = true;
                } else if tag.is("td") {
                    if row_started {
                        in_cell = true;
                        fields.push(String::new());
                    } else if in_experts {
                        in_expert_cell = true;
                        expert_fields.push(String::new());
                    }
                }
            }
            TagEvent::Text(text) => {
                if in_name {
                    name.push_str(&decode_text(text));
                } else if in_team {
                    team.push_str(&decode_text(text));
                } else if in_cell {
                    if let Some(buf) = fields.last_mut() {
                        buf.push_str(&decode_text(text));
                    }
                } else if in_expert_cell {
                    if let Some(buf) = expert_fields.last_mut() {
                        buf.push_str(&decode_text(text));
                    }
                }
            }
            TagEvent::Close(tag) => {
                if tag.eq_ignore_ascii_case("a") {
                    in_name = false;
                } else if tag.eq_ignore_ascii_case("small") {
                    in_team = false;
                } else if tag.eq_ignore_ascii_case("td") {
                    in_cell = false;
                    in_expert_cell = false;
                } else if tag.eq_ignore_ascii_case("tr") {
                    if row_started {
                        let mut row = Vec::with_capacity(2 + fields.len());
                        row.push(std::mem::take(&mut name));
                        row.push(std::mem::take(&mut team));
                        row.append(&mut fields);
                        out.rows.push(row);
                        row_started = false;
                    }
                    if in_experts && expert_fields.len() >= 3 {
                        out.experts.push(ExpertSource {
                            source: expert_fields[0].clone(),
                            site: expert_fields[1].clone(),
                            date: expert_fields[2].clone(),
                        });
                    }
                    expert_fields.clear();
                } else if tag.eq_ignore_ascii_case("table") {
                    if in_stats {
                        in_stats = false;
                        row_started = false;
                        in_name = false;
                        in_team = false;
                        in_cell = false;
                    }
                    in_experts = false;
                }
            }
        }
    }

    debug!(
        rows = out.rows.len(),
        experts = out.experts.len(),
        "Projections document scanned"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
        <table id="experts">
          <tr><th>Expert</th><th>Site</th><th>Date</th></tr>
          <tr><td>J. Smith</td><td>FantasyWire</td><td>8/18</td></tr>
          <tr><td>A. Jones</td><td>GridironDaily</td><td>8/17</td></tr>
        </table>
        <table id="data">
          <tr><th>Player</th><th>REC</th><th>YDS</th><th>TD</th><th>FL</th><th>FPTS</th></tr>
          <tr>
            <td><a href="/p/1">Jimmy Graham</a> <small>NO</small></td>
            <td>89</td><td>1,099</td><td>11</td><td>1</td><td>199.2</td>
          </tr>
          <tr>
            <td><a href="/p/2">Rob Gronkowski</a> <small>NE</small></td>
            <td>72</td><td>1,001</td><td>10</td><td>0</td><td>185.1</td>
          </tr>
        </table>
        </body></html>"#;

    #[test]
    fn test_player_rows_with_name_and_team_prepended() {
        let table = extract_projections(DOC);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0],
            vec!["Jimmy Graham", "NO", "89", "1,099", "11", "1", "199.2"]
        );
        assert_eq!(table.rows[1][0], "Rob Gronkowski");
        assert_eq!(table.rows[1][1], "NE");
    }

    #[test]
    fn test_experts_collected() {
        let table = extract_projections(DOC);
        assert_eq!(table.experts.len(), 2);
        assert_eq!(
            table.experts[0],
            ExpertSource {
                source: "J. Smith".into(),
                site: "FantasyWire".into(),
                date: "8/18".into(),
            }
        );
    }

    #[test]
    fn test_missing_team_leaves_empty_field() {
        let doc = r#"<table id="data"><tr>
            <td><a>Free Agent Guy</a></td><td>10</td><td>100</td><td>1</td><td>0</td><td>17.0</td>
        </tr></table>"#;
        let table = extract_projections(doc);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Free Agent Guy");
        assert_eq!(table.rows[0][1], "");
    }

    #[test]
    fn test_other_tables_ignored() {
        let doc = r#"<table id="nav"><tr><td><a>Not A Player</a></td></tr></table>"#;
        let table = extract_projections(doc);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_unmatched_end_tags_tolerated() {
        let doc = r#"</div></tr><table id="data"><tr>
            <td><a>Solo Player</a> <small>KC</small></td><td>5</td>
        </tr></table></span>"#;
        let table = extract_projections(doc);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["Solo Player", "KC", "5"]);
    }

    #[test]
    fn test_empty_document() {
        let table = extract_projections("");
        assert!(table.rows.is_empty());
        assert!(table.experts.is_empty());
    }
}
