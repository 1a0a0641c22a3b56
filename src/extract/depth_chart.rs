//! Depth-chart shape: repeating slot-label / player-link groups inside
//! per-team tables.

use super::scanner::{TagEvent, TagScanner, decode_text};

/// One depth-chart assignment, e.g. slot `"RB2"` for `"Knowshon Moreno"`.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthChartEntry {
    pub slot: String,
    pub name: String,
}

/// Collects slot/player pairs from every team table in the document.
///
/// Within a team table the pattern repeats as plain text (the slot label)
/// followed by a player link, with `<br>` separating groups; a break with
/// no completed pair discards the partial group.
pub fn extract_depth_chart(html: &str) -> Vec<DepthChartEntry> {
    let mut out = Vec::new();

    let mut in_team_table = false;
    let mut in_link = false;
    let mut pending_slot: Option<String> = None;
    let mut name = String::new();

    for event in TagScanner::new(html) {
        match event {
            TagEvent::Open(tag) => {
                if tag.is("table") && tag.has_class("depth-chart") {
                    in_team_table = true;
                } else if in_team_table && tag.is("a") {
                    in_link = true;
                    name.clear();
                } else if in_team_table && tag.is("br") {
                    pending_slot = None;
                }
            }
            TagEvent::Text(text) => {
                if in_link {
                    name.push_str(&decode_text(text));
                } else if in_team_table {
                    let slot = decode_text(text);
                    if !slot.is_empty() {
                        pending_slot = Some(slot);
                    }
                }
            }
            TagEvent::Close(tag) => {
                if tag.eq_ignore_ascii_case("a") && in_link {
                    in_link = false;
                    if let Some(slot) = pending_slot.take() {
                        if !name.is_empty() {
                            out.push(DepthChartEntry {
                                slot,
                                name: std::mem::take(&mut name),
                            });
                        }
                    }
                } else if tag.eq_ignore_ascii_case("table") {
                    in_team_table = false;
                    in_link = false;
                    pending_slot = None;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <h2>Denver Broncos</h2>
        <table class="depth-chart">
          <tr><td>
            QB1 <a href="/p/pm">Peyton Manning</a><br>
            QB2 <a href="/p/bo">Brock Osweiler</a><br>
            RB1 <a href="/p/km">Knowshon Moreno</a>
          </td></tr>
        </table>
        <table class="depth-chart">
          <tr><td>QB1 <a>Tom Brady</a></td></tr>
        </table>"#;

    #[test]
    fn test_groups_across_team_tables() {
        let entries = extract_depth_chart(DOC);
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            DepthChartEntry {
                slot: "QB1".into(),
                name: "Peyton Manning".into(),
            }
        );
        assert_eq!(entries[2].slot, "RB1");
        assert_eq!(entries[3].name, "Tom Brady");
    }

    #[test]
    fn test_link_without_slot_label_dropped() {
        let doc = r#"<table class="depth-chart"><tr><td><a>No Slot Guy</a></td></tr></table>"#;
        assert!(extract_depth_chart(doc).is_empty());
    }

    #[test]
    fn test_other_tables_ignored() {
        let doc = r#"<table class="rankings"><tr><td>QB1 <a>Someone</a></td></tr></table>"#;
        assert!(extract_depth_chart(doc).is_empty());
    }
}
