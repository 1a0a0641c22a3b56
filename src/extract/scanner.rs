//! Tag-event scanner shared by all document shapes.
//!
//! This is deliberately not a general markup parser. It walks the document
//! once and emits open/close/text events; each shape extractor keeps its own
//! "currently inside region X" flags on top of the event stream, the same
//! way the source tables are irregular enough to defeat a strict parser.

/// One event from the scan. Tag names keep their source casing; compare
/// through [`Tag::is`] / the extractors' case-insensitive checks.
#[derive(Debug, PartialEq)]
pub enum TagEvent<'a> {
    Open(Tag<'a>),
    Close(&'a str),
    Text(&'a str),
}

/// A start tag with its raw, unparsed attribute run.
#[derive(Debug, PartialEq)]
pub struct Tag<'a> {
    pub name: &'a str,
    attrs: &'a str,
}

impl<'a> Tag<'a> {
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Looks up an attribute value by case-insensitive key. Handles
    /// double-quoted, single-quoted, and bare values.
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        let mut rest = self.attrs;
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return None;
            }
            let key_end = rest
                .find(|c: char| c == '=' || c.is_whitespace())
                .unwrap_or(rest.len());
            let k = &rest[..key_end];
            if k.is_empty() {
                // Stray '=' or quote; skip one char to keep moving.
                rest = &rest[1..];
                continue;
            }
            rest = rest[key_end..].trim_start();
            let mut value = "";
            if let Some(after_eq) = rest.strip_prefix('=') {
                let after_eq = after_eq.trim_start();
                if let Some(q) = after_eq.strip_prefix('"') {
                    let end = q.find('"').unwrap_or(q.len());
                    value = &q[..end];
                    rest = &q[(end + 1).min(q.len())..];
                } else if let Some(q) = after_eq.strip_prefix('\'') {
                    let end = q.find('\'').unwrap_or(q.len());
                    value = &q[..end];
                    rest = &q[(end + 1).min(q.len())..];
                } else {
                    let end = after_eq
                        .find(char::is_whitespace)
                        .unwrap_or(after_eq.len());
                    value = &after_eq[..end];
                    rest = &after_eq[end..];
                }
            }
            if k.eq_ignore_ascii_case(key) {
                return Some(value);
            }
        }
    }

    pub fn attr_is(&self, key: &str, value: &str) -> bool {
        self.attr(key) == Some(value)
    }

    /// True when a space-separated class list contains `class_name`.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|t| t == class_name))
    }
}

/// Single-pass event iterator over a markup document.
///
/// Comments, doctypes, and processing instructions are skipped;
/// whitespace-only text runs are dropped so shape machines only see
/// meaningful content.
pub struct TagScanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(src: &'a str) -> Self {
        TagScanner { src, pos: 0 }
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = TagEvent<'a>;

    fn next(&mut self) -> Option<TagEvent<'a>> {
        let src = self.src;
        loop {
            let rest = &src[self.pos..];
            if rest.is_empty() {
                return None;
            }
            if rest.starts_with('<') {
                if rest.starts_with("<!--") {
                    match rest.find("-->") {
                        Some(end) => {
                            self.pos += end + 3;
                            continue;
                        }
                        None => return None,
                    }
                }
                let Some(gt) = rest.find('>') else {
                    // Dangling '<' at end of input; nothing more to scan.
                    return None;
                };
                let inner = rest[1..gt].trim();
                self.pos += gt + 1;
                if inner.is_empty() || inner.starts_with('!') || inner.starts_with('?') {
                    continue;
                }
                if let Some(name) = inner.strip_prefix('/') {
                    return Some(TagEvent::Close(name.trim()));
                }
                let inner = inner.strip_suffix('/').unwrap_or(inner).trim_end();
                let (name, attrs) = match inner.find(char::is_whitespace) {
                    Some(i) => (&inner[..i], inner[i..].trim_start()),
                    None => (inner, ""),
                };
                return Some(TagEvent::Open(Tag { name, attrs }));
            }
            let end = rest.find('<').unwrap_or(rest.len());
            let text = &rest[..end];
            self.pos += end;
            if text.trim().is_empty() {
                continue;
            }
            return Some(TagEvent::Text(text));
        }
    }
}

/// Decodes the handful of entities the source sites actually emit and
/// trims surrounding whitespace.
pub fn decode_text(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .trim()
        .to_string()
}
