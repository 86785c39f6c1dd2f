//! Line-faithful `.env` document model.
//!
//! A parsed document keeps every source line with its 1-based number so
//! validation can point at the exact declaration. Parsing never fails:
//! lines that are not blank, comment, or `KEY=value` are kept as
//! `Line::Malformed` and surfaced by the doctor.

/// A single source line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank { number: u32 },
    Comment { number: u32, text: String },
    Pair(Entry),
    Malformed { number: u32, raw: String, reason: String },
}

/// A `KEY=value` declaration.
///
/// The key is kept as raw text; case and charset rules are checked by the
/// doctor so a lowercase key can be reported as a warning instead of being
/// dropped at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub number: u32,
    pub key: String,
    pub value: String,
    pub comment: Option<String>,
    /// Line used the `export KEY=value` shell form.
    pub exported: bool,
}

/// Parsed env file.
#[derive(Debug, Clone, Default)]
pub struct EnvDocument {
    lines: Vec<Line>,
}

impl EnvDocument {
    /// Parse file content. Infallible; malformed lines are preserved.
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();
        for (index, raw_line) in content.lines().enumerate() {
            let number = (index + 1) as u32;
            lines.push(parse_line(number, raw_line.trim_end_matches('\r')));
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All `KEY=value` entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.lines.iter().filter_map(|line| match line {
            Line::Pair(entry) => Some(entry),
            _ => None,
        })
    }

    /// First-declaration-wins lookup.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries().find(|entry| entry.key == key)
    }

    /// Keys declared more than once: `(key, first_line, duplicate_line)`.
    pub fn duplicates(&self) -> Vec<(&str, u32, u32)> {
        let mut first_seen: Vec<(&str, u32)> = Vec::new();
        let mut duplicates = Vec::new();
        for entry in self.entries() {
            match first_seen.iter().find(|(key, _)| *key == entry.key) {
                Some((key, first)) => duplicates.push((*key, *first, entry.number)),
                None => first_seen.push((entry.key.as_str(), entry.number)),
            }
        }
        duplicates
    }

    pub fn malformed(&self) -> impl Iterator<Item = (u32, &str, &str)> {
        self.lines.iter().filter_map(|line| match line {
            Line::Malformed { number, raw, reason } => {
                Some((*number, raw.as_str(), reason.as_str()))
            }
            _ => None,
        })
    }
}

fn parse_line(number: u32, raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank { number };
    }
    if let Some(rest) = trimmed.strip_prefix('#') {
        return Line::Comment { number, text: rest.trim().to_string() };
    }

    let Some(eq_index) = trimmed.find('=') else {
        return Line::Malformed {
            number,
            raw: raw.to_string(),
            reason: "missing '=' separator".to_string(),
        };
    };

    let key_part = trimmed[..eq_index].trim();
    let (key_part, exported) = match key_part.strip_prefix("export ") {
        Some(stripped) => (stripped.trim(), true),
        None => (key_part, false),
    };

    if key_part.is_empty() {
        return Line::Malformed {
            number,
            raw: raw.to_string(),
            reason: "empty key before '='".to_string(),
        };
    }
    if key_part.chars().any(char::is_whitespace) {
        return Line::Malformed {
            number,
            raw: raw.to_string(),
            reason: "key contains whitespace".to_string(),
        };
    }

    let (value, comment) = split_value(&trimmed[eq_index + 1..]);
    Line::Pair(Entry { number, key: key_part.to_string(), value, comment, exported })
}

/// Split the raw value text into the value proper and a trailing comment.
///
/// Quoted values keep their content verbatim; for unquoted values a `#`
/// preceded by whitespace starts the comment, while an attached `#` stays
/// part of the value (dotenv convention).
fn split_value(raw: &str) -> (String, Option<String>) {
    let s = raw.trim();

    // `KEY= # note` declares an empty value with a comment.
    if s.starts_with('#') && raw.starts_with(char::is_whitespace) {
        return (String::new(), Some(s[1..].trim().to_string()));
    }

    if let Some(quote) = s.chars().next().filter(|c| *c == '"' || *c == '\'') {
        if let Some(close) = s[1..].find(quote) {
            let value = s[1..1 + close].to_string();
            let rest = s[1 + close + quote.len_utf8()..].trim();
            let comment = rest.strip_prefix('#').map(|c| c.trim().to_string());
            if rest.is_empty() || comment.is_some() {
                return (value, comment);
            }
            // Trailing junk after the closing quote: treat as unquoted.
        }
    }

    let mut comment_start = None;
    let mut previous_was_space = false;
    for (index, c) in s.char_indices() {
        if c == '#' && previous_was_space {
            comment_start = Some(index);
            break;
        }
        previous_was_space = c.is_whitespace();
    }

    match comment_start {
        Some(index) => {
            let value = s[..index].trim_end().to_string();
            let comment = s[index + 1..].trim().to_string();
            (value, Some(comment))
        }
        None => (s.to_string(), None),
    }
}
