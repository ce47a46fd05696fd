//! Flat `key=value` properties text
//!
//! Parses the line-oriented format used for the remote crossdc node:
//!
//! ```text
//! # comment
//! ! also a comment
//! bootstrapServers = kafka-1:9092,kafka-2:9092
//! topicName: events
//! description=first line \
//!             continued
//! greeting=caf\u00e9
//! ```
//!
//! - Separators are `=`, `:` or plain whitespace
//! - Lines end at `\r\n`, `\n` or a lone `\r`
//! - A line ending in an odd number of backslashes continues onto the next
//! - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other `\c` yields `c`
//! - The last occurrence of a duplicated key wins
//!
//! Input bytes are decoded as UTF-8 when valid and as ISO-8859-1 otherwise.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Properties parse error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    /// `\u` not followed by four hex digits
    #[error("Malformed \\uXXXX escape on line {line}")]
    MalformedUnicodeEscape { line: usize },

    /// UTF-16 surrogate escape without its partner
    #[error("Unpaired surrogate escape on line {line}")]
    UnpairedSurrogate { line: usize },
}

/// Immutable string-to-string mapping decoded from properties text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse a properties payload.
    pub fn parse(bytes: &[u8]) -> Result<Self, PropertiesError> {
        let text = decode(bytes);
        let mut entries = BTreeMap::new();

        for (line_no, logical) in LogicalLines::new(&text) {
            let (raw_key, raw_value) = split_entry(&logical);
            let key = unescape(raw_key, line_no)?;
            let value = unescape(raw_value, line_no)?;
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    /// Look up a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        // ISO-8859-1 maps every byte to the code point of the same value
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Yields `(starting line number, logical line)` with comments, blank lines
/// and continuations already handled.
///
/// Physical lines end at `\r\n`, `\n` or a lone `\r`.
struct LogicalLines<'a> {
    rest: Option<&'a str>,
    line_no: usize,
}

impl<'a> LogicalLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            rest: Some(text).filter(|t| !t.is_empty()),
            line_no: 0,
        }
    }

    fn next_physical(&mut self) -> Option<(usize, &'a str)> {
        let rest = self.rest?;
        self.line_no += 1;

        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                let remainder = &rest[end + terminator..];
                self.rest = Some(remainder).filter(|r| !r.is_empty());
                Some((self.line_no, &rest[..end]))
            }
            None => {
                self.rest = None;
                Some((self.line_no, rest))
            }
        }
    }
}

impl Iterator for LogicalLines<'_> {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (line_no, physical) = self.next_physical()?;
            let line = physical.trim_start_matches(is_blank);
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = String::from(line);
            while ends_with_odd_backslashes(&logical) {
                logical.pop();
                match self.next_physical() {
                    Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                    None => break,
                }
            }
            return Some((line_no, logical));
        }
    }
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                has_separator = true;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if has_separator {
        rest = &rest[1..];
    } else {
        rest = rest.trim_start_matches(is_blank);
        if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
            rest = stripped;
        }
    }
    (key, rest.trim_start_matches(is_blank))
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_hex4(&mut chars, line)?;
                let ch = if (0xD800..0xDC00).contains(&unit) {
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(PropertiesError::UnpairedSurrogate { line });
                    }
                    let low = read_hex4(&mut chars, line)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(PropertiesError::UnpairedSurrogate { line });
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                out.push(char::from_u32(ch).ok_or(PropertiesError::UnpairedSurrogate { line })?);
            }
            Some(other) => out.push(other),
            // A lone trailing backslash is dropped
            None => {}
        }
    }

    Ok(out)
}

fn read_hex4(
    chars: &mut std::str::Chars<'_>,
    line: usize,
) -> Result<u32, PropertiesError> {
    let mut value = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
        value = value * 16 + digit;
    }
    Ok(value)
}
