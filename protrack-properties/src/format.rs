//! Reading and writing the Java `.properties` text format.
//!
//! Only what a hand-edited settings file contains is supported: `=`, `:` or
//! whitespace separators, `#`/`!` comments, backslash line continuations and
//! the usual escapes including `\uXXXX`. Comments, blank lines and entry order
//! are kept so a rewrite only touches the entries that changed.
//!
//! Files are read as UTF-8, or as ISO-8859-1 when they are not valid UTF-8,
//! and written back in the encoding they were read in. Entries are always
//! rendered as ASCII, with `\uXXXX` (UTF-16 units) for everything else.

use std::fmt::Write;
use std::str::Chars;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Blank(String),
    Comment(String),
    Entry { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    lines: Vec<Line>,
    encoding: Encoding,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let (text, encoding) = match std::str::from_utf8(bytes) {
            Ok(text) => (text.to_string(), Encoding::Utf8),
            Err(_) => (bytes.iter().map(|&b| char::from(b)).collect(), Encoding::Latin1),
        };
        let mut doc = Self::parse(&text)?;
        doc.encoding = encoding;
        Ok(doc)
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = Vec::new();
        let mut physical = text.lines().enumerate();

        while let Some((idx, raw)) = physical.next() {
            let start = idx + 1;
            let trimmed = raw.trim_start();
            if trimmed.is_empty() {
                lines.push(Line::Blank(raw.to_string()));
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with('!') {
                lines.push(Line::Comment(raw.to_string()));
                continue;
            }

            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match physical.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical);
            let key = unescape(key).map_err(|message| ParseError { line: start, message })?;
            let value = unescape(value).map_err(|message| ParseError { line: start, message })?;
            lines.push(Line::Entry { key, value });
        }

        Ok(Self {
            lines,
            encoding: Encoding::Utf8,
        })
    }

    /// Value of `key`. With duplicate keys the last one wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().rev().find_map(|line| match line {
            Line::Entry { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Replaces every entry for `key`, or appends one if there is none.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let mut found = false;
        for line in &mut self.lines {
            if let Line::Entry { key: k, value: v } = line {
                if k == key {
                    *v = value.clone();
                    found = true;
                }
            }
        }
        if !found {
            self.lines.push(Line::Entry {
                key: key.to_string(),
                value,
            });
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The rendered document in the encoding it was read in.
    pub fn to_bytes(&self) -> Vec<u8> {
        let text = self.render();
        match self.encoding {
            Encoding::Utf8 => text.into_bytes(),
            // comments and blanks came from Latin-1 bytes, entries are ASCII
            Encoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Blank(text) | Line::Comment(text) => out.push_str(text),
                Line::Entry { key, value } => {
                    out.push_str(&escape(key, true));
                    out.push('=');
                    out.push_str(&escape(value, false));
                }
            }
            out.push('\n');
        }
        out
    }
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

const SEPARATOR_SPACE: &[char] = &[' ', '\t', '\x0c'];

/// Splits a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(SEPARATOR_SPACE);
    if let Some(stripped) = rest.strip_prefix(&['=', ':'][..]) {
        rest = stripped.trim_start_matches(SEPARATOR_SPACE);
    }
    (key, rest)
}

fn unescape(raw: &str) -> Result<String, String> {
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
                let unit = read_unit(&mut chars)?;
                let decoded = if (0xD800..=0xDBFF).contains(&unit) {
                    // high surrogate: pair it with a following \uDCxx
                    let mut ahead = chars.clone();
                    match (ahead.next(), ahead.next(), read_unit(&mut ahead)) {
                        (Some('\\'), Some('u'), Ok(low)) if (0xDC00..=0xDFFF).contains(&low) => {
                            chars = ahead;
                            char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                        }
                        _ => None,
                    }
                } else {
                    char::from_u32(unit)
                };
                out.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Reads the four hex digits of a `\u` escape as one UTF-16 unit.
fn read_unit(chars: &mut Chars<'_>) -> Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 {
        return Err(format!("malformed \\u escape: \\u{hex}"));
    }
    u32::from_str_radix(&hex, 16).map_err(|_| format!("malformed \\u escape: \\u{hex}"))
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            c if c.is_control() || u32::from(c) > 0x7E => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
            c => out.push(c),
        }
    }
    out
}
