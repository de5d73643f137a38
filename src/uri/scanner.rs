//! Character-level tokenizer for endpoint query strings.
//!
//! [`tokenize`] walks the query one character at a time with a single
//! character of lookahead. The scanner is in one of two segments (reading
//! the key or the value of the current parameter) and one of two modes.
//! In [`Mode::Raw`] every character is data, including `&` and `=`, so a
//! `RAW(...)` value may carry separators. Raw mode is entered as soon as
//! the value buffer starts with `RAW(` and only ends on a `)` followed by
//! `&` or the end of input.

use crate::error::UriSyntaxError;

/// Opening marker of a raw value.
pub const RAW_TOKEN_START: &str = "RAW(";

/// Closing marker of a raw value.
pub const RAW_TOKEN_END: char = ')';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Key,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Raw,
}

/// One `key=value` pair as scanned, before any decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub value: String,
    pub raw: bool,
}

/// Keys such as `{{timeout}}` refer to properties that have not been
/// resolved yet.
#[must_use]
pub fn is_placeholder_key(key: &str) -> bool {
    key.starts_with("{{") || key.ends_with("}}")
}

struct Scanner {
    segment: Segment,
    mode: Mode,
    current: Token,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            segment: Segment::Key,
            mode: Mode::Normal,
            current: Token::default(),
            tokens: Vec::new(),
        }
    }

    fn push(&mut self, ch: char) {
        match self.segment {
            Segment::Key => self.current.key.push(ch),
            Segment::Value => self.current.value.push(ch),
        }
    }

    fn terminate(&mut self) {
        let mut token = std::mem::take(&mut self.current);
        token.raw = self.mode == Mode::Raw;
        if token.key.is_empty() {
            tracing::trace!("skipping parameter with empty name");
        } else if is_placeholder_key(&token.key) {
            tracing::debug!(key = %token.key, "skipping unresolved placeholder key");
        } else {
            self.tokens.push(token);
        }
        self.segment = Segment::Key;
        self.mode = Mode::Normal;
    }
}

/// Split a raw query string into ordered tokens.
///
/// A trailing `&` is a syntax error unless `lenient` is set, in which case
/// it is ignored.
pub fn tokenize(query: &str, lenient: bool) -> Result<Vec<Token>, UriSyntaxError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    if !lenient && query.ends_with('&') {
        return Err(UriSyntaxError::new(
            query,
            "Invalid uri syntax: Trailing & marker found. Check the uri and remove the trailing & marker",
        ));
    }

    let mut scanner = Scanner::new();
    let mut chars = query.chars().peekable();

    while let Some(ch) = chars.next() {
        scanner.mode = if scanner.current.value.starts_with(RAW_TOKEN_START) {
            Mode::Raw
        } else {
            Mode::Normal
        };

        match scanner.mode {
            Mode::Raw => {
                scanner.push(ch);
                let next = chars.peek().copied();
                if ch == RAW_TOKEN_END && matches!(next, None | Some('&')) {
                    scanner.terminate();
                    // swallow the separator that closed the raw value
                    chars.next();
                }
            }
            Mode::Normal => match (scanner.segment, ch) {
                (Segment::Key, '=') => scanner.segment = Segment::Value,
                (_, '&') => scanner.terminate(),
                _ => scanner.push(ch),
            },
        }
    }

    if !scanner.current.key.is_empty() {
        scanner.terminate();
    }

    tracing::trace!(tokens = scanner.tokens.len(), "tokenized query");
    Ok(scanner.tokens)
}
