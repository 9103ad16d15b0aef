//! Minimal HTML builder that escapes by default.
//!
//! Literal markup can only be appended from `&'static str`, so any value that
//! is computed at runtime has to go through [`Html::text`] and is escaped.

use std::fmt::{self, Display};

/// Escape the five HTML-special characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Default)]
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append trusted markup
    pub fn raw(&mut self, markup: &'static str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Append a runtime value, escaped
    pub fn text(&mut self, value: impl Display) -> &mut Self {
        self.buf.push_str(&escape_html(&value.to_string()));
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
