use std::fmt;

/// A single word extracted from an identifier.
///
/// Tokens are never empty and only contain ASCII letters and digits. They are
/// produced by [`tokenize`](crate::tokenize), which is the only place that
/// constructs them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Build a token from a fragment the tokenizer has already filtered.
    pub(crate) fn from_fragment(fragment: String) -> Self {
        debug_assert!(!fragment.is_empty());
        debug_assert!(fragment.chars().all(|c| c.is_ascii_alphanumeric()));
        Self(fragment)
    }

    /// Get the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase the token in place. Digits are unaffected.
    pub(crate) fn make_lowercase(&mut self) {
        self.0.make_ascii_lowercase();
    }

    /// Push the token onto `buf` with its first character uppercased.
    pub(crate) fn push_capitalized(&self, buf: &mut String) {
        let mut chars = self.0.chars();
        if let Some(first) = chars.next() {
            buf.push(first.to_ascii_uppercase());
            buf.push_str(chars.as_str());
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
