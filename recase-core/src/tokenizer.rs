//! Splits raw identifiers into word tokens.
//!
//! Tokenizing runs in two passes, each a small state machine:
//!
//! 1. A fragment scan walks the trimmed input, collapsing separator runs
//!    (whitespace, `_`, `-`) into single boundaries and discarding every
//!    character that is not an ASCII letter or digit.
//! 2. When the input had no separator at all, the single remaining fragment is
//!    split on case transitions (`fooBar`, `HTTPServer`).

use crate::Token;

/// Whether `c` separates words.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    InWord,
    InSeparatorRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseState {
    Start,
    /// Last character was a lowercase letter or a digit.
    InWord,
    /// Length of the uppercase run ending at the last character.
    InUpperRun(usize),
}

/// Split `raw` into word tokens.
///
/// Returns an empty sequence for empty input or input made only of separators
/// and punctuation.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let (fragments, saw_separator) = scan_fragments(raw.trim());

    let mut tokens = Vec::with_capacity(fragments.len());
    if saw_separator {
        tokens.extend(fragments.into_iter().map(Token::from_fragment));
    } else {
        for fragment in &fragments {
            split_case_transitions(fragment, &mut tokens);
        }
    }

    log::trace!("tokenized {:?} into {:?}", raw, tokens);
    tokens
}

/// Collect alphanumeric fragments and report whether any separator was seen.
fn scan_fragments(input: &str) -> (Vec<String>, bool) {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::Start;
    let mut saw_separator = false;

    for c in input.chars() {
        if is_separator(c) {
            saw_separator = true;
            if state == ScanState::InWord && !current.is_empty() {
                fragments.push(std::mem::take(&mut current));
            }
            state = ScanState::InSeparatorRun;
        } else if c.is_ascii_alphanumeric() {
            current.push(c);
            state = ScanState::InWord;
        }
        // Punctuation is dropped and leaves the state untouched.
    }

    if !current.is_empty() {
        fragments.push(current);
    }

    (fragments, saw_separator)
}

/// Split a run-together fragment on lower-to-upper and acronym-to-word
/// transitions, pushing the pieces onto `out`.
fn split_case_transitions(fragment: &str, out: &mut Vec<Token>) {
    let bytes = fragment.as_bytes();
    let mut start = 0;
    let mut state = CaseState::Start;

    for (i, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_uppercase() {
            state = CaseState::InWord;
            continue;
        }

        state = match state {
            CaseState::Start => CaseState::InUpperRun(1),
            CaseState::InWord => {
                out.push(Token::from_fragment(fragment[start..i].to_string()));
                start = i;
                CaseState::InUpperRun(1)
            }
            CaseState::InUpperRun(len) => {
                let starts_word = bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase);
                if len >= 2 && starts_word {
                    out.push(Token::from_fragment(fragment[start..i].to_string()));
                    start = i;
                    CaseState::InUpperRun(1)
                } else {
                    CaseState::InUpperRun(len + 1)
                }
            }
        };
    }

    if start < fragment.len() {
        out.push(Token::from_fragment(fragment[start..].to_string()));
    }
}
