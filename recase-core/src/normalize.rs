use crate::Token;

/// Lowercase every token in place.
pub fn normalize(mut tokens: Vec<Token>) -> Vec<Token> {
    for token in &mut tokens {
        token.make_lowercase();
    }
    tokens
}
