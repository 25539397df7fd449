use crate::{CaseStyle, Token};

/// Join normalized tokens into a string in the given style.
///
/// Tokens are expected to be lowercase already (see [`normalize`](crate::normalize)).
/// An empty sequence produces an empty string for every style.
pub fn reassemble(tokens: &[Token], style: CaseStyle) -> String {
    let capacity = tokens.iter().map(|t| t.as_str().len() + 1).sum();
    let mut out = String::with_capacity(capacity);

    if let Some(delimiter) = style.delimiter() {
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push(delimiter);
            }
            out.push_str(token.as_str());
        }
        return out;
    }

    let mut iter = tokens.iter();
    if style == CaseStyle::Camel {
        out.extend(iter.next().map(Token::as_str));
    }
    for token in iter {
        token.push_capitalized(&mut out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{normalize, tokenize};

    fn words(raw: &str) -> Vec<Token> {
        normalize(tokenize(raw))
    }

    #[test]
    fn test_camel() {
        assert_eq!(reassemble(&words("get user id"), CaseStyle::Camel), "getUserId");
        assert_eq!(reassemble(&words("123 hello"), CaseStyle::Camel), "123Hello");
    }

    #[test]
    fn test_delimited_styles() {
        for style in CaseStyle::ALL {
            let out = reassemble(&words("get user id"), style);
            match style.delimiter() {
                Some(d) => assert_eq!(out, ["get", "user", "id"].join(&d.to_string())),
                None => assert!(out.chars().all(|c| c.is_ascii_alphanumeric())),
            }
        }
    }

    #[test]
    fn test_pascal() {
        assert_eq!(reassemble(&words("get user id"), CaseStyle::Pascal), "GetUserId");
    }

    #[test]
    fn test_kebab() {
        assert_eq!(reassemble(&words("get user id"), CaseStyle::Kebab), "get-user-id");
    }

    #[test]
    fn test_snake() {
        assert_eq!(reassemble(&words("get user id"), CaseStyle::Snake), "get_user_id");
    }

    #[test]
    fn test_single_token() {
        for style in CaseStyle::ALL {
            let expected = if style == CaseStyle::Pascal { "Word" } else { "word" };
            assert_eq!(reassemble(&words("word"), style), expected);
        }
    }

    #[test]
    fn test_empty() {
        for style in CaseStyle::ALL {
            assert_eq!(reassemble(&[], style), "");
        }
    }
}
