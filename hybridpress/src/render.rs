//! Decimal rendering of LZW code sequences.
//!
//! The entropy coder sees the code sequence as text: each code in decimal,
//! separated by a single space. `[97, 256, 97]` renders as `"97 256 97"`.

use crate::error::{HybridError, Result};

/// Separator between rendered codes.
pub const SEPARATOR: char = ' ';

/// Render `codes` as single-space-separated decimal text.
pub fn render_codes(codes: &[u32]) -> String {
    let mut out = String::with_capacity(codes.len() * 4);
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&code.to_string());
    }
    out
}

/// Parse rendered text back into codes.
///
/// Tokens are split on any whitespace; blank text yields no codes.
pub fn parse_codes(text: &str) -> Result<Vec<u32>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<u32>()
                .map_err(|_| HybridError::invalid_token(index, token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(render_codes(&[97, 256, 97]), "97 256 97");
        assert_eq!(render_codes(&[0]), "0");
        assert_eq!(render_codes(&[]), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_codes("97 256 97").unwrap(), vec![97, 256, 97]);
        assert_eq!(parse_codes("  1\t2\n3 ").unwrap(), vec![1, 2, 3]);
        assert!(parse_codes("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = parse_codes("97 9x 3").unwrap_err();
        assert!(matches!(
            err,
            HybridError::InvalidToken { index: 1, ref token } if token == "9x"
        ));

        assert!(matches!(
            parse_codes("4294967296"),
            Err(HybridError::InvalidToken { index: 0, .. })
        ));
        assert!(parse_codes("-1").is_err());
    }
}
