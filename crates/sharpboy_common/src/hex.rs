use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("invalid hex token #{index}: {token:?} (expected two hex digits)")]
    InvalidToken { index: usize, token: String },
}

/// Parse a whitespace separated list of hex byte pairs, e.g. `"c3 02 01"`.
///
/// Every token must be exactly two hex digits. Upper case digits are accepted
/// as well, so dumps copied from other tools load unchanged.
pub fn parse_hex_program(text: &str) -> Result<Vec<u8>, HexError> {
    let bytes = text
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| parse_token(index, token))
        .collect::<Result<Vec<u8>, HexError>>()?;

    log::debug!("parsed {} byte(s) of hex program text", bytes.len());
    Ok(bytes)
}

fn parse_token(index: usize, token: &str) -> Result<u8, HexError> {
    let invalid = || HexError::InvalidToken {
        index,
        token: token.to_string(),
    };

    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(token, 16).map_err(|_| invalid())
}
