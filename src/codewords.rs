//! Text form of codeword sequences for the command line
//!
//! Codewords are written as decimal numbers separated by commas and/or
//! whitespace (`"32, 91 11"`), or, for byte-sized fields, as one hex string.

use thiserror::Error;

/// Errors that can occur while reading codewords from text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodewordParseError {
    #[error("No codewords given")]
    Empty,

    #[error("Invalid codeword '{0}'")]
    InvalidNumber(String),

    #[error("Codeword {value} at position {index} is not below {limit}")]
    OutOfRange { index: usize, value: u32, limit: u32 },

    #[error("Invalid hex codewords: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Parse decimal codewords, each required to be below `limit`
pub fn parse_codewords(input: &str, limit: u32) -> Result<Vec<u32>, CodewordParseError> {
    let codewords = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| CodewordParseError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    check_codewords(codewords, limit)
}

/// Parse a hex string into byte codewords (`"01020304"` → `[1, 2, 3, 4]`)
pub fn parse_hex_codewords(input: &str) -> Result<Vec<u32>, CodewordParseError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(compact)?;
    check_codewords(bytes.into_iter().map(u32::from).collect(), 256)
}

fn check_codewords(codewords: Vec<u32>, limit: u32) -> Result<Vec<u32>, CodewordParseError> {
    if codewords.is_empty() {
        return Err(CodewordParseError::Empty);
    }
    if let Some((index, &value)) = codewords.iter().enumerate().find(|&(_, &v)| v >= limit) {
        return Err(CodewordParseError::OutOfRange {
            index,
            value,
            limit,
        });
    }
    Ok(codewords)
}

/// Comma-separated decimal form
pub fn format_codewords(codewords: &[u32]) -> String {
    codewords
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Lowercase hex form; `None` if any codeword does not fit in a byte
pub fn format_hex_codewords(codewords: &[u32]) -> Option<String> {
    let bytes = codewords
        .iter()
        .map(|&c| u8::try_from(c).ok())
        .collect::<Option<Vec<u8>>>()?;
    Some(hex::encode(bytes))
}
