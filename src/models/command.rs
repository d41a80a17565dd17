//! Transform command tokens.

use crate::constants::COMMAND_DELIMITER;
use serde::Serialize;

/// A single grid transformation parsed from a command token.
///
/// Tokens are matched case-insensitively: `H` and `h` both mean a
/// horizontal flip. Any signed decimal integer is a shift. Everything else
/// is kept as [`TransformCommand::Invalid`] so the caller can decide whether
/// to skip it or abort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TransformCommand {
    /// Reverse every row (`H`)
    FlipHorizontal,
    /// Swap rows top-to-bottom (`V`)
    FlipVertical,
    /// Rotate the 40-key ring; positive moves keys right
    Shift(i64),
    /// Unrecognized token, kept verbatim
    Invalid(String),
}

impl TransformCommand {
    /// Parses one token. Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use keymorph::models::TransformCommand;
    ///
    /// assert_eq!(TransformCommand::parse("h"), TransformCommand::FlipHorizontal);
    /// assert_eq!(TransformCommand::parse("-3"), TransformCommand::Shift(-3));
    /// assert!(TransformCommand::parse("X").is_invalid());
    /// ```
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.to_ascii_uppercase().as_str() {
            "H" => Self::FlipHorizontal,
            "V" => Self::FlipVertical,
            upper => upper
                .parse::<i64>()
                .map_or_else(|_| Self::Invalid(token.to_string()), Self::Shift),
        }
    }

    /// Returns true for tokens that matched no known command.
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl std::fmt::Display for TransformCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FlipHorizontal => write!(f, "H"),
            Self::FlipVertical => write!(f, "V"),
            Self::Shift(n) => write!(f, "{n}"),
            Self::Invalid(token) => write!(f, "{token}"),
        }
    }
}

/// Splits a delimited command string into commands, in order.
///
/// Each token is trimmed before matching, so `"H\n"` read from a command
/// file parses as `H` rather than as an invalid token. Empty tokens (an empty
/// string, a trailing comma, a file that ends in a newline) are dropped
/// rather than reported.
pub fn parse_commands(input: &str) -> Vec<TransformCommand> {
    input
        .split(COMMAND_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(TransformCommand::parse)
        .collect()
}
