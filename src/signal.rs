//! Signal name formatting
//!
//! Matrix labels follow a two-family naming convention: `R<n>` for CRC
//! register (state) bits and `M<n>` for message (data input) bits. This module
//! maps those labels onto the HDL identifiers used in the generated equations.

use std::fmt;

/// HDL vector that holds the CRC register bits
pub const REGISTER_VECTOR: &str = "crc_r";

/// HDL vector that holds the message input bits
pub const MESSAGE_VECTOR: &str = "data_in";

/// A matrix label classified by its leading letter
///
/// The bit index is kept as the exact text following the prefix, so `R07`
/// stays `07` and is never reinterpreted as a number.
///
/// # Examples
///
/// ```
/// use crc_equations::SignalName;
///
/// assert_eq!(SignalName::parse("R24").to_string(), "crc_r[24]");
/// assert_eq!(SignalName::parse("M1").to_string(), "data_in[1]");
/// assert_eq!(SignalName::parse("carry").to_string(), "carry");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalName<'a> {
    /// CRC register bit (`R` prefix)
    Register(&'a str),
    /// Message input bit (`M` prefix)
    Message(&'a str),
    /// Any other label, emitted verbatim
    Literal(&'a str),
}

impl<'a> SignalName<'a> {
    /// Classify a label. Never fails: unknown prefixes become [`SignalName::Literal`].
    pub fn parse(name: &'a str) -> Self {
        if let Some(index) = name.strip_prefix('R') {
            SignalName::Register(index)
        } else if let Some(index) = name.strip_prefix('M') {
            SignalName::Message(index)
        } else {
            SignalName::Literal(name)
        }
    }

    /// Whether the label is `R` or `M` followed by one or more ASCII digits
    pub fn is_conventional(&self) -> bool {
        match self {
            SignalName::Register(index) | SignalName::Message(index) => {
                !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit())
            }
            SignalName::Literal(_) => false,
        }
    }
}

impl fmt::Display for SignalName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalName::Register(index) => write!(f, "{}[{}]", REGISTER_VECTOR, index),
            SignalName::Message(index) => write!(f, "{}[{}]", MESSAGE_VECTOR, index),
            SignalName::Literal(name) => f.write_str(name),
        }
    }
}

/// Format a matrix label as an HDL signal reference
///
/// `R24` becomes `crc_r[24]`, `M1` becomes `data_in[1]`, anything else is
/// returned unchanged.
pub fn format_signal(name: &str) -> String {
    SignalName::parse(name).to_string()
}
