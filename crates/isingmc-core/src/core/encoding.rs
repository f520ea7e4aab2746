//! Symbolic rendering of spin configurations.
//!
//! `+1` is written as `'+'` and `-1` as `'-'`, concatenated in spin-index order.

use crate::core::models::spin::{SPIN_DOWN, SPIN_UP, SpinConfiguration};
use thiserror::Error;

pub const UP_SYMBOL: char = '+';
pub const DOWN_SYMBOL: char = '-';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Spin {index} has value {value}; only +1 and -1 can be encoded")]
    InvalidSpinValue { index: usize, value: i8 },
    #[error("Character '{symbol}' at position {index} is not a spin symbol ('+' or '-')")]
    InvalidSymbol { index: usize, symbol: char },
}

/// Encodes a configuration as a string of `'+'` and `'-'` characters.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidSpinValue`] for the first value that is neither
/// `+1` nor `-1`. Nothing is produced in that case.
pub fn encode(configuration: &SpinConfiguration) -> Result<String, EncodingError> {
    configuration
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            SPIN_UP => Ok(UP_SYMBOL),
            SPIN_DOWN => Ok(DOWN_SYMBOL),
            _ => Err(EncodingError::InvalidSpinValue { index, value }),
        })
        .collect()
}

/// Parses a string produced by [`encode`] back into a configuration.
pub fn decode(encoded: &str) -> Result<SpinConfiguration, EncodingError> {
    encoded
        .chars()
        .enumerate()
        .map(|(index, symbol)| match symbol {
            UP_SYMBOL => Ok(SPIN_UP),
            DOWN_SYMBOL => Ok(SPIN_DOWN),
            _ => Err(EncodingError::InvalidSymbol { index, symbol }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_up_encodes_to_all_plus() {
        let encoded = encode(&SpinConfiguration::uniform(5, SPIN_UP)).unwrap();
        assert_eq!(encoded, "+++++");
    }

    #[test]
    fn all_down_encodes_to_all_minus() {
        let encoded = encode(&SpinConfiguration::uniform(3, SPIN_DOWN)).unwrap();
        assert_eq!(encoded, "---");
    }

    #[test]
    fn mixed_configuration_keeps_spin_order() {
        let encoded = encode(&SpinConfiguration::new(vec![1, -1, -1, 1])).unwrap();
        assert_eq!(encoded, "+--+");
    }

    #[test]
    fn empty_configuration_encodes_to_empty_string() {
        assert_eq!(encode(&SpinConfiguration::default()).unwrap(), "");
    }

    #[test]
    fn out_of_domain_value_is_rejected_with_its_position() {
        let result = encode(&SpinConfiguration::new(vec![1, -1, 0, 2]));
        assert_eq!(
            result,
            Err(EncodingError::InvalidSpinValue { index: 2, value: 0 })
        );
    }

    #[test]
    fn decode_inverts_encode() {
        let config = decode("-+-").unwrap();
        assert_eq!(config.values(), &[-1, 1, -1]);
        assert_eq!(encode(&config).unwrap(), "-+-");
    }

    #[test]
    fn decode_rejects_unknown_symbols() {
        assert_eq!(
            decode("+x-"),
            Err(EncodingError::InvalidSymbol {
                index: 1,
                symbol: 'x'
            })
        );
    }
}
