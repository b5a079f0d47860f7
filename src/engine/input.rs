//! Input value parsing
//!
//! Values arrive from the command line either as explicit integers
//! (space- or comma-separated) or as a deterministic pseudo-random fill.
//! The fill uses a fixed linear congruential generator so a given seed
//! always produces the same array, keeping whole runs reproducible.

use crate::engine::errors::EngineError;

/// Largest value produced by [`random_values`], exclusive
const RANDOM_VALUE_RANGE: u32 = 100;

/// Parse command-line tokens into values.
///
/// Each token may itself hold several comma-separated integers, so both
/// `sortty bubble 5 3 8 1` and `sortty bubble 5,3,8,1` work.
pub fn parse_values(tokens: &[String]) -> Result<Vec<i64>, EngineError> {
    let mut values = Vec::new();
    for token in tokens {
        for piece in token.split(',') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            let value = piece
                .parse::<i64>()
                .map_err(|_| EngineError::InvalidValue {
                    token: piece.to_string(),
                })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Deterministic pseudo-random fill (LCG)
pub fn random_values(count: usize, seed: u32) -> Vec<i64> {
    let mut values = Vec::with_capacity(count);
    let mut state = seed;
    for _ in 0..count {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        values.push((state % RANDOM_VALUE_RANGE) as i64);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_and_comma_separated() {
        let tokens = vec!["5".to_string(), "3,8".to_string(), " 1 ".to_string()];
        assert_eq!(parse_values(&tokens).unwrap(), vec![5, 3, 8, 1]);
    }

    #[test]
    fn parses_negative_values() {
        let tokens = vec!["-4,0,17".to_string()];
        assert_eq!(parse_values(&tokens).unwrap(), vec![-4, 0, 17]);
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let tokens = vec!["5".to_string(), "x".to_string()];
        assert_eq!(
            parse_values(&tokens),
            Err(EngineError::InvalidValue {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn random_fill_is_deterministic() {
        let a = random_values(32, 42);
        let b = random_values(32, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.iter().all(|&v| (0..100).contains(&v)));
    }
}
