use std::cmp::Ordering;

use crate::utils::error::{KataError, Result};

/// Compares two dot-separated version strings numerically.
///
/// Components are compared left to right; missing trailing components count
/// as zero, so `"1.0"` equals `"1.0.0.0"`. Leading zeros are insignificant
/// (`"01"` equals `"1"`). A component that does not parse as a non-negative
/// integer is rejected with [`KataError::InvalidVersionComponent`] rather
/// than coerced.
///
/// The returned [`Ordering`] maps to the conventional integers via
/// `ordering as i32`: -1 for less, 0 for equal, 1 for greater.
pub fn compare_versions(v1: &str, v2: &str) -> Result<Ordering> {
    let left = parse_components(v1)?;
    let right = parse_components(v2)?;

    let shared = left.len().min(right.len());
    for i in 0..shared {
        match left[i].cmp(&right[i]) {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
    }

    // All shared components equal: extra components decide only if one of
    // them is nonzero.
    if left[shared..].iter().any(|&c| c > 0) {
        return Ok(Ordering::Greater);
    }
    if right[shared..].iter().any(|&c| c > 0) {
        return Ok(Ordering::Less);
    }

    Ok(Ordering::Equal)
}

fn parse_components(version: &str) -> Result<Vec<u64>> {
    version
        .split('.')
        .enumerate()
        .map(|(position, component)| {
            component
                .parse::<u64>()
                .map_err(|_| KataError::InvalidVersionComponent {
                    version: version.to_string(),
                    component: component.to_string(),
                    position,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_not_lexicographic() {
        assert_eq!(compare_versions("1.2", "1.10").unwrap(), Ordering::Less);
        assert_eq!(compare_versions("1.10", "1.2").unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert_eq!(compare_versions("1.01", "1.001").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_trailing_zero_components_ignored() {
        assert_eq!(compare_versions("1.0", "1.0.0.0").unwrap(), Ordering::Equal);
        assert_eq!(compare_versions("1.0.0.0", "1.0").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_extra_nonzero_component_wins() {
        assert_eq!(compare_versions("1.0.1", "1.0").unwrap(), Ordering::Greater);
        assert_eq!(compare_versions("1.0", "1.0.0.7").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_ordering_maps_to_conventional_integers() {
        assert_eq!(compare_versions("1.2", "1.10").unwrap() as i32, -1);
        assert_eq!(compare_versions("2", "2.0").unwrap() as i32, 0);
        assert_eq!(compare_versions("3.1", "3.0.9").unwrap() as i32, 1);
    }

    #[test]
    fn test_malformed_components_are_errors() {
        assert!(compare_versions("1..2", "1.0").is_err());
        assert!(compare_versions("1.0", "1.a").is_err());
        assert!(compare_versions("", "1").is_err());
        assert!(compare_versions("1.-2", "1.0").is_err());
    }

    #[test]
    fn test_error_names_offending_component() {
        let err = compare_versions("1.x.3", "1.0").unwrap_err();
        match err {
            KataError::InvalidVersionComponent {
                version,
                component,
                position,
            } => {
                assert_eq!(version, "1.x.3");
                assert_eq!(component, "x");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
