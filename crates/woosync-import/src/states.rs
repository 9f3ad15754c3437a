//! Indian state abbreviation resolution.
//!
//! WooCommerce sends two-letter subdivision codes for Indian addresses
//! (`"KA"`, `"MH"`, ...). The backend stores full state names, so the
//! importer maps codes through a fixed table and rejects anything outside
//! it rather than persisting an unreadable abbreviation.

use crate::error::ImportError;

/// Maps an Indian state abbreviation to its full name.
///
/// Returns `None` for codes outside the mapping. Matching is
/// case-sensitive: the storefront sends upper-case codes.
#[must_use]
pub fn state_full_name(abbr: &str) -> Option<&'static str> {
    let full = match abbr {
        "AP" => "Andhra Pradesh",
        "AR" => "Arunachal Pradesh",
        "AS" => "Assam",
        "BR" => "Bihar",
        "CT" => "Chhattisgarh",
        "GA" => "Goa",
        "GJ" => "Gujarat",
        "HR" => "Haryana",
        "HP" => "Himachal Pradesh",
        "JK" => "Jammu and Kashmir",
        "KA" => "Karnataka",
        "KL" => "Kerala",
        "MP" => "Madhya Pradesh",
        "MH" => "Maharashtra",
        "MN" => "Manipur",
        "ML" => "Meghalaya",
        "MZ" => "Mizoram",
        "NL" => "Nagaland",
        "OR" => "Odisha",
        "PB" => "Punjab",
        "RJ" => "Rajasthan",
        "SK" => "Sikkim",
        "TN" => "Tamil Nadu",
        "TS" => "Telangana",
        "TR" => "Tripura",
        "UP" => "Uttar Pradesh",
        "UK" => "Uttarakhand",
        "WB" => "West Bengal",
        "AN" => "Andaman and Nicobar Islands",
        "LD" => "Lakshadweep",
        "DN" => "Dadra and Nagar Haveli",
        "DL" => "Delhi",
        "JH" => "Jharkhand",
        _ => return None,
    };
    Some(full)
}

/// Resolves the state field of a storefront address.
///
/// Indian addresses with a state code are mapped to the full state name.
/// Addresses from any other country pass their state through unchanged,
/// and an empty state resolves to `None`.
///
/// # Errors
///
/// Returns [`ImportError::InvalidState`] for an unmapped abbreviation on an
/// Indian address.
pub fn resolve_state(state: &str, country: &str) -> Result<Option<String>, ImportError> {
    if country == "IN" && !state.is_empty() {
        return match state_full_name(state) {
            Some(full) => Ok(Some(full.to_string())),
            None => {
                tracing::error!(state, "invalid state abbreviation on Indian address");
                Err(ImportError::InvalidState {
                    state: state.to_string(),
                })
            }
        };
    }

    if state.is_empty() {
        Ok(None)
    } else {
        Ok(Some(state.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_abbreviations() {
        assert_eq!(state_full_name("KA"), Some("Karnataka"));
        assert_eq!(state_full_name("TN"), Some("Tamil Nadu"));
        assert_eq!(state_full_name("AN"), Some("Andaman and Nicobar Islands"));
        assert_eq!(state_full_name("JH"), Some("Jharkhand"));
    }

    #[test]
    fn rejects_unknown_abbreviations() {
        assert_eq!(state_full_name("ZZ"), None);
        assert_eq!(state_full_name(""), None);
    }

    #[test]
    fn table_covers_every_subdivision_code() {
        const CODES: [&str; 33] = [
            "AP", "AR", "AS", "BR", "CT", "GA", "GJ", "HR", "HP", "JK", "KA",
            "KL", "MP", "MH", "MN", "ML", "MZ", "NL", "OR", "PB", "RJ", "SK",
            "TN", "TS", "TR", "UP", "UK", "WB", "AN", "LD", "DN", "DL", "JH",
        ];
        for code in CODES {
            assert!(
                state_full_name(code).is_some(),
                "missing mapping for {code}"
            );
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(state_full_name("ka"), None);
    }

    #[test]
    fn resolve_maps_indian_codes() {
        let resolved = resolve_state("KA", "IN");
        assert_eq!(resolved.unwrap().as_deref(), Some("Karnataka"));
    }

    #[test]
    fn resolve_rejects_unknown_indian_codes() {
        let result = resolve_state("ZZ", "IN");
        assert!(
            matches!(result, Err(ImportError::InvalidState { ref state }) if state == "ZZ"),
            "expected InvalidState for ZZ, got: {result:?}"
        );
    }

    #[test]
    fn resolve_passes_foreign_states_through() {
        let resolved = resolve_state("Zurich", "CH");
        assert_eq!(resolved.unwrap().as_deref(), Some("Zurich"));
    }

    #[test]
    fn resolve_passes_foreign_codes_without_mapping() {
        // "KA" is only special for Indian addresses.
        let resolved = resolve_state("KA", "US");
        assert_eq!(resolved.unwrap().as_deref(), Some("KA"));
    }

    #[test]
    fn resolve_treats_empty_state_as_none() {
        assert_eq!(resolve_state("", "IN").unwrap(), None);
        assert_eq!(resolve_state("", "CH").unwrap(), None);
    }
}
