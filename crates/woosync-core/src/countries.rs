use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One entry of the countries seed file: an ISO 3166-1 alpha-2 code and the
/// canonical display name the backend uses for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryConfig {
    pub code: String,
    pub name: String,
}

impl CountryConfig {
    /// The code as stored and queried: lowercase alpha-2.
    #[must_use]
    pub fn normalized_code(&self) -> String {
        self.code.to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
pub struct CountriesFile {
    pub countries: Vec<CountryConfig>,
}

/// Load and validate the countries seed from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_countries(path: &Path) -> Result<CountriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CountriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let countries_file: CountriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CountriesFileParse)?;

    validate_countries(&countries_file)?;

    Ok(countries_file)
}

fn validate_countries(countries_file: &CountriesFile) -> Result<(), ConfigError> {
    let mut seen_codes = HashSet::new();
    let mut seen_names = HashSet::new();

    for country in &countries_file.countries {
        if country.code.len() != 2 || !country.code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Validation(format!(
                "country code must be two ASCII letters, got '{}'",
                country.code
            )));
        }

        if country.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "country '{}' has an empty name",
                country.code
            )));
        }

        if !seen_codes.insert(country.normalized_code()) {
            return Err(ConfigError::Validation(format!(
                "duplicate country code: '{}'",
                country.code
            )));
        }

        if !seen_names.insert(country.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate country name: '{}'",
                country.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str) -> CountryConfig {
        CountryConfig {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn normalized_code_lowercases() {
        assert_eq!(country("IN", "India").normalized_code(), "in");
        assert_eq!(country("ch", "Switzerland").normalized_code(), "ch");
    }

    #[test]
    fn validate_rejects_long_code() {
        let file = CountriesFile {
            countries: vec![country("IND", "India")],
        };
        let err = validate_countries(&file).unwrap_err();
        assert!(err.to_string().contains("two ASCII letters"));
    }

    #[test]
    fn validate_rejects_numeric_code() {
        let file = CountriesFile {
            countries: vec![country("1N", "India")],
        };
        let err = validate_countries(&file).unwrap_err();
        assert!(err.to_string().contains("two ASCII letters"));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let file = CountriesFile {
            countries: vec![country("IN", "  ")],
        };
        let err = validate_countries(&file).unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn validate_rejects_duplicate_code_case_insensitive() {
        let file = CountriesFile {
            countries: vec![country("IN", "India"), country("in", "India Again")],
        };
        let err = validate_countries(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate country code"));
    }

    #[test]
    fn validate_rejects_duplicate_name() {
        let file = CountriesFile {
            countries: vec![country("IN", "India"), country("ZA", "india")],
        };
        let err = validate_countries(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate country name"));
    }

    #[test]
    fn validate_accepts_valid_countries() {
        let file = CountriesFile {
            countries: vec![
                country("IN", "India"),
                country("CH", "Switzerland"),
                country("US", "United States"),
            ],
        };
        assert!(validate_countries(&file).is_ok());
    }

    #[test]
    fn load_countries_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("countries.yaml");
        assert!(
            path.exists(),
            "countries.yaml missing at {path:?} — required for this test"
        );
        let result = load_countries(&path);
        assert!(result.is_ok(), "failed to load countries.yaml: {result:?}");
        let file = result.unwrap();
        assert!(!file.countries.is_empty());
        // The importer's country fallback depends on Switzerland being seeded.
        assert!(
            file.countries.iter().any(|c| c.name == "Switzerland"),
            "expected Switzerland in the seed"
        );
        assert!(
            file.countries.iter().any(|c| c.name == "India"),
            "expected India in the seed"
        );
    }
}
