use serde_json::json;

use crate::fetch::FetchError;

/// A government whose open-data portal we know how to reach. The base-URL
/// table is fixed; anything outside it is a typed not-found, never a generic
/// upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jurisdiction {
    Federal,
    Ontario,
    Alberta,
    BritishColumbia,
    Quebec,
}

impl Jurisdiction {
    /// Maps a raw province name to a jurisdiction. Input is trimmed,
    /// lowercased, and spaces become underscores, so "British Columbia" and
    /// "british_columbia" resolve identically. No province means Federal.
    pub fn resolve(province: Option<&str>) -> Result<Self, FetchError> {
        let Some(raw) = province.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(Jurisdiction::Federal);
        };

        let key = raw.to_lowercase().replace(' ', "_");
        match key.as_str() {
            "federal" => Ok(Jurisdiction::Federal),
            "ontario" => Ok(Jurisdiction::Ontario),
            "alberta" => Ok(Jurisdiction::Alberta),
            "british_columbia" => Ok(Jurisdiction::BritishColumbia),
            "quebec" => Ok(Jurisdiction::Quebec),
            _ => Err(FetchError::NotFound {
                message: format!("Province '{}' is not supported", raw),
                details: json!({ "province": raw }),
            }),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Jurisdiction::Federal => "federal",
            Jurisdiction::Ontario => "ontario",
            Jurisdiction::Alberta => "alberta",
            Jurisdiction::BritishColumbia => "british_columbia",
            Jurisdiction::Quebec => "quebec",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Jurisdiction::Federal => "https://open.canada.ca/data/api",
            Jurisdiction::Ontario => "https://data.ontario.ca/api",
            Jurisdiction::Alberta => "https://data.alberta.ca/api",
            Jurisdiction::BritishColumbia => "https://catalogue.data.gov.bc.ca/api",
            Jurisdiction::Quebec => "https://www.donneesquebec.ca/recherche/api",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_province_defaults_to_federal() {
        assert_eq!(Jurisdiction::resolve(None).unwrap(), Jurisdiction::Federal);
        assert_eq!(Jurisdiction::resolve(Some("  ")).unwrap(), Jurisdiction::Federal);
    }

    #[test]
    fn normalizes_case_whitespace_and_spaces() {
        assert_eq!(Jurisdiction::resolve(Some("Ontario ")).unwrap(), Jurisdiction::Ontario);
        assert_eq!(Jurisdiction::resolve(Some("ontario")).unwrap(), Jurisdiction::Ontario);
        assert_eq!(
            Jurisdiction::resolve(Some("British Columbia")).unwrap(),
            Jurisdiction::BritishColumbia
        );
    }

    #[test]
    fn unsupported_province_is_not_found_not_upstream() {
        let err = Jurisdiction::resolve(Some("Nova Scotia")).unwrap_err();
        match err {
            FetchError::NotFound { message, details } => {
                assert!(message.contains("Nova Scotia"));
                assert_eq!(details["province"], "Nova Scotia");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
