//! Site registry: the business units tracked in the panel.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Opaque panel identifier of a site.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    /// Create a new SiteId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the site ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One configured site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Lookup key, lower-case ASCII.
    pub key: String,
    /// Identifier the panel expects in report requests.
    pub id: SiteId,
    /// Name shown in chat replies.
    pub name: String,
}

impl Site {
    pub fn new(key: impl Into<String>, id: impl Into<SiteId>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            name: name.into(),
        }
    }
}

const BUILTIN_SITES: &[(&str, &str, &str)] = &[
    ("izmir", "9c69c72a-5f88-4130-bf9b-cef6755ffb78", "İzmir(B)"),
    ("adana", "b724ae8c-bd4b-4147-acb6-dfb72656c5d5", "Adana(W)"),
    ("eskisehir", "d36896e8-8500-4905-bc7c-c0988214b213", "Eskişehir(T)"),
    ("istanbul", "7af7e276-7dea-4fe2-8762-636e324917ac", "İstanbul(O)"),
    ("aydin", "d3ae4fcc-8224-48a4-936b-7f424ea8b26c", "Aydın(L)"),
    ("fiksturbet", "04710a73-5ccf-4aff-80d1-0380e75a503e", "FikstürBet"),
    ("bayconticasino", "0e9ac775-120b-45c1-bd60-90d2e4a0f23c", "BayContiCasino"),
    ("maximcasino", "759fe569-589b-4c28-acf5-2862f4ea5351", "MaximCasino"),
    ("rinabet", "ec567fc7-972f-48d5-b505-c4c7db2a5606", "Rinabet"),
    ("denver", "dadac705-842f-4317-8564-8d169fed4f0f", "Denver"),
];

/// Ordered, validated set of sites.
///
/// Order is preserved: reports list sites in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRegistry {
    sites: Vec<Site>,
}

impl SiteRegistry {
    /// The sites of the production deployment.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sites: BUILTIN_SITES
                .iter()
                .map(|(key, id, name)| Site::new(*key, *id, *name))
                .collect(),
        }
    }

    /// Build a registry from configured sites.
    ///
    /// # Errors
    ///
    /// Rejects an empty list, duplicate keys, and blank keys, ids or names.
    pub fn from_sites(sites: Vec<Site>) -> Result<Self, ConfigError> {
        if sites.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "sites",
                reason: "at least one site is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for site in &sites {
            if site.key.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sites.key",
                    reason: "must not be empty".to_string(),
                });
            }
            if site.id.as_str().trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sites.id",
                    reason: format!("site `{}` has an empty id", site.key),
                });
            }
            if site.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sites.name",
                    reason: format!("site `{}` has an empty name", site.key),
                });
            }
            if !seen.insert(site.key.to_ascii_lowercase()) {
                return Err(ConfigError::InvalidValue {
                    field: "sites.key",
                    reason: format!("duplicate key `{}`", site.key),
                });
            }
        }

        Ok(Self { sites })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_all_sites_in_order() {
        let registry = SiteRegistry::builtin();
        assert_eq!(registry.len(), 10);

        let names: Vec<_> = registry.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"İzmir(B)"));
        assert_eq!(names.last(), Some(&"Denver"));
    }

    #[test]
    fn builtin_sites_carry_panel_ids() {
        let registry = SiteRegistry::builtin();
        let site = registry.iter().find(|s| s.key == "denver").unwrap();
        assert_eq!(site.id.as_str(), "dadac705-842f-4317-8564-8d169fed4f0f");
    }

    #[test]
    fn from_sites_rejects_duplicates() {
        let result = SiteRegistry::from_sites(vec![
            Site::new("a", "id-1", "A"),
            Site::new("A", "id-2", "A again"),
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "sites.key",
                ..
            })
        ));
    }

    #[test]
    fn from_sites_rejects_empty_list_and_blank_ids() {
        assert!(SiteRegistry::from_sites(Vec::new()).is_err());
        assert!(matches!(
            SiteRegistry::from_sites(vec![Site::new("a", " ", "A")]),
            Err(ConfigError::InvalidValue {
                field: "sites.id",
                ..
            })
        ));
    }

    #[test]
    fn from_sites_keeps_order() {
        let registry = SiteRegistry::from_sites(vec![
            Site::new("b", "id-b", "B"),
            Site::new("a", "id-a", "A"),
        ])
        .unwrap();
        let keys: Vec<_> = registry.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
