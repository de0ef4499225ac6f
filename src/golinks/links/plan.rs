//! Desired configuration of a managed golink

use serde::{Deserialize, Serialize};

use crate::error::{GolinksError, Result};

use super::models::Geolink;
use super::spec::LinkSpec;

/// Configured values for a golink; `None` means "not set"
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPlan {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unlisted: Option<bool>,
    #[serde(default)]
    pub private: Option<bool>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub format: Option<bool>,
    #[serde(default)]
    pub hyphens: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub geolinks: Vec<Geolink>,
}

impl LinkPlan {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Normalize the plan before it is applied
    ///
    /// A private link is planned as unlisted so the recorded state matches
    /// what the API ends up storing. Hyphens without format are rejected.
    pub fn modify(mut self) -> Result<Self> {
        if self.name.trim().is_empty() {
            return Err(GolinksError::Validation("name must not be empty".to_string()));
        }
        if self.url.trim().is_empty() {
            return Err(GolinksError::Validation("url must not be empty".to_string()));
        }
        if self.hyphens == Some(true) && self.format != Some(true) {
            return Err(GolinksError::Validation(
                "hyphens can only be enabled together with format".to_string(),
            ));
        }
        if self.private == Some(true) && self.unlisted != Some(true) {
            self.unlisted = Some(true);
        }
        Ok(self)
    }

    /// Request body for this plan; unset flags are sent as `0`
    pub fn to_spec(&self, gid: Option<i64>) -> LinkSpec {
        LinkSpec {
            gid,
            name: self.name.clone(),
            url: self.url.clone(),
            description: self.description.clone().unwrap_or_default(),
            unlisted: self.unlisted.unwrap_or(false),
            public: self.public.unwrap_or(false),
            private: self.private.unwrap_or(false),
            format: self.format.unwrap_or(false),
            hyphens: self.format == Some(true) && self.hyphens.unwrap_or(false),
            tags: self.tags.clone(),
            aliases: self.aliases.clone(),
            geolinks: self.geolinks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_private_implies_unlisted() {
        let mut plan = LinkPlan::new("secret", "https://example.com");
        plan.private = Some(true);
        let plan = plan.modify().unwrap();
        assert_eq!(plan.unlisted, Some(true));
    }

    #[test]
    fn test_modify_private_overrides_explicit_false_unlisted() {
        let mut plan = LinkPlan::new("secret", "https://example.com");
        plan.private = Some(true);
        plan.unlisted = Some(false);
        assert_eq!(plan.modify().unwrap().unlisted, Some(true));
    }

    #[test]
    fn test_modify_leaves_public_links_alone() {
        let mut plan = LinkPlan::new("docs", "https://example.com");
        plan.public = Some(true);
        let modified = plan.clone().modify().unwrap();
        assert_eq!(modified, plan);
        assert!(modified.unlisted.is_none());
    }

    #[test]
    fn test_modify_rejects_hyphens_without_format() {
        let mut plan = LinkPlan::new("docs", "https://example.com");
        plan.hyphens = Some(true);
        assert!(matches!(plan.clone().modify(), Err(GolinksError::Validation(_))));

        plan.format = Some(false);
        assert!(matches!(plan.clone().modify(), Err(GolinksError::Validation(_))));

        plan.format = Some(true);
        assert!(plan.modify().is_ok());
    }

    #[test]
    fn test_modify_rejects_blank_name_or_url() {
        assert!(LinkPlan::new(" ", "https://example.com").modify().is_err());
        assert!(LinkPlan::new("docs", "").modify().is_err());
    }

    #[test]
    fn test_to_spec_defaults_unset_fields() {
        let spec = LinkPlan::new("docs", "https://example.com").to_spec(None);
        assert_eq!(spec, LinkSpec::new("docs", "https://example.com"));
    }

    #[test]
    fn test_to_spec_carries_gid_and_collections() {
        let mut plan = LinkPlan::new("docs", "https://example.com");
        plan.description = Some("Docs".to_string());
        plan.tags = vec!["eng".to_string()];
        plan.aliases = vec!["d".to_string()];
        plan.geolinks = vec![Geolink::new("DE", "https://de.example.com")];
        plan.format = Some(true);
        plan.hyphens = Some(true);

        let spec = plan.to_spec(Some(12));
        assert_eq!(spec.gid, Some(12));
        assert_eq!(spec.description, "Docs");
        assert_eq!(spec.tags, vec!["eng"]);
        assert_eq!(spec.aliases, vec!["d"]);
        assert_eq!(spec.geolinks.len(), 1);
        assert!(spec.format && spec.hyphens);
    }

    #[test]
    fn test_plan_deserializes_with_unset_fields() {
        let plan: LinkPlan =
            serde_json::from_str(r#"{"name": "docs", "url": "https://example.com", "private": true}"#)
                .unwrap();
        assert_eq!(plan.private, Some(true));
        assert!(plan.unlisted.is_none());
        assert!(plan.tags.is_empty());
    }
}
