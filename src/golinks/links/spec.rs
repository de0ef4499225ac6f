//! Golink write requests and their form encoding

use serde::Serialize;

use crate::error::{GolinksError, Result};
use crate::golinks::form::FormData;

use super::models::Geolink;

/// Body of a create or update request
///
/// Flags are plain booleans and go over the wire as `0`/`1`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSpec {
    /// Required for updates, ignored on create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,
    pub name: String,
    pub url: String,
    pub description: String,
    pub unlisted: bool,
    pub public: bool,
    pub private: bool,
    pub format: bool,
    pub hyphens: bool,
    pub tags: Vec<String>,
    pub aliases: Vec<String>,
    pub geolinks: Vec<Geolink>,
}

impl LinkSpec {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Enforce the visibility and naming rules before anything is sent
    ///
    /// A private link is always unlisted. Hyphenation only exists as a
    /// naming-format option, so `hyphens` without `format` is rejected.
    pub fn apply_visibility_rules(&mut self) -> Result<()> {
        if self.hyphens && !self.format {
            return Err(GolinksError::Validation(
                "hyphens can only be enabled together with format".to_string(),
            ));
        }
        if self.private && !self.unlisted {
            self.unlisted = true;
        }
        Ok(())
    }

    /// Form body for POST /golinks
    pub fn create_form(&self) -> Result<FormData> {
        let spec = self.normalized()?;

        let mut form = FormData::new();
        form.set("name", spec.name.as_str());
        form.set("url", spec.url.as_str());
        if !spec.description.is_empty() {
            form.set("description", spec.description.as_str());
        }
        spec.write_shared_fields(&mut form);
        Ok(form)
    }

    /// Form body for PUT /golinks
    pub fn update_form(&self) -> Result<FormData> {
        let spec = self.normalized()?;
        let gid = spec.gid.ok_or_else(|| {
            GolinksError::Validation("gid is required to update a golink".to_string())
        })?;

        let mut form = FormData::new();
        form.set("gid", gid.to_string());
        form.set("name", spec.name.as_str());
        form.set("url", spec.url.as_str());
        form.set("description", spec.description.as_str());
        spec.write_shared_fields(&mut form);
        Ok(form)
    }

    fn normalized(&self) -> Result<Self> {
        let mut spec = self.clone();
        spec.apply_visibility_rules()?;
        Ok(spec)
    }

    fn write_shared_fields(&self, form: &mut FormData) {
        form.set("unlisted", flag(self.unlisted));
        form.set("public", flag(self.public));
        form.set("private", flag(self.private));
        form.set("format", flag(self.format));
        if self.format {
            form.set("hyphens", flag(self.hyphens));
        }
        for alias in &self.aliases {
            form.add("aliases", alias.as_str());
        }
        for tag in &self.tags {
            form.add("tags[]", tag.as_str());
        }
        for (i, geo) in self.geolinks.iter().enumerate() {
            form.set(&format!("geolinks[{}][location]", i), geo.location.as_str());
            form.set(&format!("geolinks[{}][url]", i), geo.url.as_str());
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
