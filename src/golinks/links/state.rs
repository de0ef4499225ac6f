//! Recorded state of a managed golink

use serde::{Deserialize, Serialize};

use super::models::{Geolink, Link, RedirectHits, User};
use super::plan::LinkPlan;

/// Flat snapshot of a golink as last seen through the API
///
/// `private`, `public`, `aliases` and `geolinks` are not part of the API
/// response. They are `None` until this tool has written them or derived
/// them from another field.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LinkState {
    /// Decimal form of `gid`
    pub id: String,
    pub gid: i64,
    pub cid: i64,
    pub name: String,
    pub url: String,
    pub description: String,
    pub unlisted: bool,
    pub private: Option<bool>,
    pub public: Option<bool>,
    pub format: bool,
    pub hyphens: bool,
    pub variable_link: bool,
    pub pinned: bool,
    pub tags: Vec<String>,
    pub aliases: Option<Vec<String>>,
    pub geolinks: Option<Vec<Geolink>>,
    pub user: User,
    pub redirect_hits: RedirectHits,
    pub created_at: i64,
    pub updated_at: i64,
    /// Local time of the last create/update through this tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl LinkState {
    /// Copy an API response into state
    ///
    /// Values from the plan that was just applied fill in whatever the
    /// response leaves out; the plan's private/public always win.
    pub fn from_link(link: &Link, plan: Option<&LinkPlan>) -> Self {
        let mut state = Self {
            id: link.gid.to_string(),
            gid: link.gid,
            cid: link.cid,
            name: link.name.clone(),
            url: link.url.clone(),
            description: link.description.clone(),
            unlisted: link.unlisted,
            private: link.private,
            public: link.public,
            format: link.format,
            hyphens: link.hyphens,
            variable_link: link.variable_link,
            pinned: link.pinned,
            tags: link.tag_names(),
            aliases: link.aliases.clone(),
            geolinks: link.geolinks.clone(),
            user: link.user.clone(),
            redirect_hits: link.redirect_hits.clone(),
            created_at: link.created_at,
            updated_at: link.updated_at,
            last_updated: None,
        };

        if let Some(plan) = plan {
            if plan.private.is_some() {
                state.private = plan.private;
            }
            if plan.public.is_some() {
                state.public = plan.public;
            }
            if state.aliases.is_none() {
                state.aliases = Some(plan.aliases.clone());
            }
            if state.geolinks.is_none() {
                state.geolinks = Some(plan.geolinks.clone());
            }
        }
        state.normalize_visibility();
        state
    }

    /// Take values the API did not report from an earlier state
    pub fn inherit_unreported(&mut self, previous: &LinkState) {
        if self.private.is_none() {
            self.private = previous.private;
        }
        if self.public.is_none() {
            self.public = previous.public;
        }
        if self.aliases.is_none() {
            self.aliases = previous.aliases.clone();
        }
        if self.geolinks.is_none() {
            self.geolinks = previous.geolinks.clone();
        }
        self.normalize_visibility();
    }

    /// Private links are always unlisted, so a listed link is not private
    fn normalize_visibility(&mut self) {
        match self.private {
            Some(true) => self.unlisted = true,
            None if !self.unlisted => self.private = Some(false),
            _ => {}
        }
    }

    /// Names of writable fields whose current value is not known
    pub fn unknown_fields(&self) -> Vec<&'static str> {
        let mut unknown = Vec::new();
        if self.private.is_none() {
            unknown.push("private");
        }
        if self.public.is_none() {
            unknown.push("public");
        }
        if self.aliases.is_none() {
            unknown.push("aliases");
        }
        if self.geolinks.is_none() {
            unknown.push("geolinks");
        }
        unknown
    }

    /// Stamp the local modification time
    pub fn touch(mut self) -> Self {
        self.last_updated = Some(chrono::Local::now().to_rfc2822());
        self
    }

    /// Plan reproducing this state, used as the base for partial updates
    ///
    /// Unknown flags stay unset; unknown lists come out empty, so callers
    /// must check [`LinkState::unknown_fields`] before sending the plan.
    pub fn to_plan(&self) -> LinkPlan {
        LinkPlan {
            name: self.name.clone(),
            url: self.url.clone(),
            description: Some(self.description.clone()),
            unlisted: Some(self.unlisted),
            private: self.private,
            public: self.public,
            format: Some(self.format),
            hyphens: Some(self.format && self.hyphens),
            tags: self.tags.clone(),
            aliases: self.aliases.clone().unwrap_or_default(),
            geolinks: self.geolinks.clone().unwrap_or_default(),
        }
    }
}
