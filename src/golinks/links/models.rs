//! Golink data models

use serde::{Deserialize, Deserializer, Serialize};

use crate::golinks::traits::GolinksResource;

/// Golink as returned by the GoLinks API
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub gid: i64,
    #[serde(default)]
    pub cid: i64,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "flag")]
    pub unlisted: bool,
    /// Not part of the API response; `None` when absent
    #[serde(
        default,
        deserialize_with = "optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub private: Option<bool>,
    #[serde(
        default,
        deserialize_with = "optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub public: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub variable_link: bool,
    #[serde(default, deserialize_with = "flag")]
    pub pinned: bool,
    #[serde(default, deserialize_with = "flag")]
    pub format: bool,
    #[serde(default, deserialize_with = "flag")]
    pub hyphens: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolinks: Option<Vec<Geolink>>,
    #[serde(default)]
    pub redirect_hits: RedirectHits,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Link {
    /// Tag names in API order
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }
}

impl GolinksResource for Link {
    fn gid(&self) -> i64 {
        self.gid
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Creator of a golink (read-only)
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default)]
    pub uid: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_image_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Tag {
    #[serde(default)]
    pub tid: i64,
    pub name: String,
}

/// Location-conditioned destination override
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Geolink {
    /// Two-character ISO country code or `US-XX` for US states
    pub location: String,
    pub url: String,
}

impl Geolink {
    pub fn new(location: &str, url: &str) -> Self {
        Self {
            location: location.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RedirectHits {
    #[serde(default)]
    pub daily: i64,
    #[serde(default)]
    pub weekly: i64,
    #[serde(default)]
    pub monthly: i64,
    #[serde(default)]
    pub alltime: i64,
}

/// One page of the golinks collection
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LinkPage {
    #[serde(default)]
    pub metadata: PageMetadata,
    pub results: Vec<Link>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub links: PageLinks,
}

/// Cursor URLs for neighbouring pages
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PageLinks {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Flags come back as `0`/`1`; booleans, numeric strings and null are tolerated
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_flag(deserializer)?.unwrap_or(false))
}

/// Like [`flag`], but null stays unknown
fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Bool(b)) => Ok(Some(b)),
        Some(Raw::Int(i)) => Ok(Some(i != 0)),
        Some(Raw::Str(s)) => match s.trim() {
            "" | "0" | "false" => Ok(Some(false)),
            "1" | "true" => Ok(Some(true)),
            other => Err(serde::de::Error::custom(format!(
                "invalid flag value '{}'",
                other
            ))),
        },
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
