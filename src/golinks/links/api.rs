//! Golink API operations

use log::debug;
use serde::Deserialize;

use crate::config::api;
use crate::error::{GolinksError, Result};
use crate::golinks::traits::GolinksResource;
use crate::golinks::GolinksClient;

use super::models::{Link, LinkPage};
use super::spec::LinkSpec;

/// Body of the name filter endpoint: either the link itself or a page
#[derive(Deserialize)]
#[serde(untagged)]
enum NameLookup {
    Page(LinkPage),
    Single(Link),
}

impl GolinksClient {
    /// List golinks (first page as served by the API)
    pub async fn list_links(&self) -> Result<LinkPage> {
        let url = self.url(api::GOLINKS);
        debug!("Fetching golinks from: {}", url);

        let page: LinkPage = self.execute_json(self.get(&url)).await?;
        debug!(
            "Got {} of {} golinks",
            page.results.len(),
            page.metadata.total_results
        );
        Ok(page)
    }

    /// Get a golink by name through the collection's `name` filter
    pub async fn get_link_by_name(&self, name: &str) -> Result<Link> {
        let url = format!(
            "{}?name={}",
            self.url(api::GOLINKS),
            urlencoding::encode(name)
        );
        debug!("Fetching golink '{}' from: {}", name, url);

        match self.execute_json::<NameLookup>(self.get(&url)).await? {
            NameLookup::Single(link) => Ok(link),
            NameLookup::Page(page) => {
                let mut matching: Vec<Link> = page
                    .results
                    .into_iter()
                    .filter(|link| link.name() == name)
                    .collect();
                match matching.len() {
                    1 => Ok(matching.remove(0)),
                    0 => Err(GolinksError::Api {
                        status: 404,
                        body: format!("no golink named '{}'", name),
                    }),
                    n => Err(GolinksError::Api {
                        status: 404,
                        body: format!("{} golinks named '{}'", n, name),
                    }),
                }
            }
        }
    }

    /// Get a golink by gid
    pub async fn get_link_by_id(&self, gid: i64) -> Result<Link> {
        let url = self.url(&format!("{}/{}", api::GOLINKS, gid));
        debug!("Fetching golink {} from: {}", gid, url);

        self.execute_json(self.get(&url)).await
    }

    /// Create a golink; the server assigns gid and timestamps
    pub async fn create_link(&self, spec: &LinkSpec) -> Result<Link> {
        let form = spec.create_form()?;
        let url = self.url(api::GOLINKS);
        debug!("Creating golink '{}' at: {}", spec.name, url);

        let link: Link = self
            .execute_json(Self::form(self.post(&url), &form))
            .await?;
        debug!("Created golink '{}' with gid {}", link.name(), link.gid());
        Ok(link)
    }

    /// Replace all mutable fields of the golink identified by `spec.gid`
    pub async fn update_link(&self, spec: &LinkSpec) -> Result<Link> {
        let form = spec.update_form()?;
        let url = self.url(api::GOLINKS);
        debug!(
            "Updating golink {} ('{}') at: {}",
            spec.gid.unwrap_or_default(),
            spec.name,
            url
        );

        self.execute_json(Self::form(self.put(&url), &form)).await
    }

    /// Delete a golink by gid
    pub async fn delete_link(&self, gid: i64) -> Result<()> {
        let url = format!("{}?gid={}", self.url(api::GOLINKS), gid);
        debug!("Deleting golink {} at: {}", gid, url);

        self.execute(self.delete(&url)).await?;
        Ok(())
    }
}
