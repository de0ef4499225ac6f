//! Lifecycle handler translating between plans/state and API calls

use log::{debug, info};

use crate::error::{GolinksError, Result};
use crate::golinks::GolinksClient;

use super::models::LinkPage;
use super::plan::LinkPlan;
use super::state::LinkState;

/// Create/read/update/delete/import for a managed golink
pub struct LinkResource<'a> {
    client: &'a GolinksClient,
}

impl<'a> LinkResource<'a> {
    pub fn new(client: &'a GolinksClient) -> Self {
        Self { client }
    }

    /// Create the link and record its state
    pub async fn create(&self, plan: LinkPlan) -> Result<LinkState> {
        let plan = plan.modify()?;
        let link = self.client.create_link(&plan.to_spec(None)).await?;
        info!("Created golink '{}' (gid {})", link.name, link.gid);
        Ok(LinkState::from_link(&link, Some(&plan)).touch())
    }

    /// Refresh state; `None` when the link no longer exists
    pub async fn read(&self, state: &LinkState) -> Result<Option<LinkState>> {
        match self.client.get_link_by_id(state.gid).await {
            Ok(link) => {
                let mut refreshed = LinkState::from_link(&link, None);
                refreshed.inherit_unreported(state);
                refreshed.last_updated = state.last_updated.clone();
                Ok(Some(refreshed))
            }
            Err(e) if e.is_not_found() => {
                debug!("Golink {} is gone, dropping it from state", state.gid);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the link's mutable fields, then re-read it
    pub async fn update(&self, plan: LinkPlan, state: &LinkState) -> Result<LinkState> {
        let plan = plan.modify()?;
        self.client
            .update_link(&plan.to_spec(Some(state.gid)))
            .await?;
        let link = self.client.get_link_by_id(state.gid).await?;
        info!("Updated golink '{}' (gid {})", link.name, link.gid);
        Ok(LinkState::from_link(&link, Some(&plan)).touch())
    }

    pub async fn delete(&self, state: &LinkState) -> Result<()> {
        self.client.delete_link(state.gid).await?;
        info!("Deleted golink '{}' (gid {})", state.name, state.gid);
        Ok(())
    }

    /// Adopt an existing link by its decimal gid
    pub async fn import(&self, id: &str) -> Result<LinkState> {
        let gid: i64 = id.trim().parse().map_err(|_| {
            GolinksError::Validation(format!("import id '{}' is not a numeric gid", id))
        })?;
        let link = self.client.get_link_by_id(gid).await?;
        Ok(LinkState::from_link(&link, None))
    }

    /// Single link looked up by name
    pub async fn read_link_by_name(&self, name: &str) -> Result<LinkState> {
        let link = self.client.get_link_by_name(name).await?;
        Ok(LinkState::from_link(&link, None))
    }

    /// Collection page with metadata
    pub async fn read_links(&self) -> Result<LinkPage> {
        self.client.list_links().await
    }
}
