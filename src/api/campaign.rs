use crate::models::{Campaign, CampaignChannel, CampaignQuery};
use crate::params::ParameterMap;
use crate::{Client, Error, Result};

/// `campaign/*` endpoints, obtained with [`Client::campaign`].
///
/// Campaign definitions travel as a JSON document in the `campaign` parameter.
#[derive(Debug, Clone, Copy)]
pub struct CampaignApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn campaign(&self) -> CampaignApi<'_> {
        CampaignApi { client: self }
    }
}

/// Serialize a campaign for the `campaign` parameter.
fn campaign_document(campaign: &Campaign) -> Result<String> {
    serde_json::to_string(campaign).map_err(Error::Encode)
}

impl CampaignApi<'_> {
    /// Create a campaign and return its channel ID.
    pub async fn add(&self, campaign: &Campaign) -> Result<i32> {
        let params = ParameterMap::new().param("campaign", campaign_document(campaign)?);
        self.client.request("campaign/add", params).await
    }

    /// Copy a campaign, returning the new channel ID.
    pub async fn copy(&self, channel_id: i32, new_name: Option<&str>) -> Result<i32> {
        let params = ParameterMap::new()
            .param("channelID", channel_id)
            .opt("newCampaignName", new_name);
        self.client.request("campaign/copy", params).await
    }

    pub async fn delete(&self, channel_id: i32) -> Result<()> {
        let params = ParameterMap::new().param("channelID", channel_id);
        self.client.request("campaign/delete", params).await
    }

    pub async fn list(&self, query: &CampaignQuery) -> Result<Vec<CampaignChannel>> {
        let params = ParameterMap::new()
            .opt("search", query.search.as_deref())
            .opt("offset", query.offset)
            .opt("limit", query.limit);
        self.client.request("campaign/list", params).await
    }

    /// Pause a running campaign.
    pub async fn pause(&self, channel_id: i32) -> Result<()> {
        let params = ParameterMap::new().param("channelID", channel_id);
        self.client.request("campaign/pause", params).await
    }

    /// Replace a campaign definition; `campaign.channel_id` selects the campaign.
    pub async fn update(&self, campaign: &Campaign) -> Result<i32> {
        let params = ParameterMap::new().param("campaign", campaign_document(campaign)?);
        self.client.request("campaign/update", params).await
    }
}
