use crate::models::Segment;
use crate::params::ParameterMap;
use crate::{Client, Result};

/// `segment/*` endpoints, obtained with [`Client::segment`].
#[derive(Debug, Clone, Copy)]
pub struct SegmentApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn segment(&self) -> SegmentApi<'_> {
        SegmentApi { client: self }
    }
}

impl SegmentApi<'_> {
    pub async fn add(&self, segment_name: &str, rule: &str) -> Result<Segment> {
        let params = ParameterMap::new()
            .param("segmentName", segment_name)
            .param("rule", rule);
        self.client.request("segment/add", params).await
    }

    pub async fn delete(&self, segment_name: &str) -> Result<()> {
        let params = ParameterMap::new().param("segmentName", segment_name);
        self.client.request("segment/delete", params).await
    }

    /// List segments, with daily history when `include_history` is set.
    pub async fn list(&self, include_history: Option<bool>) -> Result<Vec<Segment>> {
        let params = ParameterMap::new().opt("includeHistory", include_history);
        self.client.request("segment/list", params).await
    }

    /// Rename a segment and/or change its rule.
    pub async fn update(
        &self,
        segment_name: &str,
        new_segment_name: Option<&str>,
        rule: Option<&str>,
    ) -> Result<Segment> {
        let params = ParameterMap::new()
            .param("segmentName", segment_name)
            .opt("newSegmentName", new_segment_name)
            .opt("rule", rule);
        self.client.request("segment/update", params).await
    }
}
