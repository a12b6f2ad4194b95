use crate::models::{Log, LogQuery, LogSummary, SummaryQuery};
use crate::params::ParameterMap;
use crate::{Client, Result};

/// `log/*` endpoints, obtained with [`Client::log`].
#[derive(Debug, Clone, Copy)]
pub struct LogApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn log(&self) -> LogApi<'_> {
        LogApi { client: self }
    }
}

impl LogApi<'_> {
    /// Load a page of the activity log.
    pub async fn load(&self, query: &LogQuery) -> Result<Log> {
        let params = ParameterMap::new()
            .joined("statuses", query.statuses.as_deref())
            .opt("from", query.from)
            .opt("to", query.to)
            .opt("channelName", query.channel_name.as_deref())
            .opt("limit", query.limit)
            .opt("offset", query.offset)
            .opt("includeEmail", query.include_email)
            .opt("includeSms", query.include_sms)
            .opt("email", query.email.as_deref());
        self.client.request("log/load", params).await
    }

    /// Delivery totals for a time window.
    pub async fn summary(&self, query: &SummaryQuery) -> Result<LogSummary> {
        let params = ParameterMap::new()
            .param("from", query.from)
            .param("to", query.to)
            .opt("channelName", query.channel_name.as_deref())
            .opt("transactionID", query.transaction_id.as_deref());
        self.client.request("log/summary", params).await
    }

    /// Cancel messages that have not been sent yet.
    pub async fn cancel_in_progress(
        &self,
        channel_name: Option<&str>,
        transaction_id: Option<&str>,
    ) -> Result<()> {
        let params = ParameterMap::new()
            .opt("channelName", channel_name)
            .opt("transactionID", transaction_id);
        self.client.request("log/cancelinprogress", params).await
    }
}
