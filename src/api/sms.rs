use crate::params::ParameterMap;
use crate::{Client, Result};

/// `sms/*` endpoints, obtained with [`Client::sms`].
#[derive(Debug, Clone, Copy)]
pub struct SmsApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn sms(&self) -> SmsApi<'_> {
        SmsApi { client: self }
    }
}

impl SmsApi<'_> {
    /// Send a text message to a phone number.
    pub async fn send(&self, to: &str, body: &str) -> Result<()> {
        let params = ParameterMap::new().param("to", to).param("body", body);
        self.client.request("sms/send", params).await
    }
}
