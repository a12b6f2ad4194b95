use crate::models::{EmailMessage, EmailSend, EmailStatus, EmailView, FilePayload};
use crate::params::ParameterMap;
use crate::{Client, Result, envelope};

/// `email/*` endpoints, obtained with [`Client::email`].
#[derive(Debug, Clone, Copy)]
pub struct EmailApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn email(&self) -> EmailApi<'_> {
        EmailApi { client: self }
    }
}

impl EmailMessage {
    pub(crate) fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .opt("subject", self.subject.as_deref())
            .opt("from", self.from.as_deref())
            .opt("fromName", self.from_name.as_deref())
            .opt("sender", self.sender.as_deref())
            .opt("replyTo", self.reply_to.as_deref())
            .joined("to", self.to.as_deref())
            .repeated("msgTo", self.msg_to.as_deref())
            .repeated("msgCC", self.msg_cc.as_deref())
            .repeated("msgBcc", self.msg_bcc.as_deref())
            .joined("lists", self.lists.as_deref())
            .joined("segments", self.segments.as_deref())
            .opt("channel", self.channel.as_deref())
            .opt("bodyHtml", self.body_html.as_deref())
            .opt("bodyText", self.body_text.as_deref())
            .opt("charset", self.charset.as_deref())
            .opt("encodingType", self.encoding_type)
            .opt("template", self.template.as_deref())
            .joined("attachments", self.attachments.as_deref())
            .prefixed("merge", self.merge.as_ref())
            .prefixed("headers", self.headers.as_ref())
            .opt("poolName", self.pool_name.as_deref())
            .opt("isTransactional", self.is_transactional)
            .opt("trackOpens", self.track_opens)
            .opt("trackClicks", self.track_clicks)
    }
}

impl EmailApi<'_> {
    /// Send a message.
    ///
    /// # Examples
    /// ```no_run
    /// # use elasticemail_client::{Client, models::EmailMessage};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), elasticemail_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// let sent = client
    ///     .email()
    ///     .send(&EmailMessage {
    ///         from: Some("me@example.com".into()),
    ///         to: Some(vec!["you@example.com".into()]),
    ///         subject: Some("Hello".into()),
    ///         body_text: Some("Hi there".into()),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("{}", sent.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, message: &EmailMessage) -> Result<EmailSend> {
        self.client.request("email/send", message.to_params()).await
    }

    /// Send a message with files attached inline to the request.
    pub async fn send_with_files(
        &self,
        message: &EmailMessage,
        files: &[FilePayload],
    ) -> Result<EmailSend> {
        let body = self
            .client
            .upload_files("email/send", files, message.to_params())
            .await?;
        envelope::decode(&body)
    }

    /// Delivery status of a single message.
    pub async fn status(&self, message_id: &str) -> Result<EmailStatus> {
        let params = ParameterMap::new().param("messageID", message_id);
        self.client.request("email/status", params).await
    }

    pub async fn view(&self, message_id: &str) -> Result<EmailView> {
        let params = ParameterMap::new().param("messageID", message_id);
        self.client.request("email/view", params).await
    }
}
