use crate::models::{
    Contact, ContactExport, ContactQuery, ContactStatus, ContactUpload, ExportLink, FilePayload,
    NewContact,
};
use crate::params::ParameterMap;
use crate::{Client, Result, envelope};

/// `contact/*` endpoints, obtained with [`Client::contact`].
#[derive(Debug, Clone, Copy)]
pub struct ContactApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn contact(&self) -> ContactApi<'_> {
        ContactApi { client: self }
    }
}

/// Selection used by bulk contact operations: a rule, explicit emails, or both.
fn selection(rule: Option<&str>, emails: Option<&[String]>) -> ParameterMap {
    ParameterMap::new()
        .opt("rule", rule)
        .joined("emails", emails)
}

impl ContactApi<'_> {
    /// Add a contact to the account, and optionally to lists.
    ///
    /// Custom fields are sent as `field_<name>`.
    pub async fn add(&self, contact: &NewContact) -> Result<Contact> {
        let params = ParameterMap::new()
            .param("publicAccountID", &contact.public_account_id)
            .param("email", &contact.email)
            .repeated("publicListID", contact.public_list_ids.as_deref())
            .repeated("listName", contact.list_names.as_deref())
            .opt("firstName", contact.first_name.as_deref())
            .opt("lastName", contact.last_name.as_deref())
            .opt("source", contact.source)
            .opt("sourceUrl", contact.source_url.as_deref())
            .opt("activationReturnUrl", contact.activation_return_url.as_deref())
            .opt("sendActivation", contact.send_activation)
            .opt("consentDate", contact.consent_date)
            .prefixed("field", contact.custom_fields.as_ref());
        self.client.request("contact/add", params).await
    }

    /// Delete the contacts matching `rule` and/or `emails`.
    pub async fn delete(&self, rule: Option<&str>, emails: Option<&[String]>) -> Result<()> {
        self.client
            .request("contact/delete", selection(rule, emails))
            .await
    }

    pub async fn load(&self, email: &str) -> Result<Contact> {
        let params = ParameterMap::new().param("email", email);
        self.client.request("contact/loadcontact", params).await
    }

    pub async fn list(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
        let params = ParameterMap::new()
            .opt("rule", query.rule.as_deref())
            .opt("limit", query.limit)
            .opt("offset", query.offset);
        self.client.request("contact/list", params).await
    }

    /// Set the status of the selected contacts.
    pub async fn change_status(
        &self,
        status: ContactStatus,
        rule: Option<&str>,
        emails: Option<&[String]>,
    ) -> Result<()> {
        let params = selection(rule, emails).param("status", status);
        self.client.request("contact/changestatus", params).await
    }

    /// Start an export and return where it can be fetched.
    pub async fn export(&self, export: &ContactExport) -> Result<ExportLink> {
        let params = ParameterMap::new()
            .opt("fileFormat", export.file_format)
            .opt("rule", export.rule.as_deref())
            .joined("emails", export.emails.as_deref())
            .opt("compressionFormat", export.compression_format)
            .opt("fileName", export.file_name.as_deref());
        self.client.request("contact/export", params).await
    }

    /// Import contacts from a CSV file and return how many were added.
    pub async fn upload(&self, file: FilePayload, options: &ContactUpload) -> Result<i32> {
        let params = ParameterMap::new()
            .opt("listName", options.list_name.as_deref())
            .opt("status", options.status)
            .opt("encodingName", options.encoding_name.as_deref())
            .opt("fileUrl", options.file_url.as_deref())
            .opt("consentDate", options.consent_date);
        let body = self
            .client
            .upload_files("contact/upload", &[file], params)
            .await?;
        envelope::decode(&body)
    }
}
