use crate::params::enum_param;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum ContactStatus {
    Transactional,
    Engaged,
    Active,
    Bounced,
    Unsubscribed,
    Abuse,
    Inactive,
    Stale,
    NotConfirmed,
}

enum_param!(ContactStatus);

/// How a contact entered the account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum ContactSource {
    DeliveryApi,
    ManualInput,
    FileUpload,
    WebForm,
    ContactApi,
}

enum_param!(ContactSource);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum ExportFileFormat {
    Csv,
    Xml,
    Json,
}

enum_param!(ExportFileFormat);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum CompressionFormat {
    None,
    Zip,
}

enum_param!(CompressionFormat);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub status: Option<ContactStatus>,
    pub source: Option<ContactSource>,
    #[serde(rename = "dateadded")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(rename = "dateupdated")]
    pub date_updated: Option<NaiveDateTime>,
    #[serde(rename = "customfields")]
    pub custom_fields: BTreeMap<String, String>,
    #[serde(rename = "totalsent")]
    pub total_sent: i64,
    #[serde(rename = "totalopened")]
    pub total_opened: i64,
    #[serde(rename = "totalclicked")]
    pub total_clicked: i64,
}

/// Parameters for `contact/add`.
///
/// `custom_fields` are sent as `field_<name>` entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewContact {
    pub public_account_id: String,
    pub email: String,
    pub public_list_ids: Option<Vec<String>>,
    pub list_names: Option<Vec<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub source: Option<ContactSource>,
    pub source_url: Option<String>,
    pub activation_return_url: Option<String>,
    pub send_activation: Option<bool>,
    pub consent_date: Option<NaiveDateTime>,
    pub custom_fields: Option<BTreeMap<String, String>>,
}

/// Filters for `contact/list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactQuery {
    pub rule: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Parameters for `contact/export`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactExport {
    pub file_format: Option<ExportFileFormat>,
    pub rule: Option<String>,
    pub emails: Option<Vec<String>>,
    pub compression_format: Option<CompressionFormat>,
    pub file_name: Option<String>,
}

/// Parameters for `contact/upload`; the file itself is passed separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactUpload {
    pub list_name: Option<String>,
    pub status: Option<ContactStatus>,
    pub encoding_name: Option<String>,
    pub file_url: Option<String>,
    pub consent_date: Option<NaiveDateTime>,
}

/// Where an export can be fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLink {
    pub link: String,
    #[serde(rename = "publicexportid")]
    pub public_export_id: String,
}
