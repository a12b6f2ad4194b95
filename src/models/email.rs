use crate::models::LogJobStatus;
use crate::params::enum_param;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content transfer encoding for message bodies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum EncodingType {
    UserProvided,
    None,
    Raw7bit,
    Raw8bit,
    QuotedPrintable,
    Base64,
    Uue,
}

enum_param!(EncodingType);

/// A message for `email/send`.
///
/// `msg_to`, `msg_cc` and `msg_bcc` are sent one entry per address; `to`,
/// `lists`, `segments` and `attachments` are comma-joined. `merge` and
/// `headers` expand to `merge_<key>` and `headers_<key>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailMessage {
    pub subject: Option<String>,
    pub from: Option<String>,
    pub from_name: Option<String>,
    pub sender: Option<String>,
    pub reply_to: Option<String>,
    pub to: Option<Vec<String>>,
    pub msg_to: Option<Vec<String>>,
    pub msg_cc: Option<Vec<String>>,
    pub msg_bcc: Option<Vec<String>>,
    pub lists: Option<Vec<String>>,
    pub segments: Option<Vec<String>>,
    pub channel: Option<String>,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    pub charset: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub template: Option<String>,
    pub attachments: Option<Vec<String>>,
    pub merge: Option<BTreeMap<String, String>>,
    pub headers: Option<BTreeMap<String, String>>,
    pub pool_name: Option<String>,
    pub is_transactional: Option<bool>,
    pub track_opens: Option<bool>,
    pub track_clicks: Option<bool>,
}

/// Identifiers assigned to a send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSend {
    #[serde(rename = "transactionid")]
    pub transaction_id: String,
    #[serde(rename = "messageid")]
    pub message_id: String,
}

/// Delivery state of one message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailStatus {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub status: Option<LogJobStatus>,
    #[serde(rename = "statusname")]
    pub status_name: Option<String>,
    #[serde(rename = "errormessage")]
    pub error_message: Option<String>,
    #[serde(rename = "dateopened")]
    pub date_opened: Option<NaiveDateTime>,
    #[serde(rename = "dateclicked")]
    pub date_clicked: Option<NaiveDateTime>,
    #[serde(rename = "transactionid")]
    pub transaction_id: Option<String>,
}

/// Rendered content of a sent message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailView {
    pub body: String,
    pub subject: String,
    pub from: String,
}
