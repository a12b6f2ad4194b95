use crate::params::enum_param;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Delivery state used by log filters and message status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum LogJobStatus {
    All,
    ReadyToSend,
    InProgress,
    Failed,
    Sent,
    Opened,
    Clicked,
    Unsubscribed,
    AbuseReport,
}

enum_param!(LogJobStatus);

/// One delivery attempt in the activity log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub to: String,
    #[serde(rename = "msgid")]
    pub message_id: Option<String>,
    #[serde(rename = "transactionid")]
    pub transaction_id: Option<String>,
    pub status: Option<String>,
    pub channel: Option<String>,
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "dateopened")]
    pub date_opened: Option<NaiveDateTime>,
    #[serde(rename = "dateclicked")]
    pub date_clicked: Option<NaiveDateTime>,
    pub message: Option<String>,
}

/// A page of the activity log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    pub status: Option<LogJobStatus>,
    pub recipients: Vec<Recipient>,
}

/// Filters for `log/load`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogQuery {
    pub statuses: Option<Vec<LogJobStatus>>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub channel_name: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    pub include_email: Option<bool>,
    pub include_sms: Option<bool>,
    pub email: Option<String>,
}

/// Filters for `log/summary`.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryQuery {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub channel_name: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogStatusSummary {
    pub recipients: i64,
    #[serde(rename = "emailtotal")]
    pub email_total: i64,
    #[serde(rename = "smstotal")]
    pub sms_total: i64,
    pub delivered: i64,
    pub bounced: i64,
    #[serde(rename = "inprogress")]
    pub in_progress: i64,
    pub opened: i64,
    pub clicked: i64,
    pub unsubscribed: i64,
    pub complaints: i64,
}

/// Totals returned by `log/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSummary {
    #[serde(rename = "logstatussummary")]
    pub log_status_summary: LogStatusSummary,
}
