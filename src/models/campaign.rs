use crate::params::enum_param;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum CampaignStatus {
    Deleted,
    Active,
    Processing,
    Sending,
    Completed,
    Paused,
    Cancelled,
    Draft,
}

enum_param!(CampaignStatus);

/// What starts a campaign.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum CampaignTriggerType {
    SendNow,
    FutureScheduled,
    OnAdd,
    OnOpen,
    OnClick,
}

enum_param!(CampaignTriggerType);

/// One message variant of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignTemplate {
    #[serde(rename = "templateid", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "fromemail", skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(rename = "fromname", skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(rename = "replytoemail", skip_serializing_if = "Option::is_none")]
    pub reply_to_email: Option<String>,
}

/// A campaign definition, sent to `campaign/add` and `campaign/update` as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    #[serde(rename = "channelid", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i32>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<i32>,
    #[serde(rename = "campaigntemplates")]
    pub templates: Vec<CampaignTemplate>,
    #[serde(rename = "triggertype", skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<CampaignTriggerType>,
    #[serde(rename = "triggerdate", skip_serializing_if = "Option::is_none")]
    pub trigger_date: Option<NaiveDateTime>,
    #[serde(rename = "triggerdelay", skip_serializing_if = "Option::is_none")]
    pub trigger_delay: Option<f64>,
}

/// Delivery statistics for a campaign or channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignChannel {
    #[serde(rename = "channelid")]
    pub channel_id: i32,
    pub name: String,
    #[serde(rename = "iscampaign")]
    pub is_campaign: bool,
    pub status: Option<CampaignStatus>,
    #[serde(rename = "lastactivity")]
    pub last_activity: Option<NaiveDateTime>,
    #[serde(rename = "recipientcount")]
    pub recipient_count: i64,
    #[serde(rename = "sentcount")]
    pub sent_count: i64,
    #[serde(rename = "deliveredcount")]
    pub delivered_count: i64,
    #[serde(rename = "openedcount")]
    pub opened_count: i64,
    #[serde(rename = "clickedcount")]
    pub clicked_count: i64,
    #[serde(rename = "bouncedcount")]
    pub bounced_count: i64,
    #[serde(rename = "unsubscribedcount")]
    pub unsubscribed_count: i64,
}

/// Filters for `campaign/list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignQuery {
    pub search: Option<String>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}
