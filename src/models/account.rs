use crate::params::enum_param;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum AccountStatus {
    Disabled,
    UnderReview,
    Abuse,
    Active,
    Cancelled,
}

enum_param!(AccountStatus);

/// The account the API key belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(rename = "publicaccountid")]
    pub public_account_id: String,
    #[serde(rename = "apikey")]
    pub api_key: String,
    pub email: String,
    pub status: Option<AccountStatus>,
    pub credit: f64,
    pub reputation: f64,
    #[serde(rename = "totalemailssent")]
    pub total_emails_sent: i64,
    #[serde(rename = "dailysendlimit")]
    pub daily_send_limit: i32,
    #[serde(rename = "issub")]
    pub is_sub: bool,
    #[serde(rename = "subaccountscount")]
    pub sub_accounts_count: i64,
    #[serde(rename = "datecreated")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(rename = "lastactivity")]
    pub last_activity: Option<NaiveDateTime>,
}

/// Contact details attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    #[serde(rename = "countryid")]
    pub country_id: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

/// Fields to change with `account/updateprofile`; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country_id: Option<i32>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// A sub-account managed by the current account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubAccount {
    #[serde(rename = "publicaccountid")]
    pub public_account_id: String,
    #[serde(rename = "apikey")]
    pub api_key: String,
    pub email: String,
    pub status: Option<AccountStatus>,
    #[serde(rename = "emailcredits")]
    pub email_credits: i64,
    #[serde(rename = "dailysendlimit")]
    pub daily_send_limit: i32,
    #[serde(rename = "lastactivity")]
    pub last_activity: Option<NaiveDateTime>,
}

/// Parameters for `account/addsubaccount`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubAccountRequest {
    pub email: String,
    pub password: String,
    pub requires_email_credits: Option<bool>,
    pub daily_send_limit: Option<i32>,
    pub enable_contact_features: Option<bool>,
    pub pool_name: Option<String>,
}
