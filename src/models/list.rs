use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A static contact list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    #[serde(rename = "listid")]
    pub list_id: i32,
    #[serde(rename = "publiclistid")]
    pub public_list_id: String,
    #[serde(rename = "listname")]
    pub list_name: String,
    pub count: i64,
    #[serde(rename = "dateadded")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(rename = "allowunsubscribe")]
    pub allow_unsubscribe: bool,
    pub rule: Option<String>,
}

/// Parameters for `list/add`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewList {
    pub list_name: String,
    pub create_empty_list: Option<bool>,
    pub allow_unsubscribe: Option<bool>,
    pub rule: Option<String>,
    pub emails: Option<Vec<String>>,
    pub all_contacts: Option<bool>,
}
