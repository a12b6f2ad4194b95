use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum SurveyStatus {
    Deleted,
    Expired,
    Active,
    Draft,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Survey {
    #[serde(rename = "publicsurveyid")]
    pub public_survey_id: String,
    pub name: String,
    pub status: Option<SurveyStatus>,
    #[serde(rename = "datecreated")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(rename = "dateupdated")]
    pub date_updated: Option<NaiveDateTime>,
    #[serde(rename = "expirydate")]
    pub expiry_date: Option<NaiveDateTime>,
    #[serde(rename = "resultcount")]
    pub result_count: i64,
    pub link: Option<String>,
}

/// Aggregated answers for a survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyResultsSummary {
    pub answers: BTreeMap<String, i64>,
    #[serde(rename = "dailycount")]
    pub daily_count: BTreeMap<String, i64>,
    pub status: Option<SurveyStatus>,
}
