use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A dynamic group of contacts defined by a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    #[serde(rename = "segmentid")]
    pub segment_id: i32,
    pub name: String,
    pub rule: String,
    #[serde(rename = "lastcount")]
    pub last_count: i64,
    pub history: Vec<SegmentHistory>,
}

/// Daily snapshot of a segment's size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentHistory {
    pub day: Option<NaiveDateTime>,
    pub count: i64,
    #[serde(rename = "engagedcount")]
    pub engaged_count: i64,
    #[serde(rename = "activecount")]
    pub active_count: i64,
    #[serde(rename = "bouncedcount")]
    pub bounced_count: i64,
    #[serde(rename = "unsubscribedcount")]
    pub unsubscribed_count: i64,
}
