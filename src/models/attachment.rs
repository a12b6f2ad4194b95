use serde::{Deserialize, Serialize};

/// An attachment stored for use in outgoing messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(rename = "filename")]
    pub file_name: String,
    pub id: String,
    pub size: i64,
    #[serde(rename = "contenttype")]
    pub content_type: Option<String>,
}
