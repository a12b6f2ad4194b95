//! Per-resource endpoint groups.
//!
//! Each group is a cheap borrowed handle obtained from a [`Client`](crate::Client)
//! accessor such as [`Client::contact`](crate::Client::contact). Handles only
//! build parameter maps and delegate to the client's transport.

mod account;
mod attachment;
mod campaign;
mod contact;
mod email;
mod file;
mod list;
mod log;
mod segment;
mod sms;
mod survey;
mod template;

pub use account::AccountApi;
pub use attachment::AttachmentApi;
pub use campaign::CampaignApi;
pub use contact::ContactApi;
pub use email::EmailApi;
pub use file::FileApi;
pub use list::ListApi;
pub use log::LogApi;
pub use segment::SegmentApi;
pub use sms::SmsApi;
pub use survey::SurveyApi;
pub use template::TemplateApi;
