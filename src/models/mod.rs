//! Data types exchanged with the Elastic Email API.
//!
//! Records are deserialization targets only. Every record tolerates missing
//! fields, since the service omits empty values.

mod account;
mod attachment;
mod campaign;
mod contact;
mod email;
mod file;
mod list;
mod log;
mod segment;
mod survey;
mod template;

pub use account::{Account, AccountStatus, Profile, ProfileUpdate, SubAccount, SubAccountRequest};
pub use attachment::Attachment;
pub use campaign::{
    Campaign, CampaignChannel, CampaignQuery, CampaignStatus, CampaignTemplate, CampaignTriggerType,
};
pub use contact::{
    CompressionFormat, Contact, ContactExport, ContactQuery, ContactSource, ContactStatus,
    ContactUpload, ExportFileFormat, ExportLink, NewContact,
};
pub use email::{EmailMessage, EmailSend, EmailStatus, EmailView, EncodingType};
pub use file::{FileInfo, FilePayload};
pub use list::{List, NewList};
pub use log::{Log, LogJobStatus, LogQuery, LogStatusSummary, LogSummary, Recipient, SummaryQuery};
pub use segment::{Segment, SegmentHistory};
pub use survey::{Survey, SurveyResultsSummary, SurveyStatus};
pub use template::{
    NewTemplate, Template, TemplateList, TemplateQuery, TemplateScope, TemplateType, TemplateUpdate,
};
