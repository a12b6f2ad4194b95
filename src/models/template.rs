use crate::params::enum_param;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Editor a template was built with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum TemplateType {
    RawHTML,
    DragDropEditor,
    LandingPageEditor,
}

enum_param!(TemplateType);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum TemplateScope {
    Private,
    Public,
    Draft,
}

enum_param!(TemplateScope);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    #[serde(rename = "templateid")]
    pub template_id: i32,
    #[serde(rename = "templatetype")]
    pub template_type: Option<TemplateType>,
    #[serde(rename = "templatescope")]
    pub template_scope: Option<TemplateScope>,
    pub name: String,
    #[serde(rename = "dateadded")]
    pub date_added: Option<NaiveDateTime>,
    pub subject: Option<String>,
    #[serde(rename = "fromemail")]
    pub from_email: Option<String>,
    #[serde(rename = "fromname")]
    pub from_name: Option<String>,
    #[serde(rename = "bodyhtml")]
    pub body_html: Option<String>,
    #[serde(rename = "bodytext")]
    pub body_text: Option<String>,
    pub css: Option<String>,
    #[serde(rename = "originaltemplateid")]
    pub original_template_id: Option<i32>,
    pub tags: Vec<String>,
}

/// A page of templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateList {
    pub templates: Vec<Template>,
    #[serde(rename = "templatescount")]
    pub templates_count: i64,
    #[serde(rename = "drafttemplate")]
    pub draft_templates: Vec<Template>,
}

/// Parameters for `template/add`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTemplate {
    pub name: String,
    pub subject: String,
    pub from_email: String,
    pub from_name: String,
    pub template_type: Option<TemplateType>,
    pub template_scope: Option<TemplateScope>,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    pub css: Option<String>,
    pub original_template_id: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// Filters for `template/getlist`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateQuery {
    pub scope: Option<Vec<TemplateScope>>,
    pub template_types: Option<Vec<TemplateType>>,
    pub search: Option<String>,
    pub tags: Option<Vec<String>>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Fields to change with `template/update`; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub from_email: Option<String>,
    pub from_name: Option<String>,
    pub template_scope: Option<TemplateScope>,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    pub css: Option<String>,
    pub remove_screenshot: Option<bool>,
}
