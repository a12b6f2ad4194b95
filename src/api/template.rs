use crate::models::{NewTemplate, Template, TemplateList, TemplateQuery, TemplateUpdate};
use crate::params::ParameterMap;
use crate::{Client, Result};

/// `template/*` endpoints, obtained with [`Client::template`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn template(&self) -> TemplateApi<'_> {
        TemplateApi { client: self }
    }
}

impl TemplateApi<'_> {
    /// Create a template and return its ID.
    pub async fn add(&self, template: &NewTemplate) -> Result<i32> {
        let params = ParameterMap::new()
            .param("name", &template.name)
            .param("subject", &template.subject)
            .param("fromEmail", &template.from_email)
            .param("fromName", &template.from_name)
            .opt("templateType", template.template_type)
            .opt("templateScope", template.template_scope)
            .opt("bodyHtml", template.body_html.as_deref())
            .opt("bodyText", template.body_text.as_deref())
            .opt("css", template.css.as_deref())
            .opt("originalTemplateID", template.original_template_id)
            .repeated("tags", template.tags.as_deref());
        self.client.request("template/add", params).await
    }

    /// Copy a template under a new name.
    pub async fn copy(&self, template_id: i32, name: &str) -> Result<Template> {
        let params = ParameterMap::new()
            .param("templateID", template_id)
            .param("name", name);
        self.client.request("template/copy", params).await
    }

    pub async fn delete(&self, template_id: i32) -> Result<()> {
        let params = ParameterMap::new().param("templateID", template_id);
        self.client.request("template/delete", params).await
    }

    pub async fn load(&self, template_id: i32) -> Result<Template> {
        let params = ParameterMap::new().param("templateID", template_id);
        self.client.request("template/loadtemplate", params).await
    }

    pub async fn list(&self, query: &TemplateQuery) -> Result<TemplateList> {
        let params = ParameterMap::new()
            .joined("templateScopes", query.scope.as_deref())
            .joined("templateTypes", query.template_types.as_deref())
            .opt("search", query.search.as_deref())
            .repeated("tags", query.tags.as_deref())
            .opt("limit", query.limit)
            .opt("offset", query.offset);
        self.client.request("template/getlist", params).await
    }

    /// Change a template. Unset fields are left as they are.
    pub async fn update(&self, template_id: i32, update: &TemplateUpdate) -> Result<()> {
        let params = ParameterMap::new()
            .param("templateID", template_id)
            .opt("name", update.name.as_deref())
            .opt("subject", update.subject.as_deref())
            .opt("fromEmail", update.from_email.as_deref())
            .opt("fromName", update.from_name.as_deref())
            .opt("templateScope", update.template_scope)
            .opt("bodyHtml", update.body_html.as_deref())
            .opt("bodyText", update.body_text.as_deref())
            .opt("css", update.css.as_deref())
            .opt("removeScreenshot", update.remove_screenshot);
        self.client.request("template/update", params).await
    }
}
