use crate::models::{List, NewList};
use crate::params::ParameterMap;
use crate::{Client, Result};

/// `list/*` endpoints, obtained with [`Client::list`].
#[derive(Debug, Clone, Copy)]
pub struct ListApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn list(&self) -> ListApi<'_> {
        ListApi { client: self }
    }
}

impl ListApi<'_> {
    /// Create a list and return its ID.
    pub async fn add(&self, list: &NewList) -> Result<i32> {
        let params = ParameterMap::new()
            .param("listName", &list.list_name)
            .opt("createEmptyList", list.create_empty_list)
            .opt("allowUnsubscribe", list.allow_unsubscribe)
            .opt("rule", list.rule.as_deref())
            .joined("emails", list.emails.as_deref())
            .opt("allContacts", list.all_contacts);
        self.client.request("list/add", params).await
    }

    pub async fn delete(&self, list_name: &str) -> Result<()> {
        let params = ParameterMap::new().param("listName", list_name);
        self.client.request("list/delete", params).await
    }

    pub async fn list(&self) -> Result<Vec<List>> {
        self.client.request("list/list", ParameterMap::new()).await
    }

    pub async fn load(&self, list_name: &str) -> Result<List> {
        let params = ParameterMap::new().param("listName", list_name);
        self.client.request("list/load", params).await
    }

    /// Add existing contacts to a list.
    pub async fn add_contacts(&self, list_name: &str, emails: &[String]) -> Result<()> {
        let params = ParameterMap::new()
            .param("listName", list_name)
            .joined("emails", Some(emails));
        self.client.request("list/addcontacts", params).await
    }

    /// Remove contacts from a list without deleting them.
    pub async fn remove_contacts(&self, list_name: &str, emails: &[String]) -> Result<()> {
        let params = ParameterMap::new()
            .param("listName", list_name)
            .joined("emails", Some(emails));
        self.client.request("list/removecontacts", params).await
    }

    /// Rename a list or change its unsubscribe setting.
    pub async fn update(
        &self,
        list_name: &str,
        new_list_name: Option<&str>,
        allow_unsubscribe: Option<bool>,
    ) -> Result<()> {
        let params = ParameterMap::new()
            .param("listName", list_name)
            .opt("newListName", new_list_name)
            .opt("allowUnsubscribe", allow_unsubscribe);
        self.client.request("list/update", params).await
    }
}
