use crate::models::{Account, Profile, ProfileUpdate, SubAccount, SubAccountRequest};
use crate::params::ParameterMap;
use crate::{Client, Result};

/// `account/*` endpoints, obtained with [`Client::account`].
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi { client: self }
    }
}

impl AccountApi<'_> {
    /// Load the account the API key belongs to.
    pub async fn load(&self) -> Result<Account> {
        self.client.request("account/load", ParameterMap::new()).await
    }

    /// Load the account's contact details.
    pub async fn profile_overview(&self) -> Result<Profile> {
        self.client
            .request("account/profileoverview", ParameterMap::new())
            .await
    }

    /// Change the account's contact details. Unset fields are left as they are.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let params = ParameterMap::new()
            .opt("firstName", update.first_name.as_deref())
            .opt("lastName", update.last_name.as_deref())
            .opt("company", update.company.as_deref())
            .opt("address1", update.address1.as_deref())
            .opt("address2", update.address2.as_deref())
            .opt("city", update.city.as_deref())
            .opt("state", update.state.as_deref())
            .opt("zip", update.zip.as_deref())
            .opt("countryID", update.country_id)
            .opt("phone", update.phone.as_deref())
            .opt("website", update.website.as_deref());
        self.client.request("account/updateprofile", params).await
    }

    /// Create a sub-account and return its API key.
    pub async fn add_sub_account(&self, request: &SubAccountRequest) -> Result<String> {
        let params = ParameterMap::new()
            .param("email", &request.email)
            .param("password", &request.password)
            .param("confirmPassword", &request.password)
            .opt("requiresEmailCredits", request.requires_email_credits)
            .opt("dailySendLimit", request.daily_send_limit)
            .opt("enableContactFeatures", request.enable_contact_features)
            .opt("poolName", request.pool_name.as_deref());
        self.client.request("account/addsubaccount", params).await
    }

    pub async fn delete_sub_account(&self, sub_account_email: &str) -> Result<()> {
        let params = ParameterMap::new().param("subAccountEmail", sub_account_email);
        self.client.request("account/deletesubaccount", params).await
    }

    /// List sub-accounts, optionally paged.
    pub async fn sub_accounts(
        &self,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Vec<SubAccount>> {
        let params = ParameterMap::new()
            .opt("limit", limit)
            .opt("offset", offset);
        self.client.request("account/getsubaccountlist", params).await
    }
}
