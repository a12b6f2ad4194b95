use crate::models::{Survey, SurveyResultsSummary};
use crate::params::ParameterMap;
use crate::{Client, Result};

/// `survey/*` endpoints, obtained with [`Client::survey`].
#[derive(Debug, Clone, Copy)]
pub struct SurveyApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn survey(&self) -> SurveyApi<'_> {
        SurveyApi { client: self }
    }
}

impl SurveyApi<'_> {
    pub async fn list(&self) -> Result<Vec<Survey>> {
        self.client.request("survey/list", ParameterMap::new()).await
    }

    pub async fn delete(&self, public_survey_id: &str) -> Result<()> {
        let params = ParameterMap::new().param("publicSurveyID", public_survey_id);
        self.client.request("survey/delete", params).await
    }

    /// Aggregated answers collected by a survey.
    pub async fn load_results(&self, public_survey_id: &str) -> Result<SurveyResultsSummary> {
        let params = ParameterMap::new().param("publicSurveyID", public_survey_id);
        self.client.request("survey/loadresults", params).await
    }
}
