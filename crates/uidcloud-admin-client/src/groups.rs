use reqwest::header::LOCATION;
use reqwest::{Method, Response, StatusCode};

use crate::client::append_params;
use crate::error::{ClientError, Result};
use crate::types::{CreateGroupOptions, GroupQuery, GroupRepresentation};
use crate::AdminClient;

impl AdminClient {
    /// Lists the groups of a realm, filtered by `query`. Succeeds only on
    /// HTTP 200; the body is returned as parsed by the server, untouched.
    pub async fn find_groups(
        &self,
        realm: &str,
        query: &GroupQuery,
    ) -> Result<Vec<GroupRepresentation>> {
        let mut url = format!("{}/admin/realms/{realm}/groups", self.base_url());
        append_params(&mut url, query.to_params());
        let response = self.send(Method::GET, &url, None).await?;
        let response = Self::expect_status(response, StatusCode::OK).await?;
        Self::read_json(response).await
    }

    /// Fetches one group by its server-assigned id. Succeeds only on HTTP 200.
    pub async fn find_group(&self, realm: &str, group_id: &str) -> Result<GroupRepresentation> {
        let url = format!("{}/admin/realms/{realm}/groups/{group_id}", self.base_url());
        let response = self.send(Method::GET, &url, None).await?;
        let response = Self::expect_status(response, StatusCode::OK).await?;
        Self::read_json(response).await
    }

    /// Creates a group, top-level or under `options.parent_id`, and returns
    /// the created group fetched back by id.
    ///
    /// The create endpoint answers 201 with an empty body; the only handle
    /// to the new group is its id in the `Location` header. The follow-up
    /// [`find_group`](AdminClient::find_group) is therefore part of the
    /// operation: creation does not resolve unless that fetch succeeds.
    pub async fn create_group(
        &self,
        realm: &str,
        group: &GroupRepresentation,
        options: &CreateGroupOptions,
    ) -> Result<GroupRepresentation> {
        let url = match &options.parent_id {
            Some(parent_id) => format!(
                "{}/admin/realms/{realm}/groups/{parent_id}/children",
                self.base_url()
            ),
            None => format!("{}/admin/realms/{realm}/groups", self.base_url()),
        };
        let payload = serde_json::to_value(group)?;
        let response = self.send(Method::POST, &url, Some(&payload)).await?;
        let response = Self::expect_status(response, StatusCode::CREATED).await?;
        let group_id = location_id(&response)?;
        self.find_group(realm, &group_id).await
    }

    /// Deletes a group. Succeeds only on HTTP 204.
    pub async fn remove_group(&self, realm: &str, group_id: &str) -> Result<()> {
        let url = format!("{}/admin/realms/{realm}/groups/{group_id}", self.base_url());
        let response = self.send(Method::DELETE, &url, None).await?;
        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

fn location_id(response: &Response) -> Result<String> {
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ClientError::MissingLocation)?;
    id_from_location(location)
}

/// The new group's id is the trailing path segment of the Location value,
/// e.g. `.../groups/499b7073-fe1f-4b7a-a8ab-f401d9b6b8ec`.
fn id_from_location(location: &str) -> Result<String> {
    match location.rsplit('/').next() {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ClientError::MissingLocation),
    }
}
