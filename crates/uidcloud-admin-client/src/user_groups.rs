use reqwest::{Method, StatusCode};

use crate::error::Result;
use crate::types::GroupRepresentation;
use crate::AdminClient;

impl AdminClient {
    /// Lists the groups a user belongs to. Succeeds only on HTTP 200.
    pub async fn find_user_groups(
        &self,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<GroupRepresentation>> {
        let url = format!(
            "{}/admin/realms/{realm}/users/{user_id}/groups",
            self.base_url()
        );
        let response = self.send(Method::GET, &url, None).await?;
        let response = Self::expect_status(response, StatusCode::OK).await?;
        Self::read_json(response).await
    }

    /// Puts a user into a group. Empty request body; succeeds only on 204.
    pub async fn add_user_to_group(
        &self,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/admin/realms/{realm}/users/{user_id}/groups/{group_id}",
            self.base_url()
        );
        let response = self.send(Method::PUT, &url, None).await?;
        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// Removes a user from a group. Succeeds only on 204.
    pub async fn remove_user_from_group(
        &self,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/admin/realms/{realm}/users/{user_id}/groups/{group_id}",
            self.base_url()
        );
        let response = self.send(Method::DELETE, &url, None).await?;
        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn find_user_groups_returns_membership_list() {
        let mut server = Server::new_async().await;
        let body = json!([
            {"id": "g-1", "name": "admins", "path": "/admins"},
            {"id": "g-2", "name": "ops", "path": "/ops"}
        ]);
        let mock = server
            .mock("GET", "/admin/realms/master/users/u-1/groups")
            .match_header("authorization", "Bearer token")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = AdminClient::new(server.url(), "token");
        let groups = client
            .find_user_groups("master", "u-1")
            .await
            .expect("find user groups");

        mock.assert_async().await;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name.as_deref(), Some("ops"));
    }

    #[tokio::test]
    async fn add_user_to_group_resolves_on_204() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/admin/realms/master/users/u1/groups/g1")
            .match_header("authorization", "Bearer token")
            .with_status(204)
            .create_async()
            .await;

        let client = AdminClient::new(server.url(), "token");
        client
            .add_user_to_group("master", "u1", "g1")
            .await
            .expect("add user to group");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn add_user_to_group_rejects_even_successful_non_204() {
        let mut server = Server::new_async().await;
        server
            .mock("PUT", "/admin/realms/master/users/u1/groups/g1")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let client = AdminClient::new(server.url(), "token");
        let err = client
            .add_user_to_group("master", "u1", "g1")
            .await
            .expect_err("should reject");

        match err {
            ClientError::UnexpectedStatus { status, body } => {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body, "ok");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn remove_user_from_group_rejects_with_error_body() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/admin/realms/master/users/u1/groups/missing")
            .with_status(404)
            .with_body("{\"error\":\"Group not found\"}")
            .create_async()
            .await;

        let client = AdminClient::new(server.url(), "token");
        let err = client
            .remove_user_from_group("master", "u1", "missing")
            .await
            .expect_err("should reject");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn remove_user_from_group_resolves_on_204() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/admin/realms/master/users/u1/groups/g1")
            .with_status(204)
            .create_async()
            .await;

        let client = AdminClient::new(server.url(), "token");
        client
            .remove_user_from_group("master", "u1", "g1")
            .await
            .expect("remove user from group");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn transport_errors_propagate_unchanged() {
        // Port 1 on localhost refuses connections.
        let client = AdminClient::new("http://127.0.0.1:1", "token");
        let err = client
            .find_user_groups("master", "u-1")
            .await
            .expect_err("should fail to connect");
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
