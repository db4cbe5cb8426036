//! GraphQL client for the Monday.com v2 API.
//!
//! Wraps the small mutation surface the intake service needs (item
//! updates, file attachments, subitems, column values) over [`reqwest`].
//! Authentication is a bearer token supplied at construction; callers read
//! it from process configuration.

use serde_json::{json, Value};

/// Default API endpoint; overridable for tests.
pub const MONDAY_API_URL: &str = "https://api.monday.com/v2";

/// HTTP client for the Monday.com GraphQL API.
pub struct MondayClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

/// Errors from the Monday API layer. The raw error payload is kept
/// attached so soft-failure logs carry enough to debug.
#[derive(Debug, thiserror::Error)]
pub enum MondayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Monday returned a non-2xx status code.
    #[error("Monday API error ({status}): {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response was 2xx but carried a GraphQL `errors` array.
    #[error("Monday GraphQL error: {0}")]
    Graphql(Value),

    /// The response parsed but did not contain the expected field.
    #[error("Unexpected Monday response shape: missing {0}")]
    MalformedResponse(&'static str),
}

impl MondayClient {
    /// Create a client for the production endpoint.
    pub fn new(token: String) -> Self {
        Self::with_api_url(token, MONDAY_API_URL.to_string())
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_api_url(token: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            token,
        }
    }

    /// Create an update (a feed post) on an item. Returns the update id.
    pub async fn create_update(&self, item_id: &str, body: &str) -> Result<String, MondayError> {
        let query = "mutation ($itemId: ID!, $body: String!) { \
                     create_update (item_id: $itemId, body: $body) { id } }";
        let data = self
            .execute(query, json!({ "itemId": item_id, "body": body }))
            .await?;
        id_at(&data, "create_update")
    }

    /// Attach a file to an existing update via the multipart file endpoint.
    /// Returns the asset id.
    pub async fn add_file_to_update(
        &self,
        update_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, MondayError> {
        let query = "mutation ($updateId: ID!, $file: File!) { \
                     add_file_to_update (update_id: $updateId, file: $file) { id } }";
        let variables = json!({ "updateId": update_id });
        let map = json!({ "0": ["variables.file"] });

        let form = reqwest::multipart::Form::new()
            .text("query", query.to_string())
            .text("variables", variables.to_string())
            .text("map", map.to_string())
            .part(
                "0",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string()),
            );

        let response = self
            .client
            .post(format!("{}/file", self.api_url))
            .header("Authorization", &self.token)
            .multipart(form)
            .send()
            .await?;

        let data = Self::parse_graphql_response(response).await?;
        id_at(&data, "add_file_to_update")
    }

    /// Create a subitem under an item. The optional description is posted
    /// as the subitem's first update, since Monday's `create_subitem`
    /// mutation only takes a name. Returns the subitem id.
    pub async fn create_subitem(
        &self,
        parent_item_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<String, MondayError> {
        let query = "mutation ($parentItemId: ID!, $itemName: String!) { \
                     create_subitem (parent_item_id: $parentItemId, item_name: $itemName) { id } }";
        let data = self
            .execute(
                query,
                json!({ "parentItemId": parent_item_id, "itemName": title }),
            )
            .await?;
        let subitem_id = id_at(&data, "create_subitem")?;

        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            self.create_update(&subitem_id, description).await?;
        }
        Ok(subitem_id)
    }

    /// Set a column value on an item (simple text form). Last write wins;
    /// repeating the call with the same value is a no-op on the board.
    pub async fn change_column_value(
        &self,
        board_id: &str,
        item_id: &str,
        column_id: &str,
        value: &str,
    ) -> Result<(), MondayError> {
        let query = "mutation ($boardId: ID!, $itemId: ID!, $columnId: String!, $value: String!) { \
                     change_simple_column_value \
                     (board_id: $boardId, item_id: $itemId, column_id: $columnId, value: $value) { id } }";
        self.execute(
            query,
            json!({
                "boardId": board_id,
                "itemId": item_id,
                "columnId": column_id,
                "value": value,
            }),
        )
        .await?;
        Ok(())
    }

    /// POST a GraphQL document and return the `data` object.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, MondayError> {
        tracing::debug!(query, "Monday API request");
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", &self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        Self::parse_graphql_response(response).await
    }

    /// Shared response handling: non-2xx becomes [`MondayError::Http`],
    /// a GraphQL `errors` array becomes [`MondayError::Graphql`] with the
    /// raw payload attached.
    async fn parse_graphql_response(response: reqwest::Response) -> Result<Value, MondayError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Monday API returned non-success status");
            return Err(MondayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: Value =
            serde_json::from_str(&body).map_err(|_| MondayError::MalformedResponse("json body"))?;
        if let Some(errors) = parsed.get("errors") {
            if !errors.is_null() {
                return Err(MondayError::Graphql(errors.clone()));
            }
        }
        parsed
            .get("data")
            .cloned()
            .ok_or(MondayError::MalformedResponse("data"))
    }
}

/// Pull `data.{field}.id` out of a GraphQL response, tolerating both
/// string and numeric ids.
fn id_at(data: &Value, field: &'static str) -> Result<String, MondayError> {
    let id = data
        .get(field)
        .and_then(|v| v.get("id"))
        .ok_or(MondayError::MalformedResponse(field))?;
    match id {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(MondayError::MalformedResponse(field)),
    }
}
