//! Store client with fluent query and delete builders.
//!
//! The hosted store speaks REST over its tables: reads are
//! `GET {base}/rest/v1/{table}?select=...&order=...`, deletes are
//! `DELETE {base}/rest/v1/{table}?{column}=eq.{value}`. Every request carries
//! the `apikey` header and, when a token was resolved, a bearer credential.

use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};
use crate::token::{STORE_TOKEN_TEMPLATE, TokenProvider};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub anon_key: String,
    /// Identity provider token endpoint; empty disables token acquisition.
    pub token_url: String,
}

impl StoreConfig {
    pub const ENV_BASE_URL: &str = "DEVPORTAL_STORE_URL";
    pub const ENV_ANON_KEY: &str = "DEVPORTAL_STORE_ANON_KEY";
    pub const ENV_TOKEN_URL: &str = "DEVPORTAL_TOKEN_URL";

    /// Read configuration from the environment.
    pub fn from_env() -> StoreResult<Self> {
        let base_url = std::env::var(Self::ENV_BASE_URL)
            .map_err(|_| StoreError::Config(format!("{} is not set", Self::ENV_BASE_URL)))?;
        let anon_key = std::env::var(Self::ENV_ANON_KEY)
            .map_err(|_| StoreError::Config(format!("{} is not set", Self::ENV_ANON_KEY)))?;
        let token_url = std::env::var(Self::ENV_TOKEN_URL).unwrap_or_default();
        Ok(Self {
            base_url,
            anon_key,
            token_url,
        })
    }
}

/// Sort direction for `SelectBuilder::order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    /// Descending, with null values sorted last.
    Descending,
}

/// REST client for the hosted store.
pub struct Client {
    base_url: String,
    anon_key: String,
    bearer: Option<String>,
    http: reqwest::Client,
}

impl Client {
    /// Construct a client with an already-resolved bearer token (or none).
    pub fn new(config: StoreConfig, bearer: Option<String>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
            bearer,
            http: reqwest::Client::new(),
        }
    }

    /// Resolve a scoped token and construct a client.
    ///
    /// A failed or absent token yields an anonymous client; the store's row
    /// policies are then the only guard.
    pub async fn connect<P: TokenProvider>(config: StoreConfig, identity: &P) -> Self {
        let bearer = if config.token_url.is_empty() {
            None
        } else {
            identity.access_token(STORE_TOKEN_TEMPLATE).await
        };
        if bearer.is_none() {
            tracing::warn!("proceeding without access token (anonymous store client)");
        }
        Self::new(config, bearer)
    }

    pub fn has_token(&self) -> bool {
        self.bearer.is_some()
    }

    /// Start a request against one table.
    pub fn from(&self, table: &str) -> QueryBuilder<'_> {
        QueryBuilder {
            client: self,
            table: table.to_string(),
        }
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        format!("{}/rest/v1/{}?{}", self.base_url, table, query)
    }

    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("apikey", &self.anon_key);
        match &self.bearer {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Table-scoped entry point of the fluent builder.
pub struct QueryBuilder<'a> {
    client: &'a Client,
    table: String,
}

impl<'a> QueryBuilder<'a> {
    pub fn select(self, columns: &str) -> SelectBuilder<'a> {
        SelectBuilder {
            client: self.client,
            table: self.table,
            columns: columns.to_string(),
            order: None,
        }
    }

    pub fn delete(self) -> DeleteBuilder<'a> {
        DeleteBuilder {
            client: self.client,
            table: self.table,
            filters: Vec::new(),
        }
    }
}

/// Read query over one table with a fixed projection.
pub struct SelectBuilder<'a> {
    client: &'a Client,
    table: String,
    columns: String,
    order: Option<(String, Order)>,
}

impl SelectBuilder<'_> {
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    fn query_string(&self) -> String {
        let mut query = format!("select={}", self.columns);
        if let Some((column, order)) = &self.order {
            let direction = match order {
                Order::Ascending => "asc",
                Order::Descending => "desc.nullslast",
            };
            query.push_str(&format!("&order={column}.{direction}"));
        }
        query
    }

    /// Execute the query and decode the rows.
    pub async fn fetch<T: DeserializeOwned>(self) -> StoreResult<Vec<T>> {
        let url = self.client.table_url(&self.table, &self.query_string());
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .apply_headers(self.client.http.get(&url))
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(status.as_u16(), body));
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))
    }
}

/// Delete over one table, narrowed by equality filters.
pub struct DeleteBuilder<'a> {
    client: &'a Client,
    table: String,
    filters: Vec<(String, String)>,
}

impl DeleteBuilder<'_> {
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    fn query_string(&self) -> String {
        self.filters
            .iter()
            .map(|(column, value)| format!("{column}=eq.{value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Execute the delete.
    pub async fn execute(self) -> StoreResult<()> {
        let url = self.client.table_url(&self.table, &self.query_string());
        tracing::debug!("DELETE {}", url);
        let response = self
            .client
            .apply_headers(self.client.http.delete(&url))
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(status.as_u16(), body));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(bearer: Option<&str>) -> Client {
        Client::new(
            StoreConfig {
                base_url: "https://store.example.com/".to_string(),
                anon_key: "anon-key".to_string(),
                token_url: String::new(),
            },
            bearer.map(str::to_string),
        )
    }

    #[test]
    fn select_renders_projection_and_order() {
        let client = test_client(None);
        let builder = client
            .from("api_products")
            .select("id,name")
            .order("created_at", Order::Descending);
        assert_eq!(
            builder.query_string(),
            "select=id,name&order=created_at.desc.nullslast"
        );
    }

    #[test]
    fn ascending_order_has_no_null_clause() {
        let client = test_client(None);
        let builder = client
            .from("api_products")
            .select("id")
            .order("name", Order::Ascending);
        assert_eq!(builder.query_string(), "select=id&order=name.asc");
    }

    #[test]
    fn select_without_order_is_projection_only() {
        let client = test_client(None);
        let builder = client.from("api_products").select("id,name");
        assert_eq!(builder.query_string(), "select=id,name");
    }

    #[test]
    fn delete_renders_equality_filter() {
        let client = test_client(None);
        let builder = client.from("api_products").delete().eq("id", "p-42");
        assert_eq!(builder.query_string(), "id=eq.p-42");
    }

    #[test]
    fn table_url_joins_base_and_query() {
        let client = test_client(None);
        assert_eq!(
            client.table_url("api_products", "select=id"),
            "https://store.example.com/rest/v1/api_products?select=id"
        );
    }

    #[test]
    fn bearer_presence_is_observable() {
        assert!(!test_client(None).has_token());
        assert!(test_client(Some("jwt")).has_token());
    }
}
