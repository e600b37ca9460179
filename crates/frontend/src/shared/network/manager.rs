use super::endpoints::{Endpoint, Method};
use super::error::ApiError;
use crate::shared::api_utils::{api_url, auth_header};
use contracts::shared::envelope::is_failure;
use contracts::shared::list_query::ListQuery;
use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// One call against an [`Endpoint`].
///
/// ```ignore
/// let body = NetworkManager::new(api::FARMER_LIST_GET)
///     .with_id(&list_id)
///     .call()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct NetworkManager {
    endpoint: Endpoint,
    path_params: Vec<(String, String)>,
}

/// Substitute `:name` path segments; values are percent-encoded
pub fn resolve_path(path: &str, params: &[(String, String)]) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => params
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| urlencoding::encode(v).into_owned())
                .unwrap_or_else(|| segment.to_string()),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    };
    with_auth(builder)
}

pub(super) fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

impl NetworkManager {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            path_params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.path_params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_param("id", id)
    }

    pub fn url(&self, params: Option<&ListQuery>) -> String {
        let path = resolve_path(self.endpoint.path, &self.path_params);
        let query = params.map(ListQuery::to_query_string).unwrap_or_default();
        if query.is_empty() {
            api_url(&path)
        } else {
            format!("{}?{}", api_url(&path), query)
        }
    }

    /// Send the request and return the raw JSON body.
    ///
    /// Non-2xx responses and 2xx bodies carrying an explicit failure flag
    /// become errors; every other body is returned as is for the caller to
    /// probe.
    pub async fn request<B: Serialize>(
        &self,
        body: Option<&B>,
        params: Option<&ListQuery>,
    ) -> Result<Value, ApiError> {
        let url = self.url(params);
        log::debug!("{:?} {}", self.endpoint.method, url);

        let builder = builder(self.endpoint.method, &url);
        let request = match body {
            Some(body) => builder.json(body)?,
            None => builder.build()?,
        };
        let response = request.send().await.map_err(|e| {
            log::warn!("{} failed: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let json = response.json::<Value>().await.ok();
        if !response.ok() {
            log::warn!("{} returned {}", url, status);
            return Err(ApiError::from_response(status, json.as_ref()));
        }

        let json = json.unwrap_or(Value::Null);
        if is_failure(&json) {
            log::warn!("{} rejected the request", url);
            return Err(ApiError::rejected(&json));
        }
        Ok(json)
    }

    /// GET-style call with list parameters
    pub async fn fetch(&self, params: &ListQuery) -> Result<Value, ApiError> {
        self.request::<()>(None, Some(params)).await
    }

    /// Call with a JSON body
    pub async fn send<B: Serialize>(&self, body: &B) -> Result<Value, ApiError> {
        self.request(Some(body), None).await
    }

    /// Call without body or parameters
    pub async fn call(&self) -> Result<Value, ApiError> {
        self.request::<()>(None, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let params = vec![("id".to_string(), "64b7f0c2".to_string())];
        assert_eq!(
            resolve_path("/api/agri-sales-orders/:id/accept", &params),
            "/api/agri-sales-orders/64b7f0c2/accept"
        );
        assert_eq!(resolve_path("/api/farmers", &params), "/api/farmers");
    }

    #[test]
    fn test_resolve_path_encodes_values() {
        let params = vec![("id".to_string(), "a b/c".to_string())];
        assert_eq!(resolve_path("/api/x/:id", &params), "/api/x/a%20b%2Fc");
    }
}
