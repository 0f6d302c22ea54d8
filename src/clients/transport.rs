//! The transport seam between the API wrappers and the network.
//!
//! [`Transport`] is the only thing [`Api`](crate::api::Api) needs from an HTTP
//! client: implementors send a fully built [`HttpRequest`] and hand back the
//! [`HttpResponse`]. The verb helpers (`get`, `head`, `post`, …) are provided
//! in terms of [`Transport::request`].
//!
//! [`HttpClient`](crate::clients::HttpClient) is the production implementation.
//! Tests can supply an in-memory implementation that records requests.

use serde_json::Value;

use crate::clients::{
    DataType, Headers, HttpError, HttpMethod, HttpRequest, HttpResponse, Params,
};

/// Sends HTTP requests on behalf of the API wrappers.
///
/// Implementations are responsible for connection handling, credentials,
/// retries and mapping non-2xx responses to [`HttpError`]. Callers treat the
/// transport as externally synchronized; no locking is done on their side.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid requests, network failures and
    /// non-successful responses.
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Sends a GET request with `query` as query parameters.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    async fn get(
        &self,
        path: &str,
        query: Params,
        headers: Option<Headers>,
    ) -> Result<HttpResponse, HttpError> {
        let request = build(HttpMethod::Get, path, None, Some(query), headers)?;
        self.request(request).await
    }

    /// Sends a HEAD request with `query` as query parameters.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    async fn head(
        &self,
        path: &str,
        query: Params,
        headers: Option<Headers>,
    ) -> Result<HttpResponse, HttpError> {
        let request = build(HttpMethod::Head, path, None, Some(query), headers)?;
        self.request(request).await
    }

    /// Sends a POST request with the given body.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    async fn post(
        &self,
        path: &str,
        body: Value,
        body_type: DataType,
        headers: Option<Headers>,
    ) -> Result<HttpResponse, HttpError> {
        let request = build(HttpMethod::Post, path, Some((body, body_type)), None, headers)?;
        self.request(request).await
    }

    /// Sends a PATCH request with the given body.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    async fn patch(
        &self,
        path: &str,
        body: Value,
        body_type: DataType,
        headers: Option<Headers>,
    ) -> Result<HttpResponse, HttpError> {
        let request = build(HttpMethod::Patch, path, Some((body, body_type)), None, headers)?;
        self.request(request).await
    }

    /// Sends a PUT request with the given body.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    async fn put(
        &self,
        path: &str,
        body: Value,
        body_type: DataType,
        headers: Option<Headers>,
    ) -> Result<HttpResponse, HttpError> {
        let request = build(HttpMethod::Put, path, Some((body, body_type)), None, headers)?;
        self.request(request).await
    }

    /// Sends a DELETE request with the given body.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    async fn delete(
        &self,
        path: &str,
        body: Value,
        body_type: DataType,
        headers: Option<Headers>,
    ) -> Result<HttpResponse, HttpError> {
        let request = build(HttpMethod::Delete, path, Some((body, body_type)), None, headers)?;
        self.request(request).await
    }
}

impl<T: Transport> Transport for &T {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(request).await
    }
}

fn build(
    method: HttpMethod,
    path: &str,
    body: Option<(Value, DataType)>,
    query: Option<Params>,
    headers: Option<Headers>,
) -> Result<HttpRequest, HttpError> {
    let mut builder = HttpRequest::builder(method, path);

    if let Some((body, body_type)) = body {
        builder = builder.body(body).body_type(body_type);
    }
    if let Some(query) = query {
        builder = builder.query(query);
    }
    if let Some(headers) = headers {
        builder = builder.extra_headers(headers);
    }

    builder.build().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<HttpRequest>>,
    }

    impl Transport for Recorder {
        async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.sent.lock().unwrap().push(request);
            Ok(HttpResponse::new(200, HashMap::new(), "{}"))
        }
    }

    #[test]
    fn test_verb_helpers_build_expected_requests() {
        let recorder = Recorder::default();
        let mut query = Params::new();
        query.insert("fields".to_string(), json!("name"));

        tokio_test::block_on(async {
            recorder.get("boards/1", query, None).await.unwrap();
            recorder.head("boards/1", Params::new(), None).await.unwrap();
            recorder
                .post("boards", json!({"name": "x"}), DataType::Form, None)
                .await
                .unwrap();
            recorder
                .delete("boards/1", json!({}), DataType::Form, None)
                .await
                .unwrap();
        });

        let sent = recorder.sent.lock().unwrap();
        let methods: Vec<HttpMethod> = sent.iter().map(|r| r.http_method).collect();
        assert_eq!(
            methods,
            vec![
                HttpMethod::Get,
                HttpMethod::Head,
                HttpMethod::Post,
                HttpMethod::Delete
            ]
        );
        assert_eq!(sent[0].query.as_ref().unwrap()["fields"], json!("name"));
        assert!(sent[1].query.is_none());
        assert_eq!(sent[2].body_type, Some(DataType::Form));
    }

    #[test]
    fn test_invalid_body_is_rejected_before_sending() {
        let recorder = Recorder::default();

        let result = tokio_test::block_on(recorder.put(
            "cards/1",
            json!("not a map"),
            DataType::Form,
            None,
        ));

        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
        assert!(recorder.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_reference_forwards_to_transport() {
        let recorder = Recorder::default();
        let by_ref = &recorder;

        tokio_test::block_on(by_ref.get("members/me", Params::new(), None)).unwrap();

        assert_eq!(recorder.sent.lock().unwrap().len(), 1);
    }
}
