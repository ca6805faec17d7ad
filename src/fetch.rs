//! HTTP plumbing: client construction and the fetch of the remote value.

#[cfg(any(feature = "native-tls", feature = "rustls"))]
use crate::common::check_target_not_found_err;
use anyhow::{Context, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri};
use serde_json::Value;
#[cfg(any(feature = "native-tls", feature = "rustls"))]
use std::path::PathBuf;
use std::time::Duration;

/// The request header carrying the configured value.
pub const VALUE_HEADER: HeaderName = HeaderName::from_static("value");

/// A failure of the fetch operation.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent, or no response arrived.
    #[error("error requesting {endpoint}")]
    Request {
        endpoint: Uri,
        #[source]
        source: reqwest::Error,
    },
    /// The response body is not valid JSON.
    #[error("error decoding response body as JSON")]
    Decode(#[source] reqwest::Error),
}

/// The fixed request configuration sent to the endpoint.
///
/// Method and header set never vary; the endpoint and the header contents come from the runtime
/// config.
#[derive(Clone, Debug)]
pub struct RequestConfig {
    pub method: Method,
    pub endpoint: Uri,
    pub headers: HeaderMap,
}

impl RequestConfig {
    /// Build the request configuration: a GET carrying the value header.
    pub fn new(endpoint: Uri, value: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            VALUE_HEADER,
            HeaderValue::from_str(value)
                .with_context(|| format!("invalid contents for the value header: {:?}", value))?,
        );

        Ok(Self {
            method: Method::GET,
            endpoint,
            headers,
        })
    }
}

/// These options configure how inlay sets up its HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpClientOptions {
    /// Use this specific root certificate to validate the certificate chain. Optional.
    ///
    /// Useful when behind a corporate proxy that uses a self-signed root certificate.
    #[cfg(any(feature = "native-tls", feature = "rustls"))]
    pub root_certificate: Option<PathBuf>,
    /// Accept certificates that can't be verified when fetching the value. Defaults to false.
    ///
    /// **WARNING**: This is inherently unsafe and can open you up to Man-in-the-middle attacks. But sometimes it is required when working behind corporate proxies.
    #[cfg(any(feature = "native-tls", feature = "rustls"))]
    pub accept_invalid_certificates: bool,
    /// Give up on the request after this long. No timeout when unset.
    pub timeout: Option<Duration>,
}

/// Create the HTTP client used to fetch the value.
pub async fn get_http_client(options: &HttpClientOptions) -> Result<reqwest::Client> {
    let builder = reqwest::ClientBuilder::new();

    let builder = match options.timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };

    #[cfg(any(feature = "native-tls", feature = "rustls"))]
    let builder = {
        if options.accept_invalid_certificates {
            tracing::warn!(
                "Accept Invalid Certificates is set to true. This can open you up to MITM attacks."
            );
        }

        let mut builder = builder.danger_accept_invalid_certs(options.accept_invalid_certificates);

        if let Some(root_certs) = &options.root_certificate {
            let cert = tokio::fs::read(root_certs)
                .await
                .with_context(|| "Error reading certificate")
                .map_err(|err| check_target_not_found_err(err, &root_certs.to_string_lossy()))?;

            builder = builder.add_root_certificate(
                reqwest::Certificate::from_pem(&cert)
                    .with_context(|| "Error adding root certificate")?,
            );
        }

        builder
    };

    builder
        .build()
        .with_context(|| "Error building http client")
}

/// Send the configured request and decode the response body as JSON.
///
/// The response status is not inspected; any body that decodes is accepted.
pub async fn fetch_value(
    client: &reqwest::Client,
    request: RequestConfig,
) -> Result<Value, FetchError> {
    let RequestConfig {
        method,
        endpoint,
        headers,
    } = request;

    let response = client
        .request(method, endpoint.to_string())
        .headers(headers)
        .send()
        .await
        .map_err(|source| FetchError::Request { endpoint, source })?;

    tracing::debug!(status = %response.status(), "response received");

    response.json().await.map_err(FetchError::Decode)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn request_config_carries_the_value_header() {
        let request = RequestConfig::new(Uri::from_static("https://example.com/ping"), "3")
            .expect("must build");

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(
            request.headers.get(VALUE_HEADER).map(|v| v.as_bytes()),
            Some("3".as_bytes())
        );
    }

    #[test]
    fn rejects_unsendable_header_contents() {
        let err = RequestConfig::new(Uri::from_static("https://example.com/ping"), "3\r\n4")
            .expect_err("must not build");
        assert!(err.to_string().contains("invalid contents"));
    }
}
