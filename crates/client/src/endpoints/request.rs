//! The request pipeline every resource operation goes through.
//!
//! One call performs one round trip:
//! 1. compose `{scheme}://{host}{basePath}/{company}/{path}?{query}`
//! 2. attach the fixed header set
//! 3. hand the request to the [`Transport`]
//! 4. classify by status (200..=299 is success)
//! 5. decode the JSON body into the caller's type
//!
//! # Invariants
//! - Nothing here retries. Retry is a transport concern.
//! - A non-2xx body is carried verbatim in [`ClientError::UnexpectedStatus`] and never parsed.
//! - Decode failures of a 2xx body are always [`ClientError::Decode`].

use std::time::Instant;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Request, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::endpoints::query_params::QueryParams;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::transport::Transport;

/// Header carrying the integration client id.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the organization id.
pub const ORG_ID_HEADER: &str = "x-gw-ims-org-id";

/// Header carrying the global company id.
pub const COMPANY_ID_HEADER: &str = "x-proxy-global-company-id";

const JSON: &str = "application/json";

/// Build the full request URL for `path` under the company scope.
///
/// A leading `/` on `path` is ignored. Query pairs are form-encoded and
/// appended after any query the base URL already carries.
pub fn compose_url(base: &Url, company_id: &str, path: &str, query: &QueryParams) -> Result<Url> {
    let mut url = base.clone();
    let base_path = base.path().trim_end_matches('/');
    let full_path = format!(
        "{}/{}/{}",
        base_path,
        encode_path_segment(company_id),
        path.trim_start_matches('/')
    );
    url.set_path(&full_path);

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query.iter() {
            pairs.append_pair(key, value);
        }
    }

    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(url.to_string()));
    }
    Ok(url)
}

/// The fixed header set sent with every request.
pub fn default_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));

    let mut bearer = HeaderValue::from_str(&credentials.bearer())
        .map_err(|_| ClientError::InvalidHeader("Authorization"))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    for (name, value) in [
        (API_KEY_HEADER, credentials.client_id.as_str()),
        (ORG_ID_HEADER, credentials.org_id.as_str()),
        (COMPANY_ID_HEADER, credentials.company_id.as_str()),
    ] {
        let value = HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name))?;
        headers.insert(HeaderName::from_static(name), value);
    }

    Ok(headers)
}

/// Everything the pipeline needs from the client for one call.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub transport: &'a dyn Transport,
    pub base_url: &'a Url,
    pub credentials: &'a Credentials,
    pub metrics: Option<&'a MetricsCollector>,
}

/// Perform one round trip and decode the JSON response into `T`.
pub async fn send_json<T, B>(
    ctx: RequestContext<'_>,
    method: Method,
    path: &str,
    query: &QueryParams,
    body: Option<&B>,
) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let url = compose_url(ctx.base_url, &ctx.credentials.company_id, path, query)?;
    let url_str = url.to_string();
    let method_str = method.to_string();

    let mut request = Request::new(method, url);
    *request.headers_mut() = default_headers(ctx.credentials)?;
    if let Some(body) = body {
        let bytes = serde_json::to_vec(body).map_err(ClientError::Encode)?;
        *request.body_mut() = Some(bytes.into());
    }

    if let Some(m) = ctx.metrics {
        m.record_request(path, &method_str);
    }

    let start = Instant::now();
    let outcome = execute(ctx, request, path, &method_str, &url_str).await;
    let status = match &outcome {
        Ok((status, _)) => Some(*status),
        Err(e) => e.status(),
    };
    let result = outcome.and_then(|(_, bytes)| {
        serde_json::from_slice::<T>(&bytes).map_err(|source| {
            warn!(method = %method_str, path, error = %source, "Failed to decode response body");
            ClientError::Decode {
                url: url_str.clone(),
                source,
            }
        })
    });

    if let Some(m) = ctx.metrics {
        m.record_request_duration(path, &method_str, start.elapsed(), status);
        if let Err(e) = &result {
            m.record_client_error(path, &method_str, e);
        }
    }

    result
}

/// Send the request and return the status and body of a 2xx response.
async fn execute(
    ctx: RequestContext<'_>,
    request: Request,
    path: &str,
    method: &str,
    url: &str,
) -> Result<(u16, Vec<u8>)> {
    let start = Instant::now();
    let response = ctx.transport.execute(request).await.map_err(|e| {
        warn!(method, path, error = %e, "Transport failure");
        ClientError::Transport(e)
    })?;

    let status = response.status();
    debug!(
        method,
        path,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Received response"
    );

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(method, path, status = status.as_u16(), "Unexpected status code");
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok((status.as_u16(), bytes.to_vec()))
}
