use crate::app::ports::{FetchRequest, FetchResponse, HttpClientPort, RedirectPolicy};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_ENCODING};
use reqwest::redirect::Policy;
use tracing::{debug, instrument};

/// reqwest-backed fetcher. Gzip and deflate bodies are decompressed by the
/// transport whenever the response declares a `Content-Encoding`.
pub struct ReqwestHttp;

impl ReqwestHttp {
    fn client_for(request: &FetchRequest) -> Result<reqwest::Client> {
        let policy = match request.redirects {
            RedirectPolicy::None => Policy::none(),
            RedirectPolicy::Follow => Policy::default(),
        };
        let client = reqwest::Client::builder()
            .redirect(policy)
            .timeout(request.timeout)
            .build()?;
        Ok(client)
    }

    fn header_map(request: &FetchRequest) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
                (Ok(n), Ok(v)) => {
                    headers.insert(n, v);
                }
                _ => debug!("Dropping unrepresentable header {}", name),
            }
        }
        headers
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        let client = Self::client_for(request)?;
        let resp = client
            .get(&request.url)
            .headers(Self::header_map(request))
            .send()
            .await?;
        let status = resp.status().as_u16();
        let content_encoding = resp
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let bytes = resp.bytes().await?.to_vec();
        debug!("Fetched status={} bytes={}", status, bytes.len());
        Ok(FetchResponse { status, bytes, content_encoding })
    }
}
