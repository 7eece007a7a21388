use bytes::Bytes;
use eyre::{Result, WrapErr};
use http_body_util::{BodyExt, Collected, Full};
use hyper::{
    body::Incoming,
    header::USER_AGENT,
    Method, Request, Response,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Builder, Client as HyperClient},
    rt::TokioExecutor,
};
use leaky_bucket_lite::LeakyBucket;
use tokio::time::Duration;

use crate::{ClientError, MY_USER_AGENT};

pub(crate) type InnerClient = HyperClient<HttpsConnector<HttpConnector>, Body>;
pub(crate) type Body = Full<Bytes>;

pub struct Client {
    pub(crate) client: InnerClient,
    pub(crate) api_base: Box<str>,
    ratelimiter: LeakyBucket,
}

impl Client {
    pub fn new(api_base: impl Into<Box<str>>) -> Result<Self> {
        let crypto_provider = rustls::crypto::ring::default_provider();

        let https = HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(crypto_provider)
            .wrap_err("Failed to configure https connector")?
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        let client = Builder::new(TokioExecutor::new()).build(https);

        // hyakanime doesn't document ratelimits, 5 per second stays polite
        let ratelimiter = LeakyBucket::builder()
            .max(5)
            .tokens(5)
            .refill_interval(Duration::from_millis(200))
            .refill_amount(1)
            .build();

        Ok(Self {
            client,
            api_base: api_base.into(),
            ratelimiter,
        })
    }

    pub(crate) async fn ratelimit(&self) {
        self.ratelimiter.acquire_one().await
    }

    pub(crate) async fn make_get_request(
        &self,
        url: impl AsRef<str>,
    ) -> Result<Bytes, ClientError> {
        let url = url.as_ref();
        trace!("GET request to url {url}");

        let req = Request::builder()
            .uri(url)
            .method(Method::GET)
            .header(USER_AGENT, MY_USER_AGENT)
            .body(Body::default())
            .wrap_err("Failed to build GET request")?;

        self.ratelimit().await;

        let response = self
            .client
            .request(req)
            .await
            .wrap_err("Failed to receive GET response")?;

        Self::error_for_status(response, url).await
    }

    pub(crate) async fn error_for_status(
        response: Response<Incoming>,
        url: &str,
    ) -> Result<Bytes, ClientError> {
        let status = response.status();

        match status.as_u16() {
            200..=299 => response
                .into_body()
                .collect()
                .await
                .map(Collected::to_bytes)
                .wrap_err("Failed to collect response bytes")
                .map_err(ClientError::Report),
            400 => Err(ClientError::BadRequest),
            404 => Err(ClientError::NotFound),
            429 => Err(ClientError::Ratelimited),
            _ => Err(eyre!("Failed with status code {status} when requesting url {url}").into()),
        }
    }
}
