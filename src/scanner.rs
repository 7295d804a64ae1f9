use std::time::Duration;

use futures::{stream, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{redirect, Client};
use tracing::debug;
use url::Url;

use crate::model::ProbeResult;
use crate::Error;

pub const DISPATCHER_INVALIDATE_CACHE_PATH: &str = "/dispatcher/invalidate.cache";

/// Probes one target host. Holds no state besides the host and the
/// HTTP client, so every scan starts from a clean slate.
pub struct Scanner {
    host: String,
    http_client: Client,
}

impl Scanner {
    pub fn new(host: &str, timeout: Duration) -> Result<Self, Error> {
        Url::parse(host).map_err(|err| Error::InvalidHost {
            host: host.to_string(),
            source: err,
        })?;

        let http_client = Client::builder()
            .redirect(redirect::Policy::limited(4))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            host: host.to_string(),
            http_client,
        })
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Issues a single GET against `host + path`. Transport failures are
    /// folded into the result, never propagated.
    pub async fn probe(&self, path: &str, headers: HeaderMap) -> ProbeResult {
        let url = format!("{}{}", self.host, path);

        match self.http_client.get(&url).headers(headers).send().await {
            Ok(res) => {
                debug!(%url, status = %res.status(), "probe finished");
                ProbeResult::new(
                    &self.host,
                    path,
                    Some(res.status()),
                    res.headers().clone(),
                    None,
                )
            }
            Err(err) => {
                debug!(%url, error = %err, "probe failed");
                ProbeResult::new(&self.host, path, None, HeaderMap::new(), Some(err.to_string()))
            }
        }
    }

    /// Probes the dispatcher cache-invalidation endpoint. An unprotected
    /// dispatcher accepts these CQ headers from anyone.
    pub async fn probe_dispatcher_invalidate_cache(&self) -> ProbeResult {
        let mut headers = HeaderMap::new();
        headers.insert("CQ-Handle", HeaderValue::from_static("/content"));
        headers.insert("CQ-Path", HeaderValue::from_static("/content"));

        self.probe(DISPATCHER_INVALIDATE_CACHE_PATH, headers).await
    }

    /// Probes every path plus the cache-invalidation endpoint and returns
    /// one result per probe: `paths.len() + 1` in total. With
    /// `concurrency == 1` probes run sequentially; result order is
    /// unspecified otherwise.
    pub async fn scan_all(&self, paths: &[String], concurrency: usize) -> Vec<ProbeResult> {
        let total = paths.len() + 1;
        let mut results = Vec::with_capacity(total);

        // Results funnel through this single consumer loop, so no lock is
        // needed around the collection or the progress counter.
        let mut probes = stream::iter(paths.iter())
            .map(|path| self.probe(path, HeaderMap::new()))
            .buffer_unordered(concurrency.max(1));

        while let Some(result) = probes.next().await {
            results.push(result);
            eprint!("\rScanning {} of {} paths.", results.len(), total);
        }

        results.push(self.probe_dispatcher_invalidate_cache().await);
        eprintln!("\rScanning {} of {} paths.", results.len(), total);

        results
    }
}
