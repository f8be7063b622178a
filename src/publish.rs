use url::Url;

/// Outcome of one publish attempt that reached the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishOutcome {
    /// HTTP status code returned by the write endpoint.
    pub status: u16,
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level publish failure. Non-fatal by design: the loop logs it
/// and proceeds to the next cycle.
#[derive(Debug, thiserror::Error)]
#[error("publish failed: {0}")]
pub struct PublishError(pub String);

pub type PublishResult = Result<PublishOutcome, PublishError>;

/// Seam between the sample loop and the wire, so tests can record payloads
/// and inject failures.
#[allow(async_fn_in_trait)]
pub trait MetricSink {
    async fn publish(&self, payload: &str) -> PublishResult;
}

/// Fire-and-forget writer for the InfluxDB HTTP endpoint.
///
/// One POST per cycle, raw payload bytes as the body. There is no retry, no
/// buffering and no backoff; a lost sample is a lost sample. Known
/// reliability gap, carried over deliberately.
pub struct MetricPublisher {
    client: reqwest::Client,
    endpoint: Url,
}

impl MetricPublisher {
    pub fn new(endpoint: Url) -> Self {
        MetricPublisher {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl MetricSink for MetricPublisher {
    async fn publish(&self, payload: &str) -> PublishResult {
        let response = self
            .client
            .post(self.endpoint.clone())
            .body(payload.to_owned())
            .send()
            .await
            .map_err(|e| PublishError(e.to_string()))?;
        Ok(PublishOutcome {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_the_2xx_range() {
        assert!(PublishOutcome { status: 204 }.is_success());
        assert!(!PublishOutcome { status: 404 }.is_success());
        assert!(!PublishOutcome { status: 500 }.is_success());
    }
}
