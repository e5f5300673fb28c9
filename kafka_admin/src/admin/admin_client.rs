use crate::connection_settings::ConnectionSettings;
use crate::models::rest::{DataList, KafkaConfig};
use crate::models::{ConfigEntries, DEFAULT_RETENTION_MS};
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use anyhow::{bail, Context};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Administrative client for one Kafka cluster behind a REST proxy.
///
/// Every operation reads fresh state from the proxy and issues its calls one
/// after another; nothing is cached between calls.
pub struct AdminClient<T = ReqwestTransport> {
    base_url: Url,
    cluster_id: String,
    transport: T,
    default_retention_ms: i64,
}

impl AdminClient<ReqwestTransport> {
    pub fn create(settings: ConnectionSettings) -> Result<Self, anyhow::Error> {
        let transport =
            ReqwestTransport::create(&settings).context("While creating REST proxy transport")?;
        Self::with_transport(settings, transport)
    }
}

impl<T: HttpTransport> AdminClient<T> {
    pub fn with_transport(
        settings: ConnectionSettings,
        transport: T,
    ) -> Result<Self, anyhow::Error> {
        settings
            .validate()
            .context("While validating connection settings")?;

        let base_url = Url::parse(settings.base_url())
            .with_context(|| format!("While parsing REST proxy url '{}'", settings.base_url()))?;
        if base_url.cannot_be_a_base() {
            bail!("REST proxy url '{base_url}' cannot be used as a base url")
        }

        Ok(Self {
            base_url,
            cluster_id: settings.cluster_id,
            transport,
            default_retention_ms: DEFAULT_RETENTION_MS,
        })
    }

    /// Retention injected into new topics that do not set `retention.ms` themselves.
    pub fn with_default_retention_ms(mut self, retention_ms: i64) -> Self {
        self.default_retention_ms = retention_ms;
        self
    }

    pub fn default_retention_ms(&self) -> i64 {
        self.default_retention_ms
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Url of a cluster-scoped v3 resource. Each segment is percent-encoded on its own.
    pub(crate) fn cluster_url<I>(&self, segments: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.url_with_segments(&["v3", "clusters", self.cluster_id.as_str()], segments)
    }

    pub(crate) fn proxy_url<I>(&self, segments: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.url_with_segments(&[], segments)
    }

    fn url_with_segments<I>(&self, prefix: &[&str], segments: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        // Cannot fail: bases that cannot carry a path are rejected in `with_transport`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(prefix).extend(segments);
        }
        url.into()
    }

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<Value, anyhow::Error> {
        self.transport.send(request).await
    }

    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<R, anyhow::Error> {
        let method = request.method;
        let url = request.url.clone();
        let value = self.transport.send(request).await?;

        serde_json::from_value(value)
            .with_context(|| format!("While decoding response of {method} {url}"))
    }

    pub(crate) async fn fetch_data<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Vec<R>, anyhow::Error> {
        let list = self.fetch::<DataList<R>>(request).await?;
        Ok(list.data)
    }

    pub(crate) async fn fetch_config(&self, url: String) -> Result<ConfigEntries, anyhow::Error> {
        let configs = self.fetch_data::<KafkaConfig>(HttpRequest::get(url)).await?;

        Ok(configs
            .into_iter()
            .map(|config| (config.name, config.value))
            .collect())
    }
}
