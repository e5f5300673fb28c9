use crate::admin::AdminClient;
use crate::models::rest::KafkaAcl;
use crate::models::{AclEntry, AclRequest};
use crate::transport::{HttpRequest, HttpTransport};
use anyhow::Context;
use tracing::debug;

impl<T: HttpTransport> AdminClient<T> {
    /// Lists ACLs matching `filter`, in the order the proxy returns them.
    pub async fn list_acls(&self, filter: &AclRequest) -> Result<Vec<AclEntry>, anyhow::Error> {
        let request = HttpRequest::get(self.cluster_url(["acls"])).with_query(filter.to_query());
        debug!("Listing acls: {:?}", request.query);

        let acls = self
            .fetch_data::<KafkaAcl>(request)
            .await
            .context("While listing acls")?;

        Ok(acls.into_iter().map(AclEntry::from).collect())
    }
}
