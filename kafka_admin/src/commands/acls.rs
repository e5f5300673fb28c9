use crate::admin::AdminClient;
use crate::models::rest::KafkaAcl;
use crate::models::{AclEntry, AclRequest};
use crate::transport::{HttpRequest, HttpTransport};
use anyhow::Context;
use tracing::info;

impl<T: HttpTransport> AdminClient<T> {
    pub async fn create_acl(&self, acl: &AclRequest) -> Result<(), anyhow::Error> {
        let acl = acl.uppercased();
        info!("Creating acl {:?}", acl);

        let request = HttpRequest::post(self.cluster_url(["acls"]), acl.to_body());
        self.send(request).await.context("While creating acl")?;

        Ok(())
    }

    /// Deletes every ACL matching `filter` and returns the entries the proxy reports as deleted.
    pub async fn delete_acl(&self, filter: &AclRequest) -> Result<Vec<AclEntry>, anyhow::Error> {
        let filter = filter.uppercased();
        info!("Deleting acls matching {:?}", filter);

        let request = HttpRequest::delete(self.cluster_url(["acls"])).with_query(filter.to_query());
        let deleted = self
            .fetch_data::<KafkaAcl>(request)
            .await
            .context("While deleting acls")?;

        Ok(deleted.into_iter().map(AclEntry::from).collect())
    }
}
