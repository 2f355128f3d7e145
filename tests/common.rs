//! Common code for integration tests

use anyhow::Error;
use testcontainers_modules::mongo::Mongo;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;

/// Starts a new MongoDB container and returns its connection string along with the container,
/// which stops when dropped.
pub async fn create_store() -> Result<(String, ContainerAsync<Mongo>), Error> {
    let container = Mongo::default().start().await?;
    let host_port = container.get_host_port_ipv4(27017).await?;
    let connection_string = format!("mongodb://127.0.0.1:{host_port}/");

    Ok((connection_string, container))
}
