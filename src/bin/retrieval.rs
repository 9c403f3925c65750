use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{Error, run, service_fn};

use docqa::core::config::RetrievalConfig;
use docqa::retrieval::PolicyCatalog;
use docqa::retrieval::handler::function_handler;
use docqa::store::S3DocumentStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    docqa::setup_logging();

    let config = RetrievalConfig::from_env().map_err(Error::from)?;
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = S3DocumentStore::new(S3Client::new(&shared_config), config.bucket);
    let catalog = PolicyCatalog::builtin();

    run(service_fn(|event| function_handler(event, &store, &catalog))).await
}
