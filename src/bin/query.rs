use aws_config::BehaviorVersion;
use aws_sdk_bedrockagentruntime::Client as AgentClient;
use lambda_runtime::{Error, run, service_fn};

use docqa::agent::BedrockAgentInvoker;
use docqa::core::config::QueryConfig;
use docqa::query::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    docqa::setup_logging();

    let config = QueryConfig::from_env().map_err(Error::from)?;
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let agent = BedrockAgentInvoker::new(
        AgentClient::new(&shared_config),
        config.agent_id,
        config.agent_alias_id,
    );

    run(service_fn(|event| function_handler(event, &agent))).await
}
