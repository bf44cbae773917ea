use crate::config::Config;
use crate::http_handler::{function_handler, HandlerDeps};
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::DynamoDbUrlRepository;
use shared::core::{UlidGenerator, UrlShortener};

mod config;
mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = Config::load()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let mut dynamodb_config = aws_sdk_dynamodb::config::Builder::from(&aws_config);
    if let Some(endpoint) = &config.dynamodb_endpoint {
        tracing::info!("Using DynamoDB endpoint {}", endpoint);
        dynamodb_config = dynamodb_config.endpoint_url(endpoint);
    }
    let dynamodb_client = aws_sdk_dynamodb::Client::from_conf(dynamodb_config.build());

    let url_repo = DynamoDbUrlRepository::new(config.table_name, dynamodb_client);
    let deps = HandlerDeps {
        url_shortener: UrlShortener::new(url_repo, UlidGenerator::new()),
        response_format: config.response_format,
        error_status: config.error_status,
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
