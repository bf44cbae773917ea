use aws_sdk_cloudformation::types::Output;
use std::env;

/// Endpoint of the deployed shortener, read from the stack outputs.
///
/// Uses `STACK_NAME`, falling back to `rust-url-shortener`.
pub async fn retrieve_api_endpoint() -> String {
    let config = aws_config::load_from_env().await;
    let cloudformation_client = aws_sdk_cloudformation::Client::new(&config);
    let stack_name = env::var("STACK_NAME").unwrap_or("rust-url-shortener".to_string());

    let get_stacks = cloudformation_client
        .describe_stacks()
        .set_stack_name(Some(stack_name))
        .send()
        .await
        .expect("Failed to describe stack");

    let outputs: Vec<Output> = get_stacks
        .stacks
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|stack| stack.outputs)
        .unwrap_or_default();

    outputs
        .into_iter()
        .find(|output| output.output_key.as_deref() == Some("UrlShortenerEndpoint"))
        .and_then(|output| output.output_value)
        .expect("UrlShortenerEndpoint output not found")
}
