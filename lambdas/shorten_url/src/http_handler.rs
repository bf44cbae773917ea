use crate::config::{ErrorStatus, ResponseFormat};
use lambda_http::{http::StatusCode, Error, IntoResponse, Request};
use serde::{Deserialize, Serialize};
use shared::core::{IdGenerator, UrlRepository, UrlShortener};
use shared::error::ShortenerError;
use shared::utils::{json_response, message_response, serialized_response};

#[derive(Debug, Deserialize)]
pub struct ShortenUrlRequest {
    // missing and null both mean the empty key
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenUrlResponse {
    pub url: String,
}

pub(crate) struct HandlerDeps<R: UrlRepository, I: IdGenerator> {
    pub url_shortener: UrlShortener<R, I>,
    pub response_format: ResponseFormat,
    pub error_status: ErrorStatus,
}

#[tracing::instrument(skip(deps, event))]
pub(crate) async fn function_handler<R: UrlRepository, I: IdGenerator>(
    deps: &HandlerDeps<R, I>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    match shorten(deps, &event).await {
        Ok(short_url) => match deps.response_format {
            ResponseFormat::Bare => json_response(&StatusCode::OK, short_url),
            ResponseFormat::Envelope => {
                serialized_response(&StatusCode::OK, &ShortenUrlResponse { url: short_url })
            }
        },
        Err(e) => {
            tracing::error!(kind = e.kind(), "Failed to shorten URL: {}", e);
            let status = match deps.error_status {
                ErrorStatus::Uniform => StatusCode::NOT_FOUND,
                ErrorStatus::ByKind => e.status_code(),
            };
            message_response(&status, e.to_string())
        }
    }
}

async fn shorten<R: UrlRepository, I: IdGenerator>(
    deps: &HandlerDeps<R, I>,
    event: &Request,
) -> Result<String, ShortenerError> {
    // the gateway does not always forward a content type, so decode the raw body
    let request: ShortenUrlRequest = serde_json::from_slice(event.body())?;
    let long_url = request.url.unwrap_or_default();
    deps.url_shortener.resolve(&long_url).await
}
