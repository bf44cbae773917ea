use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Shape of a successful response body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ResponseFormat {
    /// The identifier itself, unquoted.
    #[default]
    Bare,
    /// `{"url": "<identifier>"}`
    Envelope,
}

/// How failures are turned into status codes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ErrorStatus {
    /// 404 for every failure.
    #[default]
    Uniform,
    ByKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Config {
    pub table_name: String,
    pub dynamodb_endpoint: Option<String>,
    pub response_format: ResponseFormat,
    pub error_status: ErrorStatus,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "Urls".to_string(),
            dynamodb_endpoint: None,
            response_format: ResponseFormat::default(),
            error_status: ErrorStatus::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "TABLE_NAME",
                "DYNAMODB_ENDPOINT",
                "RESPONSE_FORMAT",
                "ERROR_STATUS",
            ]))
            .extract()
    }
}
