use crate::{
    core::{MappingRecord, UrlRepository},
    error::ShortenerError,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::DisplayErrorContext,
    operation::{put_item::builders::PutItemFluentBuilder, scan::builders::ScanFluentBuilder},
    types::AttributeValue,
    Client,
};
use lambda_http::tracing;
use std::collections::HashMap;

const LONG_URL: &str = "LongUrl";
const SHORT_URL: &str = "ShortUrl";

#[derive(Debug)]
pub struct DynamoDbUrlRepository {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbUrlRepository {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }

    fn scan_by_long_url(&self, long_url: &str) -> ScanFluentBuilder {
        self.dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("#long_url = :long_url")
            .expression_attribute_names("#long_url", LONG_URL)
            .expression_attribute_values(":long_url", AttributeValue::S(long_url.to_string()))
            .consistent_read(true)
    }

    fn put(&self, record: MappingRecord) -> PutItemFluentBuilder {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .item(LONG_URL, AttributeValue::S(record.long_url))
            .item(SHORT_URL, AttributeValue::S(record.short_url))
    }
}

#[async_trait]
impl UrlRepository for DynamoDbUrlRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Vec<MappingRecord>, ShortenerError> {
        tracing::debug!(table = %self.table_name, "Scanning for long URL");

        let mut items = self
            .scan_by_long_url(long_url)
            .into_paginator()
            .items()
            .send();

        let mut records = vec![];
        while let Some(item) = items.next().await {
            let item = item.map_err(|e| {
                ShortenerError::Lookup(format!("Error executing scan: {}", DisplayErrorContext(&e)))
            })?;
            records.push(MappingRecord::try_from(item).map_err(ShortenerError::Lookup)?);
        }

        Ok(records)
    }

    async fn put_mapping(&self, record: MappingRecord) -> Result<(), ShortenerError> {
        tracing::debug!(table = %self.table_name, short_url = %record.short_url, "Putting mapping");

        self.put(record)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ShortenerError::Write(format!("{}", DisplayErrorContext(&e))))
    }
}

impl TryFrom<HashMap<String, AttributeValue>> for MappingRecord {
    type Error = String;

    fn try_from(item: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let long_url = item
            .get(LONG_URL)
            .ok_or_else(|| "LongUrl not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "LongUrl is not a String".to_string())?;
        let short_url = item
            .get(SHORT_URL)
            .ok_or_else(|| "ShortUrl not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "ShortUrl is not a String".to_string())?;

        Ok(MappingRecord::new(long_url, short_url))
    }
}

#[cfg(test)]
mod tests {
    use super::DynamoDbUrlRepository;
    use crate::core::MappingRecord;
    use aws_sdk_dynamodb::config::{BehaviorVersion, Region};
    use aws_sdk_dynamodb::types::AttributeValue;
    use std::collections::HashMap;

    fn repository() -> DynamoDbUrlRepository {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-1"))
            .build();
        DynamoDbUrlRepository::new("urls-test".to_string(), aws_sdk_dynamodb::Client::from_conf(config))
    }

    #[test]
    fn scan_should_filter_on_exact_long_url() {
        let url_repo = repository();

        let scan = url_repo.scan_by_long_url("https://example.com/a");
        let input = scan.as_input();

        assert_eq!(input.get_table_name().as_deref(), Some("urls-test"));
        assert_eq!(
            input.get_filter_expression().as_deref(),
            Some("#long_url = :long_url")
        );
        assert_eq!(
            input
                .get_expression_attribute_names()
                .as_ref()
                .and_then(|names| names.get("#long_url"))
                .map(String::as_str),
            Some("LongUrl")
        );
        assert_eq!(
            input
                .get_expression_attribute_values()
                .as_ref()
                .and_then(|values| values.get(":long_url")),
            Some(&AttributeValue::S("https://example.com/a".to_string()))
        );
        assert_eq!(*input.get_consistent_read(), Some(true));
    }

    #[test]
    fn put_should_write_both_attributes_without_a_condition() {
        let url_repo = repository();

        let put = url_repo.put(MappingRecord::new(
            "https://example.com/a".to_string(),
            "01HV3ZQ7Q3N9Y5K2F8X4D6B1CE".to_string(),
        ));
        let input = put.as_input();

        assert_eq!(input.get_table_name().as_deref(), Some("urls-test"));
        assert_eq!(
            input.get_item().clone().unwrap_or_default(),
            item(&[
                ("LongUrl", AttributeValue::S("https://example.com/a".into())),
                ("ShortUrl", AttributeValue::S("01HV3ZQ7Q3N9Y5K2F8X4D6B1CE".into())),
            ])
        );
        assert!(input.get_condition_expression().is_none());
        assert!(input.get_expression_attribute_names().is_none());
    }

    fn item(pairs: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn when_item_has_both_attributes_should_convert() {
        let record = MappingRecord::try_from(item(&[
            ("LongUrl", AttributeValue::S("https://example.com/a".into())),
            ("ShortUrl", AttributeValue::S("01HV3ZQ7Q3N9Y5K2F8X4D6B1CE".into())),
        ]))
        .unwrap();

        assert_eq!(record.long_url, "https://example.com/a");
        assert_eq!(record.short_url, "01HV3ZQ7Q3N9Y5K2F8X4D6B1CE");
    }

    #[test]
    fn when_short_url_missing_should_fail() {
        let result = MappingRecord::try_from(item(&[(
            "LongUrl",
            AttributeValue::S("https://example.com/a".into()),
        )]));

        assert_eq!(result.unwrap_err(), "ShortUrl not found");
    }

    #[test]
    fn when_long_url_is_not_a_string_should_fail() {
        let result = MappingRecord::try_from(item(&[
            ("LongUrl", AttributeValue::N("42".into())),
            ("ShortUrl", AttributeValue::S("abc".into())),
        ]));

        assert_eq!(result.unwrap_err(), "LongUrl is not a String");
    }
}
