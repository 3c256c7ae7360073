//! DynamoDB-backed record store.
//!
//! Writes go through `PutItem` without a condition expression, so every call
//! creates the item or replaces it wholesale.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::{error, info};

use crate::adapters::record_store::{RecordStore, StoreError};
use crate::runtime::config::HandlerConfig;
use crate::runtime::contract::Record;

pub struct DynamoDbRecordStore {
    client: Client,
    table_name: String,
}

impl DynamoDbRecordStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Loads SDK settings (credentials, retries) from the default provider
    /// chain, pinned to the configured region.
    pub async fn from_config(config: &HandlerConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    async fn put_record(&self, record: &Record) -> Result<(), StoreError> {
        info!(table = %self.table_name, id = %record.id, "putting item");
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map(|_| ())
            .map_err(|err| {
                let err = map_put_item_error(err, &self.table_name);
                error!(
                    table = %self.table_name,
                    id = %record.id,
                    error = %err,
                    "put_item failed"
                );
                err
            })
    }
}

pub fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(record.id.clone()));
    item.insert("data".to_string(), AttributeValue::S(record.data.clone()));
    item
}

pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table_name: &str,
) -> StoreError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::TableNotFound(table_name.to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Throttled("provisioned throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::Throttled("request limit exceeded".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::Rejected("DynamoDB internal server error".to_string())
        }
        err => StoreError::Rejected(format!("PutItem failed: {}", DisplayErrorContext(&err))),
    }
}
