use async_trait::async_trait;
use thiserror::Error;

use crate::model::{
    brigade::{BrigadeDto, BrigadeInputDto},
    inventory::{BrigadeInventoryDto, Category, InventoryInputDto, InventoryItemDto},
    resource_type::ResourceTypeDto,
    size::SizeDto,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The API answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Calls the wizard makes against the brigade API
#[async_trait]
pub trait BrigadeApi: Send + Sync {
    async fn list_sizes(&self) -> Result<Vec<SizeDto>, ClientError>;

    /// Active resource types across every category
    async fn list_resource_types(&self) -> Result<Vec<ResourceTypeDto>, ClientError>;

    async fn get_brigade(&self, id: i32) -> Result<BrigadeDto, ClientError>;

    async fn get_inventory(&self, brigada_id: i32) -> Result<BrigadeInventoryDto, ClientError>;

    async fn create_brigade(&self, input: &BrigadeInputDto) -> Result<BrigadeDto, ClientError>;

    async fn update_brigade(
        &self,
        id: i32,
        input: &BrigadeInputDto,
    ) -> Result<BrigadeDto, ClientError>;

    async fn upsert_inventory(
        &self,
        category: Category,
        input: &InventoryInputDto,
    ) -> Result<InventoryItemDto, ClientError>;
}
