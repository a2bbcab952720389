use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    client::api::{BrigadeApi, ClientError},
    model::{
        api::ErrorDto,
        brigade::{BrigadeDto, BrigadeInputDto},
        inventory::{BrigadeInventoryDto, Category, InventoryInputDto, InventoryItemDto},
        resource_type::ResourceTypeDto,
        size::SizeDto,
    },
};

/// [`BrigadeApi`] over HTTP
#[derive(Clone)]
pub struct HttpBrigadeApi {
    client: Client,
    base_url: String,
}

impl HttpBrigadeApi {
    /// `base_url` is the server origin, e.g. `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorDto>(&text) {
            Ok(error) => error.message,
            Err(_) if text.is_empty() => format!("Error {}", status.as_u16()),
            Err(_) => text,
        };

        tracing::warn!(status = status.as_u16(), "API request failed: {}", message);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BrigadeApi for HttpBrigadeApi {
    async fn list_sizes(&self) -> Result<Vec<SizeDto>, ClientError> {
        self.send(self.client.get(self.url("/tallas"))).await
    }

    async fn list_resource_types(&self) -> Result<Vec<ResourceTypeDto>, ClientError> {
        self.send(self.client.get(self.url("/tipos-recursos?activo=true")))
            .await
    }

    async fn get_brigade(&self, id: i32) -> Result<BrigadeDto, ClientError> {
        self.send(self.client.get(self.url(&format!("/brigadas/{}", id))))
            .await
    }

    async fn get_inventory(&self, brigada_id: i32) -> Result<BrigadeInventoryDto, ClientError> {
        self.send(
            self.client
                .get(self.url(&format!("/inventario/brigada/{}", brigada_id))),
        )
        .await
    }

    async fn create_brigade(&self, input: &BrigadeInputDto) -> Result<BrigadeDto, ClientError> {
        self.send(self.client.post(self.url("/brigadas")).json(input))
            .await
    }

    async fn update_brigade(
        &self,
        id: i32,
        input: &BrigadeInputDto,
    ) -> Result<BrigadeDto, ClientError> {
        self.send(
            self.client
                .put(self.url(&format!("/brigadas/{}", id)))
                .json(input),
        )
        .await
    }

    async fn upsert_inventory(
        &self,
        category: Category,
        input: &InventoryInputDto,
    ) -> Result<InventoryItemDto, ClientError> {
        self.send(
            self.client
                .post(self.url(&format!("/inventario/{}", category.path_segment())))
                .json(input),
        )
        .await
    }
}
