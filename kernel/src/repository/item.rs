use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ItemId,
    item::{
        event::{CreateEvent, CreateService},
        Event, Service,
    },
};

#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create_event(&self, event: CreateEvent) -> AppResult<ItemId>;
    async fn create_service(&self, event: CreateService) -> AppResult<ItemId>;
    async fn find_all_events(&self) -> AppResult<Vec<Event>>;
    async fn find_all_services(&self) -> AppResult<Vec<Service>>;
}
