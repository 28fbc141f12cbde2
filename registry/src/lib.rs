use std::sync::Arc;

use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl, health::HealthCheckRepositoryImpl,
    inquiry::InquiryRepositoryImpl, institution::InstitutionRepositoryImpl, item::ItemRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, health::HealthCheckRepository,
    inquiry::InquiryRepository, institution::InstitutionRepository, item::ItemRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    item_repository: Arc<dyn ItemRepository>,
    institution_repository: Arc<dyn InstitutionRepository>,
    inquiry_repository: Arc<dyn InquiryRepository>,
    auth_repository: Arc<dyn AuthRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>) -> Self {
        Self::with_repositories(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(BookingRepositoryImpl::new(pool.clone())),
            Arc::new(ItemRepositoryImpl::new(pool.clone())),
            Arc::new(InstitutionRepositoryImpl::new(pool.clone())),
            Arc::new(InquiryRepositoryImpl::new(pool.clone())),
            Arc::new(AuthRepositoryImpl::new(redis_client.clone())),
        )
    }

    // 実装を差し替えて組み立てる（テストではインメモリ実装やモックを渡す）
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        item_repository: Arc<dyn ItemRepository>,
        institution_repository: Arc<dyn InstitutionRepository>,
        inquiry_repository: Arc<dyn InquiryRepository>,
        auth_repository: Arc<dyn AuthRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            booking_repository,
            item_repository,
            institution_repository,
            inquiry_repository,
            auth_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn item_repository(&self) -> Arc<dyn ItemRepository> {
        self.item_repository.clone()
    }

    pub fn institution_repository(&self) -> Arc<dyn InstitutionRepository> {
        self.institution_repository.clone()
    }

    pub fn inquiry_repository(&self) -> Arc<dyn InquiryRepository> {
        self.inquiry_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }
}
