use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ItemId,
    item::{
        event::{CreateEvent, CreateService},
        BookableItem, Event, ItemKind, Service,
    },
};
use kernel::repository::item::ItemRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

use crate::database::{
    model::{
        days_to_column,
        item::{EventRow, ServiceRow},
    },
    ConnectionPool,
};

#[derive(new)]
pub struct ItemRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn create_event(&self, event: CreateEvent) -> AppResult<ItemId> {
        if event.max_participants < 1 {
            tracing::warn!(
                event_name = %event.event_name,
                max_participants = event.max_participants,
                "event registered with no capacity; every booking attempt will be rejected as full"
            );
        }

        sqlx::query_scalar(
            r#"
                INSERT INTO events
                (event_name, event_type, event_description, event_date,
                start_time, end_time, max_participants)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING event_id
            "#,
        )
        .bind(event.event_name)
        .bind(event.event_type)
        .bind(event.event_description)
        .bind(event.event_date)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.max_participants)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn create_service(&self, event: CreateService) -> AppResult<ItemId> {
        if event.daily_capacity < 1 {
            tracing::warn!(
                service_name = %event.service_name,
                daily_capacity = event.daily_capacity,
                "service registered with no capacity; every booking attempt will be rejected as full"
            );
        }

        let mut tx = self.db.begin().await?;

        // 登録先の機関が存在するかを先に確認する
        let institution_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM institutions WHERE institution_id = $1)",
        )
        .bind(event.institution_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if !institution_exists {
            return Err(AppError::EntityNotFound(format!(
                "Institution ({}) not found",
                event.institution_id
            )));
        }

        let service_id: ItemId = sqlx::query_scalar(
            r#"
                INSERT INTO services
                (service_name, institution_id, service_description,
                appointment_duration, daily_capacity, days_of_week)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING service_id
            "#,
        )
        .bind(event.service_name)
        .bind(event.institution_id)
        .bind(event.service_description)
        .bind(event.appointment_duration)
        .bind(event.daily_capacity)
        .bind(days_to_column(&event.days_of_week))
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(service_id)
    }

    async fn find_all_events(&self) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
                SELECT
                event_id,
                event_name,
                event_type,
                event_description,
                event_date,
                start_time,
                end_time,
                max_participants
                FROM events
                ORDER BY event_date DESC, start_time ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_all_services(&self) -> AppResult<Vec<Service>> {
        let rows: Vec<ServiceRow> = sqlx::query_as(
            r#"
                SELECT
                s.service_id,
                s.service_name,
                s.institution_id,
                i.office_name AS institution_name,
                s.service_description,
                s.appointment_duration,
                s.daily_capacity,
                s.days_of_week
                FROM services AS s
                INNER JOIN institutions AS i ON s.institution_id = i.institution_id
                ORDER BY s.service_id DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Service::try_from).collect()
    }
}

// 予約時のトランザクション内からも使えるよう、接続を受け取って対象を取得する
pub(crate) async fn fetch_bookable_item(
    conn: &mut PgConnection,
    kind: ItemKind,
    item_id: ItemId,
) -> AppResult<Option<BookableItem>> {
    match kind {
        ItemKind::Event => {
            let row: Option<EventRow> = sqlx::query_as(
                r#"
                    SELECT
                    event_id,
                    event_name,
                    event_type,
                    event_description,
                    event_date,
                    start_time,
                    end_time,
                    max_participants
                    FROM events
                    WHERE event_id = $1
                "#,
            )
            .bind(item_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(AppError::SpecificOperationError)?;

            Ok(row.map(|r| BookableItem::Event(r.into())))
        }
        ItemKind::Service => {
            let row: Option<ServiceRow> = sqlx::query_as(
                r#"
                    SELECT
                    s.service_id,
                    s.service_name,
                    s.institution_id,
                    i.office_name AS institution_name,
                    s.service_description,
                    s.appointment_duration,
                    s.daily_capacity,
                    s.days_of_week
                    FROM services AS s
                    INNER JOIN institutions AS i ON s.institution_id = i.institution_id
                    WHERE s.service_id = $1
                "#,
            )
            .bind(item_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(AppError::SpecificOperationError)?;

            row.map(|r| Service::try_from(r).map(BookableItem::Service))
                .transpose()
        }
    }
}
