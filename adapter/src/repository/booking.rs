use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, BookingSlot},
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use super::item::fetch_bookable_item;
use crate::database::{model::booking::BookingSlotRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定の種別・ID をもつイベント／サービスが存在するか
        // - 予約日がその対象の日程条件を満たすか
        let item = fetch_bookable_item(&mut tx, event.kind, event.item_id)
            .await?
            .ok_or_else(|| AppError::ItemNotFound("Item not found".into()))?;
        item.check_date(event.booking_date)?;

        // 件数の確認から INSERT のコミットまでを (種別, 対象 ID, 予約日) ごとに直列化する。
        // ロックはトランザクション終了時に解放される
        self.lock_booking_key(&mut tx, &event).await?;

        let already_booked: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM bookings
                WHERE type = $1 AND item_id = $2 AND booking_date = $3
            "#,
        )
        .bind(event.kind.to_string())
        .bind(event.item_id)
        .bind(event.booking_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        item.check_capacity(already_booked)?;

        let booking_id: BookingId = sqlx::query_scalar(
            r#"
                INSERT INTO bookings (user_id, type, item_id, booking_date, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING booking_id
            "#,
        )
        .bind(event.user_id)
        .bind(event.kind.to_string())
        .bind(event.item_id)
        .bind(event.booking_date)
        .bind(event.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_slots_by_user_id(&self, user_id: UserId) -> AppResult<Vec<BookingSlot>> {
        // 利用者の予約が属するグループだけを対象に、予約 ID 順の順位を付ける
        let rows: Vec<BookingSlotRow> = sqlx::query_as(
            r#"
                WITH ranked AS (
                    SELECT
                    b.booking_id,
                    b.user_id,
                    b.type,
                    b.item_id,
                    b.booking_date,
                    b.created_at,
                    ROW_NUMBER() OVER (
                        PARTITION BY b.type, b.item_id, b.booking_date
                        ORDER BY b.booking_id
                    ) AS slot_id
                    FROM bookings AS b
                    WHERE (b.type, b.item_id, b.booking_date) IN (
                        SELECT type, item_id, booking_date
                        FROM bookings
                        WHERE user_id = $1
                    )
                )
                SELECT
                r.booking_id,
                r.slot_id,
                r.type AS kind,
                r.item_id,
                CASE
                    WHEN r.type = 'event' THEN e.event_name
                    ELSE s.service_name
                END AS item_name,
                r.booking_date,
                r.created_at
                FROM ranked AS r
                LEFT JOIN events AS e ON r.type = 'event' AND r.item_id = e.event_id
                LEFT JOIN services AS s ON r.type = 'service' AND r.item_id = s.service_id
                WHERE r.user_id = $1
                ORDER BY r.booking_date ASC, r.created_at ASC, r.booking_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(BookingSlot::try_from).collect()
    }

    async fn count_by_user_id(&self, user_id: UserId) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}

impl BookingRepositoryImpl {
    // create で件数確認と INSERT を直列化するために内部的に使うメソッド
    async fn lock_booking_key(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        event: &CreateBooking,
    ) -> AppResult<()> {
        let lock_key = format!(
            "booking:{}:{}:{}",
            event.kind, event.item_id, event.booking_date
        );
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(lock_key)
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::{NaiveDate, NaiveTime, Utc};
    use kernel::model::{
        id::ItemId,
        institution::event::CreateInstitution,
        item::{
            day::DayOfWeek,
            event::{CreateEvent, CreateService},
            ItemKind,
        },
    };
    use kernel::repository::{institution::InstitutionRepository, item::ItemRepository};

    use super::*;
    use crate::repository::{
        institution::InstitutionRepositoryImpl, item::ItemRepositoryImpl,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed_monday_service(pool: &ConnectionPool, capacity: i32) -> anyhow::Result<ItemId> {
        let institution_id = InstitutionRepositoryImpl::new(pool.clone())
            .create(CreateInstitution {
                office_name: "Divisional Secretariat".into(),
                department_or_ministry: "Ministry of Public Administration".into(),
                office_type: "Divisional".into(),
                office_address: "Main Street".into(),
                district: "Colombo".into(),
                official_email: "ds@example.lk".into(),
                office_phone: None,
                working_days: BTreeSet::from([DayOfWeek::Monday, DayOfWeek::Tuesday]),
            })
            .await?;
        let service_id = ItemRepositoryImpl::new(pool.clone())
            .create_service(CreateService {
                service_name: "NIC renewal".into(),
                institution_id,
                service_description: None,
                appointment_duration: 15,
                daily_capacity: capacity,
                days_of_week: BTreeSet::from([DayOfWeek::Monday]),
            })
            .await?;
        Ok(service_id)
    }

    #[sqlx::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn service_bookings_stop_at_daily_capacity(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let service_id = seed_monday_service(&pool, 2).await?;
        let repo = BookingRepositoryImpl::new(pool);
        let monday = date(2024, 6, 10);
        let book = |user: i64| {
            CreateBooking::new(
                UserId::new(user),
                ItemKind::Service,
                service_id,
                monday,
                Utc::now(),
            )
        };

        let first = repo.create(book(1)).await?;
        let second = repo.create(book(2)).await?;
        assert!(first < second);
        assert!(matches!(repo.create(book(3)).await, Err(AppError::SlotFull)));
        assert!(matches!(
            repo.create(CreateBooking::new(
                UserId::new(3),
                ItemKind::Service,
                service_id,
                date(2024, 6, 11),
                Utc::now(),
            ))
            .await,
            Err(AppError::DayNotAvailable(day)) if day == "Tuesday"
        ));

        let slots = repo.find_slots_by_user_id(UserId::new(2)).await?;
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].slot_id, 2);
        assert_eq!(slots[0].item_name.as_deref(), Some("NIC renewal"));
        assert_eq!(repo.count_by_user_id(UserId::new(3)).await?, 0);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn concurrent_attempts_never_oversell(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let event_id = ItemRepositoryImpl::new(pool.clone())
            .create_event(CreateEvent {
                event_name: "Pension day".into(),
                event_type: "clinic".into(),
                event_description: None,
                event_date: date(2024, 6, 10),
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                max_participants: 3,
            })
            .await?;
        let repo = std::sync::Arc::new(BookingRepositoryImpl::new(pool));

        let attempts = (0..10).map(|user| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create(CreateBooking::new(
                    UserId::new(user),
                    ItemKind::Event,
                    event_id,
                    date(2024, 6, 10),
                    Utc::now(),
                ))
                .await
            })
        });

        let mut admitted = 0;
        for attempt in attempts.collect::<Vec<_>>() {
            match attempt.await? {
                Ok(_) => admitted += 1,
                Err(AppError::SlotFull) => {}
                Err(e) => return Err(e.into()),
            }
        }
        assert_eq!(admitted, 3);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn unknown_item_inserts_nothing(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo
            .create(CreateBooking::new(
                UserId::new(1),
                ItemKind::Service,
                ItemId::new(99999),
                date(2024, 6, 10),
                Utc::now(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::ItemNotFound(_))));
        assert_eq!(repo.count_by_user_id(UserId::new(1)).await?, 0);
        Ok(())
    }
}
