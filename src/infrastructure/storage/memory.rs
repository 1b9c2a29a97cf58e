//! In-memory storage implementation
//!
//! Used in tests and for development without a database. Ledger mutations
//! rely on DashMap's per-key entry lock: the `RefMut` returned for a chef's
//! ledger is exclusive, so commit and release for one chef are serialized.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::availability::{AvailabilityLedger, LedgerRepository};
use crate::domain::booking::{Booking, BookingQuery, BookingRepository, BookingStatus, SortOrder};
use crate::domain::chef::{Chef, ChefRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// In-memory repository provider for development and testing
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    chefs: InMemoryChefRepository,
    bookings: InMemoryBookingRepository,
    ledgers: InMemoryLedgerRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn chefs(&self) -> &dyn ChefRepository {
        &self.chefs
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn ledgers(&self) -> &dyn LedgerRepository {
        &self.ledgers
    }
}

// ── Chefs ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryChefRepository {
    chefs: DashMap<Uuid, Chef>,
}

#[async_trait]
impl ChefRepository for InMemoryChefRepository {
    async fn save(&self, chef: Chef) -> DomainResult<()> {
        self.chefs.insert(chef.id, chef);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Chef>> {
        Ok(self.chefs.get(&id).map(|c| c.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Chef>> {
        Ok(self.chefs.iter().map(|c| c.value().clone()).collect())
    }
}

// ── Bookings ───────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: DashMap<Uuid, Booking>,
}

impl InMemoryBookingRepository {
    fn list_matching(&self, query: BookingQuery, pred: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        let mut result: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| pred(b.value()))
            .filter(|b| query.status.map_or(true, |s| b.status == s))
            .map(|b| b.value().clone())
            .collect();
        result.sort_by(|a, b| match query.order {
            SortOrder::Ascending => a.day.cmp(&b.day),
            SortOrder::Descending => b.day.cmp(&a.day),
        });
        result
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save(&self, booking: Booking) -> DomainResult<()> {
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|b| b.clone()))
    }

    async fn update(
        &self,
        booking: Booking,
        expected_status: BookingStatus,
    ) -> DomainResult<()> {
        // The mutable guard is exclusive, so the status check and the write
        // cannot interleave with a concurrent update of the same booking.
        let Some(mut entry) = self.bookings.get_mut(&booking.id) else {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking.id.to_string(),
            });
        };
        if entry.status != expected_status {
            return Err(DomainError::InvalidTransition {
                from: entry.status.to_string(),
                to: booking.status.to_string(),
            });
        }
        *entry = booking;
        Ok(())
    }

    async fn list_for_chef(
        &self,
        chef_id: Uuid,
        query: BookingQuery,
    ) -> DomainResult<Vec<Booking>> {
        Ok(self.list_matching(query, |b| b.chef_id == chef_id))
    }

    async fn list_for_diner(
        &self,
        diner_id: Uuid,
        query: BookingQuery,
    ) -> DomainResult<Vec<Booking>> {
        Ok(self.list_matching(query, |b| b.diner_id == diner_id))
    }
}

// ── Ledgers ────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryLedgerRepository {
    ledgers: DashMap<Uuid, AvailabilityLedger>,
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn load(&self, chef_id: Uuid) -> DomainResult<AvailabilityLedger> {
        Ok(self
            .ledgers
            .get(&chef_id)
            .map(|l| l.clone())
            .unwrap_or_default())
    }

    async fn commit_day(
        &self,
        chef_id: Uuid,
        day: NaiveDate,
        booking_id: Uuid,
    ) -> DomainResult<()> {
        // Entry guard is held across the check-and-insert, so concurrent
        // commits for the same chef cannot interleave.
        let mut entry = self.ledgers.entry(chef_id).or_default();
        entry.commit(day, booking_id)
    }

    async fn release_day(
        &self,
        chef_id: Uuid,
        day: NaiveDate,
        booking_id: Uuid,
    ) -> DomainResult<()> {
        let mut entry = self.ledgers.entry(chef_id).or_default();
        entry.release(day, booking_id)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn booking_on(chef_id: Uuid, diner_id: Uuid, d: u32) -> Booking {
        Booking::new(
            chef_id,
            diner_id,
            day(d),
            "18:00",
            vec!["Lagman".to_string()],
            2,
            Decimal::new(8000, 2),
            None,
        )
    }

    #[tokio::test]
    async fn update_of_unknown_booking_is_not_found() {
        let repo = InMemoryBookingRepository::default();
        let b = booking_on(Uuid::new_v4(), Uuid::new_v4(), 1);
        let err = repo.update(b, BookingStatus::Pending).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_with_stale_status_guard_is_rejected() {
        let repo = InMemoryBookingRepository::default();
        let b = booking_on(Uuid::new_v4(), Uuid::new_v4(), 1);
        repo.save(b.clone()).await.unwrap();

        let mut accepted = b.clone();
        accepted.status = BookingStatus::Accepted;
        repo.update(accepted, BookingStatus::Pending).await.unwrap();

        // A second writer that also read Pending must lose
        let mut rejected = b.clone();
        rejected.status = BookingStatus::Rejected;
        let err = repo
            .update(rejected, BookingStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(
            repo.find_by_id(b.id).await.unwrap().unwrap().status,
            BookingStatus::Accepted
        );
    }

    #[tokio::test]
    async fn list_for_chef_filters_and_sorts_descending_by_default() {
        let repo = InMemoryBookingRepository::default();
        let chef_id = Uuid::new_v4();
        let diner_id = Uuid::new_v4();
        for d in [2, 1, 3] {
            repo.save(booking_on(chef_id, diner_id, d)).await.unwrap();
        }
        repo.save(booking_on(Uuid::new_v4(), diner_id, 4))
            .await
            .unwrap();

        let list = repo
            .list_for_chef(chef_id, BookingQuery::default())
            .await
            .unwrap();
        let days: Vec<NaiveDate> = list.iter().map(|b| b.day).collect();
        assert_eq!(days, vec![day(3), day(2), day(1)]);
    }

    #[tokio::test]
    async fn list_for_diner_honors_status_filter_and_ascending_sort() {
        let repo = InMemoryBookingRepository::default();
        let diner_id = Uuid::new_v4();
        let mut accepted = booking_on(Uuid::new_v4(), diner_id, 2);
        accepted.status = BookingStatus::Accepted;
        repo.save(accepted).await.unwrap();
        repo.save(booking_on(Uuid::new_v4(), diner_id, 1))
            .await
            .unwrap();

        let query = BookingQuery {
            status: Some(BookingStatus::Accepted),
            order: SortOrder::Ascending,
        };
        let list = repo.list_for_diner(diner_id, query).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].day, day(2));
    }

    #[tokio::test]
    async fn ledger_commit_is_exclusive_per_day() {
        let repo = InMemoryLedgerRepository::default();
        let chef_id = Uuid::new_v4();
        let winner = Uuid::new_v4();

        repo.commit_day(chef_id, day(1), winner).await.unwrap();
        let err = repo
            .commit_day(chef_id, day(1), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { held_by, .. } if held_by == winner));

        // Same day for a different chef is independent
        repo.commit_day(Uuid::new_v4(), day(1), Uuid::new_v4())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn load_returns_empty_ledger_for_unknown_chef() {
        let repo = InMemoryLedgerRepository::default();
        let ledger = repo.load(Uuid::new_v4()).await.unwrap();
        assert!(ledger.is_empty());
    }
}
