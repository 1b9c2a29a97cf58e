//! Availability search service

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::availability::{any_available_in_range, is_available, AvailabilityLedger};
use crate::domain::{Chef, DomainError, DomainResult, RepositoryProvider};
use crate::shared::retry::{retry_with_backoff, RetryConfig};

/// Read-side availability queries. Served from ledger snapshots; tolerates
/// slightly stale data (only the Accepted commit itself is strict).
pub struct AvailabilityService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AvailabilityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Whether the chef has at least one open day in `[start, end]`.
    pub async fn has_open_day(
        &self,
        chef_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<bool> {
        // Reject the range before touching storage
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        self.resolve_chef(chef_id).await?;
        let ledger = self.load_ledger(chef_id).await?;
        any_available_in_range(&ledger, start, end)
    }

    /// All chefs free on `day`.
    pub async fn chefs_available_on(&self, day: NaiveDate) -> DomainResult<Vec<Chef>> {
        let mut available = Vec::new();
        for chef in self.repos.chefs().find_all().await? {
            let ledger = self.load_ledger(chef.id).await?;
            if is_available(&ledger, day) {
                available.push(chef);
            }
        }
        Ok(available)
    }

    /// All chefs with at least one open day in `[start, end]`.
    pub async fn chefs_available_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Chef>> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        let mut available = Vec::new();
        for chef in self.repos.chefs().find_all().await? {
            let ledger = self.load_ledger(chef.id).await?;
            if any_available_in_range(&ledger, start, end)? {
                available.push(chef);
            }
        }
        Ok(available)
    }

    /// Ledger loads are idempotent, so transient storage failures retry.
    async fn load_ledger(&self, chef_id: Uuid) -> DomainResult<AvailabilityLedger> {
        retry_with_backoff(
            RetryConfig::default(),
            || self.repos.ledgers().load(chef_id),
            |err| err.is_transient(),
            "load_ledger",
        )
        .await
    }

    async fn resolve_chef(&self, chef_id: Uuid) -> DomainResult<Chef> {
        self.repos
            .chefs()
            .find_by_id(chef_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Chef",
                field: "id",
                value: chef_id.to_string(),
            })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    async fn chef(repos: &InMemoryRepositoryProvider, name: &str) -> Uuid {
        let c = Chef::new(name, vec![]);
        let id = c.id;
        repos.chefs().save(c).await.unwrap();
        id
    }

    #[tokio::test]
    async fn open_day_in_partially_committed_range() {
        // Scenario D: only 2024-06-02 committed, range [01, 03] is open
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let chef_id = chef(&repos, "Aziza").await;
        repos
            .ledgers()
            .commit_day(chef_id, day(2), Uuid::new_v4())
            .await
            .unwrap();

        let service = AvailabilityService::new(repos);
        assert!(service.has_open_day(chef_id, day(1), day(3)).await.unwrap());
    }

    #[tokio::test]
    async fn fully_committed_range_has_no_open_day() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let chef_id = chef(&repos, "Aziza").await;
        for d in 1..=3 {
            repos
                .ledgers()
                .commit_day(chef_id, day(d), Uuid::new_v4())
                .await
                .unwrap();
        }

        let service = AvailabilityService::new(repos);
        assert!(!service.has_open_day(chef_id, day(1), day(3)).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_chef_is_not_found() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = AvailabilityService::new(repos);
        let err = service
            .has_open_day(Uuid::new_v4(), day(1), day(2))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Chef", .. }));
    }

    #[tokio::test]
    async fn inverted_range_is_rejected_before_lookup() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = AvailabilityService::new(repos);
        let err = service
            .has_open_day(Uuid::new_v4(), day(3), day(1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRange { .. }));
    }

    #[tokio::test]
    async fn search_by_date_excludes_booked_chefs() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let busy = chef(&repos, "Busy").await;
        let free = chef(&repos, "Free").await;
        repos
            .ledgers()
            .commit_day(busy, day(1), Uuid::new_v4())
            .await
            .unwrap();

        let service = AvailabilityService::new(repos);
        let found = service.chefs_available_on(day(1)).await.unwrap();
        let ids: Vec<Uuid> = found.iter().map(|c| c.id).collect();
        assert!(ids.contains(&free));
        assert!(!ids.contains(&busy));
    }

    #[tokio::test]
    async fn range_search_includes_chef_with_any_open_day() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let partly_busy = chef(&repos, "Partly").await;
        repos
            .ledgers()
            .commit_day(partly_busy, day(1), Uuid::new_v4())
            .await
            .unwrap();

        let service = AvailabilityService::new(repos);
        let found = service
            .chefs_available_in_range(day(1), day(2))
            .await
            .unwrap();
        assert!(found.iter().any(|c| c.id == partly_busy));
    }
}
