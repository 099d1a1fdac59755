//! Job listing repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};

use super::entities::job_listing::{self, ActiveModel, Entity as JobListingEntity};
use crate::domain::{JobListing, NewJobListing};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Job listing repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Find a listing by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<JobListing>>;

    /// Fetch one page of listings ordered by ID, plus the total count.
    ///
    /// `page` is 1-indexed.
    async fn find_page(&self, page: u64, per_page: u64) -> AppResult<(Vec<JobListing>, u64)>;

    /// Insert listings in a single transaction, all stamped with `time_publication`
    async fn create_many(
        &self,
        listings: Vec<NewJobListing>,
        time_publication: i64,
    ) -> AppResult<Vec<JobListing>>;
}

/// SeaORM-backed job listing repository
pub struct JobStore {
    db: DatabaseConnection,
}

impl JobStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<JobListing>> {
        let result = JobListingEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(JobListing::from))
    }

    async fn find_page(&self, page: u64, per_page: u64) -> AppResult<(Vec<JobListing>, u64)> {
        let paginator = JobListingEntity::find()
            .order_by_asc(job_listing::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(JobListing::from).collect(), total))
    }

    async fn create_many(
        &self,
        listings: Vec<NewJobListing>,
        time_publication: i64,
    ) -> AppResult<Vec<JobListing>> {
        let txn = self.db.begin().await?;
        let mut created = Vec::with_capacity(listings.len());

        for listing in listings {
            let active_model = ActiveModel {
                job_name: Set(listing.job_name),
                description: Set(listing.description),
                location: Set(listing.location),
                busy: Set(listing.busy),
                time_publication: Set(time_publication),
                how_many_people: Set(listing.how_many_people),
                salary: Set(listing.salary),
                favorites: Set(listing.favorites),
                question: Set(listing.question),
                ..Default::default()
            };

            let model = active_model.insert(&txn).await?;
            created.push(JobListing::from(model));
        }

        txn.commit().await?;
        Ok(created)
    }
}
