use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config,
    data::{owner::OwnerRepository, pet::PetRepository},
    error::AppError,
    service::purge::{PurgeEngine, PurgePredicate, PurgeReport, PurgeSettings, PurgeTarget},
};

/// What the retention job purges and how.
#[derive(Debug, Clone)]
pub struct RetentionSettings {
    pub purge: PurgeSettings,
    pub pet_name_prefix: String,
    pub owner_first_name_prefix: String,
}

impl RetentionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            purge: PurgeSettings {
                page_size: config.purge_page_size,
                ceiling: config.purge_ceiling,
                store_timeout: config.store_timeout,
            },
            pet_name_prefix: config.purge_pet_name_prefix.clone(),
            owner_first_name_prefix: config.purge_owner_first_name_prefix.clone(),
        }
    }
}

/// Reports of one retention run. `None` means that kind's purge failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionOutcome {
    pub pets: Option<PurgeReport>,
    pub owners: Option<PurgeReport>,
}

/// Starts the data retention scheduler
///
/// Runs the retention job on the configured cron schedule. A firing that arrives
/// while the previous run is still in progress is skipped.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Six-field cron expression
/// - `settings`: Purge bounds and predicates
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler, to be held for the lifetime of the server
/// - `Err(AppError::SchedulerErr)`: Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    cron: &str,
    settings: RetentionSettings,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let settings = settings.clone();
        let running = running.clone();

        Box::pin(async move {
            let Ok(_guard) = running.try_lock() else {
                tracing::warn!("Previous data retention run still in progress, skipping");
                return;
            };

            run_data_retention(&db, &settings).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Data retention scheduler started with schedule '{}'", cron);

    Ok(scheduler)
}

/// Purges stale pets, then stale owners
///
/// Each kind runs independently; a failure in one is logged and does not prevent
/// the other from running.
pub async fn run_data_retention(
    db: &DatabaseConnection,
    settings: &RetentionSettings,
) -> RetentionOutcome {
    let engine = PurgeEngine::new(settings.purge);

    let pets = purge_kind(
        &engine,
        &PetRepository::new(db),
        &PurgePredicate::NameStartsWith(settings.pet_name_prefix.clone()),
    )
    .await;

    let owners = purge_kind(
        &engine,
        &OwnerRepository::new(db),
        &PurgePredicate::NameStartsWith(settings.owner_first_name_prefix.clone()),
    )
    .await;

    RetentionOutcome { pets, owners }
}

async fn purge_kind<T: PurgeTarget>(
    engine: &PurgeEngine,
    target: &T,
    predicate: &PurgePredicate,
) -> Option<PurgeReport> {
    match engine.run(target, predicate).await {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::error!("Error purging {} records: {}", target.kind(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::*;
    use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
    use std::time::Duration;
    use test_utils::{builder::TestBuilder, factory};

    fn settings() -> RetentionSettings {
        RetentionSettings {
            purge: PurgeSettings {
                page_size: 100,
                ceiling: 10_000,
                store_timeout: Duration::from_secs(1),
            },
            pet_name_prefix: "lastName".to_string(),
            owner_first_name_prefix: "firstName".to_string(),
        }
    }

    #[tokio::test]
    async fn purges_pets_and_owners() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let keeper = factory::create_owner(db).await?;
        factory::helpers::create_pets_with_prefix(db, keeper.id, "lastName", 250).await?;
        factory::create_pet(db, keeper.id).await?;
        factory::helpers::create_owners_with_prefix(db, "firstName", 3).await?;

        let outcome = run_data_retention(db, &settings()).await;

        let pets = outcome.pets.unwrap();
        assert_eq!(pets.deleted, 250);
        assert_eq!(pets.skipped, 0);
        assert_eq!(pets.pages, 3);
        assert_eq!(outcome.owners.unwrap().deleted, 3);
        assert_eq!(Pet::find().count(db).await?, 1);
        assert_eq!(Owner::find().count(db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn owner_purge_runs_when_pet_purge_fails() -> Result<(), DbErr> {
        // No pets table, so every pet page fetch fails
        let test = TestBuilder::new().with_table(Owner).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_owners_with_prefix(db, "firstName", 2).await?;

        let outcome = run_data_retention(db, &settings()).await;

        assert!(outcome.pets.is_none());
        assert_eq!(outcome.owners.unwrap().deleted, 2);
        assert_eq!(Owner::find().count(db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn second_run_purges_nothing() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::create_owner(db).await?;
        factory::helpers::create_pets_with_prefix(db, owner.id, "lastName", 5).await?;

        run_data_retention(db, &settings()).await;
        let outcome = run_data_retention(db, &settings()).await;

        assert_eq!(outcome.pets.unwrap().deleted, 0);
        assert_eq!(outcome.owners.unwrap().deleted, 0);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_cron_expression() {
        let test = TestBuilder::new()
            .with_customer_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let result = start_scheduler(db, "every morning", settings()).await;

        assert!(matches!(result, Err(AppError::SchedulerErr(_))));
    }
}
