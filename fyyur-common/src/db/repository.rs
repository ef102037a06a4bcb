//! Store access interface and the per-request unit of work
//!
//! Repository methods take an explicit `&mut SqliteConnection`, so the same
//! call works on a pooled connection (reads) and inside a [`UnitOfWork`]
//! (writes).

use crate::Result;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tracing::{debug, warn};

/// Find / insert / update / delete for one entity table
#[allow(async_fn_in_trait)]
pub trait Repository {
    /// Row type returned by reads
    type Entity;
    /// Writable fields for insert and full-replace update
    type Draft;
    /// Selection criteria for `find_by_filter`
    type Filter;

    /// Entity name used in log lines and `Error::NotFound`
    const ENTITY: &'static str;

    async fn find_by_id(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<Self::Entity>>;

    async fn find_by_filter(
        &self,
        conn: &mut SqliteConnection,
        filter: &Self::Filter,
    ) -> Result<Vec<Self::Entity>>;

    /// Insert a new row, returning its id
    async fn insert(&self, conn: &mut SqliteConnection, draft: &Self::Draft) -> Result<i64>;

    /// Overwrite every field of row `id`; `Error::NotFound` if absent
    async fn update(&self, conn: &mut SqliteConnection, id: i64, draft: &Self::Draft) -> Result<()>;

    /// Remove row `id`; `Error::NotFound` if absent
    async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> Result<()>;

    async fn exists(&self, conn: &mut SqliteConnection, id: i64) -> Result<bool> {
        Ok(self.find_by_id(conn, id).await?.is_some())
    }
}

/// Transactional scope for the writes of a single request
///
/// Commit or roll back explicitly. Dropping an unfinished unit of work
/// rolls it back, so the connection goes back to the pool on every path.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub async fn begin(pool: &SqlitePool) -> Result<Self> {
        let tx = pool.begin().await?;
        debug!("Unit of work started");
        Ok(Self { tx })
    }

    /// Connection bound to the open transaction
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        debug!("Unit of work committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        debug!("Unit of work rolled back");
        Ok(())
    }

    /// Commit on `Ok`, roll back on `Err`, and hand the outcome back
    ///
    /// A failed rollback is logged; the original error is still returned.
    pub async fn finish<T>(self, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = self.rollback().await {
                    warn!("Rollback failed after error '{}': {}", e, rollback_err);
                }
                Err(e)
            }
        }
    }
}
