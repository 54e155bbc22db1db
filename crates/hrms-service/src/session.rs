//! Per-request persistence context
//!
//! A [`Session`] owns one database transaction. Handlers open it at the start
//! of a request, pass [`Session::conn`] into every service call, and consume
//! it with [`Session::commit`] on success. A session dropped without commit
//! (early return, `?`, panic) is rolled back by the underlying transaction.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use crate::error::Result;

pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    /// Open a new transaction on the pool
    pub async fn begin(db: &DatabaseConnection) -> Result<Self> {
        let txn = db.begin().await?;
        debug!("Session opened");
        Ok(Self { txn })
    }

    /// Connection to hand to service functions
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commit all writes made through this session
    pub async fn commit(self) -> Result<()> {
        self.txn.commit().await?;
        debug!("Session committed");
        Ok(())
    }

    /// Discard all writes made through this session
    pub async fn rollback(self) -> Result<()> {
        self.txn.rollback().await?;
        debug!("Session rolled back");
        Ok(())
    }
}
