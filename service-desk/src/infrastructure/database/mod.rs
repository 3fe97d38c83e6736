use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use architecture::repository::StaleWrite;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement, TransactionTrait};
use tokio::sync::Mutex;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(url)
            .await
            .context("Could not connect to database")?;
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

struct PendingStatement {
    statement: Statement,
    /// Set for compare-and-set updates, which must touch a row.
    guard: Option<StaleWrite>,
}

/// 请求作用域的仓储，写操作排队后在 `save_changed` 时于同一事务中提交
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    #[builder(default)]
    statements: Mutex<Vec<PendingStatement>>,
    #[builder(default = AtomicBool::new(true))]
    can_drop: AtomicBool,
}

impl OrmRepo {
    pub fn connection(&self) -> &DatabaseConnection {
        self.db.get_connection()
    }

    pub fn backend(&self) -> DbBackend {
        self.connection().get_database_backend()
    }

    pub async fn push(&self, statement: Statement) {
        self.enqueue(PendingStatement {
            statement,
            guard: None,
        })
        .await
    }

    /// Queues an update that fails the whole transaction when it matches no row.
    pub async fn push_guarded(&self, statement: Statement, entity: &'static str, id: Uuid) {
        self.enqueue(PendingStatement {
            statement,
            guard: Some(StaleWrite { entity, id }),
        })
        .await
    }

    async fn enqueue(&self, pending: PendingStatement) {
        let mut stmts = self.statements.lock().await;
        stmts.push(pending);
        self.can_drop.store(false, Ordering::Relaxed);
    }

    pub async fn save_changed(&self) -> anyhow::Result<bool> {
        if self.can_drop.load(Ordering::Relaxed) {
            return Ok(false);
        }
        let stmts = std::mem::take(&mut *self.statements.lock().await);
        self.can_drop.store(true, Ordering::Relaxed);
        let trans = self.connection().begin().await?;
        for PendingStatement { statement, guard } in stmts {
            match trans.execute(statement).await {
                Ok(result) => {
                    if let (0, Some(stale)) = (result.rows_affected(), guard) {
                        trans.rollback().await?;
                        tracing::warn!("{stale}");
                        return Err(stale.into());
                    }
                }
                Err(e) => {
                    trans.rollback().await?;
                    anyhow::bail!(e);
                }
            }
        }
        trans.commit().await?;
        Ok(true)
    }
}

impl Drop for OrmRepo {
    fn drop(&mut self) {
        if self.can_drop.load(Ordering::Relaxed) {
            return;
        }
        if let Ok(stmts) = self.statements.try_lock() {
            let sqls = stmts
                .iter()
                .map(|x| x.statement.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            tracing::trace!("Unused sql statements:\n{sqls}")
        }
    }
}
