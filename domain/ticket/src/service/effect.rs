use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{exception::TicketResult, model::vo::Effect};

/// 执行状态转换产生的级联效果
#[async_trait]
pub trait EffectApplyService: Send + Sync {
    /// Queues the writes of every effect; the caller commits them together
    /// with its own changes.
    async fn apply(&self, effects: Vec<Effect>, now: DateTime<Utc>) -> TicketResult<()>;
}
