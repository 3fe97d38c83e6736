use serde::Deserialize;

use crate::{
    exception::{TicketException, TicketResult},
    model::entity::claim::Priority,
};

/// 新建报修单的输入
#[derive(Debug, Clone, Deserialize)]
pub struct NewClaim {
    pub object: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl NewClaim {
    pub fn validate(&self) -> TicketResult<()> {
        if self.object.trim().is_empty() {
            return Err(TicketException::Validation {
                reason: "claim object must not be blank".to_owned(),
            });
        }
        Ok(())
    }
}
