mod claim;
mod effect;
mod intervention_request;
mod work_order;

pub use claim::ClaimServiceImpl;
pub use effect::EffectApplyServiceImpl;
pub use intervention_request::InterventionRequestServiceImpl;
pub use work_order::WorkOrderServiceImpl;

use domain_account::model::entity::User;
use domain_ticket::model::vo::Assignee;

fn assignee(user: Option<User>) -> Option<Assignee> {
    user.map(|user| Assignee {
        id: user.id,
        role: user.role,
    })
}
