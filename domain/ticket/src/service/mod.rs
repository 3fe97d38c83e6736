mod claim;
mod effect;
mod intervention_request;
mod work_order;

#[rustfmt::skip]
pub use {
    claim::ClaimService,
    effect::EffectApplyService,
    intervention_request::InterventionRequestService,
    work_order::WorkOrderService,
};
