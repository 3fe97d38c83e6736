mod claim;
mod equipment_on_request;
mod intervention_request;
mod work_order;

#[rustfmt::skip]
pub use {
    claim::{ClaimRepo, ClaimScope},
    equipment_on_request::EquipmentOnRequestRepo,
    intervention_request::InterventionRequestRepo,
    work_order::WorkOrderRepo,
};
