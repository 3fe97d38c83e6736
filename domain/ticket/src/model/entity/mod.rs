pub mod claim;
pub mod equipment;
pub mod equipment_on_request;
pub mod intervention_request;
pub mod work_order;

#[rustfmt::skip]
pub use {
    claim::Claim,
    equipment::Equipment,
    equipment_on_request::EquipmentOnRequest,
    intervention_request::InterventionRequest,
    work_order::WorkOrder,
};
