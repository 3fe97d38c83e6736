mod claim;
mod equipment;
mod equipment_on_request;
mod intervention_request;
mod user;
mod work_order;
