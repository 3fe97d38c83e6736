use actix_web::{get, patch, post, web};
use domain_ticket::model::entity::{EquipmentOnRequest, InterventionRequest};

use super::{
    dtos::{AssignTechnicianRequest, CreateInterventionRequestRequest},
    extract_uuid, ApiResponder, ApiResult, Authenticated,
};
use crate::infrastructure::ServiceProviderScoped;

#[post("intervention-requests")]
pub async fn create_intervention_request(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    body: web::Json<CreateInterventionRequestRequest>,
) -> ApiResult<InterventionRequest> {
    let request = scoped
        .intervention_request_service
        .create(&actor, body.claim_id)
        .await?;
    Ok(ApiResponder(request))
}

#[get("intervention-requests/{id}")]
pub async fn get_intervention_request(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<InterventionRequest> {
    let id = extract_uuid(&id)?;
    let request = scoped.intervention_request_service.get(&actor, id).await?;
    Ok(ApiResponder(request))
}

#[get("intervention-requests/{id}/equipments")]
pub async fn get_equipments(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<Vec<EquipmentOnRequest>> {
    let id = extract_uuid(&id)?;
    let equipments = scoped
        .intervention_request_service
        .get_equipments(&actor, id)
        .await?;
    Ok(ApiResponder(equipments))
}

#[patch("intervention-requests/{id}/assign-technician")]
pub async fn assign_technician(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
    body: web::Json<AssignTechnicianRequest>,
) -> ApiResult<InterventionRequest> {
    let id = extract_uuid(&id)?;
    let request = scoped
        .intervention_request_service
        .assign_technician(&actor, id, body.technician_id, body.equipment_id)
        .await?;
    Ok(ApiResponder(request))
}
