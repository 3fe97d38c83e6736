use actix_web::{get, patch, post, web};
use architecture::response::PageInfo;
use domain_ticket::model::{entity::Claim, vo::NewClaim};

use super::{
    dtos::{AssignTechnicianRequest, PaginationQuery},
    extract_uuid, ApiResponder, ApiResult, Authenticated,
};
use crate::infrastructure::ServiceProviderScoped;

#[post("reclamations")]
pub async fn create_claim(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    body: web::Json<NewClaim>,
) -> ApiResult<Claim> {
    let claim = scoped
        .claim_service
        .create(&actor, body.into_inner())
        .await?;
    Ok(ApiResponder(claim))
}

#[get("reclamations")]
pub async fn list_claims(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    query: web::Query<PaginationQuery>,
) -> ApiResult<PageInfo<Claim>> {
    let result = scoped.claim_service.list(&actor, &query).await?;
    Ok(ApiResponder(PageInfo::new(
        query.page_index,
        query.limit(),
        result,
    )))
}

#[get("reclamations/technician/{technician_id}")]
pub async fn list_technician_claims(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    technician_id: web::Path<String>,
    query: web::Query<PaginationQuery>,
) -> ApiResult<PageInfo<Claim>> {
    let technician_id = extract_uuid(&technician_id)?;
    let result = scoped
        .claim_service
        .list_by_technician(&actor, technician_id, &query)
        .await?;
    Ok(ApiResponder(PageInfo::new(
        query.page_index,
        query.limit(),
        result,
    )))
}

#[get("reclamations/{id}")]
pub async fn get_claim(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<Claim> {
    let id = extract_uuid(&id)?;
    Ok(ApiResponder(scoped.claim_service.get(&actor, id).await?))
}

#[patch("reclamations/{id}/assign-technician")]
pub async fn assign_technician(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
    body: web::Json<AssignTechnicianRequest>,
) -> ApiResult<Claim> {
    let id = extract_uuid(&id)?;
    let claim = scoped
        .claim_service
        .assign_technician(&actor, id, body.technician_id)
        .await?;
    Ok(ApiResponder(claim))
}

#[patch("reclamations/{id}/remove-technician")]
pub async fn remove_technician(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<Claim> {
    let id = extract_uuid(&id)?;
    let claim = scoped.claim_service.remove_technician(&actor, id).await?;
    Ok(ApiResponder(claim))
}

#[patch("reclamations/{id}/close")]
pub async fn close_claim(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<Claim> {
    let id = extract_uuid(&id)?;
    Ok(ApiResponder(scoped.claim_service.close(&actor, id).await?))
}
