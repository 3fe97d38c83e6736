use actix_web::{get, patch, web};
use domain_ticket::model::entity::WorkOrder;

use super::{dtos::SubmitResultsRequest, extract_uuid, ApiResponder, ApiResult, Authenticated};
use crate::infrastructure::ServiceProviderScoped;

#[get("workorders/{id}")]
pub async fn get_work_order(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<WorkOrder> {
    let id = extract_uuid(&id)?;
    Ok(ApiResponder(scoped.work_order_service.get(&actor, id).await?))
}

#[patch("workorders/{id}/start")]
pub async fn start_work(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<WorkOrder> {
    let id = extract_uuid(&id)?;
    Ok(ApiResponder(scoped.work_order_service.start(&actor, id).await?))
}

#[patch("workorders/{id}/submit-results")]
pub async fn submit_results(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
    body: web::Json<SubmitResultsRequest>,
) -> ApiResult<WorkOrder> {
    let id = extract_uuid(&id)?;
    let work_order = scoped
        .work_order_service
        .submit_results(&actor, id, body.into_inner().results)
        .await?;
    Ok(ApiResponder(work_order))
}

#[patch("workorders/{id}/close")]
pub async fn close_work_order(
    scoped: ServiceProviderScoped,
    Authenticated(actor): Authenticated,
    id: web::Path<String>,
) -> ApiResult<WorkOrder> {
    let id = extract_uuid(&id)?;
    Ok(ApiResponder(scoped.work_order_service.close(&actor, id).await?))
}
