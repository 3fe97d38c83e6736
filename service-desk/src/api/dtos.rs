use architecture::model::Pagination;
use domain_ticket::model::vo::WorkResults;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// 分配技术员请求
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignTechnicianRequest {
    #[serde(rename = "technicienID", alias = "technicianId")]
    pub technician_id: Uuid,
    /// 仅对干预申请有效
    #[serde(default)]
    pub equipment_id: Option<Uuid>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterventionRequestRequest {
    pub claim_id: Uuid,
}

#[derive(Deserialize, Debug)]
pub struct SubmitResultsRequest {
    pub results: WorkResults,
}

pub type PaginationQuery = Pagination;
