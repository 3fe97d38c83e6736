use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 级联效果描述，由调用方在同一事务中执行
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// 为报修单创建待处理的干预申请，预先指定报修单的技术员
    CreateInterventionRequest {
        claim_id: Uuid,
        technician_id: Option<Uuid>,
    },
    /// 将报修单下未关闭的干预申请与工单转交给新的技术员
    /// `None` 表示撤回技术员，此时不得存在未关闭的工单
    TransferWork {
        claim_id: Uuid,
        technician_id: Option<Uuid>,
    },
    /// 关闭干预申请
    CloseInterventionRequest { intervention_request_id: Uuid },
    /// 记录干预申请关联的设备
    CreateEquipmentOnRequest {
        intervention_request_id: Uuid,
        equipment_id: Option<Uuid>,
    },
    /// 为干预申请创建待开始的工单
    CreateWorkOrder {
        intervention_request_id: Uuid,
        claim_number: String,
        technician_id: Uuid,
    },
    /// 将处理中的报修单标记为已解决
    ResolveClaim {
        claim_id: Uuid,
        resolved_at: DateTime<Utc>,
    },
}
