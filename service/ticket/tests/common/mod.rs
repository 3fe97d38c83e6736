//! In-memory store implementing every repository the ticket services need.
//! Writes are queued and applied on `save_changed`, guarded updates fail the
//! whole batch the way the database transaction does.
use std::{collections::HashMap, sync::Arc, sync::Mutex};

use architecture::{
    model::{Pagination, PaginationResult},
    repository::{DBRepository, MutableRepository, ReadOnlyRepository, StaleWrite},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_account::{
    model::entity::{Role, User},
    repository::UserRepo,
};
use domain_ticket::{
    model::{
        entity::{
            claim::ClaimStatus, intervention_request::InterventionRequestStatus,
            work_order::WorkOrderStatus, Claim, Equipment, EquipmentOnRequest,
            InterventionRequest, WorkOrder,
        },
        vo::{Actor, CascadePolicy},
    },
    repository::{
        ClaimRepo, ClaimScope, EquipmentOnRequestRepo, InterventionRequestRepo, WorkOrderRepo,
    },
};
use service_ticket::{
    ClaimServiceImpl, EffectApplyServiceImpl, InterventionRequestServiceImpl,
    WorkOrderServiceImpl,
};
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct Tables {
    pub users: HashMap<Uuid, User>,
    pub claims: HashMap<Uuid, Claim>,
    pub intervention_requests: HashMap<Uuid, InterventionRequest>,
    pub equipments: HashMap<Uuid, Equipment>,
    pub equipment_on_requests: HashMap<Uuid, EquipmentOnRequest>,
    pub work_orders: HashMap<Uuid, WorkOrder>,
}

enum Write {
    User(User),
    Claim(Claim, Option<ClaimStatus>),
    /// claim update requiring the read version and no unclosed work order
    ClaimIdle(Claim, Claim),
    ClaimTouch(Uuid, ClaimStatus, DateTime<Utc>),
    InterventionRequest(InterventionRequest, Option<InterventionRequestStatus>),
    EquipmentOnRequest(EquipmentOnRequest),
    WorkOrder(WorkOrder, Option<WorkOrderStatus>),
}

#[derive(Default)]
pub struct MemoryRepo {
    tables: Mutex<Tables>,
    queue: Mutex<Vec<Write>>,
}

impl MemoryRepo {
    pub fn snapshot(&self) -> Tables {
        self.tables.lock().unwrap().clone()
    }

    pub fn seed_user(&self, name: &str, role: Role) -> Actor {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            role,
            position: None,
            password_hash: String::new(),
            created_time: Utc::now(),
        };
        let actor = Actor::new(user.id, role);
        self.tables.lock().unwrap().users.insert(user.id, user);
        actor
    }

    pub fn seed_equipment(&self, name: &str, serial_number: &str) -> Uuid {
        let equipment = Equipment {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            serial_number: serial_number.to_owned(),
        };
        let id = equipment.id;
        self.tables.lock().unwrap().equipments.insert(id, equipment);
        id
    }

    fn push(&self, write: Write) {
        self.queue.lock().unwrap().push(write);
    }

    fn commit(&self) -> anyhow::Result<bool> {
        let writes = std::mem::take(&mut *self.queue.lock().unwrap());
        let mut tables = self.tables.lock().unwrap();
        let mut next = tables.clone();
        for write in writes {
            match write {
                Write::User(user) => {
                    next.users.insert(user.id, user);
                }
                Write::Claim(claim, expected) => {
                    guard(next.claims.get(&claim.id).map(|c| c.status), expected, "Claim", claim.id)?;
                    next.claims.insert(claim.id, claim);
                }
                Write::ClaimIdle(claim, current) => {
                    let unchanged = next.claims.get(&claim.id).is_some_and(|stored| {
                        stored.status == current.status
                            && stored.last_modified_time == current.last_modified_time
                    });
                    let busy = next.work_orders.values().any(|order| {
                        order.status.is_open()
                            && next
                                .intervention_requests
                                .get(&order.intervention_request_id)
                                .is_some_and(|request| request.claim_id == claim.id)
                    });
                    if !unchanged || busy {
                        return Err(StaleWrite {
                            entity: "Claim",
                            id: claim.id,
                        }
                        .into());
                    }
                    next.claims.insert(claim.id, claim);
                }
                Write::ClaimTouch(id, expected, now) => {
                    guard(next.claims.get(&id).map(|c| c.status), Some(expected), "Claim", id)?;
                    if let Some(claim) = next.claims.get_mut(&id) {
                        claim.last_modified_time = now;
                    }
                }
                Write::InterventionRequest(request, expected) => {
                    guard(
                        next.intervention_requests.get(&request.id).map(|r| r.status),
                        expected,
                        "InterventionRequest",
                        request.id,
                    )?;
                    next.intervention_requests.insert(request.id, request);
                }
                Write::EquipmentOnRequest(equipment) => {
                    next.equipment_on_requests.insert(equipment.id, equipment);
                }
                Write::WorkOrder(order, expected) => {
                    guard(
                        next.work_orders.get(&order.id).map(|o| o.status),
                        expected,
                        "WorkOrder",
                        order.id,
                    )?;
                    next.work_orders.insert(order.id, order);
                }
            }
        }
        *tables = next;
        Ok(true)
    }
}

fn guard<S: PartialEq + Copy>(
    current: Option<S>,
    expected: Option<S>,
    entity: &'static str,
    id: Uuid,
) -> anyhow::Result<()> {
    match expected {
        Some(expected) if current != Some(expected) => Err(StaleWrite { entity, id }.into()),
        _ => Ok(()),
    }
}

macro_rules! memory_repository {
    ($entity:ty, $table:ident, $write:expr) => {
        #[async_trait]
        impl ReadOnlyRepository<$entity> for MemoryRepo {
            async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<$entity>> {
                Ok(self.tables.lock().unwrap().$table.get(&id).cloned())
            }
        }

        #[async_trait]
        impl MutableRepository<$entity> for MemoryRepo {
            async fn insert(&self, entity: &$entity) -> anyhow::Result<Uuid> {
                self.push(($write)(entity.clone()));
                Ok(entity.id)
            }

            async fn save_changed(&self) -> anyhow::Result<bool> {
                self.commit()
            }
        }

        impl DBRepository<$entity> for MemoryRepo {}
    };
}

memory_repository!(User, users, Write::User);
memory_repository!(Claim, claims, |claim| Write::Claim(claim, None));
memory_repository!(InterventionRequest, intervention_requests, |request| {
    Write::InterventionRequest(request, None)
});
memory_repository!(EquipmentOnRequest, equipment_on_requests, Write::EquipmentOnRequest);
memory_repository!(WorkOrder, work_orders, |order| Write::WorkOrder(order, None));

#[async_trait]
impl ReadOnlyRepository<Equipment> for MemoryRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Equipment>> {
        Ok(self.tables.lock().unwrap().equipments.get(&id).cloned())
    }
}

#[async_trait]
impl UserRepo for MemoryRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .users
            .values()
            .find(|user| user.name == name)
            .cloned())
    }
}

#[async_trait]
impl ClaimRepo for MemoryRepo {
    async fn get_page(
        &self,
        scope: ClaimScope,
        pagination: &Pagination,
    ) -> anyhow::Result<PaginationResult<Claim>> {
        let tables = self.tables.lock().unwrap();
        let mut claims = tables
            .claims
            .values()
            .filter(|claim| match scope {
                ClaimScope::All => true,
                ClaimScope::Agent(id) => claim.agent_id == id,
                ClaimScope::Technician(id) => claim.technician_id == Some(id),
            })
            .cloned()
            .collect::<Vec<_>>();
        claims.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        let total = claims.len() as u64;
        let items = claims
            .into_iter()
            .skip((pagination.page() * pagination.limit()) as usize)
            .take(pagination.limit() as usize)
            .collect();
        Ok(PaginationResult { items, total })
    }

    async fn update_with_lock(&self, claim: &Claim, expected: ClaimStatus) -> anyhow::Result<()> {
        self.push(Write::Claim(claim.clone(), Some(expected)));
        Ok(())
    }

    async fn update_if_idle(&self, claim: &Claim, current: &Claim) -> anyhow::Result<()> {
        self.push(Write::ClaimIdle(claim.clone(), current.clone()));
        Ok(())
    }

    async fn touch_with_lock(
        &self,
        id: Uuid,
        expected: ClaimStatus,
        now: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        self.push(Write::ClaimTouch(id, expected, now));
        Ok(())
    }
}

#[async_trait]
impl InterventionRequestRepo for MemoryRepo {
    async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<InterventionRequest>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .intervention_requests
            .values()
            .filter(|request| request.claim_id == claim_id)
            .cloned()
            .collect())
    }

    async fn update_with_lock(
        &self,
        request: &InterventionRequest,
        expected: InterventionRequestStatus,
    ) -> anyhow::Result<()> {
        self.push(Write::InterventionRequest(request.clone(), Some(expected)));
        Ok(())
    }
}

#[async_trait]
impl WorkOrderRepo for MemoryRepo {
    async fn get_by_intervention_request(
        &self,
        intervention_request_id: Uuid,
    ) -> anyhow::Result<Option<WorkOrder>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .work_orders
            .values()
            .find(|order| order.intervention_request_id == intervention_request_id)
            .cloned())
    }

    async fn get_by_claim(&self, claim_id: Uuid) -> anyhow::Result<Vec<WorkOrder>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .work_orders
            .values()
            .filter(|order| {
                tables
                    .intervention_requests
                    .get(&order.intervention_request_id)
                    .is_some_and(|request| request.claim_id == claim_id)
            })
            .cloned()
            .collect())
    }

    async fn update_with_lock(
        &self,
        order: &WorkOrder,
        expected: WorkOrderStatus,
    ) -> anyhow::Result<()> {
        self.push(Write::WorkOrder(order.clone(), Some(expected)));
        Ok(())
    }
}

#[async_trait]
impl EquipmentOnRequestRepo for MemoryRepo {
    async fn get_by_intervention_request(
        &self,
        intervention_request_id: Uuid,
    ) -> anyhow::Result<Vec<EquipmentOnRequest>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .equipment_on_requests
            .values()
            .filter(|equipment| equipment.intervention_request_id == intervention_request_id)
            .cloned()
            .collect())
    }
}

pub struct Services {
    pub repo: Arc<MemoryRepo>,
    pub claims: ClaimServiceImpl,
    pub intervention_requests: InterventionRequestServiceImpl,
    pub work_orders: WorkOrderServiceImpl,
}

pub fn services(policy: CascadePolicy) -> Services {
    let repo = Arc::new(MemoryRepo::default());
    let effect_service = Arc::new(
        EffectApplyServiceImpl::builder()
            .claim_repo(repo.clone())
            .intervention_request_repo(repo.clone())
            .equipment_on_request_repo(repo.clone())
            .work_order_repo(repo.clone())
            .build(),
    );
    Services {
        claims: ClaimServiceImpl::builder()
            .claim_repo(repo.clone())
            .intervention_request_repo(repo.clone())
            .work_order_repo(repo.clone())
            .user_repo(repo.clone())
            .effect_service(effect_service.clone())
            .policy(policy)
            .build(),
        intervention_requests: InterventionRequestServiceImpl::builder()
            .intervention_request_repo(repo.clone())
            .claim_repo(repo.clone())
            .work_order_repo(repo.clone())
            .equipment_on_request_repo(repo.clone())
            .equipment_repo(repo.clone())
            .user_repo(repo.clone())
            .effect_service(effect_service.clone())
            .build(),
        work_orders: WorkOrderServiceImpl::builder()
            .work_order_repo(repo.clone())
            .intervention_request_repo(repo.clone())
            .claim_repo(repo.clone())
            .effect_service(effect_service)
            .build(),
        repo,
    }
}
