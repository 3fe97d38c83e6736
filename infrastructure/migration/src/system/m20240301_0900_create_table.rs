use database_model::system::prelude::*;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{DbBackend, EntityTrait, Schema},
};

pub struct Migration;

fn get_seaorm_create_stmt<E: EntityTrait>(e: E) -> TableCreateStatement {
    let schema = Schema::new(DbBackend::Postgres);
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

fn get_seaorm_drop_stmt<E: EntityTrait>(e: E) -> TableDropStatement {
    Table::drop().table(e).if_exists().to_owned()
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_0900_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Parents first, the entity relations carry the chain foreign keys.
        let stmts = vec![
            get_seaorm_create_stmt(UserEntity),
            get_seaorm_create_stmt(EquipmentEntity),
            get_seaorm_create_stmt(ClaimEntity),
            get_seaorm_create_stmt(InterventionRequestEntity),
            get_seaorm_create_stmt(EquipmentOnRequestEntity),
            get_seaorm_create_stmt(WorkOrderEntity),
        ];
        for stmt in stmts {
            manager.create_table(stmt.to_owned()).await?;
        }
        let user_foreign_keys = vec![
            ForeignKey::create()
                .name("FK_Claim_Agent")
                .from(ClaimEntity, ClaimColumn::AgentId)
                .to(UserEntity, UserColumn::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade)
                .to_owned(),
            ForeignKey::create()
                .name("FK_Claim_Technician")
                .from(ClaimEntity, ClaimColumn::TechnicianId)
                .to(UserEntity, UserColumn::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .to_owned(),
            ForeignKey::create()
                .name("FK_InterventionRequest_Technician")
                .from(InterventionRequestEntity, InterventionRequestColumn::TechnicianId)
                .to(UserEntity, UserColumn::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .to_owned(),
            ForeignKey::create()
                .name("FK_WorkOrder_Technician")
                .from(WorkOrderEntity, WorkOrderColumn::TechnicianId)
                .to(UserEntity, UserColumn::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade)
                .to_owned(),
        ];
        for foreign_key in user_foreign_keys {
            manager.create_foreign_key(foreign_key).await?;
        }
        manager
            .create_index(
                Index::create()
                    .name("IDX_Claim_Technician")
                    .table(ClaimEntity)
                    .col(ClaimColumn::TechnicianId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("IDX_InterventionRequest_Claim")
                    .table(InterventionRequestEntity)
                    .col(InterventionRequestColumn::ClaimId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let stmts = vec![
            get_seaorm_drop_stmt(WorkOrderEntity),
            get_seaorm_drop_stmt(EquipmentOnRequestEntity),
            get_seaorm_drop_stmt(InterventionRequestEntity),
            get_seaorm_drop_stmt(ClaimEntity),
            get_seaorm_drop_stmt(EquipmentEntity),
            get_seaorm_drop_stmt(UserEntity),
        ];
        for stmt in stmts {
            manager.drop_table(stmt.to_owned()).await?;
        }
        Ok(())
    }
}
