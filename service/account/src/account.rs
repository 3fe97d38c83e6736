use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_account::{
    exception::{AccountException, AccountResult},
    model::{
        entity::{Role, User},
        vo::{LoginInfo, NewUser},
    },
    repository::UserRepo,
    service::{AccountService, TokenService},
};
use uuid::Uuid;

use crate::password::{hash_password, verify_password};

#[derive(typed_builder::TypedBuilder)]
pub struct AccountServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    token_service: Arc<dyn TokenService>,
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn login(&self, name: &str, password: &str) -> AccountResult<LoginInfo> {
        let user = self
            .user_repo
            .find_by_name(name)
            .await?
            .filter(|user| verify_password(password, &user.password_hash))
            .ok_or(AccountException::InvalidCredentials)?;
        let (token, expires_at) = self.token_service.issue(&user)?;
        tracing::info!("User {} logged in as {}.", user.name, user.role);
        Ok(LoginInfo {
            token,
            expires_at,
            user,
        })
    }

    async fn create_user(&self, actor_role: Role, new_user: NewUser) -> AccountResult<User> {
        match actor_role {
            Role::Admin => {}
            Role::Technician | Role::Agent => return Err(AccountException::Forbidden),
        }
        self.register(new_user).await
    }

    async fn ensure_admin(&self, name: &str, password: &str) -> AccountResult<()> {
        if self.user_repo.find_by_name(name).await?.is_some() {
            return Ok(());
        }
        let admin = self
            .register(NewUser {
                name: name.to_owned(),
                password: password.to_owned(),
                role: Role::Admin,
                position: None,
            })
            .await?;
        tracing::info!("Created administrator {}.", admin.name);
        Ok(())
    }
}

impl AccountServiceImpl {
    async fn register(&self, new_user: NewUser) -> AccountResult<User> {
        let name = new_user.name.trim();
        if name.is_empty() {
            return Err(AccountException::Validation {
                reason: "user name must not be blank".to_owned(),
            });
        }
        if new_user.password.chars().count() < 6 {
            return Err(AccountException::Validation {
                reason: "password must be at least 6 characters".to_owned(),
            });
        }
        if self.user_repo.find_by_name(name).await?.is_some() {
            return Err(AccountException::NameTaken {
                name: name.to_owned(),
            });
        }
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            role: new_user.role,
            position: new_user.position,
            password_hash: hash_password(&new_user.password),
            created_time: Utc::now(),
        };
        self.user_repo.insert(&user).await?;
        self.user_repo.save_changed().await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use domain_account::mock::MockUserRepo;

    use super::*;
    use crate::JwtTokenServiceImpl;

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(
            JwtTokenServiceImpl::builder()
                .secret("secret")
                .issuer("service-desk")
                .expires_in(3600)
                .build(),
        )
    }

    fn stored_user(name: &str, password: &str, role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            role,
            position: Some("Help desk".to_owned()),
            password_hash: hash_password(password),
            created_time: Utc::now(),
        }
    }

    fn service(user_repo: MockUserRepo) -> AccountServiceImpl {
        AccountServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .token_service(token_service())
            .build()
    }

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_owned(),
            password: "p4ssword".to_owned(),
            role: Role::Technician,
            position: None,
        }
    }

    #[tokio::test]
    async fn login_issues_token_for_valid_credentials() {
        let user = stored_user("agent1", "p4ssword", Role::Agent);
        let id = user.id;
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_name()
            .returning(move |_| Ok(Some(user.clone())));
        let service = service(user_repo);

        let info = service.login("agent1", "p4ssword").await.unwrap();
        assert_eq!(info.user.id, id);
        assert_eq!(token_service().validate(&info.token).unwrap().id, id);

        assert!(matches!(
            service.login("agent1", "wrong").await,
            Err(AccountException::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn login_fails_for_unknown_user() {
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_name().returning(|_| Ok(None));
        assert!(matches!(
            service(user_repo).login("nobody", "p4ssword").await,
            Err(AccountException::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn only_admins_create_users() {
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_name().returning(|_| Ok(None));
        user_repo
            .expect_insert()
            .times(1)
            .returning(|user| Ok(user.id));
        user_repo.expect_save_changed().times(1).returning(|| Ok(true));
        let service = service(user_repo);

        assert!(matches!(
            service.create_user(Role::Agent, new_user("tech1")).await,
            Err(AccountException::Forbidden)
        ));
        let user = service.create_user(Role::Admin, new_user(" tech1 ")).await.unwrap();
        assert_eq!(user.name, "tech1");
        assert_eq!(user.role, Role::Technician);
        assert!(verify_password("p4ssword", &user.password_hash));
    }

    #[tokio::test]
    async fn rejects_taken_names_and_weak_passwords() {
        let existing = stored_user("tech1", "p4ssword", Role::Technician);
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_name()
            .returning(move |_| Ok(Some(existing.clone())));
        user_repo.expect_insert().never();
        let service = service(user_repo);

        assert!(matches!(
            service.create_user(Role::Admin, new_user("tech1")).await,
            Err(AccountException::NameTaken { .. })
        ));
        let mut weak = new_user("tech2");
        weak.password = "123".to_owned();
        assert!(matches!(
            service.create_user(Role::Admin, weak).await,
            Err(AccountException::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn ensure_admin_keeps_existing_account() {
        let admin = stored_user("admin", "p4ssword", Role::Admin);
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_name()
            .returning(move |_| Ok(Some(admin.clone())));
        user_repo.expect_insert().never();
        service(user_repo).ensure_admin("admin", "other-password").await.unwrap();
    }
}
