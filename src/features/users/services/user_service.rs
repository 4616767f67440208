use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, LoginRequestDto, UserResponseDto};
use crate::features::users::repositories::UserRepository;

const INVALID_CREDENTIALS_FORMAT: &str = "Invalid login or password format";

/// Service for user accounts
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users = self.repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: &str) -> Result<UserResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let data = dto.into_new_user()?;
        let user = self.repo.create(data).await?;

        tracing::info!("User created: id={}, login={}", user.id, user.login);

        Ok(user.into())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        tracing::info!("User deleted: id={}", id);
        Ok(())
    }

    /// Look up a user by login and check the password
    ///
    /// Malformed credentials are rejected before any lookup.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<UserResponseDto> {
        dto.validate()
            .map_err(|_| AppError::BadRequest(INVALID_CREDENTIALS_FORMAT.to_string()))?;

        let user = self
            .repo
            .find_by_login(&dto.login)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Cannot find user with login={}", dto.login))
            })?;

        if !user.password_matches(&dto.password) {
            tracing::warn!("Failed login attempt for login={}", dto.login);
            return Err(AppError::Unauthorized("Incorrect password".to_string()));
        }

        tracing::info!("User logged in: id={}", user.id);
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::repositories::InMemoryUserRepository;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn create_dto(id: &str, login: &str, password: &str) -> CreateUserDto {
        CreateUserDto {
            id: Some(id.to_string()),
            surname: Some(LastName().fake()),
            first_name: Some(FirstName().fake()),
            login: Some(login.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_dto(login: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_outcomes() {
        let service = service();
        service
            .create(create_dto("u1", "jdupont", "Secret123"))
            .await
            .unwrap();

        let user = tokio_test::assert_ok!(service.login(login_dto("jdupont", "Secret123")).await);
        assert_eq!(user.id, "u1");

        assert!(matches!(
            service.login(login_dto("jdupont", "Wrong123")).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            service.login(login_dto("nobody", "Secret123")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.login(login_dto("j.dupont", "Secret123")).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_login_rejects_format_that_create_allows() {
        let service = service();
        tokio_test::assert_ok!(
            service
                .create(create_dto("u3", "jean.dupont", "pass word!"))
                .await
        );

        assert!(matches!(
            service.login(login_dto("jean.dupont", "pass word!")).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_user_without_password_cannot_log_in() {
        let service = service();
        let mut dto = create_dto("u2", "nopass", "unused");
        dto.password = None;
        service.create(dto).await.unwrap();

        assert!(matches!(
            service.login(login_dto("nopass", "anything1")).await,
            Err(AppError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_get_and_delete_unknown_user() {
        let service = service();
        assert!(matches!(service.get("ghost").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.delete("ghost").await,
            Err(AppError::NotFound(_))
        ));
    }
}
