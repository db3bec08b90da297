use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::LoginIdentifier;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        // Friendly early rejection; the repository still enforces uniqueness
        // for concurrent registrations.
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(command.password.expose())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            full_name: command.full_name,
            username: command.username,
            email: command.email,
            password_hash,
            date_of_birth: command.date_of_birth,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn get_user_by_login(&self, identifier: &LoginIdentifier) -> Result<User, UserError> {
        self.repository
            .find_by_email_or_username(&identifier.lookup_key())
            .await?
            .ok_or(UserError::InvalidCredentials)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::FullName;
    use crate::domain::user::models::Password;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn find_by_email_or_username(&self, identifier: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn register_command(username: &str, email: &str) -> RegisterCommand {
        RegisterCommand {
            full_name: FullName::new("Jane Doe".to_string()).unwrap(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password: Password::new("secret1".to_string()).unwrap(),
            date_of_birth: None,
        }
    }

    fn stored_user(username: &str, email: &str) -> User {
        User {
            id: UserId::new(),
            full_name: FullName::new("Jane Doe".to_string()).unwrap(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            date_of_birth: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "janedoe"
                    && user.email.as_str() == "jane@x.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "secret1"
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let user = service
            .register(register_command("janedoe", "jane@x.com"))
            .await
            .expect("Registration failed");

        assert_eq!(user.full_name.as_str(), "Jane Doe");
        assert_eq!(user.username.as_str(), "janedoe");
        // Password is hashed with real Argon2
        assert!(auth::PasswordHasher::new().verify("secret1", &user.password_hash));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("someoneelse", "jane@x.com"))));
        repository.expect_find_by_username().times(0);
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register(register_command("janedoe", "jane@x.com"))
            .await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("janedoe", "other@x.com"))));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register(register_command("janedoe", "jane@x.com"))
            .await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_lost_race_surfaces_conflict() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register(register_command("janedoe", "jane@x.com"))
            .await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_get_user_by_login_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email_or_username()
            .withf(|identifier| identifier == "jane@x.com")
            .times(1)
            .returning(|_| Ok(Some(stored_user("janedoe", "jane@x.com"))));

        let service = UserService::new(Arc::new(repository));

        let identifier = LoginIdentifier::new("Jane@X.com".to_string()).unwrap();
        let user = service.get_user_by_login(&identifier).await.unwrap();
        assert_eq!(user.username.as_str(), "janedoe");
    }

    #[tokio::test]
    async fn test_get_user_by_login_unknown_is_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email_or_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let identifier = LoginIdentifier::new("nobody".to_string()).unwrap();
        let result = service.get_user_by_login(&identifier).await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();

        let expected_user = stored_user("janedoe", "jane@x.com");
        let user_id = expected_user.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(expected_user.clone())));

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user(&user_id).await.unwrap();
        assert_eq!(user.id, user_id);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }
}
