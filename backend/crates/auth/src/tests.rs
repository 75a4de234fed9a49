//! Auth crate integration tests
//!
//! Exercises the use cases end to end against an in-memory repository.

use std::sync::{Arc, Mutex};

use crate::application::config::AuthConfig;
use crate::application::token::{TokenIssuer, UserSnapshot};
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};
use kernel::error::kind::ErrorKind;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct InMemoryUserRepository {
    users: Mutex<Vec<(User, Credentials)>>,
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User, credentials: &Credentials) -> AuthResult<()> {
        self.users
            .lock()
            .unwrap()
            .push((user.clone(), credentials.clone()));
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.user_id == *user_id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email.as_str() == email.as_str())
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.user_name.canonical() == user_name.canonical())
            .map(|(u, _)| u.clone()))
    }

    async fn find_credentials(&self, user_id: &UserId) -> AuthResult<Option<Credentials>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.user_id == *user_id)
            .map(|(_, c)| c.clone()))
    }

    async fn exists_by_email_or_user_name(
        &self,
        email: &Email,
        user_name: &UserName,
    ) -> AuthResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|(u, _)| {
            u.email.as_str() == email.as_str()
                || u.user_name.canonical() == user_name.canonical()
        }))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>) {
    (
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(AuthConfig::with_random_secret()),
    )
}

fn john_input() -> SignUpInput {
    SignUpInput {
        full_name: "John Doe".to_string(),
        email: "doe.john@example.com".to_string(),
        user_name: "doe.john".to_string(),
        password: "john.doe.123".to_string(),
    }
}

async fn register_john(
    repo: &Arc<InMemoryUserRepository>,
    config: &Arc<AuthConfig>,
) -> crate::application::SignUpOutput {
    SignUpUseCase::new(repo.clone(), config.clone())
        .execute(john_input())
        .await
        .unwrap()
}

// ============================================================================
// Sign up
// ============================================================================

mod sign_up_tests {
    use super::*;

    #[tokio::test]
    async fn test_signup_creates_user_and_token() {
        let (repo, config) = setup();

        let output = register_john(&repo, &config).await;

        assert_eq!(output.user.email.as_str(), "doe.john@example.com");
        assert_eq!(output.user.user_name.original(), "doe.john");

        // Token must embed the newly created account, not some other identity
        let snapshot = TokenIssuer::new(&config).verify(&output.token).unwrap();
        assert_eq!(snapshot, UserSnapshot::from(&output.user));
        assert_eq!(snapshot.user_id, *output.user.user_id.as_uuid());
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_conflict() {
        let (repo, config) = setup();
        register_john(&repo, &config).await;

        let err = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(john_input())
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailOrUserNameTaken));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_duplicate_email_with_different_user_name_is_conflict() {
        let (repo, config) = setup();
        register_john(&repo, &config).await;

        let err = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                user_name: "someone.else".to_string(),
                ..john_input()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailOrUserNameTaken));
    }

    #[tokio::test]
    async fn test_invalid_email_is_validation_error() {
        let (repo, config) = setup();

        let err = SignUpUseCase::new(repo, config)
            .execute(SignUpInput {
                email: "not-an-email".to_string(),
                ..john_input()
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn test_short_password_is_validation_error() {
        let (repo, config) = setup();

        let err = SignUpUseCase::new(repo, config)
            .execute(SignUpInput {
                password: "short".to_string(),
                ..john_input()
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn test_stored_hash_is_not_the_password() {
        let (repo, config) = setup();
        let output = register_john(&repo, &config).await;

        let credentials = repo
            .find_credentials(&output.user.user_id)
            .await
            .unwrap()
            .unwrap();

        let phc = credentials.password_hash.as_phc_string();
        assert!(phc.starts_with("$argon2id$"));
        assert!(!phc.contains("john.doe.123"));
    }
}

// ============================================================================
// Login
// ============================================================================

mod sign_in_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_by_user_name() {
        let (repo, config) = setup();
        let registered = register_john(&repo, &config).await;

        let output = SignInUseCase::new(repo.clone(), config.clone())
            .execute(SignInInput {
                identifier: "doe.john".to_string(),
                password: "john.doe.123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user.user_id, registered.user.user_id);
        assert!(TokenIssuer::new(&config).verify(&output.token).is_ok());
    }

    #[tokio::test]
    async fn test_login_by_email() {
        let (repo, config) = setup();
        let registered = register_john(&repo, &config).await;

        let output = SignInUseCase::new(repo.clone(), config.clone())
            .execute(SignInInput {
                identifier: "doe.john@example.com".to_string(),
                password: "john.doe.123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user.user_id, registered.user.user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let (repo, config) = setup();
        register_john(&repo, &config).await;

        let err = SignInUseCase::new(repo.clone(), config.clone())
            .execute(SignInInput {
                identifier: "doe.john".to_string(),
                password: "wrong.password.1".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let (repo, config) = setup();

        let err = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                identifier: "nobody".to_string(),
                password: "whatever.123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_unknown_email_is_not_found() {
        let (repo, config) = setup();
        register_john(&repo, &config).await;

        let err = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                identifier: "other@example.com".to_string(),
                password: "john.doe.123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_garbage_identifier_is_not_found_not_validation() {
        let (repo, config) = setup();

        let err = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                identifier: "@@@not valid@@@".to_string(),
                password: "whatever.123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
    }
}

// ============================================================================
// DTO / error surface
// ============================================================================

mod presentation_tests {
    use super::*;
    use crate::presentation::dto::{AuthResponse, UserDto};

    #[tokio::test]
    async fn test_user_dto_never_leaks_password_material() {
        let (repo, config) = setup();
        let output = register_john(&repo, &config).await;

        let json = serde_json::to_value(AuthResponse {
            user: UserDto::from(&output.user),
            token: output.token,
        })
        .unwrap();

        assert!(json["user"].get("password").is_none());
        assert!(json["user"].get("passwordHash").is_none());
        assert_eq!(json["user"]["username"], "doe.john");
        assert_eq!(json["user"]["fullName"], "John Doe");
    }

    #[test]
    fn test_error_kinds_map_to_spec_statuses() {
        assert_eq!(AuthError::MissingFields.kind(), ErrorKind::BadRequest);
        assert_eq!(
            AuthError::EmailOrUserNameTaken.kind(),
            ErrorKind::Conflict
        );
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::AccessDenied.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_internal_errors_are_masked() {
        let err = AuthError::Internal("connection pool exhausted".to_string());
        let app_error = err.to_app_error();

        assert_eq!(app_error.message(), "Something went wrong");
    }

    #[derive(Debug)]
    struct UniqueViolation;

    impl std::fmt::Display for UniqueViolation {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "duplicate key value violates unique constraint")
        }
    }

    impl std::error::Error for UniqueViolation {}

    impl sqlx::error::DatabaseError for UniqueViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    /// A duplicate that slips past the existence check and hits the
    /// unique constraint must still answer 409, not a masked 500.
    #[test]
    fn test_unique_violation_from_store_is_conflict() {
        let err: AuthError = sqlx::Error::Database(Box::new(UniqueViolation)).into();

        assert!(matches!(err, AuthError::EmailOrUserNameTaken));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_other_database_errors_stay_internal() {
        let err: AuthError = sqlx::Error::PoolTimedOut.into();

        assert!(matches!(err, AuthError::Database(_)));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.to_app_error().message(), "Something went wrong");
    }
}
