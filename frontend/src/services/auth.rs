use async_trait::async_trait;
use uuid::Uuid;

use crate::services::latency::simulate_latency;
use crate::services::types::{AuthMode, AuthenticatedUser, ServiceError, SignInRequest, SocialProvider};

const SIGN_IN_LATENCY_MS: u32 = 1_500;
const SOCIAL_LATENCY_MS: u32 = 1_000;

/// Authentication boundary. The real system would call an identity provider
/// here; the mock accepts any plausible email plus a six-character password.
#[async_trait(?Send)]
pub trait AuthService {
    async fn authenticate(&self, request: SignInRequest) -> Result<AuthenticatedUser, ServiceError>;

    async fn social(&self, provider: SocialProvider) -> Result<AuthenticatedUser, ServiceError>;
}

#[derive(Debug, Default)]
pub struct MockAuthService;

#[async_trait(?Send)]
impl AuthService for MockAuthService {
    async fn authenticate(&self, request: SignInRequest) -> Result<AuthenticatedUser, ServiceError> {
        simulate_latency(SIGN_IN_LATENCY_MS).await;

        if !request.email.contains('@') || request.password.len() < 6 {
            return Err(ServiceError::auth_failed(
                "Invalid email or password too short (min 6 characters)",
            ));
        }
        if request.mode == AuthMode::Register
            && request.name.as_deref().unwrap_or("").trim().is_empty()
        {
            return Err(ServiceError::auth_failed("Please enter your name"));
        }

        let display_name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| display_name_from_email(&request.email));

        log::info!("mock auth: accepted {}", request.email);
        Ok(AuthenticatedUser {
            id: Uuid::new_v4().to_string(),
            email: request.email.trim().to_string(),
            display_name,
        })
    }

    async fn social(&self, provider: SocialProvider) -> Result<AuthenticatedUser, ServiceError> {
        simulate_latency(SOCIAL_LATENCY_MS).await;
        log::info!("mock auth: {} sign-in accepted", provider.label());
        Ok(AuthenticatedUser {
            id: Uuid::new_v4().to_string(),
            email: format!("guest@{}.example", provider.label().to_lowercase()),
            display_name: format!("{} guest", provider.label()),
        })
    }
}

fn display_name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or("Guest")
        .to_string()
}
