use crate::services::{
    use_services, AuthService, AuthenticatedUser, ServiceError, SignInRequest, SocialProvider,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<AuthenticatedUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(AuthState::default());
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn sign_in_request(
    request: SignInRequest,
    auth_service: &dyn AuthService,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<AuthenticatedUser, ServiceError> {
    set_auth_state.update(|state| state.loading = true);

    match auth_service.authenticate(request).await {
        Ok(user) => {
            apply_signed_in(set_auth_state, user.clone());
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn social_sign_in_request(
    provider: SocialProvider,
    auth_service: &dyn AuthService,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<AuthenticatedUser, ServiceError> {
    set_auth_state.update(|state| state.loading = true);

    match auth_service.social(provider).await {
        Ok(user) => {
            apply_signed_in(set_auth_state, user.clone());
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

fn apply_signed_in(set_auth_state: WriteSignal<AuthState>, user: AuthenticatedUser) {
    set_auth_state.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
        state.loading = false;
    });
}

pub fn use_sign_in_action() -> Action<SignInRequest, Result<AuthenticatedUser, ServiceError>> {
    let (_auth, set_auth) = use_auth();
    let services = use_services();

    create_action(move |request: &SignInRequest| {
        let payload = request.clone();
        let auth_service = services.auth.clone();
        async move { sign_in_request(payload, auth_service.as_ref(), set_auth).await }
    })
}

pub fn use_social_sign_in_action() -> Action<SocialProvider, Result<AuthenticatedUser, ServiceError>>
{
    let (_auth, set_auth) = use_auth();
    let services = use_services();

    create_action(move |provider: &SocialProvider| {
        let provider = *provider;
        let auth_service = services.auth.clone();
        async move { social_sign_in_request(provider, auth_service.as_ref(), set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
            assert!(!snapshot.loading);
        });
    }

    #[test]
    fn applying_a_signed_in_user_flips_the_flags() {
        with_runtime(|| {
            let (state, set_state) = create_signal(AuthState::default());
            apply_signed_in(
                set_state,
                AuthenticatedUser {
                    id: "u1".into(),
                    email: "jane@example.com".into(),
                    display_name: "jane".into(),
                },
            );
            let snapshot = state.get();
            assert!(snapshot.is_authenticated);
            assert_eq!(
                snapshot.user.map(|user| user.email),
                Some("jane@example.com".to_string())
            );
        });
    }
}
