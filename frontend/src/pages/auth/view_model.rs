use leptos::*;

use crate::services::{
    AuthMode, AuthenticatedUser, ServiceError, SignInRequest, SocialProvider,
};
use crate::state::auth;
use crate::state::ui::UiState;

#[derive(Clone, Copy)]
pub struct AuthViewModel {
    pub mode: RwSignal<AuthMode>,
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
    pub error: RwSignal<Option<ServiceError>>,
    pub sign_in_action: Action<SignInRequest, Result<AuthenticatedUser, ServiceError>>,
    pub social_action: Action<SocialProvider, Result<AuthenticatedUser, ServiceError>>,
}

fn apply_auth_result(
    result: Option<Result<AuthenticatedUser, ServiceError>>,
    error: RwSignal<Option<ServiceError>>,
    ui: UiState,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                error.set(None);
                ui.complete_auth();
            }
            Err(err) => error.set(Some(err)),
        }
    }
}

impl AuthViewModel {
    pub fn new(ui: UiState) -> Self {
        let mode = create_rw_signal(AuthMode::SignIn);
        let name = create_rw_signal(String::new());
        let email = create_rw_signal(String::new());
        let password = create_rw_signal(String::new());
        let show_password = create_rw_signal(false);
        let error = create_rw_signal(None::<ServiceError>);

        let sign_in_action = auth::use_sign_in_action();
        let social_action = auth::use_social_sign_in_action();

        {
            create_effect(move |_| {
                apply_auth_result(sign_in_action.value().get(), error, ui);
            });
        }
        {
            create_effect(move |_| {
                apply_auth_result(social_action.value().get(), error, ui);
            });
        }

        Self {
            mode,
            name,
            email,
            password,
            show_password,
            error,
            sign_in_action,
            social_action,
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        let sign_in = self.sign_in_action.pending();
        let social = self.social_action.pending();
        Signal::derive(move || sign_in.get() || social.get())
    }

    pub fn switch_mode(&self, mode: AuthMode) {
        self.mode.set(mode);
        self.error.set(None);
    }

    pub fn submit(&self) {
        if self.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        let mode = self.mode.get_untracked();
        let request = SignInRequest {
            mode,
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            name: match mode {
                AuthMode::Register => Some(self.name.get_untracked()),
                AuthMode::SignIn => None,
            },
        };
        self.sign_in_action.dispatch(request);
    }

    pub fn social(&self, provider: SocialProvider) {
        if self.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        self.social_action.dispatch(provider);
    }
}

pub fn use_auth_view_model(ui: UiState) -> AuthViewModel {
    match use_context::<AuthViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AuthViewModel::new(ui);
            provide_context(vm);
            vm
        }
    }
}
