use leptos::*;

use crate::components::layout::Layout;
use crate::pages::{AuthModal, BookingModal, ChatView, HomePage, StaffDirectoryModal};
use crate::services::Services;
use crate::state::auth::AuthProvider;
use crate::state::ui::{provide_ui_state, MainView};

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(Services::mock());
    view! {
        <AuthProvider>
            <AppShell/>
        </AuthProvider>
    }
}

/// Landing/chat switch plus the three overlays. Overlay components mount
/// once and toggle their own visibility off the shared overlay enum, so
/// wizard state survives closing and reopening the modal.
#[component]
fn AppShell() -> impl IntoView {
    let ui = provide_ui_state();

    view! {
        <Layout>
            {move || match ui.view.get() {
                MainView::Landing => view! { <HomePage/> }.into_view(),
                MainView::Chat => view! { <ChatView/> }.into_view(),
            }}
        </Layout>
        <StaffDirectoryModal/>
        <BookingModal/>
        <AuthModal/>
    }
}
