use crate::services::AuthMode;

pub fn heading_for(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Welcome Back",
        AuthMode::Register => "Create Account",
    }
}

pub fn subheading_for(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Sign in to continue to Aone Real Estate",
        AuthMode::Register => "Join Aone Real Estate to get started",
    }
}

pub fn submit_label_for(mode: AuthMode, pending: bool) -> &'static str {
    match (mode, pending) {
        (AuthMode::SignIn, false) => "Sign In",
        (AuthMode::SignIn, true) => "Signing in...",
        (AuthMode::Register, false) => "Create Account",
        (AuthMode::Register, true) => "Creating account...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_tracks_the_mode() {
        assert_eq!(heading_for(AuthMode::SignIn), "Welcome Back");
        assert_eq!(heading_for(AuthMode::Register), "Create Account");
        assert!(subheading_for(AuthMode::Register).contains("Join"));
        assert_eq!(submit_label_for(AuthMode::SignIn, true), "Signing in...");
        assert_eq!(submit_label_for(AuthMode::Register, false), "Create Account");
    }
}
