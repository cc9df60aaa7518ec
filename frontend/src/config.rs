use std::sync::OnceLock;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Contact details surfaced in the header, footer and auth copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyProfile {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub established: u16,
}

static AGENCY: OnceLock<AgencyProfile> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

const DEFAULT_TIME_ZONE: Tz = chrono_tz::Australia::Adelaide;

pub fn agency() -> &'static AgencyProfile {
    AGENCY.get_or_init(|| AgencyProfile {
        name: "Aone Real Estate".into(),
        tagline: "Your trusted partner in Adelaide real estate".into(),
        phone: "+61 8 1234 5678".into(),
        email: "info@aonerealestate.com.au".into(),
        established: 2008,
    })
}

/// Display time zone for "today" and message timestamps. An optional
/// `window.__AONE_CONFIG = { time_zone: "..." }` global overrides the
/// Adelaide default; anything unparseable falls back silently.
pub fn current_time_zone() -> Tz {
    *TIME_ZONE.get_or_init(resolve_time_zone)
}

fn resolve_time_zone() -> Tz {
    match configured_time_zone_name() {
        Some(name) => name.parse().unwrap_or_else(|_| {
            log::warn!("unrecognised time zone {:?}; using {}", name, DEFAULT_TIME_ZONE);
            DEFAULT_TIME_ZONE
        }),
        None => DEFAULT_TIME_ZONE,
    }
}

#[cfg(target_arch = "wasm32")]
fn configured_time_zone_name() -> Option<String> {
    // Expect optional global object: window.__AONE_CONFIG = { time_zone: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__AONE_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    js_sys::Reflect::get(&obj, &"time_zone".into())
        .ok()
        .and_then(|value| value.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_time_zone_name() -> Option<String> {
    None
}

pub fn init() {
    let tz = current_time_zone();
    log::info!("runtime config initialised (time zone {})", tz);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_zone_defaults_to_adelaide_on_host() {
        assert_eq!(current_time_zone(), chrono_tz::Australia::Adelaide);
    }

    #[test]
    fn agency_profile_has_contact_details() {
        let profile = agency();
        assert!(profile.email.contains('@'));
        assert!(!profile.phone.is_empty());
    }
}
