//! Stable extension ids
//!
//! Every theme name maps to a UUIDv5 under a fixed namespace, so the same
//! theme keeps the same id across builds and Thunderbird treats a rebuilt
//! package as an update of the installed one.

use uuid::Uuid;

/// Seed namespace for theme ids. Changing it changes every published id.
pub const NAMESPACE: Uuid = Uuid::from_u128(0x6da2d448_69ec_48e0_aabf_3c6379788110);

/// UUIDv5 of the theme name's UTF-8 bytes
pub fn theme_uuid(name: &str) -> Uuid {
    Uuid::new_v5(&NAMESPACE, name.as_bytes())
}

/// Brace-wrapped id for `applications.gecko.id`
pub fn gecko_id(name: &str) -> String {
    format!("{{{}}}", theme_uuid(name))
}
