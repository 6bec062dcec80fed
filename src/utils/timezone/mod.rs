// Timezone enumeration for the editing surface
// The core never validates zone strings; it only offers the IANA list

use chrono_tz::{Tz, TZ_VARIANTS};

/// All IANA timezone identifiers, in chrono-tz's canonical order.
pub fn available_timezones() -> impl Iterator<Item = &'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name())
}

/// Look up a zone by its IANA identifier.
pub fn find_timezone(name: &str) -> Option<Tz> {
    name.parse().ok()
}
