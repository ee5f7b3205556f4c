use log::Level;

/// Vertical offset (px) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Number of catalog entries shown before "View All Videos" is pressed.
pub const DEFAULT_VISIBLE_VIDEOS: usize = 6;

// EmailJS identifiers can be swapped at build time, e.g.
// `EMAILJS_SERVICE_ID=service_x trunk build --release`.

pub fn emailjs_endpoint() -> &'static str {
    match option_env!("EMAILJS_ENDPOINT") {
        Some(url) => url,
        None => "https://api.emailjs.com/api/v1.0/email/send",
    }
}

pub fn emailjs_service_id() -> &'static str {
    match option_env!("EMAILJS_SERVICE_ID") {
        Some(id) => id,
        None => "service_j7ymtxy",
    }
}

pub fn emailjs_template_id() -> &'static str {
    match option_env!("EMAILJS_TEMPLATE_ID") {
        Some(id) => id,
        None => "template_3hjwwrn",
    }
}

pub fn emailjs_public_key() -> &'static str {
    match option_env!("EMAILJS_PUBLIC_KEY") {
        Some(key) => key,
        None => "LD2Eei5oHam_KX25U",
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_tracks_build_profile() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
