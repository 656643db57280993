use log::Level;

pub const BRAND_NAME: &str = "KnowGrow";
pub const TAGLINE: &str = "Growing knowledge through artificial intelligence.";

/// Every page of this site is mounted below this prefix.
pub const HUB_PREFIX: &str = "/hub";

pub const ADMIN_EMAIL: &str = "nathishwarc@gmail.com";
pub const ADMIN_EMAIL_DISPLAY: &str = "admin@knowgrow.com";
pub const VERIFICATION_EMAIL: &str = "aiautomatedverify@gmail.com";

pub const WHATSAPP_URL: &str = "https://chat.whatsapp.com/BoTkCUH5DCDBk22ApdYl1D";
pub const TELEGRAM_URL: &str = "https://t.me/skilldevelopersteam";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/knowgrow.ai/";
pub const LINKEDIN_COMPANY_URL: &str = "https://www.linkedin.com/company/knowgrow/";
pub const LINKEDIN_FOUNDER_URL: &str = "https://www.linkedin.com/in/nathishwar/";
pub const GITHUB_URL: &str = "https://github.com/Nathishwar-prog";

#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:3000"  // Main application when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    ""  // Same origin in production
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Root of the main application, which owns `/` outside the hub.
pub fn home_url() -> String {
    format!("{}/", get_app_url())
}

/// Builds a `mailto:` href, optionally with an encoded subject line.
pub fn mailto(address: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", address, urlencoding::encode(subject)),
        None => format!("mailto:{}", address),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            mailto(VERIFICATION_EMAIL, Some("Student ID Verification")),
            "mailto:aiautomatedverify@gmail.com?subject=Student%20ID%20Verification"
        );
    }

    #[test]
    fn home_url_points_at_main_app_root() {
        let home = home_url();
        assert!(home.ends_with('/'));
        assert!(!home.starts_with(HUB_PREFIX));
        assert_eq!(home, format!("{}/", get_app_url()));
    }

    #[test]
    fn mailto_without_subject_is_bare() {
        assert_eq!(mailto(ADMIN_EMAIL, None), "mailto:nathishwarc@gmail.com");
    }
}
