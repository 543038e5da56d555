use std::env;
use std::path::PathBuf;

use sala::security::SecurityMode;

#[derive(Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub frontend_dir: PathBuf,
    pub contact_api_url: String,
    pub analytics_url: Option<String>,
    pub ga_tag_id: Option<String>,
    pub security_mode: SecurityMode,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub https: bool,
}

impl Config {
    pub fn build() -> Self {
        // Build the config from ENV vars
        let port = env::var("PORT")
            .expect("PORT is required")
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let mut https = false;
        if let Ok(https_str) = env::var("HTTPS") {
            https = &https_str == "1"
        }

        let frontend_dir: PathBuf = env::var("FRONTEND_DIR")
            .expect("FRONTEND_DIR is required")
            .into();

        let contact_api_url = env::var("CONTACT_API_URL").expect("CONTACT_API_URL is required");

        let analytics_url = optional_var("ANALYTICS_URL");
        let ga_tag_id = optional_var("GA_TAG_ID");

        // Unknown APP_ENV values harden rather than relax
        let app_env = env::var("APP_ENV").unwrap_or_default();
        let security_mode = SecurityMode::from_env_name(app_env.as_str());

        // Validate config values
        if port == 0 {
            panic!("PORT is required");
        }

        if contact_api_url.is_empty() {
            panic!("CONTACT_API_URL is required");
        }

        if !frontend_dir.exists() {
            panic!("FRONTEND_DIR does not exist");
        }

        Config {
            server: ServerConfig { port, https },
            frontend_dir,
            contact_api_url,
            analytics_url,
            ga_tag_id,
            security_mode,
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(val) => {
            if !val.is_empty() {
                Some(val)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
