use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub profile: String,
    pub static_dir: PathBuf,
    pub seed_demo: bool,
}

impl Config {
    /// Read configuration from the environment. A profile given on the
    /// command line takes precedence over `PROFILE`.
    pub fn from_env(profile_override: Option<String>) -> Self {
        let profile = profile_override
            .or_else(|| env::var("PROFILE").ok())
            .unwrap_or_else(|| "default".to_string());

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url(&profile));

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            seed_demo: env::var("SEED_DEMO").is_ok(),
            profile,
        }
    }
}

fn default_database_url(profile: &str) -> String {
    if profile == "default" {
        "sqlite://locallibrary.db?mode=rwc".to_string()
    } else {
        format!("sqlite://locallibrary_{}.db?mode=rwc", profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_url_per_profile() {
        assert_eq!(
            default_database_url("default"),
            "sqlite://locallibrary.db?mode=rwc"
        );
        assert_eq!(
            default_database_url("demo"),
            "sqlite://locallibrary_demo.db?mode=rwc"
        );
    }
}
