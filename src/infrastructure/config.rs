use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_path: PathBuf,
    pub refresh_interval_secs: u64,
    pub username: String,
    pub password: String,
    pub profile: String,
}

impl Config {
    pub fn from_env() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let storage_path = env::var("STORAGE_PATH").map(PathBuf::from).unwrap_or_else(|_| {
            if profile == "default" {
                PathBuf::from("loantrack.json")
            } else {
                PathBuf::from(format!("loantrack_{}.json", profile))
            }
        });

        Self {
            storage_path,
            refresh_interval_secs: env::var("REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "junior".to_string()),
            password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "jr10".to_string()),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PROFILE",
            "STORAGE_PATH",
            "REFRESH_INTERVAL_SECS",
            "ADMIN_USERNAME",
            "ADMIN_PASSWORD",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        clear_env();
        let config = Config::from_env();

        assert_eq!(config.storage_path, PathBuf::from("loantrack.json"));
        assert_eq!(config.refresh_interval_secs, 3600);
        assert_eq!(config.username, "junior");
        assert_eq!(config.password, "jr10");
        assert_eq!(config.profile, "default");
    }

    #[test]
    #[serial]
    fn profile_changes_the_storage_filename() {
        clear_env();
        unsafe { env::set_var("PROFILE", "demo") };
        let config = Config::from_env();
        clear_env();

        assert_eq!(config.storage_path, PathBuf::from("loantrack_demo.json"));
        assert_eq!(config.profile, "demo");
    }

    #[test]
    #[serial]
    fn environment_overrides_are_honored() {
        clear_env();
        unsafe {
            env::set_var("STORAGE_PATH", "/tmp/custom.json");
            env::set_var("REFRESH_INTERVAL_SECS", "60");
            env::set_var("ADMIN_USERNAME", "admin");
            env::set_var("ADMIN_PASSWORD", "secret");
        }
        let config = Config::from_env();
        clear_env();

        assert_eq!(config.storage_path, PathBuf::from("/tmp/custom.json"));
        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
    }

    #[test]
    #[serial]
    fn unparseable_interval_falls_back_to_default() {
        clear_env();
        unsafe { env::set_var("REFRESH_INTERVAL_SECS", "soon") };
        let config = Config::from_env();
        clear_env();

        assert_eq!(config.refresh_interval_secs, 3600);
    }
}
