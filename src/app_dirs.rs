use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "marmoset-type";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    pub fn config_path() -> PathBuf {
        match Self::project() {
            Some(pd) => pd.config_dir().join("config.json"),
            None => PathBuf::from("marmoset_config.json"),
        }
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join("marmoset.log"))
        } else {
            Self::project().map(|pd| pd.data_local_dir().join("marmoset.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_json() {
        assert!(AppDirs::config_path().ends_with("config.json"));
    }

    #[test]
    fn log_path_names_the_file() {
        if let Some(path) = AppDirs::log_path() {
            assert!(path.ends_with("marmoset.log"));
        }
    }
}
