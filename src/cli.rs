use clap::Parser;
use std::path::PathBuf;

const DATA_DIR_NAME: &str = "space-shooter";

#[derive(Parser, Debug)]
#[command(version, about = "Vertical-scrolling arcade shooter")]
pub struct Cli {
    /// Directory holding high_scores.json and leaderboards.json.
    /// Defaults to the platform data directory.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Settings file (default: <data-dir>/settings.ini).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root of the Images/ and Audio/ asset folders.
    #[arg(long, value_name = "DIR", default_value = "Assets")]
    pub assets: PathBuf,

    /// Seed for enemy spawn positions; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start in fullscreen, overriding the settings file.
    #[arg(long)]
    pub fullscreen: bool,
}

impl Cli {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(DATA_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.data_dir().join(crate::config::SETTINGS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["space_shooter"]);
        assert_eq!(cli.assets, PathBuf::from("Assets"));
        assert_eq!(cli.seed, None);
        assert!(!cli.fullscreen);
        assert!(cli.data_dir().ends_with(DATA_DIR_NAME) || cli.data_dir() == PathBuf::from("data"));
    }

    #[test]
    fn test_config_defaults_into_data_dir() {
        let cli = Cli::parse_from(["space_shooter", "--data-dir", "/tmp/scores", "--seed", "9"]);
        assert_eq!(cli.data_dir(), PathBuf::from("/tmp/scores"));
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/scores/settings.ini"));
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_explicit_config_path() {
        let cli = Cli::parse_from(["space_shooter", "--config", "my.ini", "--fullscreen"]);
        assert_eq!(cli.config_path(), PathBuf::from("my.ini"));
        assert!(cli.fullscreen);
    }
}
