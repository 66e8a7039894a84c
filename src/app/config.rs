use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub logins_path: PathBuf,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let logins_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("login-index")
            .join("logins.json");

        Self {
            logins_path,
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            logins_path: path.into(),
            ..Default::default()
        }
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "info" };
        format!("login_index={}", level)
    }
}

/// Command line: `[-v|--verbose] [LOGINS_JSON] [QUERY]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: AppConfig,
    pub query: Option<String>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut config = AppConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => config.verbose = true,
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(path) = positional.next() {
            config.logins_path = PathBuf::from(path);
        }

        let rest: Vec<String> = positional.collect();
        let query = (!rest.is_empty()).then(|| rest.join(" "));

        Self { config, query }
    }
}
