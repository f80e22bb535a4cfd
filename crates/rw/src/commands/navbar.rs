//! `rw navbar` command implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::Args;
use rw_config::{CliSettings, Config};
use rw_navbar::Navbar;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the navbar command.
#[derive(Args)]
pub(crate) struct NavbarArgs {
    /// Path of the page to resolve the header for (e.g. /guide/intro.html).
    #[arg(long)]
    path: String,

    /// Route table file: one known route path per line.
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Repository reference, `owner/repo` or URL (overrides config).
    #[arg(long, env = "RW_REPO")]
    repo: Option<String>,

    /// Repository link label (overrides config).
    #[arg(long)]
    repo_label: Option<String>,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output (show resolution logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl NavbarArgs {
    /// Execute the navbar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the route table fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            repo: self.repo,
            repo_label: self.repo_label,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let routes = match &self.routes {
            Some(path) => load_routes(path)?,
            None => {
                if config.locales_resolved.len() > 1 {
                    output.warning(
                        "No route table given: locale links will point to locale homepages",
                    );
                }
                HashSet::new()
            }
        };

        let navbar = Navbar::build(
            &config.theme.navbar_config(),
            &config.locales_resolved,
            &self.path,
            &routes,
        );

        let json = if self.compact {
            serde_json::to_string(&navbar)?
        } else {
            serde_json::to_string_pretty(&navbar)?
        };
        output.result(&json)?;

        Ok(())
    }
}

/// Read a route table file.
fn load_routes(path: &Path) -> Result<HashSet<String>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Routes {
        path: path.to_path_buf(),
        source,
    })?;
    let routes = parse_routes(&content);
    tracing::debug!(path = %path.display(), count = routes.len(), "Loaded route table");
    Ok(routes)
}

/// Parse route table content.
///
/// One path per line; blank lines and lines starting with `#` are skipped.
fn parse_routes(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        let content = "# site routes\n/\n/guide/intro.html\n\n  /fr/guide/intro.html  \n";

        let routes = parse_routes(content);

        assert_eq!(routes.len(), 3);
        assert!(routes.contains("/"));
        assert!(routes.contains("/guide/intro.html"));
        assert!(routes.contains("/fr/guide/intro.html"));
    }

    #[test]
    fn test_parse_routes_empty() {
        assert!(parse_routes("").is_empty());
        assert!(parse_routes("# nothing\n\n").is_empty());
    }

    #[test]
    fn test_load_routes_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("routes.txt");
        std::fs::write(&path, "/\n/fr/\n").unwrap();

        let routes = load_routes(&path).unwrap();

        assert_eq!(routes.len(), 2);
        assert!(routes.contains("/fr/"));
    }

    #[test]
    fn test_load_routes_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = load_routes(&path).unwrap_err();

        assert!(matches!(err, CliError::Routes { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_navbar_from_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("rw.toml");
        std::fs::write(
            &config_path,
            r#"
[theme]
repo = "acme/widget"
nav = [{ text = "Guide", link = "/guide/intro.html" }]

[locales."/"]
lang = "en-US"
label = "English"

[locales."/fr/"]
lang = "fr-FR"
label = "Français"
"#,
        )
        .unwrap();
        let config = Config::load(Some(&config_path), None).unwrap();
        let routes = parse_routes("/guide/intro.html\n");

        let navbar = Navbar::build(
            &config.theme.navbar_config(),
            &config.locales_resolved,
            "/guide/intro.html",
            &routes,
        );
        let json = serde_json::to_value(&navbar).unwrap();

        assert_eq!(json["links"][0]["link"], "/guide/intro.html");
        assert_eq!(json["links"][1]["text"], "Languages");
        assert_eq!(json["links"][1]["items"][0]["link"], "/guide/intro.html");
        assert_eq!(json["links"][1]["items"][1]["link"], "/fr/");
        assert_eq!(json["repo"]["url"], "https://github.com/acme/widget");
        assert_eq!(json["repo"]["label"], "GitHub");
    }
}
