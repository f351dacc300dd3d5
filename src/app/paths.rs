// SPDX-License-Identifier: MPL-2.0
//! Location of the operator's `settings.toml`.
//!
//! The dashboard keeps no state between runs, so the config directory is the
//! only path it resolves. Candidates are tried in [`ConfigDirSource`] order
//! and the first usable one wins.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to the platform config dir.
const APP_DIR_NAME: &str = "KioskDash";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "KIOSK_DASH_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Where a resolved config directory came from, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    /// Passed directly by the caller (tests, `--init-config`).
    Explicit,
    /// `--config-dir` on the command line.
    Cli,
    /// `KIOSK_DASH_CONFIG_DIR`.
    Environment,
    /// `dirs::config_dir()/KioskDash`.
    Platform,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    pub path: PathBuf,
    pub source: ConfigDirSource,
}

/// Records the `--config-dir` flag. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    let Some(dir) = config_dir else {
        return;
    };
    if CLI_CONFIG_DIR.set(PathBuf::from(dir)).is_err() {
        tracing::warn!("config directory override already initialized");
    }
}

/// Resolves the config directory, preferring `explicit` when given.
///
/// Returns `None` only when no override is set and the platform has no
/// config directory.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<ConfigDir> {
    let resolved = resolve(
        explicit,
        CLI_CONFIG_DIR.get().cloned(),
        std::env::var_os(ENV_CONFIG_DIR),
        dirs::config_dir(),
    );
    if let Some(dir) = &resolved {
        tracing::trace!(path = %dir.path.display(), source = ?dir.source, "config directory");
    }
    resolved
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<OsString>,
    platform: Option<PathBuf>,
) -> Option<ConfigDir> {
    let env = env.filter(|value| !value.is_empty()).map(PathBuf::from);
    let platform = platform.map(|base| base.join(APP_DIR_NAME));

    [
        (explicit, ConfigDirSource::Explicit),
        (cli, ConfigDirSource::Cli),
        (env, ConfigDirSource::Environment),
        (platform, ConfigDirSource::Platform),
    ]
    .into_iter()
    .find_map(|(path, source)| path.map(|path| ConfigDir { path, source }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Option<PathBuf> {
        Some(PathBuf::from("/home/driver/.config"))
    }

    #[test]
    fn platform_dir_gets_app_name() {
        let dir = resolve(None, None, None, platform()).expect("platform dir");
        assert_eq!(dir.path, PathBuf::from("/home/driver/.config/KioskDash"));
        assert_eq!(dir.source, ConfigDirSource::Platform);
    }

    #[test]
    fn explicit_beats_everything() {
        let dir = resolve(
            Some(PathBuf::from("/explicit")),
            Some(PathBuf::from("/cli")),
            Some(OsString::from("/env")),
            platform(),
        )
        .expect("resolved");
        assert_eq!(dir.path, PathBuf::from("/explicit"));
        assert_eq!(dir.source, ConfigDirSource::Explicit);
    }

    #[test]
    fn cli_beats_environment() {
        let dir = resolve(
            None,
            Some(PathBuf::from("/cli")),
            Some(OsString::from("/env")),
            platform(),
        )
        .expect("resolved");
        assert_eq!(dir.source, ConfigDirSource::Cli);
    }

    #[test]
    fn environment_beats_platform() {
        let dir = resolve(None, None, Some(OsString::from("/env")), platform()).expect("resolved");
        assert_eq!(dir.path, PathBuf::from("/env"));
        assert_eq!(dir.source, ConfigDirSource::Environment);
    }

    #[test]
    fn empty_environment_is_ignored() {
        let dir = resolve(None, None, Some(OsString::new()), platform()).expect("resolved");
        assert_eq!(dir.source, ConfigDirSource::Platform);
    }

    #[test]
    fn nothing_available_yields_none() {
        assert_eq!(resolve(None, None, None, None), None);
    }

    #[test]
    fn explicit_dir_is_returned_by_public_api() {
        let dir = config_dir(Some(PathBuf::from("/custom/config/path"))).expect("resolved");
        assert_eq!(dir.path, PathBuf::from("/custom/config/path"));
    }
}
