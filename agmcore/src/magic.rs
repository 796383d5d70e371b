/// Name of the environment variable containing the path to the configuration file.
/// If not set, defaults to
///  (1) on Linux and macOS: `$XDG_CONFIG_HOME/agm/config.toml` or `$HOME/.config/agm/config.toml`
///  (2) on Windows: `%APPDATA%\agm\config.toml`
pub const ENV_CONFIG_PATH: &str = "AGM_CONFIG_PATH";
