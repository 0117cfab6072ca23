/// Product name shared across crates
pub const APP_NAME: &str = "icsforge";

/// Default `PRODID` written into generated calendars
pub const DEFAULT_PROD_ID: &str = const_str::concat!("-//", APP_NAME, "//Calendar Editor//EN");

/// Domain suffix appended to generated event UIDs
pub const UID_DOMAIN: &str = APP_NAME;

/// Stem of the configuration file looked up in the working directory
pub const CONFIG_FILE_STEM: &str = APP_NAME;

/// Prefix of environment variables overriding settings
pub const ENV_PREFIX: &str = "ICSFORGE";
