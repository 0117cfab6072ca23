use icsforge_core::config::GeneratorSettings;
use icsforge_core::types::TargetPlatform;
use icsforge_rfc::ical::GeneratorOptions;

/// Generator options from the configured defaults with command line
/// overrides applied on top.
#[must_use]
pub fn options(
    settings: &GeneratorSettings,
    method: Option<&str>,
    no_timezones: bool,
    platform: Option<TargetPlatform>,
) -> GeneratorOptions {
    let mut options = GeneratorOptions::from(settings);
    if let Some(method) = method {
        options.method = Some(method.to_ascii_uppercase());
    }
    if no_timezones {
        options.include_timezone = false;
    }
    if let Some(platform) = platform {
        options.target_platform = platform;
    }
    tracing::debug!(?options, "Generator options resolved");
    options
}
