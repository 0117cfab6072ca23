use icsforge_core::config::GeneratorSettings;
use icsforge_core::types::TargetPlatform;

/// Options for [`generate`](super::generate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Overrides the calendar's `PRODID`.
    pub prod_id: Option<String>,
    /// Emit a `VTIMEZONE` for every zone an event refers to.
    pub include_timezone: bool,
    /// Recorded only; output is identical for every platform.
    pub target_platform: TargetPlatform,
    /// Overrides the calendar's `METHOD`.
    pub method: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            prod_id: None,
            include_timezone: true,
            target_platform: TargetPlatform::default(),
            method: None,
        }
    }
}

impl From<&GeneratorSettings> for GeneratorOptions {
    fn from(settings: &GeneratorSettings) -> Self {
        Self {
            prod_id: Some(settings.prod_id.clone()),
            include_timezone: settings.include_timezone,
            target_platform: settings.target_platform,
            method: settings.method.clone(),
        }
    }
}
