use serde::Deserialize;

/// Calendar application an export is tuned for.
///
/// Informational only: the generator records it but emits the same content
/// for every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPlatform {
    #[default]
    Generic,
    Apple,
    Google,
    Microsoft,
}

impl TargetPlatform {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Apple => "apple",
            Self::Google => "google",
            Self::Microsoft => "microsoft",
        }
    }

    /// Parses a platform name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "generic" => Self::Generic,
            "apple" => Self::Apple,
            "google" => Self::Google,
            "microsoft" => Self::Microsoft,
            _ => return None,
        })
    }
}

impl std::fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
