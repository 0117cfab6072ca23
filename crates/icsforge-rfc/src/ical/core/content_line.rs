//! iCalendar content line type (RFC 5545 §3.1).

use std::fmt;

use super::Parameter;
use crate::model::VendorProperty;

/// A content line: `name *(";" param) ":" value`.
///
/// On the parse side `raw_value` is the unfolded but still escaped value. On
/// the build side it is the already escaped value to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string.
    pub raw_value: String,
}

impl ContentLine {
    /// Creates a new content line.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: value.into(),
        }
    }

    /// Creates a content line with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            raw_value: value.into(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Parameter::new(name, value));
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        let p = self.get_param(name)?;
        p.value()
    }

    /// Returns whether this content line has a parameter with the given name.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.get_param(name).is_some()
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value("VALUE")
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value("TZID")
    }
}

/// Writes the unfolded logical line.
impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.params {
            write!(f, ";{param}")?;
        }
        write!(f, ":{}", self.raw_value)
    }
}

impl From<&ContentLine> for VendorProperty {
    fn from(line: &ContentLine) -> Self {
        Self {
            name: line.name.clone(),
            params: line
                .params
                .iter()
                .map(|p| (p.name.clone(), p.values.clone()))
                .collect(),
            value: line.raw_value.clone(),
        }
    }
}

impl From<&VendorProperty> for ContentLine {
    fn from(property: &VendorProperty) -> Self {
        let params = property
            .params
            .iter()
            .map(|(name, values)| Parameter::with_values(name, values.clone()))
            .collect();
        Self::with_params(&property.name, params, &property.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_params() {
        let line = ContentLine::new("dtstart", "20250615")
            .param("VALUE", "DATE");
        assert_eq!(line.to_string(), "DTSTART;VALUE=DATE:20250615");
    }

    #[test]
    fn param_lookup_is_case_insensitive() {
        let line = ContentLine::new("DTSTART", "20250101T090000").param("TZID", "Europe/Berlin");
        assert_eq!(line.tzid(), Some("Europe/Berlin"));
        assert!(line.has_param("tzid"));
        assert_eq!(line.value_type(), None);
    }

    #[test]
    fn vendor_property_keeps_params() {
        let line = ContentLine::new("X-APPLE-TRAVEL-START", "")
            .param("ROUTING", "CAR")
            .param("X-ADDRESS", "1 Infinite Loop, Cupertino");
        let property = VendorProperty::from(&line);
        assert_eq!(
            property.params,
            vec![
                ("ROUTING".to_string(), vec!["CAR".to_string()]),
                (
                    "X-ADDRESS".to_string(),
                    vec!["1 Infinite Loop, Cupertino".to_string()]
                ),
            ]
        );
        assert_eq!(ContentLine::from(&property), line);
    }
}
