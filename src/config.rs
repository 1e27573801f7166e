use serde::{Deserialize, Serialize};

use crate::{CalendarSystem, Locale, SelectionMode, WeekStart};

/// Everything the picker needs from its host, passed in explicitly.
///
/// Deserializes from partial input; missing fields take their defaults:
///
/// ```json
/// { "mode": "range", "locale": "ar", "calendar_system": "hijri" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub mode:            SelectionMode,
    pub locale:          Locale,
    /// Calendar for the primary label; the other calendar is shown beneath it.
    pub calendar_system: CalendarSystem,
    /// Overrides the locale's week start when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start:      Option<WeekStart>,
}

impl PickerConfig {
    pub fn week_start(&self) -> WeekStart {
        self.week_start.unwrap_or_else(|| self.locale.week_start())
    }

    /// The calendar used for the secondary label.
    pub const fn secondary_calendar(&self) -> CalendarSystem {
        match self.calendar_system {
            CalendarSystem::Gregorian => CalendarSystem::Hijri,
            CalendarSystem::Hijri => CalendarSystem::Gregorian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.mode, SelectionMode::Range);
        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.calendar_system, CalendarSystem::Gregorian);
        assert_eq!(config.week_start(), WeekStart::Sunday);
        assert_eq!(config.secondary_calendar(), CalendarSystem::Hijri);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PickerConfig =
            serde_json::from_str(r#"{ "locale": "en", "week_start": "monday" }"#).expect("valid config");
        assert_eq!(config.mode, SelectionMode::Range);
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.week_start(), WeekStart::Monday);
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{ "mode": "single", "locale": "ar", "calendar_system": "hijri" }"#;
        let config: PickerConfig = serde_json::from_str(json).expect("valid config");
        assert_eq!(config.mode, SelectionMode::Single);
        assert_eq!(config.calendar_system, CalendarSystem::Hijri);
        assert_eq!(config.secondary_calendar(), CalendarSystem::Gregorian);
    }

    #[test]
    fn test_deserialize_rejects_unknown_locale() {
        let result: Result<PickerConfig, _> = serde_json::from_str(r#"{ "locale": "fr" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_unset_week_start() {
        let json = serde_json::to_string(&PickerConfig::default()).expect("serialize config");
        assert_eq!(json, r#"{"mode":"range","locale":"ar","calendar_system":"gregorian"}"#);
    }
}
