//! User-facing strings, per locale.

use crate::error::CoreError;

pub const LOCALE_EN: &str = "en";
pub const LOCALE_ES: &str = "es";

/// All accepted locale codes.
pub const VALID_LOCALES: &[&str] = &[LOCALE_EN, LOCALE_ES];

/// Display language for the rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// The complete string table for one locale.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub loading: &'static str,
    /// Prefix placed before the error message (`"Error: ..."`).
    pub error_prefix: &'static str,
    /// Shown when an error carries no message of its own.
    pub unknown_error: &'static str,
    /// Placeholder for a missing origin or location.
    pub unknown_place: &'static str,
    pub origin_label: &'static str,
    pub location_label: &'static str,
}

static EN: Strings = Strings {
    title: "Rick & Morty Characters",
    loading: "Loading characters...",
    error_prefix: "Error:",
    unknown_error: "Unknown error",
    unknown_place: "Unknown",
    origin_label: "Origin:",
    location_label: "Location:",
};

static ES: Strings = Strings {
    title: "Rick & Morty Characters",
    loading: "Cargando personajes...",
    error_prefix: "Error:",
    unknown_error: "Error desconocido",
    unknown_place: "Desconocido",
    origin_label: "Origen:",
    location_label: "Ubicación:",
};

impl Locale {
    /// Parse a locale code (`en`, `es`), case-insensitively.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            LOCALE_EN => Ok(Self::En),
            LOCALE_ES => Ok(Self::Es),
            _ => Err(CoreError::InvalidValue {
                field: "locale",
                value: s.to_string(),
                expected: VALID_LOCALES.join(", "),
            }),
        }
    }

    /// Locale code, also used as the HTML `lang` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => LOCALE_EN,
            Self::Es => LOCALE_ES,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
        }
    }

    /// `message` unless it is blank, in which case the localized
    /// "unknown error" text.
    pub fn message_or_unknown<'a>(&self, message: &'a str) -> &'a str {
        if message.trim().is_empty() {
            self.strings().unknown_error
        } else {
            message
        }
    }
}
