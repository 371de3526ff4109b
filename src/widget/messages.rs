//! The widget's localized message catalog.
//!
//! Arabic is the primary audience, with English and French variants. The
//! strings carry their own emoji markers because host pages render them as
//! plain text.

use std::time::Duration;

use strum_macros::EnumIter as EnumIterMacro;

use crate::config::MESSAGE_AUTO_HIDE;
use crate::error_handling::GeolocationError;

/// Languages the widget can speak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Language {
    /// Arabic, the default.
    #[default]
    Ar,
    /// English.
    En,
    /// French.
    Fr,
}

impl Language {
    /// Maps a BCP 47-ish language tag onto a supported language.
    ///
    /// Only the primary subtag matters; unsupported languages fall back to
    /// Arabic.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        if tag.starts_with("en") {
            Language::En
        } else if tag.starts_with("fr") {
            Language::Fr
        } else {
            Language::Ar
        }
    }

    /// Returns the language tag sent to the resolver API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

/// Visual category of a widget message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Progress information.
    Info,
    /// The run completed.
    Success,
    /// The run failed.
    Error,
}

impl MessageKind {
    /// How long a message of this kind stays visible.
    ///
    /// Info messages stay until replaced; outcome messages auto-hide.
    pub fn auto_hide(&self) -> Option<Duration> {
        match self {
            MessageKind::Info => None,
            MessageKind::Success | MessageKind::Error => Some(MESSAGE_AUTO_HIDE),
        }
    }
}

/// Every message the widget can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum MessageKey {
    /// Detection is running.
    Loading,
    /// The address was filled.
    Success,
    /// Detection or resolution failed.
    Error,
    /// The user denied the location permission.
    Permission,
    /// Position acquisition timed out.
    Timeout,
}

impl MessageKey {
    /// The visual category this message renders as.
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageKey::Loading => MessageKind::Info,
            MessageKey::Success => MessageKind::Success,
            MessageKey::Error | MessageKey::Permission | MessageKey::Timeout => MessageKind::Error,
        }
    }

    /// The message to show for a failed position acquisition.
    pub fn for_geolocation_error(error: GeolocationError) -> Self {
        match error {
            GeolocationError::PermissionDenied => MessageKey::Permission,
            GeolocationError::Timeout => MessageKey::Timeout,
            GeolocationError::PositionUnavailable => MessageKey::Error,
        }
    }

    /// The catalog text for this message in `language`.
    pub fn text(&self, language: Language) -> &'static str {
        match (self, language) {
            (MessageKey::Loading, Language::Ar) => "⏳ جاري تحديد موقعك...",
            (MessageKey::Loading, Language::En) => "⏳ Detecting your location...",
            (MessageKey::Loading, Language::Fr) => "⏳ Détection de votre position...",
            (MessageKey::Success, Language::Ar) => "✅ تم تعبئة العنوان بنجاح",
            (MessageKey::Success, Language::En) => "✅ Address filled successfully",
            (MessageKey::Success, Language::Fr) => "✅ Adresse remplie avec succès",
            (MessageKey::Error, Language::Ar) => "⚠️ فشل في تحديد الموقع، الرجاء الإدخال يدويًا",
            (MessageKey::Error, Language::En) => {
                "⚠️ Failed to detect location, please enter manually"
            }
            (MessageKey::Error, Language::Fr) => {
                "⚠️ Échec de la détection, veuillez saisir manuellement"
            }
            (MessageKey::Permission, Language::Ar) => "🔒 يلزم السماح بالوصول إلى الموقع",
            (MessageKey::Permission, Language::En) => "🔒 Location access permission required",
            (MessageKey::Permission, Language::Fr) => {
                "🔒 Autorisation d'accès à la position requise"
            }
            (MessageKey::Timeout, Language::Ar) => "⏰ استغرقت العملية وقتًا طويلاً",
            (MessageKey::Timeout, Language::En) => "⏰ Operation took too long",
            (MessageKey::Timeout, Language::Fr) => "⏰ L'opération a pris trop de temps",
        }
    }
}

/// The trigger button label in `language`.
pub fn trigger_label(language: Language) -> &'static str {
    match language {
        Language::Ar => "📍 اكتشف موقعي تلقائيًا",
        Language::En => "📍 Use My Location",
        Language::Fr => "📍 Utiliser ma position",
    }
}
