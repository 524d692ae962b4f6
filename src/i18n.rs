//! Internationalization (i18n) module for Cosmic Reader
//!
//! Localized string lookup. Translations are not bundled yet, so every
//! message id is its English text.

/// Initialize localization with system locale
pub fn init() {
    log::debug!("i18n initialization - using default English strings");
}

/// Macro for accessing localized strings.
/// Returns the message_id as-is until translations are bundled.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {
        $message_id
    };
}
