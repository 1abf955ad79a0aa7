//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    /// Start from a settings locale tag (`en`, `zh`, ...)
    pub fn from_tag(tag: &str) -> Self {
        Self {
            locale: Locale::from_tag(tag),
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Toggle between Chinese and English
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::ZhCN => Locale::EnUS,
            Locale::EnUS => Locale::ZhCN,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_locales() {
        let mut state = I18nState::from_tag("en");
        assert_eq!(state.locale, Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::ZhCN);
    }
}
