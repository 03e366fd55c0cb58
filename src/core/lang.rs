//=========================================================================
// Language Context
//=========================================================================
//
// Current UI language as an explicit value.
//
// The engine creates one `SharedLangState` from its configuration and
// hands clones to whoever needs it (state hooks, menus). It lives as long
// as its last holder; there is no process-wide instance.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use thiserror::Error;

//=== Language ============================================================

/// Languages the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English = 0,
    Russian = 1,
}

impl Language {
    /// Number of supported languages.
    pub const COUNT: u32 = 2;

    /// Every supported language, in index order.
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// Two-letter ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// The next language in index order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }
}

impl TryFrom<u32> for Language {
    type Error = LangError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::English),
            1 => Ok(Self::Russian),
            other => Err(LangError::Unsupported(other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

//=== LangError ===========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangError {
    #[error("unsupported language index {0} (expected < {count})", count = Language::COUNT)]
    Unsupported(u32),
}

//=== LangState ===========================================================

/// Holds the currently selected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LangState {
    current: Language,
}

impl LangState {
    pub fn new(language: Language) -> Self {
        Self { current: language }
    }

    pub fn get_lang(&self) -> Language {
        self.current
    }

    pub fn set_lang(&mut self, language: Language) {
        debug!("Language changed: {} -> {}", self.current, language);
        self.current = language;
    }

    /// Sets the language from a raw index (e.g. a saved setting).
    ///
    /// Out-of-range indices are rejected and the current language is kept.
    pub fn set_lang_raw(&mut self, index: u32) -> Result<(), LangError> {
        let language = Language::try_from(index)?;
        self.set_lang(language);
        Ok(())
    }
}

//=== SharedLangState =====================================================

/// Cloneable handle to one `LangState`, safe to move into state hooks.
#[derive(Debug, Clone, Default)]
pub struct SharedLangState {
    inner: Arc<RwLock<LangState>>,
}

impl SharedLangState {
    pub fn new(language: Language) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LangState::new(language))),
        }
    }

    pub fn get(&self) -> Language {
        // LangState holds no invariant a panicking writer could break.
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_lang()
    }

    pub fn set(&self, language: Language) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_lang(language);
    }

    /// Switches to the next language and returns it.
    pub fn cycle(&self) -> Language {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = state.get_lang().next();
        state.set_lang(next);
        next
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(LangState::default().get_lang(), Language::English);
        assert_eq!(SharedLangState::default().get(), Language::English);
    }

    #[test]
    fn set_lang_switches_language() {
        let mut state = LangState::default();
        state.set_lang(Language::Russian);
        assert_eq!(state.get_lang(), Language::Russian);
    }

    #[test]
    fn raw_index_is_validated() {
        let mut state = LangState::new(Language::Russian);

        assert_eq!(state.set_lang_raw(2), Err(LangError::Unsupported(2)));
        assert_eq!(state.get_lang(), Language::Russian, "Rejected index keeps current");

        assert!(state.set_lang_raw(0).is_ok());
        assert_eq!(state.get_lang(), Language::English);
    }

    #[test]
    fn try_from_covers_every_language() {
        for language in Language::ALL {
            assert_eq!(Language::try_from(language as u32), Ok(language));
        }
        assert!(Language::try_from(Language::COUNT).is_err());
    }

    #[test]
    fn error_message_names_the_index() {
        assert_eq!(
            LangError::Unsupported(7).to_string(),
            "unsupported language index 7 (expected < 2)"
        );
    }

    #[test]
    fn shared_handles_see_the_same_state() {
        let shared = SharedLangState::new(Language::English);
        let clone = shared.clone();

        clone.set(Language::Russian);
        assert_eq!(shared.get(), Language::Russian);

        assert_eq!(shared.cycle(), Language::English);
        assert_eq!(clone.get(), Language::English);
    }

    #[test]
    fn codes_are_iso() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Russian.to_string(), "ru");
    }
}
