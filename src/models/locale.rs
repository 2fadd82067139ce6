//! Reader-facing strings per story language.

/// Language of the reader chrome, chosen from a story's `lang` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ja,
    En,
}

impl Locale {
    /// Languages offered in the listing's language control.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    /// `ja` selects Japanese; every other tag falls back to English.
    pub fn for_lang(lang: &str) -> Self {
        if lang == "ja" {
            Locale::Ja
        } else {
            Locale::En
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::Ja => "日本語",
            Locale::En => "English",
        }
    }

    /// Shown under the mascot on the first page.
    pub fn greeting(&self) -> &'static str {
        match self {
            Locale::Ja => "はじめまして。ページを読み進めると…ふふふ。👀",
            Locale::En => "Nice to meet you. Keep reading and… hehehe 👀",
        }
    }

    /// Shown in the badge on the last page.
    pub fn completion(&self) -> &'static str {
        match self {
            Locale::Ja => "🎉 最後まで読んでくれてありがとう！",
            Locale::En => "🎉 Thanks for reading to the end!",
        }
    }

    pub fn back_to_library(&self) -> &'static str {
        match self {
            Locale::Ja => "ライブラリに戻る",
            Locale::En => "Back to Library",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_lang() {
        assert_eq!(Locale::for_lang("ja"), Locale::Ja);
        assert_eq!(Locale::for_lang("en"), Locale::En);
        assert_eq!(Locale::for_lang("fr"), Locale::En);
        assert_eq!(Locale::for_lang("JA"), Locale::En);
    }

    #[test]
    fn test_strings_differ_per_locale() {
        assert_ne!(Locale::Ja.completion(), Locale::En.completion());
        assert_eq!(Locale::En.back_to_library(), "Back to Library");
    }
}
