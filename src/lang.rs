//! User-facing strings in the board's two languages.
//!
//! The backend and its users sit on a French/English boundary; every
//! message the client surfaces goes through here.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Lenient parse; unknown codes fall back to English.
    pub fn parse(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "fr" | "fr-fr" | "fr-ca" => Self::Fr,
            _ => Self::En,
        }
    }

    /// Placeholder for an empty/none prior value in change tooltips.
    pub fn none_placeholder(&self) -> &'static str {
        match self {
            Self::En => "none",
            Self::Fr => "aucune",
        }
    }

    /// Generic fallback when the server gave no detail string.
    pub fn generic_error(&self) -> &'static str {
        match self {
            Self::En => "Something went wrong",
            Self::Fr => "Une erreur est survenue",
        }
    }

    pub fn card_saved(&self) -> &'static str {
        match self {
            Self::En => "Card saved",
            Self::Fr => "Carte enregistrée",
        }
    }

    pub fn card_save_failed(&self) -> &'static str {
        match self {
            Self::En => "Could not save the card",
            Self::Fr => "Impossible d'enregistrer la carte",
        }
    }

    pub fn not_permitted(&self) -> &'static str {
        match self {
            Self::En => "You don't have permission to do that",
            Self::Fr => "Vous n'avez pas la permission de faire cela",
        }
    }

    pub fn discard_prompt(&self) -> &'static str {
        match self {
            Self::En => "Discard unsaved changes?",
            Self::Fr => "Abandonner les modifications non enregistrées ?",
        }
    }

    pub fn changes_discarded(&self) -> &'static str {
        match self {
            Self::En => "Changes discarded",
            Self::Fr => "Modifications abandonnées",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_codes() {
        assert_eq!(Language::parse("fr"), Language::Fr);
        assert_eq!(Language::parse("FR-ca"), Language::Fr);
        assert_eq!(Language::parse("en"), Language::En);
        assert_eq!(Language::parse("de"), Language::En);
        assert_eq!(Language::parse(""), Language::En);
    }

    #[test]
    fn test_messages_differ_per_language() {
        assert_ne!(Language::En.none_placeholder(), Language::Fr.none_placeholder());
        assert_ne!(Language::En.generic_error(), Language::Fr.generic_error());
    }
}
