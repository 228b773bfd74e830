use clap::ValueEnum;

/// Wikipedia language edition selectable in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "uk")]
    Ukrainian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Ukrainian];

    /// Name shown in the language selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Ukrainian => "Українська",
        }
    }

    /// Subdomain prefix of the language edition.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Ukrainian => "uk",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Ukrainian,
            Language::Ukrainian => Language::English,
        }
    }
}
