//! Display language and label dictionaries.
//!
//! Two languages are supported. The dictionaries are static, defined at
//! startup and never mutated; only the active language selection changes,
//! and it is threaded through the UI as an explicit signal rather than held
//! in shared mutable state.

/// The supported display languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    /// BCP 47 tag used to scope a speech-recognition session.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
        }
    }
}

/// Text for every labelled UI region.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub qualification: &'static str,
    pub branch: &'static str,
    pub pincode: &'static str,
    pub interest: &'static str,
    pub submit: &'static str,
    /// Shown on the toggle control: the name of the *other* language.
    pub toggle: &'static str,
}

static ENGLISH: Labels = Labels {
    title: "Internship Recommender",
    qualification: "Qualification:",
    branch: "Branch:",
    pincode: "Pincode:",
    interest: "Interest Emoji:",
    submit: "Get Recommendations",
    toggle: "हिंदी",
};

static HINDI: Labels = Labels {
    title: "इंटर्नशिप अनुशंसक",
    qualification: "योग्यता:",
    branch: "शाखा:",
    pincode: "पिनकोड:",
    interest: "रुचि इमोजी:",
    submit: "अनुशंसाएं प्राप्त करें",
    toggle: "English",
};

/// Resolve the label set for a language.
pub fn labels(lang: Language) -> &'static Labels {
    match lang {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
    }
}
