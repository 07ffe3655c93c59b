use std::fmt;

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    InputReadFailed,
    InputParseFailed,
    InvalidDate,
    LetterMissingContent,
    LetterMissingUnlockDate,
    LetterNotFound,
    MoodMissing,
    MoodUnknown,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::InputReadFailed => "E1002",
            Self::InputParseFailed => "E1003",
            Self::InvalidDate => "E2001",
            Self::LetterMissingContent => "E3001",
            Self::LetterMissingUnlockDate => "E3002",
            Self::LetterNotFound => "E3003",
            Self::MoodMissing => "E4001",
            Self::MoodUnknown => "E4002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::InputReadFailed => "Input file could not be read",
            Self::InputParseFailed => "Input file is not valid JSON for this record type",
            Self::InvalidDate => "Invalid calendar date",
            Self::LetterMissingContent => "Letter content is required",
            Self::LetterMissingUnlockDate => "Letter unlock date is required",
            Self::LetterNotFound => "Letter not found",
            Self::MoodMissing => "Mood is required",
            Self::MoodUnknown => "Unknown mood",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to users.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .zenith/config.toml and retry."),
            Self::InputReadFailed => Some("Check the path and read permissions."),
            Self::InputParseFailed => {
                Some("Provide a JSON array of records with the documented field names.")
            }
            Self::InvalidDate => Some("Use an ISO-8601 date such as 2025-01-31."),
            Self::LetterMissingContent => Some("Write something for your future self."),
            Self::LetterMissingUnlockDate => Some("Pick the day the letter should open."),
            Self::LetterNotFound => Some("Run `zn letters list` to see letter IDs."),
            Self::MoodMissing => Some("Pass one of the check-in moods, e.g. `zn mood calm`."),
            Self::MoodUnknown => Some(
                "Use one of: happy, sad, anxious, tired, stressed, excited, determined, angry, confused, calm.",
            ),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A date string that could not be read as a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid calendar date: '{input}'")]
pub struct InvalidDateError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl InvalidDateError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidDate
    }
}

/// Errors raised while accepting or evaluating a letter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterError {
    #[error("letter content is required")]
    MissingContent,

    #[error("letter unlock date is required")]
    MissingUnlockDate,

    /// The stored unlock date of an existing letter is malformed.
    #[error("letter {id} has an unreadable unlock date")]
    InvalidUnlockDate {
        /// Letter id, or empty for a draft that has none yet.
        id: String,
        #[source]
        source: InvalidDateError,
    },
}

impl LetterError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingContent => ErrorCode::LetterMissingContent,
            Self::MissingUnlockDate => ErrorCode::LetterMissingUnlockDate,
            Self::InvalidUnlockDate { .. } => ErrorCode::InvalidDate,
        }
    }
}

/// Errors raised while recording a mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoodError {
    #[error("mood is required")]
    MissingMood,

    #[error("unknown mood: '{0}'")]
    UnknownMood(String),
}

impl MoodError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingMood => ErrorCode::MoodMissing,
            Self::UnknownMood(_) => ErrorCode::MoodUnknown,
        }
    }
}
