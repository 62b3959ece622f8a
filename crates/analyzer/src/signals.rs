// Rust guideline compliant 2026-10-12

//! The fixed battery of fraud signals and their weight/reason table.

use std::fmt;

/// One fraud indicator. Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignalKind {
    /// More generic phrases than concrete skills.
    VagueDescription,
    /// Too many words missing from the dictionary.
    SpellingErrors,
    /// Shouting, emoji, or punctuation runs.
    UnprofessionalTone,
    /// Salary out of line with the role.
    UnrealisticSalary,
    /// Applicant is asked to pay.
    UpfrontPayment,
    /// Contact address on a free webmail domain.
    GenericEmail,
    /// Pressure to act quickly.
    Urgency,
    /// Identity or banking details requested.
    SensitiveInfo,
    /// Contact moved to a messaging app.
    MessagingApp,
}

impl SignalKind {
    /// Every signal in evaluation order.
    pub const ALL: [Self; 9] = [
        Self::VagueDescription,
        Self::SpellingErrors,
        Self::UnprofessionalTone,
        Self::UnrealisticSalary,
        Self::UpfrontPayment,
        Self::GenericEmail,
        Self::Urgency,
        Self::SensitiveInfo,
        Self::MessagingApp,
    ];

    /// Score contribution when the signal fires. Independent of outcome magnitude.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::VagueDescription | Self::UnprofessionalTone | Self::GenericEmail => 2,
            Self::SpellingErrors | Self::UnrealisticSalary => 3,
            Self::UpfrontPayment => 10,
            Self::Urgency => 1,
            Self::SensitiveInfo => 5,
            Self::MessagingApp => 4,
        }
    }

    /// Human-readable explanation. `outcome` is only interpolated for spelling.
    #[must_use]
    pub fn reason(self, outcome: u32) -> String {
        match self {
            Self::VagueDescription => "Vague job description with generic phrases".to_owned(),
            Self::SpellingErrors => format!("High density of spelling errors ({outcome} errors)"),
            Self::UnprofessionalTone => {
                "Unprofessional communication (excessive caps/emojis)".to_owned()
            }
            Self::UnrealisticSalary => "Unrealistically high salary for the role".to_owned(),
            Self::UpfrontPayment => "Requests upfront payment or fees".to_owned(),
            Self::GenericEmail => "Uses generic email domains".to_owned(),
            Self::Urgency => "Creates false sense of urgency".to_owned(),
            Self::SensitiveInfo => "Requests sensitive personal information upfront".to_owned(),
            Self::MessagingApp => "Requests contact via messaging apps".to_owned(),
        }
    }

    /// Stable snake-case identifier, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VagueDescription => "vague_description",
            Self::SpellingErrors => "spelling_errors",
            Self::UnprofessionalTone => "unprofessional_tone",
            Self::UnrealisticSalary => "unrealistic_salary",
            Self::UpfrontPayment => "upfront_payment",
            Self::GenericEmail => "generic_email",
            Self::Urgency => "urgency",
            Self::SensitiveInfo => "sensitive_info",
            Self::MessagingApp => "messaging_app",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one detector for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Which detector ran.
    pub kind: SignalKind,
    /// Raw outcome; `0` means "not triggered". Spelling reports its error count.
    pub outcome: u32,
}

impl Detection {
    /// `true` when the detector fired.
    #[must_use]
    pub const fn triggered(&self) -> bool {
        self.outcome > 0
    }

    /// Weight contributed to the score: the signal weight, or `0`.
    #[must_use]
    pub const fn contribution(&self) -> u32 {
        if self.triggered() { self.kind.weight() } else { 0 }
    }

    /// Reason text when triggered.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.triggered().then(|| self.kind.reason(self.outcome))
    }
}
