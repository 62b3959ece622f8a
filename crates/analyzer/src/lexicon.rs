// Rust guideline compliant 2026-10-12

//! Phrase sets consulted by the text detectors.
//!
//! A [`Lexicon`] is built once and then only read. Matching is plain
//! substring containment against already lower-cased text, so multi-word
//! phrases such as `"bank account"` match as contiguous substrings.

/// Generic phrases typical of low-effort postings.
pub const VAGUE_PHRASES: &[&str] = &[
    "hard worker",
    "flexible schedule",
    "great opportunity",
    "work from home",
    "no experience necessary",
    "easy money",
    "quick cash",
    "part time",
    "full time",
    "motivated individual",
    "self starter",
    "team player",
    "excellent communication",
    "detail oriented",
    "fast paced environment",
];

/// Concrete skills that offset vague wording.
pub const SPECIFIC_SKILLS: &[&str] = &[
    "python",
    "java",
    "sql",
    "javascript",
    "react",
    "node.js",
    "aws",
    "machine learning",
    "data analysis",
    "project management",
    "salesforce",
    "excel",
    "powerbi",
    "tableau",
    "photoshop",
    "adobe",
    "autocad",
    "accounting",
    "bookkeeping",
    "marketing",
    "seo",
    "content writing",
];

/// Phrases asking the applicant to pay.
pub const PAYMENT_PHRASES: &[&str] = &[
    "fee",
    "training cost",
    "background check payment",
    "investment",
    "startup fee",
    "registration fee",
    "processing fee",
    "deposit",
    "upfront payment",
    "pay to work",
    "money required",
    "cash required",
];

/// Free webmail providers; matched against the full domain of an address.
pub const FREE_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
    "mail.com",
    "yandex.com",
];

/// Pressure phrases.
pub const URGENCY_PHRASES: &[&str] = &[
    "act fast",
    "limited spots",
    "hiring immediately",
    "urgent",
    "asap",
    "right away",
    "don't wait",
    "limited time",
    "hurry",
    "quick start",
    "immediate start",
    "today only",
];

/// Requests for identity or banking details.
pub const SENSITIVE_INFO_PHRASES: &[&str] = &[
    "bank account",
    "social security",
    "ssn",
    "id card",
    "passport",
    "credit card",
    "bank details",
    "routing number",
    "account number",
    "personal information",
    "financial information",
];

/// Off-platform messaging channels.
pub const MESSAGING_APP_PHRASES: &[&str] = &[
    "whatsapp",
    "telegram",
    "signal",
    "wechat",
    "viber",
    "kik",
    "text me",
    "message me",
    "contact via whatsapp",
];

/// Titles of roles that never legitimately pay six figures.
pub const SIMPLE_ROLES: &[&str] = &[
    "data entry",
    "personal assistant",
    "envelope stuffing",
    "mystery shopper",
    "survey taker",
    "virtual assistant",
];

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Names one phrase set of the [`Lexicon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Generic wording; see [`VAGUE_PHRASES`].
    Vague,
    /// Counterweight to vague wording; see [`SPECIFIC_SKILLS`].
    SpecificSkills,
    /// See [`PAYMENT_PHRASES`].
    Payment,
    /// See [`FREE_EMAIL_DOMAINS`].
    FreeEmailDomains,
    /// See [`URGENCY_PHRASES`].
    Urgency,
    /// See [`SENSITIVE_INFO_PHRASES`].
    SensitiveInfo,
    /// See [`MESSAGING_APP_PHRASES`].
    MessagingApps,
    /// Title phrases used by the salary check; see [`SIMPLE_ROLES`].
    SimpleRoles,
}

impl Category {
    /// Every category, in storage order.
    pub const ALL: [Self; 8] = [
        Self::Vague,
        Self::SpecificSkills,
        Self::Payment,
        Self::FreeEmailDomains,
        Self::Urgency,
        Self::SensitiveInfo,
        Self::MessagingApps,
        Self::SimpleRoles,
    ];

    /// Built-in phrases for this category.
    #[must_use]
    pub const fn defaults(self) -> &'static [&'static str] {
        match self {
            Self::Vague => VAGUE_PHRASES,
            Self::SpecificSkills => SPECIFIC_SKILLS,
            Self::Payment => PAYMENT_PHRASES,
            Self::FreeEmailDomains => FREE_EMAIL_DOMAINS,
            Self::Urgency => URGENCY_PHRASES,
            Self::SensitiveInfo => SENSITIVE_INFO_PHRASES,
            Self::MessagingApps => MESSAGING_APP_PHRASES,
            Self::SimpleRoles => SIMPLE_ROLES,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// PhraseSet
// ---------------------------------------------------------------------------

/// Ordered, de-duplicated set of lower-case phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseSet {
    phrases: Vec<String>,
}

impl PhraseSet {
    /// Build a set from `phrases`, lower-casing and trimming each entry.
    ///
    /// Empty entries are dropped; the first occurrence of a duplicate wins.
    #[must_use]
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(phrases);
        set
    }

    fn extend<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() && !self.phrases.contains(&phrase) {
                self.phrases.push(phrase);
            }
        }
    }

    /// Number of phrases of this set that occur in `text`.
    ///
    /// Each phrase counts once regardless of how often it occurs.
    #[must_use]
    pub fn count_in(&self, text: &str) -> usize {
        self.phrases.iter().filter(|p| text.contains(p.as_str())).count()
    }

    /// `true` if at least one phrase occurs in `text`.
    #[must_use]
    pub fn any_in(&self, text: &str) -> bool {
        self.phrases.iter().any(|p| text.contains(p.as_str()))
    }

    /// `true` if `value`, lower-cased, equals one of the phrases.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.phrases.iter().any(|p| *p == value)
    }

    /// Iterate the phrases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// `true` when the set holds no phrase.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Lexicon + builder
// ---------------------------------------------------------------------------

/// Every phrase set the detectors consult.
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    sets: [PhraseSet; 8],
}

impl Lexicon {
    /// The built-in phrase sets.
    #[must_use]
    pub fn standard() -> Self {
        Self { sets: Category::ALL.map(|c| PhraseSet::new(c.defaults())) }
    }

    /// Start from the built-in sets and customize them.
    #[must_use]
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder { sets: Self::standard().sets }
    }

    /// The phrase set for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &PhraseSet {
        &self.sets[category.index()]
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`Lexicon`].
///
/// Obtain via [`Lexicon::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct LexiconBuilder {
    sets: [PhraseSet; 8],
}

impl LexiconBuilder {
    /// Add `phrases` to `category`.
    #[must_use]
    pub fn extend<I, S>(mut self, category: Category, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sets[category.index()].extend(phrases);
        self
    }

    /// Replace the phrases of `category` entirely.
    #[must_use]
    pub fn replace<I, S>(mut self, category: Category, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sets[category.index()] = PhraseSet::new(phrases);
        self
    }

    /// Finish the lexicon.
    #[must_use]
    pub fn build(self) -> Lexicon {
        Lexicon { sets: self.sets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_sets_match_builtin_constants() {
        let lexicon = Lexicon::standard();
        for category in Category::ALL {
            let set = lexicon.get(category);
            assert_eq!(set.len(), category.defaults().len(), "{category:?}");
            assert!(set.iter().eq(category.defaults().iter().copied()), "{category:?}");
        }
    }

    #[test]
    fn builtin_phrases_are_lowercase() {
        for category in Category::ALL {
            for phrase in category.defaults() {
                assert_eq!(*phrase, phrase.to_lowercase(), "{category:?}: {phrase}");
            }
        }
    }

    #[test]
    fn phrase_set_normalizes_and_dedups() {
        let set = PhraseSet::new(["  Bank Account ", "bank account", "", "SSN"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["bank account", "ssn"]);
    }

    #[test]
    fn count_in_counts_each_phrase_once() {
        let set = PhraseSet::new(["easy money", "quick cash", "team player"]);
        let text = "easy money, easy money, quick cash";
        assert_eq!(set.count_in(text), 2);
        assert!(set.any_in(text));
        assert!(!set.any_in("software engineer"));
    }

    #[test]
    fn multi_word_phrase_matches_as_contiguous_substring() {
        let set = PhraseSet::new(["bank account"]);
        assert!(set.any_in("send your bank account details"));
        assert!(!set.any_in("the bank needs your account"));
    }

    #[test]
    fn substring_match_ignores_word_boundaries() {
        // "fee" inside "coffee" still matches: containment, not token equality.
        let set = PhraseSet::new(["fee"]);
        assert!(set.any_in("free coffee"));
    }

    #[test]
    fn contains_is_exact_and_case_insensitive() {
        let set = PhraseSet::new(["gmail.com"]);
        assert!(set.contains("GMAIL.com"));
        assert!(!set.contains("mail.gmail.com"));
    }

    #[test]
    fn builder_extends_and_replaces() {
        let lexicon = Lexicon::builder()
            .extend(Category::Payment, ["Wire Transfer"])
            .replace(Category::SimpleRoles, ["dog walker"])
            .build();
        assert!(lexicon.get(Category::Payment).contains("wire transfer"));
        assert_eq!(lexicon.get(Category::Payment).len(), PAYMENT_PHRASES.len() + 1);
        assert_eq!(lexicon.get(Category::SimpleRoles).iter().collect::<Vec<_>>(), vec!["dog walker"]);
        // Untouched categories keep their defaults.
        assert_eq!(lexicon.get(Category::Urgency), Lexicon::standard().get(Category::Urgency));
    }
}
