// Rust guideline compliant 2026-10-12

//! The nine independent detectors.
//!
//! Each function is pure: it reads the analysis text (or raw fields) plus the
//! shared read-only resources and returns an integer outcome, `0` meaning the
//! signal did not fire.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dictionary::WordList;
use crate::lexicon::{Category, Lexicon};

/// Vague wording needs at least this many distinct generic phrases.
pub const MIN_VAGUE_PHRASES: usize = 3;
/// Texts with fewer word tokens are too short to judge spelling.
pub const MIN_SPELLING_TOKENS: usize = 10;
/// Spelling fires when the unknown-word rate strictly exceeds this.
pub const MAX_SPELLING_ERROR_RATE: f64 = 0.05;
/// Tone fires when the uppercase share strictly exceeds this.
pub const MAX_CAPS_RATE: f64 = 0.10;
/// Tone fires when the emoji count strictly exceeds this.
pub const MAX_EMOJIS: usize = 2;
/// Tone fires when the number of `!!`/`??` runs strictly exceeds this.
pub const MAX_PUNCTUATION_RUNS: usize = 2;
/// Simple roles advertising more than this are suspicious.
pub const SIMPLE_ROLE_SALARY_CAP: u64 = 100_000;
/// Any role advertising more than this is suspicious.
pub const ANY_ROLE_SALARY_CAP: u64 = 300_000;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word regex is valid"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email regex is valid")
});

static PUNCTUATION_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!{2,}|\?{2,}").expect("punctuation regex is valid"));

// Comma-grouped thousands first, so "120,000" is one number; else a plain digit run.
static SALARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?(\d{1,3}(?:,\d{3})+|\d+)").expect("salary regex is valid")
});

fn flag(fired: bool) -> u32 {
    u32::from(fired)
}

fn saturate(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
}

// ---------------------------------------------------------------------------
// 1. Vague description
// ---------------------------------------------------------------------------

/// `1` when generic phrases outnumber specific skills and there are at least
/// [`MIN_VAGUE_PHRASES`] of them.
#[must_use]
pub fn vague_description(text: &str, lexicon: &Lexicon) -> u32 {
    let vague = lexicon.get(Category::Vague).count_in(text);
    let specific = lexicon.get(Category::SpecificSkills).count_in(text);
    flag(vague > specific && vague >= MIN_VAGUE_PHRASES)
}

// ---------------------------------------------------------------------------
// 2. Spelling density
// ---------------------------------------------------------------------------

/// Alphabetic word tokens of `text`, lower-cased.
pub fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_RE.find_iter(text).map(|m| m.as_str().to_ascii_lowercase())
}

/// Number of distinct unknown words when their rate exceeds
/// [`MAX_SPELLING_ERROR_RATE`], else `0`.
///
/// Returns `0` below [`MIN_SPELLING_TOKENS`] tokens. `token_cap` bounds how
/// many tokens are examined; `None` examines them all, so cost grows linearly
/// with the text.
#[must_use]
pub fn spelling_errors(text: &str, dictionary: &WordList, token_cap: Option<usize>) -> u32 {
    let tokens: Vec<String> = word_tokens(text).take(token_cap.unwrap_or(usize::MAX)).collect();
    if tokens.len() < MIN_SPELLING_TOKENS {
        return 0;
    }
    let unknown: BTreeSet<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|word| !dictionary.contains(word))
        .collect();
    if ratio(unknown.len(), tokens.len()) > MAX_SPELLING_ERROR_RATE {
        saturate(unknown.len())
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// 3. Unprofessional tone
// ---------------------------------------------------------------------------

/// Share of characters in `raw` that are uppercase; `0.0` for empty text.
#[must_use]
pub fn caps_rate(raw: &str) -> f64 {
    let (upper, total) = raw
        .chars()
        .fold((0, 0), |(upper, total), c| (upper + usize::from(c.is_uppercase()), total + 1));
    ratio(upper, total)
}

/// `true` for code points in the pictographic emoji blocks.
///
/// Covers Misc Symbols and Pictographs, Emoticons, Transport and Map,
/// Supplemental Symbols and Pictographs, Symbols and Pictographs Extended-A,
/// Misc Symbols, Dingbats, and the regional indicators used by flags.
#[must_use]
pub fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F1E6}'..='\u{1F1FF}'
            | '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F600}'..='\u{1F64F}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F900}'..='\u{1F9FF}'
            | '\u{1FA70}'..='\u{1FAFF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
    )
}

/// Number of emoji code points in `text`.
#[must_use]
pub fn emoji_count(text: &str) -> usize {
    text.chars().filter(|&c| is_emoji(c)).count()
}

/// Number of `!!+` or `??+` runs in `text`.
#[must_use]
pub fn punctuation_runs(text: &str) -> usize {
    PUNCTUATION_RUN_RE.find_iter(text).count()
}

/// `1` on excessive capitals, emoji, or punctuation runs in the un-lowered text.
#[must_use]
pub fn unprofessional_tone(raw: &str) -> u32 {
    flag(
        caps_rate(raw) > MAX_CAPS_RATE
            || emoji_count(raw) > MAX_EMOJIS
            || punctuation_runs(raw) > MAX_PUNCTUATION_RUNS,
    )
}

// ---------------------------------------------------------------------------
// 4. Unrealistic salary
// ---------------------------------------------------------------------------

/// Largest number in `salary`, tolerating `$` and thousands separators.
///
/// `None` when the text holds no digits. Numbers too large for `u64` are skipped.
#[must_use]
pub fn max_salary(salary: &str) -> Option<u64> {
    SALARY_RE
        .captures_iter(salary)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().replace(',', "").parse::<u64>().ok())
        .max()
}

/// `1` when a simple role pays over [`SIMPLE_ROLE_SALARY_CAP`], or any role
/// over [`ANY_ROLE_SALARY_CAP`]. Both comparisons are strict.
#[must_use]
pub fn unrealistic_salary(title: &str, salary: &str, lexicon: &Lexicon) -> u32 {
    let Some(max) = max_salary(salary) else {
        return 0;
    };
    let simple_role = lexicon.get(Category::SimpleRoles).any_in(&title.to_lowercase());
    flag((simple_role && max > SIMPLE_ROLE_SALARY_CAP) || max > ANY_ROLE_SALARY_CAP)
}

// ---------------------------------------------------------------------------
// 5-9. Phrase and address checks
// ---------------------------------------------------------------------------

/// `1` when any payment phrase occurs.
#[must_use]
pub fn upfront_payment(text: &str, lexicon: &Lexicon) -> u32 {
    flag(lexicon.get(Category::Payment).any_in(text))
}

/// Domains of the email addresses found in `text`, lower-cased.
pub fn email_domains(text: &str) -> impl Iterator<Item = String> + '_ {
    EMAIL_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().split_once('@').map(|(_, domain)| domain.to_lowercase()))
}

/// `1` when any address uses a free webmail domain.
#[must_use]
pub fn generic_email(text: &str, lexicon: &Lexicon) -> u32 {
    let free = lexicon.get(Category::FreeEmailDomains);
    flag(email_domains(text).any(|domain| free.contains(&domain)))
}

/// `1` when any urgency phrase occurs.
#[must_use]
pub fn urgency(text: &str, lexicon: &Lexicon) -> u32 {
    flag(lexicon.get(Category::Urgency).any_in(text))
}

/// `1` when any sensitive-information phrase occurs.
#[must_use]
pub fn sensitive_info(text: &str, lexicon: &Lexicon) -> u32 {
    flag(lexicon.get(Category::SensitiveInfo).any_in(text))
}

/// `1` when any messaging-app phrase occurs.
#[must_use]
pub fn messaging_app(text: &str, lexicon: &Lexicon) -> u32 {
    flag(lexicon.get(Category::MessagingApps).any_in(text))
}
