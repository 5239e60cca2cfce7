//! Keyword-based award classification over achievement text.
//!
//! Achievements are free text, so "awards" are found by case-insensitive
//! substring match against a configurable keyword list.

use crate::models::{AwardCounting, Company};

/// The keywords used when no list is configured.
pub const DEFAULT_AWARD_KEYWORDS: [&str; 4] = ["award", "recognized", "stars", "orienter"];

/// Classifies achievement strings as awards.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::AwardClassifier;
/// use portfolio_stats::models::AwardCounting;
///
/// let classifier = AwardClassifier::default();
/// let text = "Recognized with an award for performance";
///
/// assert_eq!(classifier.score(text), 1);
///
/// let per_keyword = AwardClassifier::new(["award", "recognized"], AwardCounting::PerKeyword);
/// assert_eq!(per_keyword.score(text), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardClassifier {
    keywords: Vec<String>,
    counting: AwardCounting,
}

impl AwardClassifier {
    /// Creates a classifier from a keyword list and counting policy.
    ///
    /// Keywords are trimmed and lowercased. Blank entries and repeats of an
    /// earlier keyword are dropped, keeping first-seen order.
    pub fn new<I, S>(keywords: I, counting: AwardCounting) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
            counting,
        }
    }

    /// Returns the normalized keyword list.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the counting policy.
    pub fn counting(&self) -> AwardCounting {
        self.counting
    }

    /// Returns how many distinct keywords appear in `achievement`.
    pub fn keyword_hits(&self, achievement: &str) -> usize {
        let text = achievement.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count()
    }

    /// Returns true if any keyword appears in `achievement`.
    pub fn is_award(&self, achievement: &str) -> bool {
        self.keyword_hits(achievement) > 0
    }

    /// Returns how much `achievement` contributes to the award count.
    pub fn score(&self, achievement: &str) -> usize {
        match self.counting {
            AwardCounting::PerAchievement => usize::from(self.is_award(achievement)),
            AwardCounting::PerKeyword => self.keyword_hits(achievement),
        }
    }

    /// Counts awards across every achievement of every position of every company.
    pub fn count_awards(&self, companies: &[Company]) -> usize {
        companies
            .iter()
            .flat_map(|c| &c.positions)
            .flat_map(|p| &p.achievements)
            .map(|a| self.score(a))
            .sum()
    }
}

impl Default for AwardClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_AWARD_KEYWORDS, AwardCounting::default())
    }
}
