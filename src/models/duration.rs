//! Duration result model.

use serde::{Deserialize, Serialize};

/// Which label shape a duration is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationStyle {
    /// "2 yrs 3 mos", counting a started month as complete.
    #[default]
    Compact,
    /// "2 years 3 months", counting whole calendar months only.
    Verbose,
}

/// An elapsed span in whole years and months, plus its rendered label.
///
/// `months` is always in `0..=11`.
///
/// # Example
///
/// ```
/// use portfolio_stats::models::DurationResult;
///
/// let result = DurationResult {
///     years: 2,
///     months: 3,
///     label: "2 yrs 3 mos".to_string(),
/// };
/// assert_eq!(result.total_months(), 27);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationResult {
    /// Whole years.
    pub years: u32,
    /// Remaining months after whole years were taken out.
    pub months: u32,
    /// The rendered label.
    pub label: String,
}

impl DurationResult {
    /// Returns the span expressed in months.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_style_defaults_to_compact() {
        assert_eq!(DurationStyle::default(), DurationStyle::Compact);
    }

    #[test]
    fn test_duration_style_serialization() {
        assert_eq!(
            serde_json::to_string(&DurationStyle::Verbose).unwrap(),
            "\"verbose\""
        );
        let style: DurationStyle = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(style, DurationStyle::Compact);
    }
}
