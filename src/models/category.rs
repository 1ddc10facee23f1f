//! Category labels
//!
//! The ledger stores categories as plain text. The default set below is what
//! the entry layer offers and checks against unless the user configures a
//! different list.

/// Categories offered for new entries
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Salary", "Food", "Bills", "Transport", "Other"];

/// The default category list as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Find `name` in `allowed`, ignoring case and surrounding whitespace.
///
/// Returns the configured spelling on a match.
pub fn match_category<'a>(name: &str, allowed: &'a [String]) -> Option<&'a str> {
    let name = name.trim();
    allowed
        .iter()
        .find(|c| c.eq_ignore_ascii_case(name))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let cats = default_categories();
        assert_eq!(cats.len(), 5);
        assert_eq!(cats[0], "Salary");
    }

    #[test]
    fn test_match_category() {
        let cats = default_categories();
        assert_eq!(match_category("food", &cats), Some("Food"));
        assert_eq!(match_category(" Bills ", &cats), Some("Bills"));
        assert_eq!(match_category("Rent", &cats), None);
    }
}
