//! Scam category registry
//!
//! Provides the fixed keyword table mapping scam categories to their trigger
//! keywords, and matches it against message text.

use serde::Serialize;

/// A scam category with its trigger keywords
#[derive(Debug, Clone, Serialize)]
pub struct ScamCategory {
    /// Stable snake_case category name
    pub name: &'static str,
    /// Keywords whose presence marks the category, checked as substrings
    pub keywords: &'static [&'static str],
}

/// The fixed keyword table. Declaration order is match-report order.
pub static SCAM_CATEGORIES: &[ScamCategory] = &[
    ScamCategory {
        name: "urgent_action",
        keywords: &["urgent", "immediately", "asap", "right now", "quick action"],
    },
    ScamCategory {
        name: "financial_threat",
        keywords: &[
            "account",
            "bank",
            "money",
            "transfer",
            "payment",
            "wire",
            "cryptocurrency",
            "bitcoin",
        ],
    },
    ScamCategory {
        name: "verification",
        keywords: &[
            "verify",
            "confirm",
            "validate",
            "authenticate",
            "login",
            "password",
            "otp",
            "code",
        ],
    },
    ScamCategory {
        name: "trust_appeal",
        keywords: &["trusted", "official", "government", "police", "officer", "authority"],
    },
    ScamCategory {
        name: "personal_info",
        keywords: &[
            "name",
            "ssn",
            "social security",
            "credit card",
            "cvv",
            "pin",
            "address",
            "email",
        ],
    },
    ScamCategory {
        name: "phishing",
        keywords: &[
            "click here",
            "link",
            "download",
            "attachment",
            "update",
            "confirm your identity",
        ],
    },
    ScamCategory {
        name: "prize_scam",
        keywords: &["congratulations", "winner", "claim", "prize", "reward", "lottery", "jackpot"],
    },
    ScamCategory {
        name: "romance_scam",
        keywords: &["love", "relationship", "meet", "marry", "darling", "sweetheart"],
    },
    ScamCategory {
        name: "tech_support",
        keywords: &["error", "virus", "malware", "technical support", "computer repair"],
    },
    ScamCategory {
        name: "impersonation",
        keywords: &["we are", "behalf of", "authorized", "representing"],
    },
];

/// A category that matched, with every keyword that hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatch {
    /// Name from the keyword table
    pub category: &'static str,
    /// Matched keywords, in table order
    pub keywords: Vec<&'static str>,
}

/// Match the keyword table against a message
///
/// Keywords are literal substrings of the lower-cased text; multi-word
/// keywords must appear with their exact spacing. Categories with no hits
/// are omitted, and matches come back in table order.
pub fn match_categories(text: &str) -> Vec<CategoryMatch> {
    let lower = text.to_lowercase();
    let mut matches = Vec::new();

    for category in SCAM_CATEGORIES {
        let keywords: Vec<&'static str> = category
            .keywords
            .iter()
            .filter(|keyword| lower.contains(*keyword))
            .copied()
            .collect();
        if !keywords.is_empty() {
            matches.push(CategoryMatch {
                category: category.name,
                keywords,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_unique_nonempty_categories() {
        let mut names = HashSet::new();
        for category in SCAM_CATEGORIES {
            assert!(names.insert(category.name), "duplicate category {}", category.name);
            assert!(!category.keywords.is_empty(), "{} has no keywords", category.name);
        }
        assert_eq!(SCAM_CATEGORIES.len(), 10);
    }

    #[test]
    fn test_single_keyword_single_category() {
        let matches = match_categories("this is urgent");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, "urgent_action");
        assert_eq!(matches[0].keywords, vec!["urgent"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let matches = match_categories("URGENT notice");
        assert_eq!(matches[0].category, "urgent_action");
    }

    #[test]
    fn test_matches_come_back_in_table_order() {
        let matches = match_categories("winner must verify the bank account urgently");
        let order: Vec<&str> = matches.iter().map(|m| m.category).collect();
        assert_eq!(order, vec!["urgent_action", "financial_threat", "verification", "prize_scam"]);
    }

    #[test]
    fn test_substring_matching_crosses_word_boundaries() {
        // "pin" sits inside "spinning"; the table matches substrings, so the
        // personal_info category still fires.
        let matches = match_categories("the wheel keeps spinning");
        assert!(matches.iter().any(|m| m.category == "personal_info"));
    }

    #[test]
    fn test_benign_text_matches_nothing() {
        let matches = match_categories("see you at lunch tomorrow");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_multiple_keywords_reported_for_one_category() {
        let matches = match_categories("wire the money to my bank account");
        let financial = matches.iter().find(|m| m.category == "financial_threat");
        assert_eq!(
            financial.map(|m| m.keywords.clone()),
            Some(vec!["account", "bank", "money", "wire"])
        );
    }
}
