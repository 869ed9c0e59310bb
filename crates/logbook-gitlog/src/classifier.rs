//! Changelog category classification
//!
//! Conventional commits are mapped through a fixed type table. Free-form
//! messages fall back to ordered keyword groups, where the first matching
//! group wins.

use regex::Regex;
use std::sync::LazyLock;

use crate::category::Category;
use crate::conventional::parse_conventional;
use crate::references::has_breaking_marker;
use crate::types::CategorySuggestion;

/// Confidence for commits flagged as breaking
const BREAKING_CONFIDENCE: f64 = 0.95;

/// Confidence when nothing matched
const DEFAULT_CONFIDENCE: f64 = 0.30;

/// Mapping of a conventional commit type to a category
struct TypeRule {
    commit_type: &'static str,
    category: Category,
    confidence: f64,
}

const TYPE_RULES: &[TypeRule] = &[
    TypeRule { commit_type: "feat", category: Category::Added, confidence: 0.95 },
    TypeRule { commit_type: "fix", category: Category::Fixed, confidence: 0.95 },
    TypeRule { commit_type: "docs", category: Category::Documentation, confidence: 0.90 },
    TypeRule { commit_type: "style", category: Category::Internal, confidence: 0.80 },
    TypeRule { commit_type: "refactor", category: Category::Changed, confidence: 0.85 },
    TypeRule { commit_type: "perf", category: Category::Performance, confidence: 0.90 },
    TypeRule { commit_type: "test", category: Category::Tests, confidence: 0.90 },
    TypeRule { commit_type: "build", category: Category::Build, confidence: 0.85 },
    TypeRule { commit_type: "ci", category: Category::Infrastructure, confidence: 0.90 },
    TypeRule { commit_type: "chore", category: Category::Internal, confidence: 0.80 },
    TypeRule { commit_type: "revert", category: Category::Fixed, confidence: 0.85 },
    TypeRule { commit_type: "security", category: Category::Security, confidence: 0.95 },
    TypeRule { commit_type: "deps", category: Category::Dependencies, confidence: 0.90 },
];

/// Keyword group patterns, checked in this order.
///
/// Security sits ahead of the generic fix/add groups so that "fix security
/// hole" lands in Security. Fix sits ahead of removal and documentation so
/// that "fix leak by removing cache" and "fix typo" stay fixes. Stems list
/// their suffixes so that unrelated words ("address", "fixture") miss.
const KEYWORD_GROUPS: &[(&str, &str, Category, f64)] = &[
    (
        "breaking",
        r"\bbreaking\b|\bincompatible\b",
        Category::Breaking,
        0.70,
    ),
    (
        "security",
        r"\bsecurity\b|\bvulnerab(?:le|ility|ilities)\b|\bcve-\d+|\bxss\b|\bcsrf\b|\binjection\b|\bexploit(?:s|ed|able)?\b",
        Category::Security,
        0.70,
    ),
    (
        "deprecation",
        r"\bdeprecat(?:e|es|ed|ing|ion|ions)\b",
        Category::Deprecated,
        0.65,
    ),
    ("revert", r"\brevert(?:s|ed|ing)?\b", Category::Fixed, 0.50),
    (
        "fix",
        r"\bfix(?:es|ed|ing)?\b|\bbugs?\b|\bhotfix(?:es)?\b|\bpatch(?:es|ed)?\b|\bresolve[sd]?\b|\bcrash(?:es|ed|ing)?\b",
        Category::Fixed,
        0.60,
    ),
    (
        "removal",
        r"\bremov(?:e|es|ed|ing)\b|\bdelet(?:e|es|ed|ing)\b|\bdrop(?:s|ped|ping)?\b",
        Category::Removed,
        0.55,
    ),
    (
        "performance",
        r"\bperf\b|\bperformance\b|\boptimi[sz](?:e|es|ed|ing|ation|ations)\b|\bspeed\s*up\b|\bfaster\b",
        Category::Performance,
        0.60,
    ),
    (
        "dependency",
        r"\bdeps?\b|\bdependenc(?:y|ies)\b|\bbump(?:s|ed)?\b|\bupgrade[sd]?\b",
        Category::Dependencies,
        0.60,
    ),
    (
        "accessibility",
        r"\ba11y\b|\baccessib(?:le|ility)\b|\baria-[a-z]+|\bscreen\s*readers?\b",
        Category::Accessibility,
        0.60,
    ),
    (
        "localization",
        r"\bi18n\b|\bl10n\b|\btranslat(?:e|es|ed|ing|ion|ions)\b|\blocali[sz](?:e|es|ed|ing|ation|ations)\b",
        Category::Localization,
        0.60,
    ),
    (
        "documentation",
        r"\bdocs?\b|\bdocumentation\b|\breadme\b|\bchangelog\b|\btypos?\b",
        Category::Documentation,
        0.60,
    ),
    (
        "test",
        r"\btests?\b|\btesting\b|\bspecs?\b|\bcoverage\b",
        Category::Tests,
        0.55,
    ),
    (
        "infrastructure",
        r"\bci\b|\bpipelines?\b|\bworkflows?\b|\bgithub actions\b|\bdeploy(?:s|ed|ing|ment|ments)?\b",
        Category::Infrastructure,
        0.55,
    ),
    (
        "build",
        r"\bbuild\b|\bmakefile\b|\bdockerfile\b|\bcompil(?:e|es|ed|er|ing|ation)\b|\bbundl(?:e|es|ed|er|ing)\b",
        Category::Build,
        0.50,
    ),
    (
        "configuration",
        r"\bconfig(?:s|ure|ured|uration|urations)?\b|\bsettings?\b|\benv(?:ironment)? var(?:s|iables?)?\b",
        Category::Configuration,
        0.45,
    ),
    (
        "migration",
        r"\bmigrat(?:e|es|ed|ing|ion|ions)\b",
        Category::Migration,
        0.50,
    ),
    (
        "experimental",
        r"\bexperiment(?:s|al|ally)?\b|\bfeature flags?\b|\bbeta\b",
        Category::Experimental,
        0.45,
    ),
    (
        "compatibility",
        r"\bcompat(?:ible|ibility)?\b|\bpolyfills?\b|\bbackport(?:s|ed|ing)?\b",
        Category::Compatibility,
        0.45,
    ),
    (
        "addition",
        r"\badd(?:s|ed|ing|ition\w*)?\b|\bimplement(?:s|ed|ing|ation)?\b|\bintroduc(?:e|es|ed|ing)\b|\bnew\b|\bcreate[sd]?\b",
        Category::Added,
        0.55,
    ),
    (
        "refactoring",
        r"\brefactor(?:s|ed|ing)?\b|\brestructur(?:e|es|ed|ing)\b|\bclean\s*up\b|\brewrit(?:e|es|ing|ten)\b|\brewrote\b|\brenam(?:e|es|ed|ing)\b|\bsimplif(?:y|ies|ied|ying)\b",
        Category::Changed,
        0.40,
    ),
];

/// A compiled keyword group
struct KeywordGroup {
    label: &'static str,
    pattern: Regex,
    category: Category,
    confidence: f64,
}

static COMPILED_GROUPS: LazyLock<Vec<KeywordGroup>> = LazyLock::new(|| {
    KEYWORD_GROUPS
        .iter()
        .map(|&(label, pattern, category, confidence)| KeywordGroup {
            label,
            pattern: Regex::new(pattern).expect("Invalid regex"),
            category,
            confidence,
        })
        .collect()
});

/// Classify a conventional commit by its type.
///
/// Breaking commits always map to [`Category::Breaking`]. Types missing
/// from the table yield `None`; they do not fall back to keyword matching.
pub fn classify_conventional(commit_type: &str, breaking: bool) -> Option<CategorySuggestion> {
    if breaking {
        return Some(CategorySuggestion::new(
            Category::Breaking,
            BREAKING_CONFIDENCE,
            format!("Conventional commit '{}' is marked as a breaking change", commit_type),
        ));
    }

    let commit_type = commit_type.to_lowercase();
    TYPE_RULES
        .iter()
        .find(|rule| rule.commit_type == commit_type)
        .map(|rule| {
            CategorySuggestion::new(
                rule.category,
                rule.confidence,
                format!(
                    "Conventional commit type '{}' maps to {}",
                    rule.commit_type, rule.category
                ),
            )
        })
}

/// Classify a free-form message by keyword groups.
///
/// Always returns a suggestion: when no group matches the result is
/// [`Category::Changed`] at low confidence.
pub fn classify_heuristic(message: &str) -> CategorySuggestion {
    let lowered = message.to_lowercase();

    for group in COMPILED_GROUPS.iter() {
        if let Some(found) = group.pattern.find(&lowered) {
            return CategorySuggestion::new(
                group.category,
                group.confidence,
                format!(
                    "Message contains {} keyword '{}'",
                    group.label,
                    found.as_str()
                ),
            );
        }
    }

    CategorySuggestion::new(
        Category::Changed,
        DEFAULT_CONFIDENCE,
        "No conventional type or known keywords; defaulting to Changed",
    )
}

/// Suggest a category from already-parsed commit fields.
///
/// With a conventional type the type table decides; without one the full
/// message goes through the keyword groups.
pub fn suggest_category(
    commit_type: Option<&str>,
    breaking: bool,
    message: &str,
) -> Option<CategorySuggestion> {
    match commit_type {
        Some(commit_type) => classify_conventional(commit_type, breaking),
        None => Some(classify_heuristic(message)),
    }
}

/// Classify a raw commit message (header plus optional body)
pub fn classify_message(message: &str) -> Option<CategorySuggestion> {
    match parse_conventional(message) {
        Some(parsed) => {
            let body = message.split_once('\n').map(|(_, b)| b).unwrap_or_default();
            let breaking = parsed.breaking || has_breaking_marker(body);
            classify_conventional(&parsed.commit_type, breaking)
        }
        None => Some(classify_heuristic(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Tier;

    fn category_of(message: &str) -> Category {
        classify_message(message).unwrap().category
    }

    #[test]
    fn test_feat_and_fix() {
        let feat = classify_message("feat: add x").unwrap();
        assert_eq!(feat.category, Category::Added);
        assert!(feat.confidence >= 0.90);

        let fix = classify_message("fix: y").unwrap();
        assert_eq!(fix.category, Category::Fixed);
        assert!(fix.confidence >= 0.90);
    }

    #[test]
    fn test_type_table_is_complete() {
        let expected = [
            ("feat", Category::Added),
            ("fix", Category::Fixed),
            ("docs", Category::Documentation),
            ("style", Category::Internal),
            ("refactor", Category::Changed),
            ("perf", Category::Performance),
            ("test", Category::Tests),
            ("build", Category::Build),
            ("ci", Category::Infrastructure),
            ("chore", Category::Internal),
            ("revert", Category::Fixed),
            ("security", Category::Security),
            ("deps", Category::Dependencies),
        ];
        assert_eq!(TYPE_RULES.len(), expected.len());

        for (commit_type, category) in expected {
            let suggestion = classify_conventional(commit_type, false).unwrap();
            assert_eq!(suggestion.category, category, "type {}", commit_type);
            assert!((0.80..=0.95).contains(&suggestion.confidence));
            assert!(suggestion.reasoning.contains(commit_type));
        }
    }

    #[test]
    fn test_breaking_header_and_body_are_equivalent() {
        let header = classify_message("feat!: remove old API").unwrap();
        let body = classify_message("feat: change API\n\nBREAKING CHANGE: old method removed")
            .unwrap();

        for suggestion in [header, body] {
            assert_eq!(suggestion.category, Category::Breaking);
            assert_eq!(suggestion.tier, Tier::Standard);
            assert!(suggestion.confidence >= 0.90);
        }
    }

    #[test]
    fn test_breaking_overrides_unknown_type() {
        let suggestion = classify_conventional("wip", true).unwrap();
        assert_eq!(suggestion.category, Category::Breaking);
    }

    #[test]
    fn test_unknown_conventional_type_has_no_suggestion() {
        assert!(classify_message("wip: fix security hole").is_none());
        assert!(suggest_category(Some("wip"), false, "wip: x").is_none());
    }

    #[test]
    fn test_security_before_fix() {
        let suggestion = classify_message("Fix security vulnerability").unwrap();
        assert_eq!(suggestion.category, Category::Security);
        assert!(suggestion.reasoning.contains("security"));
    }

    #[test]
    fn test_default_is_low_confidence_changed() {
        let suggestion = classify_message("Update something").unwrap();
        assert_eq!(suggestion.category, Category::Changed);
        assert!((suggestion.confidence - 0.30).abs() < f64::EPSILON);
        assert!(suggestion.is_low_confidence());
    }

    #[test]
    fn test_heuristic_confidence_range() {
        for message in [
            "Fix crash on startup",
            "Add export button",
            "Bump serde to 1.0.200",
            "Improve performance of the index",
            "Update README",
            "Remove legacy endpoint",
            "Rename internal helper",
        ] {
            let suggestion = classify_heuristic(message);
            assert!(
                (0.30..=0.70).contains(&suggestion.confidence),
                "{} -> {}",
                message,
                suggestion.confidence
            );
        }
    }

    #[test]
    fn test_heuristic_groups() {
        assert_eq!(category_of("Fix crash on startup"), Category::Fixed);
        assert_eq!(category_of("Add export button"), Category::Added);
        assert_eq!(category_of("Bump serde to 1.0.200"), Category::Dependencies);
        assert_eq!(category_of("Update README"), Category::Documentation);
        assert_eq!(category_of("Deprecate the v1 client"), Category::Deprecated);
        assert_eq!(category_of("Add German translations"), Category::Localization);
        assert_eq!(category_of("Improve a11y of dialogs"), Category::Accessibility);
        assert_eq!(category_of("Refactor the scheduler"), Category::Changed);
    }

    #[test]
    fn test_keywords_match_whole_words() {
        // "decision" contains "ci", "address" contains "add"
        assert_eq!(category_of("Record decision"), Category::Changed);
        assert_eq!(classify_heuristic("Record decision").confidence, DEFAULT_CONFIDENCE);
        assert_eq!(category_of("Address review comments"), Category::Changed);
        assert!(classify_heuristic("Address review comments").is_low_confidence());
        assert_eq!(category_of("Update fixture data"), Category::Changed);
        assert_eq!(category_of("Adopt newer prefixes"), Category::Changed);
    }

    #[test]
    fn test_keyword_suffixes_still_match() {
        assert_eq!(category_of("Added retry button"), Category::Added);
        assert_eq!(category_of("Additional exporters"), Category::Added);
        assert_eq!(category_of("Fixes stale cache"), Category::Fixed);
        assert_eq!(category_of("Optimized the query planner"), Category::Performance);
        assert_eq!(category_of("Migrating sessions table"), Category::Migration);
        assert_eq!(category_of("Configure logger"), Category::Configuration);
    }

    #[test]
    fn test_fix_before_removal_and_documentation() {
        assert_eq!(category_of("Fix memory leak by removing cache"), Category::Fixed);
        assert_eq!(category_of("Fix typo in error message"), Category::Fixed);
        assert_eq!(category_of("Remove legacy endpoint"), Category::Removed);
        assert_eq!(category_of("Revert fix for login redirect"), Category::Fixed);
        assert!(classify_heuristic("Revert fix for login redirect")
            .reasoning
            .contains("revert"));
    }

    #[test]
    fn test_heuristic_is_case_insensitive() {
        let suggestion = classify_heuristic("SECURITY PATCH for CVE-2024-1234");
        assert_eq!(suggestion.category, Category::Security);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for message in ["feat: add x", "Fix security vulnerability", "Update something"] {
            assert_eq!(classify_message(message), classify_message(message));
        }
    }

    #[test]
    fn test_suggest_category_paths() {
        let conventional = suggest_category(Some("perf"), false, "perf: faster").unwrap();
        assert_eq!(conventional.category, Category::Performance);

        let heuristic = suggest_category(None, false, "Add login page").unwrap();
        assert_eq!(heuristic.category, Category::Added);
    }
}
