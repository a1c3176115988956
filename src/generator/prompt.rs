//! Prompt construction for problem suggestions

use crate::wizard::SelectionSet;

/// Number of problems requested from the service
pub const SUGGESTION_COUNT: usize = 10;

/// Build the prompt embedding every selection.
///
/// Asks for a plain numbered list with no per-item explanation, which is
/// what `parse_suggestions` expects back.
pub fn build_prompt(selections: &SelectionSet) -> String {
    let mut prompt = format!(
        "Based on the following inputs, suggest {} related problems:\n",
        SUGGESTION_COUNT
    );
    for (label, value) in selections.entries() {
        prompt.push_str(&format!("  - {}: {}\n", label, value));
    }
    prompt.push_str(
        "\nProvide the problems as a numbered list, one per line, in the form \"1. <problem>\". \
         Do not add an explanation for any item.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selections() -> SelectionSet {
        SelectionSet {
            focus: "problem".to_string(),
            industry: "Healthcare".to_string(),
            sub_industry: "Dental Care".to_string(),
            technology: "Artificial Intelligence (AI)".to_string(),
            business_model: "SaaS".to_string(),
            audience: "General Public".to_string(),
            market_segment: "Global".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_every_selection() {
        let prompt = build_prompt(&selections());
        for value in [
            "problem",
            "Healthcare",
            "Dental Care",
            "Artificial Intelligence (AI)",
            "SaaS",
            "General Public",
            "Global",
        ] {
            assert!(prompt.contains(value), "prompt is missing {}", value);
        }
    }

    #[test]
    fn test_prompt_requests_ten_numbered_items_without_explanation() {
        let prompt = build_prompt(&selections());
        assert!(prompt.contains("suggest 10 related problems"));
        assert!(prompt.contains("numbered list"));
        assert!(prompt.contains("Do not add an explanation"));
    }

    #[test]
    fn test_prompt_labels_follow_step_order() {
        let prompt = build_prompt(&selections());
        let focus = prompt.find("Focus:").unwrap();
        let industry = prompt.find("  - Industry:").unwrap();
        let segment = prompt.find("Market Segment:").unwrap();
        assert!(focus < industry && industry < segment);
    }
}
