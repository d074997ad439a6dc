use super::types::TechniqueResult;

/// Technique reported when the model reply names none, or the call failed.
pub const DEFAULT_TECHNIQUE: &str = "Zero-Shot";

const TECHNIQUE_LABEL: &str = "TECHNIQUE:";
const TRANSFORMED_PROMPT_LABEL: &str = "TRANSFORMED_PROMPT:";

/// Fields recovered from a reply so far. `None` means not found yet.
#[derive(Debug, Default, PartialEq, Eq)]
struct Fields {
    technique: Option<String>,
    transformed_prompt: Option<String>,
}

impl Fields {
    fn is_complete(&self) -> bool {
        self.technique.is_some() && self.transformed_prompt.is_some()
    }

    /// Keep what is already found, take the rest from `other`.
    fn or(self, other: Fields) -> Fields {
        Fields {
            technique: self.technique.or(other.technique),
            transformed_prompt: self.transformed_prompt.or(other.transformed_prompt),
        }
    }
}

/// Extract the technique and the transformed prompt from a selector reply.
///
/// Resolution order, per field:
///
/// 1. Lines starting exactly (case-sensitive) with `TECHNIQUE:` or
///    `TRANSFORMED_PROMPT:`. A `TRANSFORMED_PROMPT:` line with nothing after the
///    label takes the lines directly below it, up to a blank or labeled line.
/// 2. Only for fields still missing: lines containing `technique:` or
///    `transformed_prompt:` anywhere, in any case. The value is what follows the
///    colon of the match.
/// 3. [`DEFAULT_TECHNIQUE`] and `original_prompt` respectively.
///
/// Values are trimmed, and a value that trims to nothing counts as missing.
/// When several lines match in the same tier, the last one wins.
pub fn parse_selection(response: &str, original_prompt: &str) -> TechniqueResult {
    let lines: Vec<&str> = response.lines().collect();

    let mut fields = exact_prefix_fields(&lines);
    if !fields.is_complete() {
        fields = fields.or(substring_fields(&lines));
    }

    TechniqueResult {
        technique: fields
            .technique
            .unwrap_or_else(|| DEFAULT_TECHNIQUE.to_string()),
        transformed_prompt: fields
            .transformed_prompt
            .unwrap_or_else(|| original_prompt.to_string()),
    }
}

/// The result used when the selector call itself failed.
pub fn fallback_selection(original_prompt: &str) -> TechniqueResult {
    TechniqueResult {
        technique: DEFAULT_TECHNIQUE.to_string(),
        transformed_prompt: original_prompt.to_string(),
    }
}

fn exact_prefix_fields(lines: &[&str]) -> Fields {
    let mut fields = Fields::default();

    for (idx, line) in lines.iter().enumerate() {
        if let Some(rest) = line.strip_prefix(TECHNIQUE_LABEL) {
            if let Some(value) = non_empty(rest) {
                fields.technique = Some(value);
            }
        } else if let Some(rest) = line.strip_prefix(TRANSFORMED_PROMPT_LABEL) {
            let value = non_empty(rest).or_else(|| block_below(&lines[idx + 1..]));
            if let Some(value) = value {
                fields.transformed_prompt = Some(value);
            }
        }
    }

    fields
}

/// Lines directly under an empty `TRANSFORMED_PROMPT:` label.
///
/// The block starts on the next line and ends at the first blank line or the
/// next label, so commentary after a blank line is not part of the prompt.
fn block_below(lines: &[&str]) -> Option<String> {
    let block: Vec<&str> = lines
        .iter()
        .take_while(|line| {
            !line.trim().is_empty()
                && !line.starts_with(TECHNIQUE_LABEL)
                && !line.starts_with(TRANSFORMED_PROMPT_LABEL)
        })
        .copied()
        .collect();

    non_empty(&block.join("\n"))
}

fn substring_fields(lines: &[&str]) -> Fields {
    let mut fields = Fields::default();

    for line in lines {
        // A transformed prompt may itself mention "technique:", so that label is
        // checked first and a line is only ever used for one field.
        if let Some(rest) = after_label(line, "transformed_prompt:") {
            if let Some(value) = non_empty(rest) {
                fields.transformed_prompt = Some(value);
            }
        } else if let Some(rest) = after_label(line, "technique:") {
            if let Some(value) = non_empty(rest) {
                fields.technique = Some(value);
            }
        }
    }

    fields
}

/// Text following the first case-insensitive occurrence of `label` in `line`.
///
/// `label` must be lowercase ASCII ending in `:`.
fn after_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    // ASCII lowercasing keeps byte offsets, so the index is valid in `line`.
    let start = line.to_ascii_lowercase().find(label)?;
    Some(&line[start + label.len()..])
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "Solve: if x + 5 = 12, what is 2x + 3?";

    #[test]
    fn test_well_formed_reply() {
        let reply = "TECHNIQUE: Chain-of-Thought\nTRANSFORMED_PROMPT: Let's think step by step...";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Chain-of-Thought");
        assert_eq!(result.transformed_prompt, "Let's think step by step...");
    }

    #[test]
    fn test_well_formed_reply_is_trimmed() {
        let reply = "TECHNIQUE:    Few-Shot   \nTRANSFORMED_PROMPT:\tTranslate this.  \n";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Few-Shot");
        assert_eq!(result.transformed_prompt, "Translate this.");
    }

    #[test]
    fn test_labels_surrounded_by_commentary() {
        let reply = "Sure! Here is my analysis.\n\nTECHNIQUE: Tree of Thoughts\nTRANSFORMED_PROMPT: Explore three options.\n\nHope this helps.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Tree of Thoughts");
        assert_eq!(result.transformed_prompt, "Explore three options.");
    }

    #[test]
    fn test_crlf_line_endings() {
        let reply = "TECHNIQUE: Zero-Shot\r\nTRANSFORMED_PROMPT: Say hi.\r\n";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Zero-Shot");
        assert_eq!(result.transformed_prompt, "Say hi.");
    }

    #[test]
    fn test_last_exact_line_wins() {
        let reply = "TECHNIQUE: Zero-Shot\nTECHNIQUE: Meta Prompting\nTRANSFORMED_PROMPT: Be creative.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Meta Prompting");
    }

    #[test]
    fn test_exact_prefix_is_case_sensitive_and_anchored() {
        // Neither line qualifies for the first pass; the second pass picks both up.
        let reply = "Technique: Few-Shot\n  TRANSFORMED_PROMPT: Indented prompt";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Few-Shot");
        assert_eq!(result.transformed_prompt, "Indented prompt");
    }

    #[test]
    fn test_multi_line_transformed_prompt() {
        let reply = "TECHNIQUE: Few-Shot\nTRANSFORMED_PROMPT: \nExample 1: She go to school. → She goes to school.\nExample 2: They is happy. → They are happy.\nNow correct this: He don't like pizza.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Few-Shot");
        assert_eq!(
            result.transformed_prompt,
            "Example 1: She go to school. → She goes to school.\nExample 2: They is happy. → They are happy.\nNow correct this: He don't like pizza."
        );
    }

    #[test]
    fn test_multi_line_block_stops_at_next_label() {
        let reply = "TRANSFORMED_PROMPT:\nStep one.\nStep two.\nTECHNIQUE: Chain-of-Thought";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Chain-of-Thought");
        assert_eq!(result.transformed_prompt, "Step one.\nStep two.");
    }

    #[test]
    fn test_multi_line_block_stops_at_blank_line() {
        let reply = "TECHNIQUE: Tree of Thoughts\nTRANSFORMED_PROMPT:\n- Thought 1: buses\n- Thought 2: bikes\n\nLet me know if you need more.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(
            result.transformed_prompt,
            "- Thought 1: buses\n- Thought 2: bikes"
        );
    }

    #[test]
    fn test_blank_line_under_empty_label_is_not_a_block() {
        let reply = "TECHNIQUE: A\nTRANSFORMED_PROMPT:\n\nHope this helps.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "A");
        assert_eq!(result.transformed_prompt, PROMPT);
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let reply = "**Technique:** Chain-of-Thought\nThe transformed_prompt: Let's reason carefully.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "** Chain-of-Thought");
        assert_eq!(result.transformed_prompt, "Let's reason carefully.");
    }

    #[test]
    fn test_fallback_takes_text_after_the_matched_colon() {
        let reply = "Answer: selected technique: Few-Shot: with examples\nTRANSFORMED_PROMPT: Do it.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Few-Shot: with examples");
        assert_eq!(result.transformed_prompt, "Do it.");
    }

    #[test]
    fn test_fallback_only_fills_missing_fields() {
        let reply = "TECHNIQUE: Zero-Shot\ntechnique: Few-Shot\ntransformed_prompt: Lowercase prompt";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Zero-Shot");
        assert_eq!(result.transformed_prompt, "Lowercase prompt");
    }

    #[test]
    fn test_fallback_line_is_used_for_one_field_only() {
        let reply = "transformed_prompt: Name the best technique: then apply it";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, DEFAULT_TECHNIQUE);
        assert_eq!(
            result.transformed_prompt,
            "Name the best technique: then apply it"
        );
    }

    #[test]
    fn test_no_labels_defaults_both_fields() {
        let reply = "I think you should just ask the question directly.";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result, fallback_selection(PROMPT));
    }

    #[test]
    fn test_empty_reply_defaults_both_fields() {
        let result = parse_selection("", PROMPT);
        assert_eq!(result.technique, "Zero-Shot");
        assert_eq!(result.transformed_prompt, PROMPT);
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let reply = "TECHNIQUE:   \nTRANSFORMED_PROMPT:";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Zero-Shot");
        assert_eq!(result.transformed_prompt, PROMPT);
    }

    #[test]
    fn test_only_technique_found() {
        let reply = "TECHNIQUE: Meta Prompting";
        let result = parse_selection(reply, PROMPT);
        assert_eq!(result.technique, "Meta Prompting");
        assert_eq!(result.transformed_prompt, PROMPT);
    }

    #[test]
    fn test_after_label_with_non_ascii_prefix() {
        assert_eq!(
            after_label("Élégant TECHNIQUE: Few-Shot", "technique:"),
            Some(" Few-Shot")
        );
        assert_eq!(after_label("nothing here", "technique:"), None);
    }
}
