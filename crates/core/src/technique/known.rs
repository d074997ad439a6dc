use std::fmt;

use serde::{Deserialize, Serialize};

/// Prompting techniques the instructions talk about.
///
/// Labels coming back from the model are free text. [`KnownTechnique::recognize`]
/// maps them onto this list on a best-effort basis, but an unrecognized label is
/// still a valid label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownTechnique {
    #[serde(rename = "Zero-Shot")]
    ZeroShot,
    #[serde(rename = "Few-Shot")]
    FewShot,
    #[serde(rename = "Chain-of-Thought")]
    ChainOfThought,
    #[serde(rename = "Self-Consistency")]
    SelfConsistency,
    #[serde(rename = "Tree of Thoughts")]
    TreeOfThoughts,
    #[serde(rename = "Meta Prompting")]
    MetaPrompting,
}

impl KnownTechnique {
    pub const ALL: [KnownTechnique; 6] = [
        KnownTechnique::ZeroShot,
        KnownTechnique::FewShot,
        KnownTechnique::ChainOfThought,
        KnownTechnique::SelfConsistency,
        KnownTechnique::TreeOfThoughts,
        KnownTechnique::MetaPrompting,
    ];

    /// Techniques the selector instruction offers to the model.
    pub const OFFERED: [KnownTechnique; 5] = [
        KnownTechnique::ZeroShot,
        KnownTechnique::FewShot,
        KnownTechnique::ChainOfThought,
        KnownTechnique::TreeOfThoughts,
        KnownTechnique::MetaPrompting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KnownTechnique::ZeroShot => "Zero-Shot",
            KnownTechnique::FewShot => "Few-Shot",
            KnownTechnique::ChainOfThought => "Chain-of-Thought",
            KnownTechnique::SelfConsistency => "Self-Consistency",
            KnownTechnique::TreeOfThoughts => "Tree of Thoughts",
            KnownTechnique::MetaPrompting => "Meta Prompting",
        }
    }

    /// Spellings accepted for this technique once case and punctuation are stripped.
    fn keys(self) -> &'static [&'static str] {
        match self {
            KnownTechnique::ZeroShot => &["zeroshot"],
            KnownTechnique::FewShot => &["fewshot"],
            KnownTechnique::ChainOfThought => &["chainofthought", "cot"],
            KnownTechnique::SelfConsistency => &["selfconsistency"],
            KnownTechnique::TreeOfThoughts => &["treeofthoughts", "treeofthought", "tot"],
            KnownTechnique::MetaPrompting => &["metaprompting", "metaprompt"],
        }
    }

    /// Best-effort match of a free-text label.
    ///
    /// Ignores case, whitespace, hyphens, underscores and other punctuation, so
    /// `"chain of thought"`, `"Chain-of-Thought"` and `"CHAIN_OF_THOUGHT"` all
    /// resolve to [`KnownTechnique::ChainOfThought`]. A label that starts with a
    /// known spelling followed by extra words (`"Chain-of-Thought (CoT)"`) also
    /// matches; the short acronyms only match exactly.
    pub fn recognize(label: &str) -> Option<KnownTechnique> {
        let normalized = normalize(label);
        if normalized.is_empty() {
            return None;
        }

        KnownTechnique::ALL.into_iter().find(|technique| {
            technique.keys().iter().any(|key| {
                normalized == *key || (key.len() > 3 && normalized.starts_with(key))
            })
        })
    }
}

impl fmt::Display for KnownTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
