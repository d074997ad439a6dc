/// System turn sent with the raw prompt to pick a technique and rewrite the prompt.
///
/// The reply is expected in the two-line labeled format that
/// [`parse_selection`](super::parse_selection) understands.
pub const SELECTOR_INSTRUCTION: &str = "\
You are an expert in prompt engineering. Your task is to:
1. Analyze the given prompt
2. Choose the most appropriate prompting technique from: Zero-Shot, Few-Shot, Chain-of-Thought, Tree of Thoughts, or Meta Prompting
3. Transform the prompt using the chosen technique

Return your response in this exact format:
TECHNIQUE: [chosen technique]
TRANSFORMED_PROMPT: [your transformed prompt]

### Examples:

Prompt: Translate 'How are you?' into Spanish.
TECHNIQUE: Zero-Shot
TRANSFORMED_PROMPT: Translate 'How are you?' into Spanish.

Prompt: Fix the grammar in this sentence: 'He don't like pizza.'
TECHNIQUE: Few-Shot
TRANSFORMED_PROMPT: 
Example 1: She go to school. → She goes to school.  
Example 2: They is happy. → They are happy.  
Now correct this: He don't like pizza.

Prompt: What is 15% of 200?
TECHNIQUE: Chain-of-Thought
TRANSFORMED_PROMPT: Let's think step by step. First, 10% of 200 is 20. Then, 5% of 200 is 10. So, 15% of 200 is 20 + 10 = 30.

Prompt: How can we improve urban traffic flow?
TECHNIQUE: Tree of Thoughts
TRANSFORMED_PROMPT: Let's explore multiple strategies for reducing traffic:  
- Thought 1: Improve public transport  
- Thought 2: Encourage cycling and walking  
- Thought 3: Use smart traffic lights  
Now expand on each and evaluate their impact.

Prompt: Rewrite the following prompt to be more creative and engaging: 'Write a story about a robot learning emotions.'
TECHNIQUE: Meta Prompting
TRANSFORMED_PROMPT: Make this prompt more imaginative: 'Write a story about a robot learning emotions.' Emphasize wonder, discovery, and humanity.";

/// System turn sent with the transformed prompt to produce the final answer.
pub const RESPONDER_INSTRUCTION: &str =
    "You are a helpful AI assistant. Provide a clear and detailed response.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::KnownTechnique;

    #[test]
    fn test_selector_instruction_names_the_reply_format() {
        assert!(SELECTOR_INSTRUCTION.contains("TECHNIQUE: [chosen technique]"));
        assert!(SELECTOR_INSTRUCTION.contains("TRANSFORMED_PROMPT: [your transformed prompt]"));
    }

    #[test]
    fn test_selector_instruction_has_an_example_per_offered_technique() {
        for technique in KnownTechnique::OFFERED {
            let line = format!("TECHNIQUE: {}", technique.label());
            assert!(
                SELECTOR_INSTRUCTION.contains(&line),
                "missing example for {technique}"
            );
        }
    }
}
