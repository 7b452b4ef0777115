//! Instruction template sent to the LLM.

/// Class name the generated code must define and the renderer is told to render.
pub const SCENE_CLASS_NAME: &str = "GeneratedScene";

/// Default upper bound on the animation length, in seconds.
pub const DEFAULT_MAX_DURATION_SECS: u32 = 10;

/// Wrap a user's description in the fixed instruction template.
///
/// The template names [`SCENE_CLASS_NAME`], asks for a single fenced python
/// block with no prose, and bounds the duration to
/// [`DEFAULT_MAX_DURATION_SECS`] unless the description says otherwise.
pub fn build_prompt(description: &str) -> String {
    format!(
        "You are an expert Manim Community Edition developer.\n\
         Write Python code for a Manim animation that matches this description:\n\
         \n\
         {description}\n\
         \n\
         Requirements:\n\
         - Define exactly one scene class named `{SCENE_CLASS_NAME}` that inherits from `Scene`.\n\
         - Do not include `from manim import *`; it is added automatically.\n\
         - Respond with code only, inside a single ```python fenced block. No explanations or prose.\n\
         - Keep the animation under {DEFAULT_MAX_DURATION_SECS} seconds unless the description asks for a specific length.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_description() {
        let prompt = build_prompt("a blue circle growing");
        assert!(prompt.contains("a blue circle growing"));
    }

    #[test]
    fn prompt_names_scene_class() {
        assert!(build_prompt("anything").contains("`GeneratedScene`"));
    }

    #[test]
    fn prompt_constrains_output_and_duration() {
        let prompt = build_prompt("x");
        assert!(prompt.contains("```python"));
        assert!(prompt.contains("No explanations or prose"));
        assert!(prompt.contains("under 10 seconds"));
    }

    #[test]
    fn prompt_accepts_empty_and_braced_input() {
        assert!(build_prompt("").contains(SCENE_CLASS_NAME));
        assert!(build_prompt("{not a placeholder}").contains("{not a placeholder}"));
    }
}
