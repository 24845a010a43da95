pub mod freestyle;
pub mod improve;
pub mod proofread;

use restyle_core::Style;

/// Everything a template needs from the incoming request.
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub text: &'a str,
    pub style: Style,
    /// Caller instructions; only read for [`Style::Freestyle`].
    pub instructions: Option<&'a str>,
}

/// Assemble the full prompt for the requested style.
///
/// Text and instructions are interpolated verbatim.
pub fn assemble_prompt(input: &PromptInput<'_>) -> String {
    let mut prompt = String::new();

    match input.style {
        Style::Freestyle => {
            let instructions = input.instructions.unwrap_or_default();
            freestyle::append_prompt(&mut prompt, instructions, input.text);
        }
        Style::Proofread => proofread::append_prompt(&mut prompt, input.text),
        Style::Casual | Style::Professional | Style::Persuasive => {
            improve::append_prompt(&mut prompt, input.style.description(), input.text)
        }
    }

    prompt
}
