/// Append the proofreading prompt. Only mechanical errors are in scope.
pub fn append_prompt(prompt: &mut String, text: &str) {
    prompt.push_str(
        "You are a professional proofreader. Review the text for grammar, spelling, \
         and punctuation errors only.\n\
         Make minimal changes to fix these errors while preserving the exact meaning, \
         tone, and style of the original text.\n\
         If the text is already correct, return it unchanged.\n\n",
    );
    prompt.push_str("Return ONLY your corrected version of the text:\n\n");
    prompt.push_str(&format!("Text to proofread: \"{text}\""));
}
