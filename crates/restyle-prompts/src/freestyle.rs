/// Append the free-form prompt built around caller instructions.
pub fn append_prompt(prompt: &mut String, instructions: &str, text: &str) {
    prompt.push_str(
        "You are a helpful writing assistant. The user has provided some text and \
         instructions for how to help with it.\n\n",
    );
    prompt.push_str(&format!("Instructions: {instructions}\n\n"));
    prompt.push_str(&format!("Text: \"{text}\"\n\n"));
    prompt.push_str(
        "Provide a response that follows the user's instructions. Return ONLY your response.",
    );
}
