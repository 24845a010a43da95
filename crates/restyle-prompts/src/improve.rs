/// Append the generic "make it more ..." rewrite prompt.
pub fn append_prompt(prompt: &mut String, description: &str, text: &str) {
    prompt.push_str(&format!(
        "You are a professional writing assistant. Your task is to improve the given text \
         by making it more {description}.\n\n"
    ));
    prompt.push_str("Return ONLY your improved version of the text:\n\n");
    prompt.push_str(&format!("Text to improve: \"{text}\""));
}
