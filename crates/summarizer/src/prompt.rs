/// Build the summarization prompt wrapped around the source text.
///
/// Pure function of the input; identical text always produces an identical
/// prompt, which keeps the exact-text summary cache meaningful.
#[must_use]
pub fn build_summary_prompt(text: &str) -> String {
    format!(
        "You are a professional fiction editor who excels at summarizing chapter content.\n\
         \n\
         Merge the following content into one coherent digest that highlights the main \
         plot, character development, and important events:\n\
         {text}\n\
         \n\
         ---\n\
         \n\
         Please output:\n\
         1. Story progress (core plot, character growth, important events)\n\
         2. Foreshadowing and threads (setups planted, threads resolved)\n\
         3. Major character changes (development, relationship shifts)\n\
         4. Expected next phase (natural developments from the current plot)\n\
         \n\
         Summary:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_source_text_verbatim() {
        let text = "She found the ledger under the floorboards.";
        let prompt = build_summary_prompt(text);
        assert!(prompt.contains(text));
    }

    #[test]
    fn identical_text_yields_identical_prompt() {
        assert_eq!(build_summary_prompt("abc"), build_summary_prompt("abc"));
    }
}
