//! Prompt template for sentiment analysis

/// Template used for every request. `{text}` marks where the user text goes.
pub const SENTIMENT_TEMPLATE: &str = "Analyze the sentiment of the following text: {text}. \
Provide a detailed explanation of the sentiment, including any key phrases or words \
that contribute to this sentiment.";

const PLACEHOLDER: &str = "{text}";

/// Build the instruction sent to the completion service.
///
/// The text is spliced in literally. Braces, newlines or anything else in it
/// are not interpreted, and a `{text}` inside the user text is not expanded
/// again.
pub fn build_instruction(text: &str) -> String {
    match SENTIMENT_TEMPLATE.split_once(PLACEHOLDER) {
        Some((prefix, suffix)) => {
            let mut instruction = String::with_capacity(prefix.len() + text.len() + suffix.len());
            instruction.push_str(prefix);
            instruction.push_str(text);
            instruction.push_str(suffix);
            instruction
        }
        None => SENTIMENT_TEMPLATE.to_string(),
    }
}
