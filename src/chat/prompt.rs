//! Prompt construction for the upstream responder.

/// Assemble the prompt sent to the responder.
///
/// The leading instruction makes the model answer in whatever language the
/// user wrote in; the caller-supplied history precedes the new message so
/// the upstream sees the whole exchange in order.
pub fn build_prompt(chat_history: &str, message: &str) -> String {
    format!(
        "Detect the language of user and reply in the same language and text language. {}\nUser: {}\nAssistant:",
        chat_history, message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_shape() {
        let prompt = build_prompt("User: hi\nAssistant: hello", "how are you?");
        assert!(prompt.starts_with("Detect the language of user"));
        assert!(prompt.contains("User: hi\nAssistant: hello"));
        assert!(prompt.contains("\nUser: how are you?"));
        assert!(prompt.ends_with("Assistant:"));
    }

    #[test]
    fn test_history_precedes_message() {
        let prompt = build_prompt("earlier", "later");
        let history_at = prompt.find("earlier").unwrap();
        let message_at = prompt.find("later").unwrap();
        assert!(history_at < message_at);
    }
}
