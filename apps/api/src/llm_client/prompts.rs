// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file only knows how to shape them into a chat payload.

use super::ChatMessage;

/// Builds the two-message chat payload: the system instruction first, then the
/// user content verbatim.
pub fn build_chat(system: &str, user_content: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system), ChatMessage::user(user_content)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_orders_system_then_user() {
        let messages = build_chat("be precise", "resume text");
        assert_eq!(
            messages,
            vec![
                ChatMessage::system("be precise"),
                ChatMessage::user("resume text"),
            ]
        );
    }

    #[test]
    fn test_build_chat_keeps_user_content_untouched() {
        let content = "  资深Java工程师，5年经验\n";
        let messages = build_chat("sys", content);
        assert_eq!(messages[1].content, content);
    }
}
