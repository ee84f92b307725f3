/// Turn a channel display name into a backend-safe index name.
///
/// The backend only accepts lowercase alphanumerics and underscores in index
/// names, so every other character is replaced with an underscore, one per
/// offending character. Idempotent: sanitizing a sanitized name is a no-op.
pub fn sanitize_index_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' => c,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_replaces() {
        assert_eq!(sanitize_index_name("General Chat!"), "general_chat_");
        assert_eq!(sanitize_index_name("General-Chat"), "general_chat");
        assert_eq!(sanitize_index_name("general"), "general");
    }

    #[test]
    fn test_each_bad_character_becomes_its_own_underscore() {
        // No run-collapsing: two adjacent bad characters give two underscores.
        assert_eq!(sanitize_index_name("a  b"), "a__b");
        assert_eq!(sanitize_index_name("a-!b"), "a__b");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize_index_name("Votes & Polls #1");
        assert_eq!(sanitize_index_name(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_index_name(""), "");
    }

    #[test]
    fn test_output_charset() {
        for s in ["日本語チャンネル", "émojis 🎉", "UPPER_case-123"] {
            let out = sanitize_index_name(s);
            assert!(
                out.chars()
                    .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_')),
                "unexpected character in {:?}",
                out
            );
        }
    }
}
