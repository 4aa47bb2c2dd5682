//! Wire payload for the messaging webhook

use serde::Serialize;

/// Body of one webhook POST: `{"chat_id": "...", "text": "..."}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationEnvelope<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

impl<'a> NotificationEnvelope<'a> {
    pub fn new(chat_id: &'a str, text: &'a str) -> Self {
        Self { chat_id, text }
    }

    /// Convert to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let envelope = NotificationEnvelope::new("-100", "line one\nline \"two\"");
        let bytes = envelope.to_bytes().unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"chat_id":"-100","text":"line one\nline \"two\""}"#
        );
    }
}
