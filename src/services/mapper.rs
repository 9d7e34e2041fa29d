// Start of file: /src/services/mapper.rs

use chrono::Utc;

use crate::models::message::{Message, MessageResponse};

pub const MESSAGE_TITLE: &str = "Hello Home";

impl From<&Message> for MessageResponse {
    // ? The date is taken on every call, never cached
    fn from(message: &Message) -> Self {
        MessageResponse {
            message: message.value.clone().unwrap_or_default(),
            title: MESSAGE_TITLE.to_string(),
            date: Utc::now(),
        }
    }
}

/// Maps a message into its response. No message, no response.
pub fn to_message_response(message: Option<&Message>) -> Option<MessageResponse> {
    message.map(MessageResponse::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn maps_value_title_and_date() {
        let before: DateTime<Utc> = Utc::now();
        let response = to_message_response(Some(&Message::new("Test Message"))).unwrap();

        assert_eq!(response.message, "Test Message");
        assert_eq!(response.title, "Hello Home");
        assert!(response.date >= before);
        assert!((Utc::now() - response.date).num_milliseconds() < 1000);
    }

    #[test]
    fn absent_message_maps_to_nothing() {
        assert!(to_message_response(None).is_none());
    }

    #[test]
    fn date_is_not_memoized() {
        let message = Message::new("tick");
        let first = MessageResponse::from(&message);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = MessageResponse::from(&message);

        assert!(second.date > first.date);
        assert_eq!(first.message, second.message);
    }
}

// End of file: /src/services/mapper.rs
