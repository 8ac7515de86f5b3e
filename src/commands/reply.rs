//! Command replies.

use crate::models::UpcomingBirthday;
use std::fmt;

/// What a command hands back to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A plain message
    Text(String),

    /// The phone numbers of one contact
    Phones(Vec<String>),

    /// The upcoming-birthdays report
    Birthdays(Vec<UpcomingBirthday>),

    /// The session should end
    Exit,
}

impl Reply {
    /// Build a text reply.
    pub fn text(message: impl Into<String>) -> Self {
        Reply::Text(message.into())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(message) => write!(f, "{}", message),
            Reply::Phones(phones) if phones.is_empty() => write!(f, "No phones."),
            Reply::Phones(phones) => write!(f, "{}", phones.join("; ")),
            Reply::Birthdays(entries) if entries.is_empty() => {
                write!(f, "No upcoming birthdays.")
            }
            Reply::Birthdays(entries) => {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|e| format!("{}: {}", e.name, e.birthday))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Reply::Exit => write!(f, "Good bye!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_display() {
        assert_eq!(Reply::text("Contact added.").to_string(), "Contact added.");
        assert_eq!(Reply::Phones(vec![]).to_string(), "No phones.");
        assert_eq!(
            Reply::Phones(vec!["1111111111".into(), "2222222222".into()]).to_string(),
            "1111111111; 2222222222"
        );
        assert_eq!(Reply::Birthdays(vec![]).to_string(), "No upcoming birthdays.");
        assert_eq!(Reply::Exit.to_string(), "Good bye!");
    }

    #[test]
    fn test_birthdays_one_line_each() {
        let reply = Reply::Birthdays(vec![
            UpcomingBirthday {
                name: "Max".into(),
                birthday: "02.12.2024".into(),
            },
            UpcomingBirthday {
                name: "Maria".into(),
                birthday: "04.12.2024".into(),
            },
        ]);
        assert_eq!(reply.to_string(), "Max: 02.12.2024\nMaria: 04.12.2024");
    }
}
