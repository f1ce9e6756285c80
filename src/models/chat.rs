use serde::{Deserialize, Serialize};

/// 对话角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One turn of the chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// Unix 毫秒时间戳
    pub timestamp: u64,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>, timestamp: u64) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp,
        }
    }

    /// "HH:MM" (UTC)
    pub fn clock_label(&self) -> String {
        let minutes_of_day = (self.timestamp / 60_000) % (24 * 60);
        format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_label() {
        // 1970-01-01 13:05:59 UTC
        let msg = ChatMessage::new(Role::User, "hi", (13 * 3600 + 5 * 60 + 59) * 1000);
        assert_eq!(msg.clock_label(), "13:05");
        let msg = ChatMessage::new(Role::Model, "", 0);
        assert_eq!(msg.clock_label(), "00:00");
    }

    #[test]
    fn test_role_wire_name() {
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
        assert_eq!(Role::User.as_str(), "user");
    }
}
