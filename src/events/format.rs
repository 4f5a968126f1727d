use crate::config::Config;
use crate::events::Player;

pub const COMMAND_PREFIX: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Message,
    Connection,
    Disconnection,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Message => "message",
            Category::Connection => "connection",
            Category::Disconnection => "disconnection",
        }
    }
}

/// `[category] [admin|player] [name]`, with `: text` appended for chat.
/// The role segment only appears when admin detection is on.
pub fn format_notification(
    config: &Config,
    category: Category,
    player: &Player,
    text: Option<&str>,
) -> String {
    let mut line = format!("[{}]", category.as_str());

    if config.admin_detection {
        let role = if player.admin { "admin" } else { "player" };
        line.push_str(&format!(" [{}]", role));
    }

    line.push_str(&format!(" [{}]", player.plain_name()));

    if let Some(text) = text {
        line.push_str(": ");
        line.push_str(text);
    }

    line
}

pub fn chat_message(config: &Config, player: &Player, text: &str) -> Option<String> {
    if text.starts_with(COMMAND_PREFIX) || !config.message_notify {
        return None;
    }
    Some(format_notification(config, Category::Message, player, Some(text)))
}

pub fn join_message(config: &Config, player: &Player) -> Option<String> {
    config
        .connect_notify
        .then(|| format_notification(config, Category::Connection, player, None))
}

pub fn leave_message(config: &Config, player: &Player) -> Option<String> {
    config
        .disconnect_notify
        .then(|| format_notification(config, Category::Disconnection, player, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_toggle_combinations() -> Vec<Config> {
        (0..16u8)
            .map(|bits| Config {
                admin_detection: bits & 1 != 0,
                message_notify: bits & 2 != 0,
                connect_notify: bits & 4 != 0,
                disconnect_notify: bits & 8 != 0,
                ..Config::default()
            })
            .collect()
    }

    #[test]
    fn commands_are_never_forwarded() {
        let player = Player::new("Nova", true);
        for config in all_toggle_combinations() {
            assert_eq!(chat_message(&config, &player, "/help"), None);
            assert_eq!(chat_message(&config, &player, "/"), None);
        }
    }

    #[test]
    fn disabled_toggles_produce_nothing() {
        let config = Config::default();
        let player = Player::new("Nova", false);

        assert_eq!(chat_message(&config, &player, "hello"), None);
        assert_eq!(join_message(&config, &player), None);
        assert_eq!(leave_message(&config, &player), None);
    }

    #[test]
    fn no_role_segment_without_admin_detection() {
        for config in all_toggle_combinations()
            .into_iter()
            .filter(|c| !c.admin_detection)
        {
            for admin in [true, false] {
                let player = Player::new("Nova", admin);
                let lines = [
                    chat_message(&config, &player, "hi"),
                    join_message(&config, &player),
                    leave_message(&config, &player),
                ];
                for line in lines.iter().flatten() {
                    assert!(!line.contains("[admin]"), "{}", line);
                    assert!(!line.contains("[player]"), "{}", line);
                }
            }
        }
    }

    #[test]
    fn role_segment_reflects_admin_flag() {
        let config = Config {
            admin_detection: true,
            message_notify: true,
            connect_notify: true,
            disconnect_notify: true,
            ..Config::default()
        };

        assert_eq!(
            chat_message(&config, &Player::new("Nova", true), "hello").as_deref(),
            Some("[message] [admin] [Nova]: hello")
        );
        assert_eq!(
            join_message(&config, &Player::new("Guest", false)).as_deref(),
            Some("[connection] [player] [Guest]")
        );
        assert_eq!(
            leave_message(&config, &Player::new("Guest", false)).as_deref(),
            Some("[disconnection] [player] [Guest]")
        );
    }

    #[test]
    fn formats_without_role() {
        let config = Config {
            connect_notify: true,
            message_notify: true,
            ..Config::default()
        };
        let player = Player::new("[green]Guest", true);

        assert_eq!(
            join_message(&config, &player).as_deref(),
            Some("[connection] [Guest]")
        );
        assert_eq!(
            chat_message(&config, &player, "gg").as_deref(),
            Some("[message] [Guest]: gg")
        );
    }
}
