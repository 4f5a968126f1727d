pub mod commands;
pub mod console;
pub mod format;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Player {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub admin: bool,
}

impl Player {
    pub fn new(display_name: impl Into<String>, admin: bool) -> Self {
        Self {
            display_name: display_name.into(),
            admin,
        }
    }

    /// Display name with color markup (`[red]`, `[#ff0000]`, `[]`) removed.
    /// `[[` is an escaped bracket and comes out as `[`.
    pub fn plain_name(&self) -> String {
        let mut plain = String::with_capacity(self.display_name.len());
        let mut rest = self.display_name.as_str();

        while let Some(start) = rest.find('[') {
            plain.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            if let Some(escaped) = after.strip_prefix('[') {
                plain.push('[');
                rest = escaped;
                continue;
            }

            match after.find(']') {
                Some(end) if is_color_tag(&after[..end]) => rest = &after[end + 1..],
                _ => {
                    plain.push('[');
                    rest = after;
                }
            }
        }

        plain.push_str(rest);
        plain
    }
}

/// Named colors the game's markup understands.
const COLOR_NAMES: &[&str] = &[
    "clear", "black", "white", "lightgray", "gray", "darkgray", "blue", "navy", "royal",
    "slate", "sky", "cyan", "teal", "green", "acid", "lime", "forest", "olive", "yellow",
    "gold", "goldenrod", "orange", "brown", "tan", "brick", "red", "scarlet", "crimson",
    "coral", "salmon", "pink", "magenta", "purple", "violet", "maroon", "accent",
    "unlaunched", "highlight", "stat", "negstat",
];

fn is_color_tag(tag: &str) -> bool {
    match tag.strip_prefix('#') {
        Some(hex) => (1..=8).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => {
            tag.is_empty()
                || COLOR_NAMES
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(tag))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    ServerLoad,
    #[serde(rename = "chat")]
    ChatMessage { player: Player, text: String },
    #[serde(rename = "join")]
    PlayerJoin { player: Player },
    #[serde(rename = "leave")]
    PlayerLeave { player: Player },
}

/// Callbacks the host runtime invokes for each server event.
pub trait ServerListener {
    fn on_server_load(&self);
    fn on_chat(&self, player: &Player, text: &str);
    fn on_join(&self, player: &Player);
    fn on_leave(&self, player: &Player);

    fn handle(&self, event: &Event) {
        match event {
            Event::ServerLoad => self.on_server_load(),
            Event::ChatMessage { player, text } => self.on_chat(player, text),
            Event::PlayerJoin { player } => self.on_join(player),
            Event::PlayerLeave { player } => self.on_leave(player),
        }
    }
}
