use std::collections::BTreeMap;

type CommandFn = Box<dyn Fn(&[&str]) + Send + Sync>;

pub struct Command {
    pub name: String,
    pub description: String,
    handler: CommandFn,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandResponse {
    Valid,
    UnknownCommand(String),
    NoCommand,
}

/// Server console command registry.
#[derive(Default)]
pub struct CommandHandler {
    commands: BTreeMap<String, Command>,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: &str, description: &str, handler: F)
    where
        F: Fn(&[&str]) + Send + Sync + 'static,
    {
        self.commands.insert(
            name.to_string(),
            Command {
                name: name.to_string(),
                description: description.to_string(),
                handler: Box::new(handler),
            },
        );
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn handle_message(&self, line: &str) -> CommandResponse {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return CommandResponse::NoCommand;
        };
        let args: Vec<&str> = parts.collect();

        match self.commands.get(name) {
            Some(command) => {
                (command.handler)(&args);
                CommandResponse::Valid
            }
            None => CommandResponse::UnknownCommand(name.to_string()),
        }
    }
}
