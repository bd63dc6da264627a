//! Slash commands, context menus and message components.
//!
//! Each module owns the definitions it registers with Discord and the code that runs them.
//! Commands return the `EditInteractionResponse` that replaces the deferred reply, so the
//! interaction handler can answer every command the same way and turn errors into
//! ephemeral messages.

pub mod booster;
pub mod config;
pub mod export;
pub mod format;
pub mod moderation;
pub mod reminder;
pub mod role_menu;
pub mod tag;
pub mod ticket;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandDataOption, CommandDataOptionValue, CommandInteraction, Context, CreateCommand,
    CreateEmbed, EditInteractionResponse, Permissions,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    util::queue::TaskQueue,
};

/// Everything a command needs to run.
pub struct CommandContext<'a> {
    pub ctx: &'a Context,
    pub db: &'a DatabaseConnection,
    pub task_queue: &'a TaskQueue,
    pub command: &'a CommandInteraction,
}

impl CommandContext<'_> {
    /// Guild the command was used in. Commands are not available in DMs.
    pub fn guild_id(&self) -> Result<u64, AppError> {
        self.command
            .guild_id
            .map(|guild_id| guild_id.get())
            .ok_or_else(|| AppError::BadRequest("This command only works in a server".to_string()))
    }

    pub fn user_id(&self) -> u64 {
        self.command.user.id.get()
    }

    pub fn channel_id(&self) -> u64 {
        self.command.channel_id.get()
    }

    /// Ids of the roles the invoking member has.
    pub fn member_roles(&self) -> Vec<u64> {
        self.command
            .member
            .as_ref()
            .map(|member| member.roles.iter().map(|role| role.get()).collect())
            .unwrap_or_default()
    }

    /// Requires the invoking member to hold any of `permissions` in the channel.
    pub fn require_any(&self, permissions: Permissions) -> Result<(), AppError> {
        let granted = self
            .command
            .member
            .as_ref()
            .and_then(|member| member.permissions)
            .unwrap_or_else(Permissions::empty);

        require_any(self.user_id(), granted, permissions)
    }

    pub fn options(&self) -> Options<'_> {
        Options::new(&self.command.data.options)
    }
}

/// Checks resolved interaction permissions. Administrators pass every check.
pub fn require_any(user_id: u64, granted: Permissions, required: Permissions) -> Result<(), AppError> {
    if granted.administrator() || granted.intersects(required) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(user_id, format!("missing any of {:?}", required)).into())
}

/// Every command registered with Discord.
pub fn all() -> Vec<CreateCommand> {
    let mut commands = vec![
        config::register(),
        booster::register(),
        export::register(),
        format::register(),
        reminder::register(),
        role_menu::register(),
        tag::register(),
        ticket::register(),
    ];
    commands.extend(moderation::register());
    commands
}

/// Whether the reply to the command is visible to the whole channel rather than only to
/// the member who used it.
pub fn is_public(command: &CommandInteraction) -> bool {
    let subcommand = Options::new(&command.data.options)
        .subcommand()
        .map(|(name, _)| name);

    is_public_reply(&command.data.name, subcommand)
}

fn is_public_reply(name: &str, subcommand: Option<&str>) -> bool {
    match name {
        export::NAME => true,
        tag::NAME => subcommand == Some(tag::SEND),
        _ => false,
    }
}

/// Runs the command named in the interaction.
pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    match context.command.data.name.as_str() {
        config::NAME => config::run(context).await,
        booster::NAME => booster::run(context).await,
        export::NAME => export::run(context).await,
        format::NAME => format::run(context).await,
        reminder::NAME => reminder::run(context).await,
        role_menu::NAME => role_menu::run(context).await,
        tag::NAME => tag::run(context).await,
        ticket::NAME => ticket::run(context).await,
        name => match moderation::run(context, name).await {
            Some(result) => result,
            None => Err(AppError::NotFound(format!("Unknown command '{}'", name))),
        },
    }
}

pub fn text(content: impl Into<String>) -> EditInteractionResponse {
    EditInteractionResponse::new().content(content)
}

pub fn embed(embed: CreateEmbed) -> EditInteractionResponse {
    EditInteractionResponse::new().embed(embed)
}

/// Typed access to the options of a command or subcommand.
#[derive(Clone, Copy)]
pub struct Options<'a>(&'a [CommandDataOption]);

impl<'a> Options<'a> {
    pub fn new(options: &'a [CommandDataOption]) -> Self {
        Self(options)
    }

    fn value(&self, name: &str) -> Option<&'a CommandDataOptionValue> {
        self.0
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    /// The invoked subcommand and its options.
    pub fn subcommand(&self) -> Option<(&'a str, Options<'a>)> {
        let option = self.0.first()?;
        match &option.value {
            CommandDataOptionValue::SubCommand(options)
            | CommandDataOptionValue::SubCommandGroup(options) => {
                Some((option.name.as_str(), Options::new(options)))
            }
            _ => None,
        }
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.value(name)? {
            CommandDataOptionValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.value(name)? {
            CommandDataOptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.value(name)? {
            CommandDataOptionValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn user(&self, name: &str) -> Option<u64> {
        match self.value(name)? {
            CommandDataOptionValue::User(user_id) => Some(user_id.get()),
            _ => None,
        }
    }

    pub fn role(&self, name: &str) -> Option<u64> {
        match self.value(name)? {
            CommandDataOptionValue::Role(role_id) => Some(role_id.get()),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<u64> {
        match self.value(name)? {
            CommandDataOptionValue::Channel(channel_id) => Some(channel_id.get()),
            _ => None,
        }
    }

    pub fn required_string(&self, name: &str) -> Result<&'a str, AppError> {
        self.string(name).ok_or_else(|| missing(name))
    }

    pub fn required_user(&self, name: &str) -> Result<u64, AppError> {
        self.user(name).ok_or_else(|| missing(name))
    }

    pub fn required_role(&self, name: &str) -> Result<u64, AppError> {
        self.role(name).ok_or_else(|| missing(name))
    }

    pub fn required_integer(&self, name: &str) -> Result<i64, AppError> {
        self.integer(name).ok_or_else(|| missing(name))
    }
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing option '{}'", name))
}

/// The subcommand of a command, or `BadRequest` when Discord sent none.
pub fn subcommand<'a>(options: Options<'a>) -> Result<(&'a str, Options<'a>), AppError> {
    options
        .subcommand()
        .ok_or_else(|| AppError::BadRequest("Missing subcommand".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> Vec<CommandDataOption> {
        serde_json::from_value(value).unwrap()
    }

    /// Expected: Values are read by name and type
    #[test]
    fn reads_typed_options() {
        let options = parse(serde_json::json!([
            { "name": "user", "type": 6, "value": "123456789" },
            { "name": "duration", "type": 3, "value": "1h" },
            { "name": "count", "type": 4, "value": 25 },
            { "name": "silent", "type": 5, "value": true },
        ]));
        let options = Options::new(&options);

        assert_eq!(options.user("user"), Some(123456789));
        assert_eq!(options.string("duration"), Some("1h"));
        assert_eq!(options.integer("count"), Some(25));
        assert_eq!(options.boolean("silent"), Some(true));
    }

    /// Expected: A value of another type is treated as absent
    #[test]
    fn mismatched_type_is_none() {
        let options = parse(serde_json::json!([
            { "name": "duration", "type": 3, "value": "1h" },
        ]));
        let options = Options::new(&options);

        assert_eq!(options.integer("duration"), None);
        assert!(matches!(
            options.required_user("duration"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn unwraps_subcommand() {
        let options = parse(serde_json::json!([
            {
                "name": "add",
                "type": 1,
                "options": [{ "name": "role", "type": 8, "value": "42" }],
            },
        ]));

        let (name, sub_options) = subcommand(Options::new(&options)).unwrap();

        assert_eq!(name, "add");
        assert_eq!(sub_options.role("role"), Some(42));
    }

    #[test]
    fn missing_subcommand_is_bad_request() {
        let options = parse(serde_json::json!([
            { "name": "count", "type": 4, "value": 5 },
        ]));

        assert!(matches!(
            subcommand(Options::new(&options)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn require_any_accepts_one_of_several() {
        let required = Permissions::BAN_MEMBERS | Permissions::MODERATE_MEMBERS;

        assert!(require_any(1, Permissions::MODERATE_MEMBERS, required).is_ok());
        assert!(require_any(1, Permissions::ADMINISTRATOR, required).is_ok());
        assert!(matches!(
            require_any(1, Permissions::SEND_MESSAGES, required),
            Err(AppError::AuthErr(AuthError::AccessDenied(1, _)))
        ));
    }

    #[test]
    fn only_exports_and_sent_tags_are_public() {
        assert!(is_public_reply(export::NAME, None));
        assert!(is_public_reply(tag::NAME, Some(tag::SEND)));
        assert!(!is_public_reply(tag::NAME, Some("list")));
        assert!(!is_public_reply("ban", None));
    }

    /// Expected: Command names registered with Discord are unique
    #[test]
    fn command_names_are_unique() {
        let names: Vec<String> = all()
            .into_iter()
            .map(|command| {
                serde_json::to_value(command).unwrap()["name"]
                    .as_str()
                    .unwrap()
                    .to_string()
            })
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();

        assert_eq!(names.len(), unique.len());
    }
}
