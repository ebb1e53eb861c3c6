//! Handles `/help`: a static command list, shown only to the invoker.

use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

struct CommandInfo {
    name: &'static str,
    usage: &'static str,
    description: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "doc",
        usage: "/doc <product>",
        description: "Get the GitBook doc link for a product.",
    },
    CommandInfo { name: "status", usage: "/status", description: "Show bot and service status." },
    CommandInfo { name: "buy", usage: "/buy", description: "Where to purchase products." },
    CommandInfo { name: "refund", usage: "/refund", description: "Read the refund policy." },
    CommandInfo { name: "faq", usage: "/faq", description: "Frequently asked questions." },
    CommandInfo {
        name: "uptime",
        usage: "/uptime",
        description: "How long the bot has been running.",
    },
    CommandInfo {
        name: "version",
        usage: "/version",
        description: "Show the running bot version.",
    },
    CommandInfo { name: "help", usage: "/help", description: "Shows this command list." },
];

/// All registered command names. Exposed so integration tests can check the
/// help listing stays in sync with the dispatcher.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("Shows this command list.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let mut message = String::from("**📖 Commands**\n");
    for cmd in COMMANDS {
        message.push_str(&format!("`{}` — {}\n", cmd.usage, cmd.description));
    }

    super::respond_ephemeral(ctx, interaction, message).await;
}
