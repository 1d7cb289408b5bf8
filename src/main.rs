use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use yaka::api::{ApiClient, VoiceResponseType};
use yaka::config::{CliOverrides, Config};
use yaka::models::Role;

mod cmd;

use cmd::CardEdits;

#[derive(Parser)]
#[command(name = "yaka")]
#[command(version, about = "Terminal client for the Yaka kanban board")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to yaka.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides config and YAKA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides config and YAKA_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// UI language: en or fr (overrides config and YAKA_LANG)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Your role on this board (the web client gets this from the board
    /// context; the server enforces it regardless)
    #[arg(long, global = true, default_value = "admin")]
    pub role: Role,

    /// Your user id, used for ownership-based permission checks
    #[arg(long, global = true)]
    pub user_id: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board overview, or rename it
    Board {
        /// New board title
        #[arg(long)]
        title: Option<String>,
    },
    /// Manage lists
    Lists {
        #[command(subcommand)]
        command: Option<ListsCommands>,
    },
    /// Show, create, or edit cards
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
    /// Manage labels
    Labels {
        #[command(subcommand)]
        command: Option<LabelsCommands>,
    },
    /// Classify a transcript through the voice-control endpoint
    Voice {
        transcript: String,

        /// Hint the expected result shape: card or filter
        #[arg(long)]
        response_type: Option<String>,

        /// Merge a card suggestion into this card as proposed changes
        #[arg(long)]
        apply_to: Option<i64>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ListsCommands {
    /// Create a list
    Add { name: String },
    /// Rename a list
    Rename { id: i64, name: String },
    /// Delete a list
    Rm { id: i64 },
    /// Reorder lists: pass ids in their new order
    Reorder { ids: Vec<i64> },
}

#[derive(Subcommand, Clone)]
pub enum CardCommands {
    /// List cards, optionally for one list
    Ls {
        #[arg(long)]
        list: Option<i64>,
    },
    /// Show a card and its checklist
    Show { id: i64 },
    /// Create a card
    New {
        #[command(flatten)]
        edits: EditArgs,
    },
    /// Edit a card through an edit session
    Edit {
        id: i64,

        #[command(flatten)]
        edits: EditArgs,

        /// Don't save; a dirty session asks for discard confirmation
        #[arg(long)]
        no_save: bool,

        /// Answer yes to the discard confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::Args, Clone)]
pub struct EditArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Due date as YYYY-MM-DD, or "none" to clear
    #[arg(long)]
    pub due: Option<String>,

    /// low, medium, or high (French terms accepted)
    #[arg(long)]
    pub priority: Option<String>,

    #[arg(long)]
    pub assignee: Option<i64>,

    #[arg(long)]
    pub list: Option<i64>,

    /// Append a checklist item (repeatable)
    #[arg(long = "item")]
    pub items: Vec<String>,
}

#[derive(Subcommand, Clone)]
pub enum LabelsCommands {
    /// Create a label
    Add {
        name: String,
        #[arg(long, default_value = "#9e9e9e")]
        color: String,
    },
    /// Update a label's name or color
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a label
    Rm { id: i64 },
}

impl From<EditArgs> for CardEdits {
    fn from(args: EditArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            due: args.due,
            priority: args.priority,
            assignee: args.assignee,
            list: args.list,
            add_items: args.items,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "yaka=debug" } else { "yaka=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(
        cli.config.as_deref(),
        CliOverrides {
            api_url: cli.api_url.clone(),
            token: cli.token.clone(),
            language: cli.lang.clone(),
        },
    )?;
    let client = ApiClient::new(&config.api_url, config.token.clone());
    let role = Some(cli.role);
    let language = config.language;

    match cli.command {
        Commands::Board { title } => cmd::cmd_board(&client, title.as_deref()).await,
        Commands::Lists { command } => match command {
            None => cmd::cmd_lists(&client).await,
            Some(ListsCommands::Add { name }) => cmd::cmd_list_add(&client, &name).await,
            Some(ListsCommands::Rename { id, name }) => {
                cmd::cmd_list_rename(&client, id, &name).await
            }
            Some(ListsCommands::Rm { id }) => cmd::cmd_list_rm(&client, id).await,
            Some(ListsCommands::Reorder { ids }) => cmd::cmd_list_reorder(&client, &ids).await,
        },
        Commands::Card { command } => match command {
            CardCommands::Ls { list } => cmd::cmd_card_ls(&client, list).await,
            CardCommands::Show { id } => cmd::cmd_card_show(&client, id).await,
            CardCommands::New { edits } => {
                cmd::cmd_card_new(&client, language, role, cli.user_id, edits.into()).await
            }
            CardCommands::Edit {
                id,
                edits,
                no_save,
                yes,
            } => {
                cmd::cmd_card_edit(
                    &client,
                    language,
                    role,
                    cli.user_id,
                    id,
                    edits.into(),
                    no_save,
                    yes,
                )
                .await
            }
        },
        Commands::Labels { command } => match command {
            None => cmd::cmd_labels(&client).await,
            Some(LabelsCommands::Add { name, color }) => {
                cmd::cmd_label_add(&client, &name, &color).await
            }
            Some(LabelsCommands::Edit { id, name, color }) => {
                cmd::cmd_label_edit(&client, id, name.as_deref(), color.as_deref()).await
            }
            Some(LabelsCommands::Rm { id }) => cmd::cmd_label_rm(&client, id).await,
        },
        Commands::Voice {
            transcript,
            response_type,
            apply_to,
        } => {
            let hint = match response_type.as_deref() {
                Some("card") => Some(VoiceResponseType::Card),
                Some("filter") => Some(VoiceResponseType::Filter),
                Some(other) => anyhow::bail!("Unknown response type: {} (card|filter)", other),
                None => None,
            };
            cmd::cmd_voice(
                &client,
                language,
                role,
                cli.user_id,
                &transcript,
                hint,
                apply_to,
            )
            .await
        }
    }
}
