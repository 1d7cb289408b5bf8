//! Voice-control command: classify a transcript and render the result.

use anyhow::Result;
use console::style;

use yaka::api::{ApiClient, VoiceResponseType, VoiceResult};
use yaka::lang::Language;
use yaka::models::Role;
use yaka::session::{CardEditSession, CardField, OpenMode};
use yaka::ui;
use yaka::ui::badges::VOICE;

fn field_name(field: CardField) -> &'static str {
    match field {
        CardField::Title => "title",
        CardField::Description => "description",
        CardField::DueDate => "due date",
        CardField::Priority => "priority",
        CardField::Assignee => "assignee",
        CardField::List => "list",
        CardField::Labels => "labels",
    }
}

pub async fn cmd_voice(
    client: &ApiClient,
    language: Language,
    role: Option<Role>,
    user_id: Option<i64>,
    transcript: &str,
    response_type: Option<VoiceResponseType>,
    apply_to: Option<i64>,
) -> Result<()> {
    let result = client.classify_transcript(transcript, response_type).await?;

    match result {
        VoiceResult::Filter(filter) => {
            println!("{}matched cards: {:?}", VOICE, filter.card_ids);
            if let Some(description) = filter.description {
                println!("  {}", style(description).dim());
            }
        }
        VoiceResult::Card(suggestion) => {
            let Some(card_id) = apply_to else {
                println!("{}card suggestion:", VOICE);
                println!("{:#?}", suggestion);
                return Ok(());
            };
            // Merge the suggestion into an edit session and show what it
            // would change; nothing persists until the user saves.
            let card = client.get_card(card_id).await?;
            let lists = client.get_lists().await?;
            let labels = client.get_labels().await?;
            let proposed = suggestion.into_proposed(&lists, &labels);
            let session = CardEditSession::load(
                client,
                OpenMode::Proposed(card, proposed),
                &lists,
                role,
                user_id,
            )
            .await?;

            println!("{}proposed changes for card #{}:", VOICE, card_id);
            for field in CardField::ALL {
                let change = session.field_change(field);
                if change.is_changed {
                    let previous = change
                        .previous
                        .unwrap_or_else(|| language.none_placeholder().to_string());
                    println!(
                        "  {} {} {}",
                        style(field_name(field)).yellow(),
                        style("was").dim(),
                        previous
                    );
                }
            }
            for (index, item) in session.checklist().iter().enumerate() {
                if session.item_change(index).is_new {
                    println!("  {} {}", style("+ item").green(), item.text);
                }
            }
            ui::notify_success("Review the proposal, then save with `yaka card edit`");
        }
    }
    Ok(())
}
