//! Card show/create/edit commands, driven by the edit session.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;
use dialoguer::Confirm;

use yaka::api::ApiClient;
use yaka::lang::Language;
use yaka::models::{CardDraft, Priority, Role};
use yaka::session::{CardEditSession, CloseAction, OpenMode, SubmitOutcome};
use yaka::ui;

/// Field edits collected from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CardEdits {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<i64>,
    pub list: Option<i64>,
    pub add_items: Vec<String>,
}

impl CardEdits {
    fn parse_due(&self) -> Result<Option<NaiveDate>> {
        match self.due.as_deref() {
            None | Some("none") => Ok(None),
            Some(raw) => Ok(Some(
                raw.parse()
                    .with_context(|| format!("Invalid due date: {} (expected YYYY-MM-DD)", raw))?,
            )),
        }
    }

    fn apply(&self, session: &mut CardEditSession) -> Result<()> {
        if let Some(title) = &self.title {
            session.set_title(title);
        }
        if let Some(description) = &self.description {
            session.set_description(description);
        }
        if self.due.is_some() {
            session.set_due_date(self.parse_due()?);
        }
        if let Some(raw) = &self.priority {
            let priority: Priority = raw.parse().map_err(anyhow::Error::msg)?;
            session.set_priority(priority);
        }
        if let Some(assignee) = self.assignee {
            session.set_assignee(Some(assignee));
        }
        if let Some(list) = self.list {
            session.set_list(list);
        }
        for item in &self.add_items {
            session.add_item(item);
        }
        Ok(())
    }
}

/// List cards, optionally restricted to one list.
pub async fn cmd_card_ls(client: &ApiClient, list: Option<i64>) -> Result<()> {
    for card in client.list_cards(list).await? {
        let badge = ui::priority_badge(card.priority);
        println!(
            "{} {} {}",
            style(format!("#{}", card.id)).dim(),
            card.title,
            badge.icon
        );
    }
    Ok(())
}

pub async fn cmd_card_show(client: &ApiClient, id: i64) -> Result<()> {
    let card = client.get_card(id).await?;
    let items = client.fetch_checklist(id).await?;

    let badge = ui::priority_badge(card.priority);
    println!(
        "{} {} {}",
        style(format!("#{}", card.id)).dim(),
        style(&card.title).bold(),
        badge.icon
    );
    if let Some(description) = &card.description {
        println!("  {}", description);
    }
    if let Some(due) = card.due_date {
        println!("  due {}", due);
    }
    if let Some(assignee) = card.assignee_id {
        println!("  assigned to user #{}", assignee);
    }
    for item in items {
        let mark = if item.is_done { "[x]" } else { "[ ]" };
        println!("  {} {}", mark, item.text);
    }
    Ok(())
}

pub async fn cmd_card_new(
    client: &ApiClient,
    language: Language,
    role: Option<Role>,
    user_id: Option<i64>,
    edits: CardEdits,
) -> Result<()> {
    let lists = client.get_lists().await?;
    let draft = CardDraft {
        title: edits.title.clone(),
        description: edits.description.clone(),
        due_date: edits.parse_due()?,
        priority: edits
            .priority
            .as_deref()
            .map(|p| p.parse().map_err(anyhow::Error::msg))
            .transpose()?,
        assignee_id: edits.assignee,
        list_id: edits.list,
        checklist: edits.add_items.clone(),
        ..Default::default()
    };
    let mut session =
        CardEditSession::load(client, OpenMode::New(Some(draft)), &lists, role, user_id).await?;
    save_session(client, language, &mut session).await
}

pub async fn cmd_card_edit(
    client: &ApiClient,
    language: Language,
    role: Option<Role>,
    user_id: Option<i64>,
    id: i64,
    edits: CardEdits,
    no_save: bool,
    assume_yes: bool,
) -> Result<()> {
    let card = client.get_card(id).await?;
    let lists = client.get_lists().await?;
    let mut session = match CardEditSession::load(
        client,
        OpenMode::Edit(card),
        &lists,
        role,
        user_id,
    )
    .await
    {
        Ok(session) => session,
        Err(err) => {
            ui::notify_error(language, err.server_detail());
            return Err(err.into());
        }
    };
    edits.apply(&mut session)?;

    if no_save {
        match session.request_close() {
            CloseAction::Close => return Ok(()),
            CloseAction::ConfirmDiscard => {
                let discard = assume_yes
                    || Confirm::new()
                        .with_prompt(language.discard_prompt())
                        .default(false)
                        .interact()?;
                if discard {
                    println!("{}", style(language.changes_discarded()).dim());
                    return Ok(());
                }
                // Keep editing: fall through to save.
            }
        }
    }
    save_session(client, language, &mut session).await
}

async fn save_session(
    client: &ApiClient,
    language: Language,
    session: &mut CardEditSession,
) -> Result<()> {
    match session.submit(client).await {
        Ok(SubmitOutcome::Saved { card, checklist, created }) => {
            let verb = if created { "created" } else { "updated" };
            ui::notify_success(&format!(
                "{} ({} #{}, {} checklist items)",
                language.card_saved(),
                verb,
                card.id,
                checklist.len()
            ));
            Ok(())
        }
        Ok(SubmitOutcome::Forbidden) => {
            let detail = match session.role() {
                Some(role) => {
                    let badge = ui::role_badge(role);
                    format!("{} ({} {})", language.not_permitted(), badge.icon, badge.label)
                }
                None => language.not_permitted().to_string(),
            };
            ui::notify_error(language, Some(detail.as_str()));
            Ok(())
        }
        Err(err) => {
            ui::notify_error(
                language,
                err.server_detail().or(Some(language.card_save_failed())),
            );
            Err(err.into())
        }
    }
}
