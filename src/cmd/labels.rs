//! Label management commands.

use anyhow::{Context, Result};
use console::style;

use yaka::api::ApiClient;
use yaka::ui;

pub async fn cmd_labels(client: &ApiClient) -> Result<()> {
    for label in client.get_labels().await? {
        println!(
            "{} {} {}",
            style(format!("#{}", label.id)).dim(),
            label.name,
            style(&label.color).dim()
        );
    }
    Ok(())
}

pub async fn cmd_label_add(client: &ApiClient, name: &str, color: &str) -> Result<()> {
    let label = client.create_label(name, color).await?;
    ui::notify_success(&format!("Created label #{} \"{}\"", label.id, label.name));
    Ok(())
}

/// Update a label, keeping whichever of name/color was not given.
pub async fn cmd_label_edit(
    client: &ApiClient,
    id: i64,
    name: Option<&str>,
    color: Option<&str>,
) -> Result<()> {
    let labels = client.get_labels().await?;
    let current = labels
        .iter()
        .find(|l| l.id == id)
        .with_context(|| format!("No label with id {}", id))?;
    let label = client
        .update_label(
            id,
            name.unwrap_or(&current.name),
            color.unwrap_or(&current.color),
        )
        .await?;
    ui::notify_success(&format!("Updated label #{} \"{}\"", label.id, label.name));
    Ok(())
}

pub async fn cmd_label_rm(client: &ApiClient, id: i64) -> Result<()> {
    client.delete_label(id).await?;
    ui::notify_success(&format!("Deleted label #{}", id));
    Ok(())
}
