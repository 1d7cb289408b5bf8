//! List management commands.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use console::style;

use yaka::api::ApiClient;
use yaka::ui;

pub async fn cmd_lists(client: &ApiClient) -> Result<()> {
    let mut lists = client.get_lists().await?;
    lists.sort_by_key(|l| l.position);
    for list in lists {
        println!("{} {}", style(format!("#{}", list.id)).dim(), list.name);
    }
    Ok(())
}

pub async fn cmd_list_add(client: &ApiClient, name: &str) -> Result<()> {
    let list = client.create_list(name).await?;
    ui::notify_success(&format!("Created list #{} \"{}\"", list.id, list.name));
    Ok(())
}

pub async fn cmd_list_rename(client: &ApiClient, id: i64, name: &str) -> Result<()> {
    let list = client.rename_list(id, name).await?;
    ui::notify_success(&format!("Renamed list #{} to \"{}\"", list.id, list.name));
    Ok(())
}

pub async fn cmd_list_rm(client: &ApiClient, id: i64) -> Result<()> {
    client.delete_list(id).await?;
    ui::notify_success(&format!("Deleted list #{}", id));
    Ok(())
}

/// Persist a full ordering: the given ids take orders 1..N.
pub async fn cmd_list_reorder(client: &ApiClient, ids: &[i64]) -> Result<()> {
    if ids.is_empty() {
        bail!("Provide the list ids in their new order");
    }
    let orders: BTreeMap<i64, i32> = ids
        .iter()
        .enumerate()
        .map(|(index, &id)| (id, index as i32 + 1))
        .collect();
    client.reorder_lists(&orders).await?;
    ui::notify_success("Lists reordered");
    Ok(())
}
