//! Board overview and title update.

use anyhow::Result;
use console::style;

use yaka::api::ApiClient;
use yaka::ui;

/// With a new title, update it; otherwise print the board overview with
/// per-list card counts.
pub async fn cmd_board(client: &ApiClient, new_title: Option<&str>) -> Result<()> {
    if let Some(title) = new_title {
        let settings = client.update_board_title(title).await?;
        ui::notify_success(&format!("Board renamed to \"{}\"", settings.title));
        return Ok(());
    }

    let settings = client.get_board_settings().await?;
    let lists = client.get_lists().await?;
    let counts = client.cards_count().await?;

    println!("{}", style(&settings.title).bold().underlined());
    for list in lists {
        let count = counts
            .iter()
            .find(|c| c.list_id == list.id)
            .map(|c| c.count)
            .unwrap_or(0);
        println!(
            "  {} {} {}",
            style(format!("#{}", list.id)).dim(),
            list.name,
            style(format!("({} cards)", count)).dim()
        );
    }
    Ok(())
}
