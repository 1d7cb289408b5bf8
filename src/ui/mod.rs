//! Terminal presentation helpers.

pub mod badges;

pub use badges::{priority_badge, role_badge, Badge};

use console::style;

use crate::lang::Language;

/// Success notification, the transient-toast equivalent.
pub fn notify_success(message: &str) {
    println!("{} {}", badges::CHECK, style(message).green());
}

/// Error notification. The server's detail string wins over the generic
/// localized message when present.
pub fn notify_error(language: Language, detail: Option<&str>) {
    let message = detail.unwrap_or_else(|| language.generic_error());
    eprintln!("{} {}", badges::CROSS, style(message).red());
}
