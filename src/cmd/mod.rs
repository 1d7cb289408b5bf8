//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module   | Commands handled            |
//! |----------|-----------------------------|
//! | `board`  | `Board`                     |
//! | `lists`  | `Lists`                     |
//! | `card`   | `Card`                      |
//! | `labels` | `Labels`                    |
//! | `voice`  | `Voice`                     |

pub mod board;
pub mod card;
pub mod labels;
pub mod lists;
pub mod voice;

pub use board::cmd_board;
pub use card::{cmd_card_edit, cmd_card_ls, cmd_card_new, cmd_card_show, CardEdits};
pub use labels::{cmd_label_add, cmd_label_edit, cmd_label_rm, cmd_labels};
pub use lists::{cmd_list_add, cmd_list_rename, cmd_list_reorder, cmd_list_rm, cmd_lists};
pub use voice::cmd_voice;
