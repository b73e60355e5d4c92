use async_trait::async_trait;
use std::path::PathBuf;

use crate::Result;

#[cfg(feature = "native-dialog")]
mod native;
pub mod quick_pick;
pub mod terminal;

pub use terminal::TerminalPicker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickPickOptions {
    pub can_pick_many: bool,
    pub placeholder: String,
}

/// A named group of extensions offered by the open dialog. `"*"` means any file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl DialogFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialogOptions {
    pub can_select_many: bool,
    pub open_label: String,
    pub default_dir: PathBuf,
    /// Shown in order; the first one is preselected.
    pub filters: Vec<DialogFilter>,
}

/// Prompts the user for a choice. `Ok(None)` means the prompt was dismissed.
#[async_trait(?Send)]
pub trait PickerHost {
    /// Single-choice list over `items`, returning the chosen label.
    async fn show_quick_pick(
        &self,
        items: &[String],
        options: &QuickPickOptions,
    ) -> Result<Option<String>>;

    /// Native open-file dialog, returning the chosen absolute path.
    async fn show_open_dialog(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>>;
}
