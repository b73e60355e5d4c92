//! OS-native open dialog via `rfd`.
use std::path::PathBuf;

use super::{DialogFilter, OpenDialogOptions};

pub(super) async fn show_open_dialog(options: &OpenDialogOptions) -> Option<PathBuf> {
    if options.can_select_many {
        log::warn!("Multi-selection requested; only the first file is used");
    }

    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(options.open_label.as_str())
        .set_directory(&options.default_dir);
    let filters = rfd_filters(&options.filters);
    for (name, extensions) in &filters {
        dialog = dialog.add_filter(*name, extensions);
    }

    log::debug!(
        "Opening native dialog in {} with {} filter(s)",
        options.default_dir.display(),
        filters.len()
    );
    let handle = dialog.pick_file().await?;
    Some(handle.path().to_path_buf())
}

/// Filters as handed to `rfd`.
///
/// rfd has no portable "any file" pattern: zenity turns `*` into `*.*` and
/// macOS merges every filter into one allow-list. A dialog with no filters
/// lists every file on all backends, so a set containing a wildcard filter
/// maps to no filters at all.
fn rfd_filters(filters: &[DialogFilter]) -> Vec<(&str, &[String])> {
    let has_wildcard = filters
        .iter()
        .any(|f| f.extensions.iter().any(|ext| ext == "*"));
    if has_wildcard {
        return Vec::new();
    }
    filters
        .iter()
        .filter(|f| !f.extensions.is_empty())
        .map(|f| (f.name.as_str(), f.extensions.as_slice()))
        .collect()
}
