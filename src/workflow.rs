//! Pull the contents of another file into the active document.
//!
//! A run lists the document's directory, lets the user pick a sibling (or
//! fall through to the native dialog), saves pending edits, then overwrites
//! the document's file with the picked one. Dismissing any prompt ends the
//! run without touching the disk.
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::backend::FileBackend;
use crate::context::ActiveDocumentContext;
use crate::document::DocumentHost;
use crate::picker::{DialogFilter, OpenDialogOptions, PickerHost, QuickPickOptions};
use crate::Result;

/// First quick-pick entry; picking it opens the native dialog instead.
pub const USE_OPEN_DIALOG_LABEL: &str = "Use Open Dialog...";
pub const QUICK_PICK_PLACEHOLDER: &str = "Select a file to pull...";
pub const OPEN_DIALOG_LABEL: &str = "Pull File";
pub const CURRENT_FILE_TYPE_FILTER: &str = "Current File Type";
pub const ALL_FILES_FILTER: &str = "All Files";

/// What a completed pull did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
    /// Whether unsaved edits were written out before the overwrite.
    pub saved_first: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PullOptions {
    /// Sort the sibling list instead of keeping directory order.
    pub sort_entries: bool,
}

pub struct FilePullWorkflow<'a> {
    context: ActiveDocumentContext,
    document: &'a mut dyn DocumentHost,
    picker: &'a dyn PickerHost,
    backend: &'a dyn FileBackend,
    options: PullOptions,
}

impl<'a> FilePullWorkflow<'a> {
    /// Captures the document's context; it is not refreshed for the rest of the run.
    pub fn new(
        document: &'a mut dyn DocumentHost,
        picker: &'a dyn PickerHost,
        backend: &'a dyn FileBackend,
    ) -> Self {
        let context = ActiveDocumentContext::capture(&*document);
        Self {
            context,
            document,
            picker,
            backend,
            options: PullOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PullOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the pull. `Ok(None)` means the user dismissed a prompt and
    /// nothing was written.
    pub async fn run(mut self) -> Result<Option<PullOutcome>> {
        let Some(source) = self.select_file().await? else {
            log::info!("No file selected, nothing pulled");
            return Ok(None);
        };
        self.copy_file(source).await.map(Some)
    }

    /// Resolves the file to pull from, or `None` when a prompt was dismissed.
    pub async fn select_file(&self) -> Result<Option<PathBuf>> {
        let items = self.quick_pick_items()?;
        let options = QuickPickOptions {
            can_pick_many: false,
            placeholder: QUICK_PICK_PLACEHOLDER.to_string(),
        };

        let Some(selection) = self.picker.show_quick_pick(&items, &options).await? else {
            return Ok(None);
        };

        // compared by label, so a sibling with this exact name opens the dialog too
        if selection == USE_OPEN_DIALOG_LABEL {
            let picked = self.picker.show_open_dialog(&self.dialog_options()).await?;
            if let Some(path) = &picked {
                log::debug!("Picked {} from open dialog", path.display());
            }
            return Ok(picked);
        }

        Ok(Some(self.context.directory.join(selection)))
    }

    /// The dialog entry followed by every sibling of the active document.
    pub fn quick_pick_items(&self) -> Result<Vec<String>> {
        let mut siblings: Vec<String> = self
            .backend
            .list_dir(&self.context.directory)?
            .into_iter()
            .filter(|name| *name != self.context.file_name)
            .collect();
        if self.options.sort_entries {
            siblings.sort();
        }
        log::debug!(
            "{} candidate file(s) in {}",
            siblings.len(),
            self.context.directory.display()
        );

        let mut items = Vec::with_capacity(siblings.len() + 1);
        items.push(USE_OPEN_DIALOG_LABEL.to_string());
        items.extend(siblings);
        Ok(items)
    }

    pub fn dialog_options(&self) -> OpenDialogOptions {
        OpenDialogOptions {
            can_select_many: false,
            open_label: OPEN_DIALOG_LABEL.to_string(),
            default_dir: self.context.directory.clone(),
            filters: dialog_filters(&self.context.extension),
        }
    }

    /// Overwrites the active document's file with `source`, saving pending
    /// edits first so the editor sees the overwrite as an external change.
    async fn copy_file(&mut self, source: PathBuf) -> Result<PullOutcome> {
        let destination = self.context.file_path.clone();

        let saved_first = self.context.is_dirty;
        if saved_first {
            log::debug!("Saving {} before pulling", destination.display());
            self.document.save().await?;
        }

        let bytes = self.backend.copy_file(&source, &destination)?;
        log::info!(
            "Pulled {} ({} bytes) into {}",
            source.display(),
            bytes,
            destination.display()
        );

        Ok(PullOutcome {
            source,
            destination,
            bytes,
            saved_first,
        })
    }
}

/// Filters offered by the open dialog for a document with `extension`.
pub fn dialog_filters(extension: &str) -> Vec<DialogFilter> {
    let all_files = DialogFilter::new(ALL_FILES_FILTER, &["*"]);
    if extension.is_empty() {
        vec![all_files]
    } else {
        vec![
            DialogFilter::new(CURRENT_FILE_TYPE_FILTER, &[extension]),
            all_files,
        ]
    }
}

/// Convenience wrapper: pull into `document` with the given hosts.
pub async fn pull_file(
    document: &mut dyn DocumentHost,
    picker: &dyn PickerHost,
    backend: &dyn FileBackend,
    options: PullOptions,
) -> Result<Option<PullOutcome>> {
    FilePullWorkflow::new(document, picker, backend)
        .with_options(options)
        .run()
        .await
}

/// The `--json` report for a finished run.
pub fn json_report(outcome: Option<&PullOutcome>) -> Result<serde_json::Value> {
    let report = match outcome {
        Some(outcome) => {
            let mut value = serde_json::to_value(outcome)?;
            value["status"] = serde_json::json!("pulled");
            value
        }
        None => serde_json::json!({ "status": "cancelled" }),
    };
    Ok(report)
}

/// Whether `path` can serve as the active document.
pub fn is_pullable_target(path: &Path) -> bool {
    path.is_file()
}
