#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use pullfile::backend::FileBackend;
use pullfile::backend::native::NativeFileBackend;
use pullfile::document::DocumentHost;
use pullfile::picker::{OpenDialogOptions, PickerHost, QuickPickOptions};
use pullfile::{Error, Result};

/// Answers prompts from a script and records what it was shown.
#[derive(Default)]
pub struct ScriptedPicker {
    pub quick_pick_answer: Option<String>,
    pub dialog_answer: Option<PathBuf>,
    pub quick_picks: RefCell<Vec<(Vec<String>, QuickPickOptions)>>,
    pub dialogs: RefCell<Vec<OpenDialogOptions>>,
}

impl ScriptedPicker {
    pub fn picking(label: &str) -> Self {
        Self {
            quick_pick_answer: Some(label.to_string()),
            ..Self::default()
        }
    }

    pub fn dismissing() -> Self {
        Self::default()
    }

    pub fn with_dialog_answer(mut self, path: Option<PathBuf>) -> Self {
        self.dialog_answer = path;
        self
    }

    pub fn shown_items(&self) -> Vec<String> {
        self.quick_picks
            .borrow()
            .first()
            .map(|(items, _)| items.clone())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl PickerHost for ScriptedPicker {
    async fn show_quick_pick(
        &self,
        items: &[String],
        options: &QuickPickOptions,
    ) -> Result<Option<String>> {
        self.quick_picks
            .borrow_mut()
            .push((items.to_vec(), options.clone()));
        Ok(self.quick_pick_answer.clone())
    }

    async fn show_open_dialog(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>> {
        self.dialogs.borrow_mut().push(options.clone());
        Ok(self.dialog_answer.clone())
    }
}

/// Native backend that snapshots the destination right before each copy.
#[derive(Default)]
pub struct SnapshotBackend {
    inner: NativeFileBackend,
    pub listing: Option<Vec<String>>,
    pub before_copy: RefCell<Vec<Vec<u8>>>,
}

impl SnapshotBackend {
    pub fn with_listing(names: &[&str]) -> Self {
        Self {
            listing: Some(names.iter().map(|n| n.to_string()).collect()),
            ..Self::default()
        }
    }
}

impl FileBackend for SnapshotBackend {
    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        match &self.listing {
            Some(names) => Ok(names.clone()),
            None => self.inner.list_dir(path),
        }
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.inner.read_file(path)
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        self.before_copy
            .borrow_mut()
            .push(fs::read(dest).unwrap_or_default());
        self.inner.copy_file(src, dest)
    }
}

/// Dirty when first asked, clean afterwards; counts saves.
pub struct SettlingDocument {
    pub path: PathBuf,
    pub dirty_checks: std::cell::Cell<u32>,
    pub saves: u32,
}

impl SettlingDocument {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            dirty_checks: std::cell::Cell::new(0),
            saves: 0,
        }
    }
}

#[async_trait(?Send)]
impl DocumentHost for SettlingDocument {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn is_dirty(&self) -> bool {
        let checks = self.dirty_checks.get();
        self.dirty_checks.set(checks + 1);
        checks == 0
    }

    async fn save(&mut self) -> Result<()> {
        self.saves += 1;
        Ok(())
    }
}

/// A document whose save always fails.
pub struct UnsavableDocument {
    pub path: PathBuf,
}

#[async_trait(?Send)]
impl DocumentHost for UnsavableDocument {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn is_dirty(&self) -> bool {
        true
    }

    async fn save(&mut self) -> Result<()> {
        Err(Error::Save {
            path: self.path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}
