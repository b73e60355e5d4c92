//! Key handling for the terminal quick pick, kept free of terminal I/O.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Picked(String),
    Cancelled,
}

/// Items, the typed filter and the highlighted row.
///
/// The first item is pinned: it stays visible whatever the filter is, so the
/// dialog entry can always be reached.
#[derive(Debug, Clone)]
pub struct QuickPickState {
    items: Vec<String>,
    filter: String,
    visible: Vec<usize>,
    selected: usize,
}

impl QuickPickState {
    pub fn new(items: Vec<String>) -> Self {
        let mut state = Self {
            items,
            filter: String::new(),
            visible: Vec::new(),
            selected: 0,
        };
        state.refilter();
        state
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Labels currently shown, in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(|&i| self.items[i].as_str())
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Step {
        if key.kind != KeyEventKind::Press {
            return Step::Continue;
        }
        match key.code {
            KeyCode::Esc => Step::Cancelled,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Step::Cancelled,
            KeyCode::Enter => match self.visible.get(self.selected) {
                Some(&i) => Step::Picked(self.items[i].clone()),
                None => Step::Continue,
            },
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Step::Continue
            }
            KeyCode::Down => {
                self.move_down(1);
                Step::Continue
            }
            KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(PAGE_SIZE);
                Step::Continue
            }
            KeyCode::PageDown => {
                self.move_down(PAGE_SIZE);
                Step::Continue
            }
            KeyCode::Home => {
                self.selected = 0;
                Step::Continue
            }
            KeyCode::End => {
                self.selected = self.visible.len().saturating_sub(1);
                Step::Continue
            }
            KeyCode::Backspace => {
                if self.filter.pop().is_some() {
                    self.refilter();
                }
                Step::Continue
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.filter.push(c);
                self.refilter();
                Step::Continue
            }
            _ => Step::Continue,
        }
    }

    /// Index range of visible rows to draw in a window of `height` rows,
    /// keeping the selection on screen.
    pub fn window(&self, height: usize) -> std::ops::Range<usize> {
        let height = height.max(1);
        let len = self.visible.len();
        if len <= height {
            return 0..len;
        }
        let start = (self.selected + 1).saturating_sub(height);
        start..start + height
    }

    fn move_down(&mut self, by: usize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = (self.selected + by).min(last);
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, item)| *i == 0 || item.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        // jump to the first real match while typing
        self.selected = if needle.is_empty() || self.visible.len() < 2 {
            0
        } else {
            1
        };
    }
}
