//! Resume picker: accepts dropped or typed paths and shows the selection state

use crate::input::selected_file::SelectedFile;
use crate::ui::{paint, Card};
use colored::Color;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

// Terminals paste dropped files as quoted, backslash-escaped or file:// paths.
static DROPPED_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'([^']*)'|"([^"]*)"|((?:\\.|[^\s\\])+)"#).expect("dropped path pattern is valid")
});
static ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(.)").expect("escape pattern is valid"));

/// What the zone currently shows, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadZoneView<'a> {
    DragOver,
    Error(&'a str),
    Selected(&'a SelectedFile),
    Empty,
}

#[derive(Debug, Clone)]
pub struct UploadZone {
    drag_over: bool,
    max_size_mb: u64,
}

impl UploadZone {
    pub fn new(max_size_mb: u64) -> Self {
        Self { drag_over: false, max_size_mb }
    }

    pub fn drag_enter(&mut self) {
        self.drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// Handle pasted drop text; only the first file is taken.
    pub fn drop(&mut self, pasted: &str) -> Option<PathBuf> {
        self.drag_over = false;
        parse_dropped_paths(pasted).into_iter().next()
    }

    /// Handle a path typed at the browse prompt.
    pub fn browse(&self, typed: &str) -> Option<PathBuf> {
        parse_dropped_paths(typed).into_iter().next()
    }

    pub fn view<'a>(&self, selected: Option<&'a SelectedFile>, error: Option<&'a str>) -> UploadZoneView<'a> {
        if self.drag_over {
            UploadZoneView::DragOver
        } else if let Some(error) = error {
            UploadZoneView::Error(error)
        } else if let Some(file) = selected {
            UploadZoneView::Selected(file)
        } else {
            UploadZoneView::Empty
        }
    }

    pub fn render(&self, selected: Option<&SelectedFile>, error: Option<&str>, use_colors: bool) -> String {
        let accent = match self.view(selected, error) {
            UploadZoneView::DragOver => Color::Blue,
            UploadZoneView::Error(_) => Color::Red,
            UploadZoneView::Selected(_) => Color::Green,
            UploadZoneView::Empty => Color::White,
        };

        let mut card = Card::new().accent(accent);
        match selected {
            Some(file) => {
                card.push_line(format!("{} {}", paint("✔", Color::Green, use_colors), file.name()));
                card.push_line(format!("{:.2} MB • PDF Document", file.size_mb()));
                card.push_line(paint("Enter another path to replace", Color::Blue, use_colors));
            }
            None => {
                card.push_line("⬆ Upload your Resume");
                card.push_line("Drag and drop your PDF here, or type its path.");
                card.push_line(paint(&format!("Max size: {}MB", self.max_size_mb), Color::BrightBlack, use_colors));
            }
        }
        if self.drag_over {
            card.push_line(paint("Drop to upload", Color::Blue, use_colors));
        }
        if let Some(error) = error {
            card.push_line(paint(&format!("✖ {}", error), Color::Red, use_colors));
        }
        card.render(use_colors)
    }
}

impl Default for UploadZone {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Split pasted text into file paths.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    DROPPED_PATH
        .captures_iter(text)
        .filter_map(|caps| {
            let raw = if let Some(quoted) = caps.get(1).or_else(|| caps.get(2)) {
                quoted.as_str().to_string()
            } else {
                ESCAPE.replace_all(caps.get(3)?.as_str(), "$1").to_string()
            };
            let path = match raw.strip_prefix("file://") {
                Some(url_path) => url_path.replace("%20", " "),
                None => raw,
            };
            (!path.is_empty()).then(|| PathBuf::from(path))
        })
        .collect()
}
