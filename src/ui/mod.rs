//! Stateless presentation primitives shared by the widgets and formatters

pub mod badge;
pub mod button;
pub mod card;
pub mod navbar;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use navbar::{LandingSection, Navbar};

use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Paint `text` only when colour output is on.
pub(crate) fn paint(text: &str, color: Color, use_colors: bool) -> String {
    if use_colors {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Spinner shown while a request is in flight; hidden when disabled.
pub fn loading_indicator(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
