//! Action buttons rendered as bracketed labels

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    is_loading: bool,
    disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            is_loading: false,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !(self.disabled || self.is_loading)
    }

    pub fn render(&self, use_colors: bool) -> String {
        let label = if self.is_loading {
            "⏳ Processing...".to_string()
        } else {
            self.label.clone()
        };

        let text = match self.variant {
            ButtonVariant::Ghost => label,
            ButtonVariant::Outline => format!("( {} )", label),
            ButtonVariant::Primary | ButtonVariant::Secondary => format!("[ {} ]", label),
        };

        if !use_colors {
            return text;
        }
        if !self.is_enabled() {
            return text.dimmed().to_string();
        }
        match self.variant {
            ButtonVariant::Primary => text.white().on_blue().bold().to_string(),
            ButtonVariant::Secondary => text.bright_white().to_string(),
            ButtonVariant::Outline => text.blue().to_string(),
            ButtonVariant::Ghost => text.bright_black().to_string(),
        }
    }
}
