//! Pill-shaped labels for skills

use colored::{Color, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Success,
    Error,
    #[default]
    Neutral,
    Indigo,
}

impl BadgeVariant {
    fn color(&self) -> Color {
        match self {
            BadgeVariant::Success => Color::Green,
            BadgeVariant::Error => Color::Red,
            BadgeVariant::Neutral => Color::White,
            BadgeVariant::Indigo => Color::Blue,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Badge {
    label: String,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self { label: label.into(), variant }
    }

    pub fn render(&self, use_colors: bool) -> String {
        let text = format!("({})", self.label);
        if use_colors {
            text.color(self.variant.color()).bold().to_string()
        } else {
            text
        }
    }

    /// Render labels as a wrapped row of badges, `per_line` per row.
    pub fn render_row<I, S>(labels: I, variant: BadgeVariant, per_line: usize, use_colors: bool) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let badges: Vec<String> = labels
            .into_iter()
            .map(|label| Badge::new(label, variant).render(use_colors))
            .collect();

        badges
            .chunks(per_line.max(1))
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
