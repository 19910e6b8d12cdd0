//! Bordered content block

use colored::{Color, Colorize};

#[derive(Debug, Clone, Default)]
pub struct Card {
    title: Option<String>,
    accent: Option<Color>,
    lines: Vec<String>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Colour of the left border, like the coloured edge on the skill cards.
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.push_line(line);
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        // Keep one entry per terminal row so every row gets a border.
        self.lines.extend(line.split('\n').map(str::to_string));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, use_colors: bool) -> String {
        let border = |glyph: &str| match (use_colors, self.accent) {
            (true, Some(color)) => glyph.color(color).to_string(),
            _ => glyph.to_string(),
        };

        let mut output = String::new();
        match &self.title {
            Some(title) if use_colors => {
                output.push_str(&format!("{} {}\n", border("╭─"), title.bold()))
            }
            Some(title) => output.push_str(&format!("{} {}\n", border("╭─"), title)),
            None => output.push_str(&format!("{}\n", border("╭─"))),
        }
        for line in &self.lines {
            output.push_str(&format!("{} {}\n", border("│"), line));
        }
        output.push_str(&format!("{}\n", border("╰─")));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render() {
        let card = Card::new().title("Matched Skills").line("Python\nRust");
        assert_eq!(card.render(false), "╭─ Matched Skills\n│ Python\n│ Rust\n╰─\n");
    }
}
