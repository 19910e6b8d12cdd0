//! Top bar and the landing sections it links to

use super::{paint, Card};
use colored::{Color, Colorize};

pub const BRAND: &str = "SmartResume";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSection {
    HowItWorks,
    Features,
}

impl LandingSection {
    pub const ALL: [LandingSection; 2] = [LandingSection::HowItWorks, LandingSection::Features];

    pub fn label(&self) -> &'static str {
        match self {
            LandingSection::HowItWorks => "How it works",
            LandingSection::Features => "Features",
        }
    }

    /// Match a typed navigation command such as `how` or `features`.
    pub fn from_command(command: &str) -> Option<Self> {
        match command.trim().to_lowercase().as_str() {
            "how" | "how-it-works" | "how it works" => Some(LandingSection::HowItWorks),
            "features" | "feature" => Some(LandingSection::Features),
            _ => None,
        }
    }

    pub fn render(&self, use_colors: bool) -> String {
        match self {
            LandingSection::HowItWorks => {
                let steps = [
                    ("01", "Upload Resume", "Upload your existing resume in PDF format. We extract the text securely."),
                    ("02", "Paste Job Description", "Copy the job description from LinkedIn, Indeed, or any career page."),
                    ("03", "Get Instant Feedback", "Receive a match score and actionable advice to improve your application."),
                ];
                let mut card = Card::new().title("How it works").accent(Color::Blue);
                for (step, title, desc) in steps {
                    card.push_line(format!("{} {}", paint(step, Color::Blue, use_colors), title));
                    card.push_line(format!("   {}", desc));
                }
                card.render(use_colors)
            }
            LandingSection::Features => {
                let features = [
                    "Hybrid Matching Algorithm (Keywords + Context)",
                    "Instant PDF Parsing & Analysis",
                    "Privacy First - No data storage",
                    "Detailed Skill Gap Analysis",
                ];
                let mut card = Card::new().title("Engineered for your success").accent(Color::Magenta);
                for feature in features {
                    card.push_line(format!("{} {}", paint("●", Color::Green, use_colors), feature));
                }
                card.render(use_colors)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navbar;

impl Navbar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, use_colors: bool) -> String {
        let brand = if use_colors {
            BRAND.bold().bright_white().on_blue().to_string()
        } else {
            BRAND.to_string()
        };
        let links = LandingSection::ALL
            .iter()
            .map(|section| paint(section.label(), Color::BrightBlack, use_colors))
            .collect::<Vec<_>>()
            .join(" · ");

        format!("📄 {}    {}\n", brand, links)
    }
}
