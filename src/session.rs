//! Interactive terminal session: the page that wires the widgets to the controller

use crate::app::{Controller, Phase};
use crate::client::ResumeService;
use crate::error::Result;
use crate::input::job_description::PLACEHOLDER;
use crate::input::manager::InputManager;
use crate::input::{JobDescriptionInput, SelectedFile, UploadZone};
use crate::output::formatter::{ConsoleFormatter, OutputFormatter};
use crate::output::AnalysisReport;
use crate::ui::{self, Button, ButtonVariant, LandingSection, Navbar};
use colored::{Color, Colorize};
use log::debug;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// A typed line, interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Empty,
    Help,
    Quit,
    Show,
    Open(String),
    DragEnter,
    DragLeave,
    Drop(String),
    JobDescription(Option<String>),
    JobDescriptionFile(String),
    Analyze,
    Reset,
    Navigate(LandingSection),
    Unknown(String),
}

/// While a drag is in progress every line other than quit or cancel is the dropped payload.
pub fn parse_command(line: &str, drag_over: bool) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if is_quit(trimmed) {
        return Command::Quit;
    }
    if drag_over {
        return if trimmed.eq_ignore_ascii_case("cancel") {
            Command::DragLeave
        } else {
            Command::Drop(trimmed.to_string())
        };
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head.to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "show" => Command::Show,
        "open" | "file" | "browse" if !rest.is_empty() => Command::Open(rest.to_string()),
        "drop" if rest.is_empty() => Command::DragEnter,
        "drop" => Command::Drop(rest.to_string()),
        "jd" if rest.is_empty() => Command::JobDescription(None),
        "jd" => Command::JobDescription(Some(rest.to_string())),
        "jd-file" if !rest.is_empty() => Command::JobDescriptionFile(rest.to_string()),
        "analyze" => Command::Analyze,
        "reset" | "another" | "clear" => Command::Reset,
        _ => {
            if let Some(section) = LandingSection::from_command(trimmed) {
                Command::Navigate(section)
            } else if looks_like_path(trimmed) {
                // Dragging a file onto the terminal pastes its path.
                Command::Drop(trimmed.to_string())
            } else {
                Command::Unknown(trimmed.to_string())
            }
        }
    }
}

fn is_quit(text: &str) -> bool {
    matches!(text.to_lowercase().as_str(), "quit" | "exit" | "q")
}

fn looks_like_path(text: &str) -> bool {
    text.starts_with('/')
        || text.starts_with('~')
        || text.starts_with('\'')
        || text.starts_with('"')
        || text.starts_with("file://")
        || text.to_lowercase().trim_end_matches(['\'', '"']).ends_with(".pdf")
}

fn expand_home(path: PathBuf) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map(|home| home.join(rest)).unwrap_or(path),
        Err(_) => path,
    }
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub use_colors: bool,
    pub show_spinner: bool,
    pub service_url: String,
}

pub struct Session<S> {
    controller: Controller<S>,
    upload_zone: UploadZone,
    job_input: JobDescriptionInput,
    options: SessionOptions,
}

impl<S: ResumeService> Session<S> {
    pub fn new(controller: Controller<S>, options: SessionOptions) -> Self {
        let upload_zone = UploadZone::new(controller.limits().max_size_mb());
        Self {
            controller,
            upload_zone,
            job_input: JobDescriptionInput::new(),
            options,
        }
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn render_page(&self) -> Result<String> {
        let colors = self.options.use_colors;
        let state = self.controller.state();
        let mut page = Navbar::new().render(colors);

        if let Some(result) = state.result() {
            page.push('\n');
            page.push_str(&format!(
                "{}    {}\n",
                Button::new("↺ Analyze Another (reset)").variant(ButtonVariant::Ghost).render(colors),
                if colors { "Analysis Results".bold().to_string() } else { "Analysis Results".to_string() }
            ));
            let report = AnalysisReport::new(
                result.clone(),
                None,
                self.options.service_url.clone(),
            );
            page.push_str(&ConsoleFormatter::new(colors, false).format_report(&report)?);
            return Ok(page);
        }

        page.push_str("\nIs your resume ready for the dream job?\n");
        page.push_str("Upload your resume and the job description to get an instant match score, missing keywords, and tailored improvement suggestions.\n\n");
        page.push_str(&self.upload_zone.render(state.file(), state.upload_error(), colors));
        page.push_str(&self.job_input.render(state.job_description(), state.job_description_error(), colors));

        // The button is disabled until both inputs are present, like the form it mirrors.
        let button = Button::new("Analyze Resume →")
            .loading(state.is_loading())
            .disabled(state.file().is_none() || state.job_description().is_empty());
        page.push_str(&format!("{}\n", button.render(colors)));
        if let Some(error) = state.form_error() {
            page.push_str(&format!("{}\n", ui::paint(&format!("✖ {}", error), Color::Red, colors)));
        }
        Ok(page)
    }

    fn help_text(&self) -> &'static str {
        "Commands:\n  \
         open <path>      pick a resume PDF (or just paste/drag its path)\n  \
         drop             start a drag; the next line is the dropped path\n  \
         jd [text]        enter the job description (multi-line ends with '.')\n  \
         jd-file <path>   load the job description from a .txt or .md file\n  \
         analyze          run the analysis\n  \
         reset            clear everything and start over\n  \
         how | features   show the landing sections\n  \
         show | help | quit\n"
    }

    fn prompt(&self) -> String {
        let label = match self.controller.state().phase() {
            Phase::Idle => "resume",
            Phase::Uploading => "uploading",
            Phase::ReadyToAnalyze => "ready",
            Phase::Analyzing => "analyzing",
            Phase::ShowingResult => "result",
        };
        if self.upload_zone.is_drag_over() {
            "drop> ".to_string()
        } else {
            format!("{}> ", label)
        }
    }

    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        write!(out, "{}", self.render_page()?)?;
        writeln!(out, "Type 'help' for commands.")?;

        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let command = parse_command(&line, self.upload_zone.is_drag_over());
            debug!("Session command: {:?}", command);

            match command {
                Command::Empty => continue,
                Command::Quit => break,
                Command::Help => write!(out, "{}", self.help_text())?,
                Command::Show => write!(out, "{}", self.render_page()?)?,
                Command::Navigate(section) => write!(out, "{}", section.render(self.options.use_colors))?,
                Command::Open(typed) => match self.upload_zone.browse(&typed) {
                    Some(path) => self.select_path(path, out).await?,
                    None => writeln!(out, "No path given.")?,
                },
                Command::DragEnter => {
                    self.upload_zone.drag_enter();
                    write!(out, "{}", self.render_page()?)?;
                }
                Command::DragLeave => {
                    self.upload_zone.drag_leave();
                    write!(out, "{}", self.render_page()?)?;
                }
                Command::Drop(pasted) => match self.upload_zone.drop(&pasted) {
                    Some(path) => self.select_path(path, out).await?,
                    None => write!(out, "{}", self.render_page()?)?,
                },
                Command::JobDescription(Some(text)) => {
                    self.controller.set_job_description(text);
                    write!(out, "{}", self.render_page()?)?;
                }
                Command::JobDescription(None) => {
                    writeln!(out, "{}", PLACEHOLDER)?;
                    writeln!(out, "(finish with a line containing a single '.')")?;
                    out.flush()?;
                    let text = read_block(&mut lines).await?;
                    self.controller.set_job_description(text);
                    write!(out, "{}", self.render_page()?)?;
                }
                Command::JobDescriptionFile(typed) => {
                    let path = expand_home(PathBuf::from(typed));
                    match InputManager::new().load_job_description(&path).await {
                        Ok(text) => {
                            self.controller.set_job_description(text);
                            write!(out, "{}", self.render_page()?)?;
                        }
                        Err(e) => writeln!(out, "Could not read {}: {}", path.display(), e)?,
                    }
                }
                Command::Analyze => self.analyze(out).await?,
                Command::Reset => {
                    self.controller.reset();
                    write!(out, "{}", self.render_page()?)?;
                }
                Command::Unknown(text) => writeln!(out, "Unknown command: {} (type 'help')", text)?,
            }
        }

        Ok(())
    }

    async fn select_path<W: Write>(&mut self, path: PathBuf, out: &mut W) -> Result<()> {
        let path = expand_home(path);
        let file = match SelectedFile::from_path(&path).await {
            Ok(file) => file,
            Err(e) => {
                writeln!(out, "Could not open {}: {}", path.display(), e)?;
                return Ok(());
            }
        };

        let spinner = ui::loading_indicator("Extracting text from PDF...", self.options.show_spinner);
        // Validation and service failures land in the state and show on the page.
        let _ = self.controller.select_file(file).await;
        spinner.finish_and_clear();

        write!(out, "{}", self.render_page()?)?;
        Ok(())
    }

    async fn analyze<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if !self.controller.state().can_analyze() {
            writeln!(out, "Select a resume and enter a job description first.")?;
            return Ok(());
        }

        let spinner = ui::loading_indicator("Analyzing resume...", self.options.show_spinner);
        let _ = self.controller.analyze().await;
        spinner.finish_and_clear();

        write!(out, "{}", self.render_page()?)?;
        Ok(())
    }
}

async fn read_block<R: AsyncBufRead + Unpin>(lines: &mut Lines<R>) -> Result<String> {
    let mut block = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "." {
            break;
        }
        block.push(line);
    }
    Ok(block.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ", false), Command::Empty);
        assert_eq!(parse_command("open ~/cv.pdf", false), Command::Open("~/cv.pdf".into()));
        assert_eq!(parse_command("jd", false), Command::JobDescription(None));
        assert_eq!(
            parse_command("jd Looking for a Python developer", false),
            Command::JobDescription(Some("Looking for a Python developer".into()))
        );
        assert_eq!(parse_command("How it works", false), Command::Navigate(LandingSection::HowItWorks));
        assert_eq!(parse_command("ANALYZE", false), Command::Analyze);
        assert_eq!(parse_command("another", false), Command::Reset);
        assert_eq!(parse_command("dance", false), Command::Unknown("dance".into()));
    }

    #[test]
    fn test_pasted_paths_are_drops() {
        assert_eq!(parse_command("'/tmp/My CV.pdf' ", false), Command::Drop("'/tmp/My CV.pdf'".into()));
        assert_eq!(parse_command("resume.PDF", false), Command::Drop("resume.PDF".into()));
        assert_eq!(parse_command("drop", false), Command::DragEnter);
    }

    #[test]
    fn test_drag_mode_takes_any_line() {
        assert_eq!(parse_command("analyze", true), Command::Drop("analyze".into()));
        assert_eq!(parse_command("cancel", true), Command::DragLeave);
        assert_eq!(parse_command("quit", true), Command::Quit);
        assert_eq!(parse_command(" EXIT ", true), Command::Quit);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(PathBuf::from("/tmp/cv.pdf")), PathBuf::from("/tmp/cv.pdf"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(PathBuf::from("~/cv.pdf")), home.join("cv.pdf"));
        }
    }
}
