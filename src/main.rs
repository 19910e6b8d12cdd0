//! SmartResume: check how well a resume matches a job description

use clap::Parser;
use log::{error, info};
use smart_resume::app::Controller;
use smart_resume::cli::{self, Cli, Commands, ConfigAction};
use smart_resume::client::HttpResumeService;
use smart_resume::config::Config;
use smart_resume::error::{Result, SmartResumeError};
use smart_resume::input::manager::InputManager;
use smart_resume::input::SelectedFile;
use smart_resume::output::{save_report_to_file, suggest_filename, AnalysisReport, ReportGenerator};
use smart_resume::session::{Session, SessionOptions};
use smart_resume::ui;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Some(server) = &cli.server {
        if let Err(e) = config.set_value("service.base_url", server) {
            error!("Invalid --server value: {}", e);
            process::exit(1);
        }
    }

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        if already_logged(&e) {
            eprintln!("❌ {}", e);
        } else {
            error!("Command failed: {}", e);
        }
        process::exit(1);
    }
}

/// The controller logs its own rejections and service failures.
fn already_logged(err: &SmartResumeError) -> bool {
    err.is_validation() || err.detail().is_some()
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    let show_spinner = std::io::stderr().is_terminal();

    match command {
        Commands::Upload { resume, save } => {
            info!("Uploading {} to {}", resume.display(), config.service.base_url);

            let mut controller = connect(&config)?;
            let file = SelectedFile::from_path(&resume).await?;

            let spinner = ui::loading_indicator("Extracting text from PDF...", show_spinner);
            let outcome = controller.select_file(file).await;
            spinner.finish_and_clear();
            outcome?;

            let text = controller.state().resume_text();
            match save {
                Some(path) => {
                    save_report_to_file(text, &path)?;
                    println!("✅ Extracted text saved to {}", path.display());
                }
                None => println!("{}", text),
            }
        }

        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            detailed,
            save,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(SmartResumeError::InvalidInput)?,
                None => config.output.format,
            };

            let job_description = match (job, job_text) {
                (_, Some(text)) => text,
                (Some(path), None) => {
                    if path != Path::new("-") {
                        cli::validate_file_extension(&path, &["txt", "md"]).map_err(|e| {
                            SmartResumeError::InvalidInput(format!("Job description file: {}", e))
                        })?;
                    }
                    InputManager::new().load_job_description(&path).await?
                }
                (None, None) => return Err(SmartResumeError::MissingJobDescription),
            };

            let mut controller = connect(&config)?;
            let file = SelectedFile::from_path(&resume).await?;
            let resume_name = file.name().to_string();

            let spinner = ui::loading_indicator("Extracting text from PDF...", show_spinner);
            let outcome = controller.select_file(file).await;
            spinner.finish_and_clear();
            outcome?;

            controller.set_job_description(job_description);

            let spinner = ui::loading_indicator("Analyzing resume...", show_spinner);
            let outcome = controller.analyze().await.cloned();
            spinner.finish_and_clear();
            let result = outcome?;

            let report = AnalysisReport::new(result, Some(resume_name.clone()), config.service.base_url.clone());

            // Files never get ANSI colour codes.
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &resume_name, true))
                    } else {
                        path
                    };
                    save_report_to_file(&content, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Interactive => {
            info!("Starting interactive session against {}", config.service.base_url);

            let options = SessionOptions {
                use_colors: config.output.color_output,
                show_spinner,
                service_url: config.service.base_url.clone(),
            };
            let mut session = Session::new(connect(&config)?, options);

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session.run(stdin, &mut stdout).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Service URL: {}", config.service.base_url);
                println!("Request Timeout: {}s", config.service.timeout_secs);
                println!("\nUpload:");
                println!("  Max File Size: {} bytes", config.upload.max_file_bytes);
                println!("  Accepted Type: {}", config.upload.accepted_mime_type);
                println!("\nAnalysis:");
                println!("  Settle Delay: {}ms", config.analysis.settle_delay_ms);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                // Start from the file so a --server override is not persisted.
                let mut stored = load_config(Some(config_path))?;
                stored.set_value(&key, &value)?;
                stored.save_to(config_path)?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn connect(config: &Config) -> Result<Controller<HttpResumeService>> {
    let service = HttpResumeService::new(&config.service)?;
    Ok(Controller::from_config(service, config))
}
