use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use write_watch_config::Config;
use write_watch_engine::enhance::{EnhancementClient, EnhancementSettings, ReqwestTransport};
use write_watch_engine::export::{DEFAULT_EXPORT_TITLE, ExportOptions, ExportStyle, export_notes};
use write_watch_engine::structure::{convert_to_html, extract_structured_content, is_valid_content};
use write_watch_engine::{NoteDocument, read_input, select_video, write_output};

/// Note-taking companion for video review
#[derive(Parser, Debug)]
#[command(name = "write-watch", author, version, about)]
struct Cli {
    /// Config file (default: ~/.config/write-watch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert editor HTML to structured text
    Extract {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },
    /// Convert structured text back to editor HTML
    Reconstruct {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },
    /// Report whether editor HTML has enough content to work with
    Check {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
        /// Minimum visible characters (default: from config)
        #[arg(long)]
        min_length: Option<usize>,
    },
    /// Rewrite editor HTML through the enhancement service
    Enhance {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
        /// Write the enhanced HTML here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Export editor HTML as a standalone document
    Export {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
        #[arg(long, default_value = DEFAULT_EXPORT_TITLE)]
        title: String,
        /// minimal or print
        #[arg(long, default_value = "print")]
        style: ExportStyle,
        /// Target directory (default: from config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// List models available from the enhancement service
    Models,
    /// Resolve a video selection
    Video {
        /// Local video file name
        #[arg(long)]
        file: Option<String>,
        /// Video URL
        #[arg(long)]
        url: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Extract { input } => {
            let html = read_text(input.as_deref())?;
            println!("{}", extract_structured_content(&html));
        }
        Command::Reconstruct { input } => {
            let text = read_text(input.as_deref())?;
            println!("{}", convert_to_html(&text));
        }
        Command::Check { input, min_length } => {
            let html = read_text(input.as_deref())?;
            let min = min_length.unwrap_or(config.notes.min_content_length);
            if is_valid_content(&html, min) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Enhance { input, output } => {
            let html = read_text(input.as_deref())?;
            let client = build_client(&config)?;
            let mut doc =
                NoteDocument::new(html).with_min_content_length(config.notes.min_content_length);
            doc.enhance(&client)?;
            match output {
                Some(path) => {
                    write_output(&path, doc.content())?;
                    log::info!("Wrote enhanced notes to {}", path.display());
                }
                None => println!("{}", doc.content()),
            }
        }
        Command::Export {
            input,
            title,
            style,
            dir,
        } => {
            let html = read_text(input.as_deref())?;
            let dir = dir.unwrap_or_else(|| config.export_dir());
            let options = export_options(title, style, &config);
            let path = export_notes(&html, &dir, &options, chrono::Utc::now())?;
            println!("{}", path.display());
        }
        Command::Models => {
            let client = build_client(&config)?;
            for model in client.list_models()? {
                match model.owned_by {
                    Some(owner) => println!("{}\t{owner}", model.id),
                    None => println!("{}", model.id),
                }
            }
        }
        Command::Video { file, url } => {
            let source = select_video(file.as_deref(), url.as_deref())?;
            println!("{source}");
            println!("name: {}", source.display_name());
            if let Some(id) = source.youtube_id() {
                println!("youtube id: {id}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Reads the named file, or stdin when no file (or `-`) is given.
fn read_text(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => Ok(read_input(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn export_options(title: String, style: ExportStyle, config: &Config) -> ExportOptions {
    ExportOptions {
        title,
        style,
        min_content_length: config.notes.min_content_length,
    }
}

fn settings_from_config(config: &Config) -> EnhancementSettings {
    let enhancement = &config.enhancement;
    let mut settings = EnhancementSettings::new(
        &enhancement.api_url,
        &enhancement.models_url,
        &enhancement.model,
    );
    settings.temperature = enhancement.temperature;
    settings.max_tokens = enhancement.max_tokens;
    settings.min_content_length = config.notes.min_content_length;
    settings
}

fn build_client(config: &Config) -> Result<EnhancementClient<ReqwestTransport>> {
    let timeout = match config.enhancement.timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let transport = ReqwestTransport::new(timeout)?;

    let api_key = config.api_key().unwrap_or_else(|| {
        log::warn!(
            "No API key found in ${}",
            config.enhancement.api_key_env
        );
        String::new()
    });

    Ok(EnhancementClient::new(
        transport,
        settings_from_config(config),
        api_key,
    ))
}
