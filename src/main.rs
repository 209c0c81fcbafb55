use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing::info;

use shub::cli::{Cli, Command};
use shub::config::Config;
use shub::document::{CheckReport, ContentType, FsContentLoader, diagnose};
use shub::error::{AppError, AppResult};
use shub::input::CrosstermKeySource;
use shub::library::Library;
use shub::logging;
use shub::pager::{PagerIo, SessionOutcome, TerminalRenderer, open_pager};
use shub::report::TracingReporter;

fn main() {
    match run(Cli::parse()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but has a failure to signal.
fn run(cli: Cli) -> AppResult<bool> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(root) = &cli.root {
        config.library.root = root.clone();
    }

    if let Err(err) = logging::init(&config.log, cli.verbose) {
        eprintln!("warning: logging disabled: {err}");
    }

    let library = Library::new(&config.library.root, cli.user.as_deref())?;
    info!(root = %library.root().display(), "library opened");

    match cli.command {
        Command::Subjects { json } => {
            let subjects = library.subjects()?;
            if json {
                print_json(&subjects)?;
            } else if subjects.is_empty() {
                println!("no subjects yet; add one with `shub create-subject <name>`");
            } else {
                for subject in subjects {
                    println!("{subject}");
                }
            }
        }
        Command::CreateSubject { name, description } => {
            let dir = library.create_subject(&name, &description)?;
            println!("created subject '{}' at {}", name.trim(), dir.display());
        }
        Command::Notes { subject, json } => {
            let notes = library.notes(&subject)?;
            if json {
                print_json(&notes)?;
            } else {
                let width = notes.iter().map(|note| note.name.len()).max().unwrap_or(0);
                for note in notes {
                    println!(
                        "{:<width$}  {:<7}  {} bytes",
                        note.name,
                        note.content_type.id(),
                        note.size_bytes
                    );
                }
            }
        }
        Command::Upload { subject, path } => {
            let dest = library.upload(&subject, &path)?;
            println!("uploaded to {}", dest.display());
        }
        Command::View {
            subject,
            file,
            as_type,
        } => {
            let path = library.note_path(&subject, &file)?;
            return view(&config, &path, &file, as_type);
        }
        Command::Open { path, as_type } => {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            return view(&config, &path, &name, as_type);
        }
        Command::Check {
            subject,
            file,
            json,
        } => {
            let path = library.note_path(&subject, &file)?;
            let report = CheckReport::new(diagnose(&path, ContentType::from_path(&path)));
            if json {
                print_json(&report)?;
            } else if report.is_clean() {
                println!("{file}: no problems found");
            } else {
                for issue in &report.issues {
                    println!("{file}: [{}] {}", issue.severity, issue.message);
                }
                println!("suggested repairs:");
                for (n, suggestion) in report.suggestions.iter().enumerate() {
                    println!("  {}. {suggestion}", n + 1);
                }
            }
            return Ok(report.is_clean());
        }
    }

    Ok(true)
}

fn view(
    config: &Config,
    path: &Path,
    name: &str,
    as_type: Option<ContentType>,
) -> AppResult<bool> {
    let content_type = as_type.unwrap_or_else(|| ContentType::from_path(path));
    let mut keys = CrosstermKeySource;
    let mut renderer = TerminalRenderer::new();
    let mut reporter = TracingReporter;

    let outcome = open_pager(
        PagerIo {
            loader: &FsContentLoader,
            keys: &mut keys,
            renderer: &mut renderer,
            reporter: &mut reporter,
        },
        config,
        path,
        name,
        content_type,
    )?;

    match outcome {
        SessionOutcome::Closed => Ok(true),
        SessionOutcome::NotOpened { diagnostic } => {
            eprintln!("cannot open {name}: {diagnostic}");
            Ok(false)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::invalid_argument(format!("failed to encode json: {err}")))?;
    println!("{text}");
    Ok(())
}
