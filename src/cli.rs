//! Command-line surface of `shub`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::document::ContentType;

/// Organize study notes by subject and read them in the terminal
#[derive(Parser, Debug)]
#[command(name = "shub", version)]
pub struct Cli {
    /// Work inside this user's library instead of the global one
    #[arg(long, global = true, value_name = "NAME")]
    pub user: Option<String>,

    /// Library root (overrides `library.root` from the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file to read instead of the default lookup
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mirror log records to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List subjects
    Subjects {
        #[arg(long)]
        json: bool,
    },
    /// Create a subject folder with a description file
    CreateSubject {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List the notes of a subject
    Notes {
        subject: String,
        #[arg(long)]
        json: bool,
    },
    /// Copy a file into a subject
    Upload { subject: String, path: PathBuf },
    /// Read a note in the pager
    View {
        subject: String,
        file: String,
        /// Treat the file as this type regardless of its extension
        #[arg(long = "as", value_enum, value_name = "TYPE")]
        as_type: Option<ContentType>,
    },
    /// Read any file in the pager
    Open {
        path: PathBuf,
        #[arg(long = "as", value_enum, value_name = "TYPE")]
        as_type: Option<ContentType>,
    },
    /// Look for problems that would stop a note from opening
    Check {
        subject: String,
        file: String,
        #[arg(long)]
        json: bool,
    },
}
