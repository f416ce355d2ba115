//! `cryp` - encrypt stdin streams, files and directory trees.
//!
//! The secret is read from `CRYP_KEY` (or `--key`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cryp_rs::{armor, decrypt_dir, decrypt_file, encrypt_dir, encrypt_file, Secret};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cryp", version, about = "Authenticated encryption for streams, files and directories")]
struct Cli {
    /// Secret used to derive the encryption key
    #[arg(long, env = "CRYP_KEY", hide_env_values = true)]
    key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt stdin, print armored text on stdout
    Encrypt,
    /// Decrypt armored text from stdin, write plaintext to stdout
    Decrypt,
    /// Encrypt files into signature-named artifacts (originals are kept)
    EncryptFile {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Restore files from artifacts (artifacts are kept)
    DecryptFile {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Replace every regular file under each directory with its artifact
    EncryptDir {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Replace every artifact under each directory with its restored file
    DecryptDir {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

impl Command {
    fn writes_stdout(&self) -> bool {
        matches!(self, Command::Encrypt | Command::Decrypt)
    }
}

fn init_logging(to_stderr: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if to_stderr {
        builder.with_writer(io::stderr).init();
    } else {
        builder.with_writer(io::stdout).init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.writes_stdout());

    let secret = Secret::new(cli.key.into_bytes());

    match cli.command {
        Command::Encrypt => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data).context("reading stdin")?;
            println!("{}", armor::seal(&data, &secret)?);
        }
        Command::Decrypt => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
            let plaintext = armor::open(&text, &secret)?;
            io::stdout().write_all(&plaintext).context("writing stdout")?;
        }
        Command::EncryptFile { paths } => {
            for path in paths {
                encrypt_file(&path, &secret).with_context(|| format!("encrypting {}", path.display()))?;
            }
        }
        Command::DecryptFile { paths } => {
            for path in paths {
                decrypt_file(&path, &secret).with_context(|| format!("decrypting {}", path.display()))?;
            }
        }
        Command::EncryptDir { paths } => {
            for path in paths {
                encrypt_dir(&path, &secret).with_context(|| format!("encrypting {}", path.display()))?;
            }
        }
        Command::DecryptDir { paths } => {
            for path in paths {
                decrypt_dir(&path, &secret).with_context(|| format!("decrypting {}", path.display()))?;
            }
        }
    }

    Ok(())
}
