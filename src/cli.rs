use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::routes::Route;

/// A simple command-line tool for signing files with Ed25519
#[derive(Parser, Debug)]
#[command(name = "edsign", version)]
pub struct Cli {
    /// Sign files matching the glob pattern with the provided private key
    #[arg(
        short = 's',
        long = "sign",
        num_args = 1..=3,
        value_names = ["FILE_GLOB", "COMMENT", "KEY_PATH"]
    )]
    pub sign: Option<Vec<String>>,

    /// Create an Ed25519 key pair (private and public keys)
    #[arg(short = 'c', long = "create")]
    pub create: bool,

    /// Overwrite existing key files when creating a key pair
    #[arg(long, requires = "create")]
    pub force: bool,

    /// Verify the signature of files matching the glob pattern with the provided public key (default: ~/.edsign/public.key)
    #[arg(
        short = 'v',
        long = "verify",
        num_args = 1..=2,
        value_names = ["FILE_OR_DIR_GLOB", "PUBLIC_KEY_PATH"]
    )]
    pub verify: Option<Vec<String>>,
}

impl Cli {
    /// Picks the mode to run. Sign wins over create, which wins over verify.
    pub fn route(self) -> Route {
        if let Some(values) = self.sign {
            let mut values = values.into_iter();
            return Route::Sign {
                pattern: values.next().unwrap_or_default(),
                comment: values.next(),
                key_path: values.next().map(PathBuf::from),
            };
        }
        if self.create {
            return Route::Create { force: self.force };
        }
        if let Some(values) = self.verify {
            let mut values = values.into_iter();
            return Route::Verify {
                pattern: values.next().unwrap_or_default(),
                public_key_path: values.next().map(PathBuf::from),
            };
        }
        Route::Help
    }
}

pub fn print_help() -> std::io::Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}
