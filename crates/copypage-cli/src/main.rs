//! copypage - copy a rendered page to the clipboard as AI-ready Markdown.

mod cli;
mod clipboard;
mod error;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use copypage::{collapse_blank_lines, parse_fragment, CopyPageService, ExportOptions};
use log::info;

use crate::cli::Cli;
use crate::clipboard::{copy_with_fallback, default_strategies, ClipboardStrategy};
use crate::error::{CliError, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match run(&cli, &mut default_strategies()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("copypage: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, clipboard: &mut [Box<dyn ClipboardStrategy>]) -> Result<()> {
    let service = CopyPageService::with_options(load_options(cli.config.as_deref())?);

    let html = read_input(cli.input_path().map(|p| p.as_path()))?;
    let markdown = if cli.fragment {
        let fragment = service.convert_node(&parse_fragment(&html));
        collapse_blank_lines(&fragment).trim().to_string()
    } else {
        service.convert_html(&html)
    };
    info!("converted page to {} bytes of Markdown", markdown.len());

    if let Some(path) = &cli.output {
        fs::write(path, &markdown).map_err(|source| CliError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        info!("wrote {}", path.display());
    } else if cli.stdout {
        println!("{}", markdown);
    } else {
        let via = copy_with_fallback(clipboard, &markdown)?;
        info!("delivered Markdown via {} strategy", via);
        eprintln!("Copied Markdown");
    }

    Ok(())
}

fn load_options(path: Option<&Path>) -> Result<ExportOptions> {
    let Some(path) = path else {
        return Ok(ExportOptions::default());
    };

    let source = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    ExportOptions::from_toml_str(&source).map_err(|source| CliError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .map_err(CliError::ReadStdin)?;
            Ok(html)
        }
    }
}
