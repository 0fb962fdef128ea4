//! Galactic Library CLI Application
//!
//! Interactive menus for librarians, plus one-shot subcommands for scripting
//! against the same CSV tables.

mod args;
mod cli;
mod console;
mod menu;
mod renderer;
mod session;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use console::Console;
use library_core::LibraryBuilder;
use log::info;
use menu::MenuSession;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        credentials_file,
        username,
        password,
        no_color,
        command,
    } = Args::parse();

    let library = LibraryBuilder::new()
        .with_data_dir(data_dir)
        .with_credentials_file(credentials_file)
        .build()
        .context("Failed to initialize library")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Galactic Library started");

    match command {
        Some(Visitor { command }) => {
            session::authenticate(
                &library.credentials(),
                username.as_deref(),
                password.as_deref(),
            )?;
            Cli::new(library, renderer).handle_visitor_command(command)
        }
        Some(Artifact { command }) => {
            session::authenticate(
                &library.credentials(),
                username.as_deref(),
                password.as_deref(),
            )?;
            Cli::new(library, renderer).handle_artifact_command(command)
        }
        Some(Menu) | None => {
            let stdin = io::stdin();
            let console = Console::new(stdin.lock(), io::stdout());
            MenuSession::new(&library, &renderer, console)
                .run()
                .context("Menu session failed")
        }
    }
}
