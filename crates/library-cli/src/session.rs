//! Admin login: the interactive three-attempt prompt and the one-shot check
//! used by subcommands.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use library_core::{CredentialStore, LibraryError};
use log::info;

use crate::console::Console;

/// Number of interactive login attempts before the session ends.
pub const MAX_ATTEMPTS: usize = 3;

/// Runs the interactive login, returning whether access was granted.
///
/// An attempt with a blank username or password still counts. A missing
/// credentials table ends the login immediately.
pub fn login<R: BufRead, W: Write>(
    store: &CredentialStore,
    console: &mut Console<R, W>,
) -> Result<bool> {
    for attempt in 1..=MAX_ATTEMPTS {
        console.say(&format!("\nAttempt {attempt}/{MAX_ATTEMPTS}"))?;

        let Some(username) = console.prompt("Username: ")? else {
            return Ok(false);
        };
        let Some(password) = console.prompt("Password: ")? else {
            return Ok(false);
        };

        match store.authenticate(&username, &password) {
            Ok(true) => {
                info!("Admin '{username}' logged in");
                console.say("Login successful.")?;
                return Ok(true);
            }
            Ok(false) => console.say("Invalid username or password.")?,
            Err(LibraryError::Validation { .. }) => {
                console.say("Username and password cannot be empty.")?;
            }
            Err(err @ LibraryError::CredentialsUnavailable { .. }) => {
                console.say(&format!("Error: {err}"))?;
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        }
    }

    console.say("\nYou have reached the max amount of tries.")?;
    Ok(false)
}

/// Checks the credentials given on the command line.
///
/// # Errors
///
/// Fails when either value is missing, the credentials table is unavailable,
/// or the pair is rejected.
pub fn authenticate(
    store: &CredentialStore,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let (Some(username), Some(password)) = (username, password) else {
        bail!("--username and --password (or LIBRARY_USERNAME and LIBRARY_PASSWORD) are required");
    };

    if !store.authenticate(username, password)? {
        bail!("Invalid username or password");
    }
    Ok(())
}
