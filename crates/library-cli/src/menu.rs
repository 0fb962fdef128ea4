//! Interactive menus: welcome screen, login, then the admin, visitors and
//! artifacts menus.
//!
//! Every operation prompts for its inputs, calls the [`Library`] and renders
//! the result. Recoverable library errors (bad selections, unknown keys,
//! duplicate codes, malformed rules) are printed as `Error: ...` and the
//! current menu is shown again; I/O failures end the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use library_core::{
    models::SpeciesChoice,
    params::{DeleteRecord, RegisterArtifact, RegisterVisitor, ToggleVisitorStatus, UpdateArtifact},
    ArtifactStatus, Artifacts, Choice, CreateResult, Library, OperationStatus, Rarity, Visitors,
    VisitorStatus,
};
use log::debug;

use crate::{console::Console, renderer::TerminalRenderer, session};

/// What a menu should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Stay,
    Back,
    Quit,
}

/// Stops the current action and ends the session when input runs out.
macro_rules! ask {
    ($self:ident, $label:expr) => {
        match $self.console.prompt($label)? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        }
    };
}

pub struct MenuSession<'a, R, W> {
    library: &'a Library,
    renderer: &'a TerminalRenderer,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(
        library: &'a Library,
        renderer: &'a TerminalRenderer,
        console: Console<R, W>,
    ) -> Self {
        Self {
            library,
            renderer,
            console,
        }
    }

    /// Runs the welcome screen until the user exits, input ends or a login
    /// fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say("\nWelcome to Galactic Library")?;
            self.console.say("1. Login")?;
            self.console.say("0. Exit")?;

            let Some(option) = self.read_option()? else {
                return Ok(());
            };
            match option.as_str() {
                "1" => {
                    let store = self.library.credentials();
                    if !session::login(&store, &mut self.console)? {
                        return Ok(());
                    }
                    if self.admin_menu()? == Flow::Quit {
                        return Ok(());
                    }
                }
                "0" => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                _ => self.console.say("Invalid option.")?,
            }
        }
    }

    /// Reads a menu option, re-prompting on non-numeric input.
    fn read_option(&mut self) -> Result<Option<String>> {
        loop {
            let Some(option) = self.console.prompt("Select an option: ")? else {
                return Ok(None);
            };
            if !option.is_empty() && option.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(Some(option));
            }
            self.console.say("Invalid input.")?;
        }
    }

    fn admin_menu(&mut self) -> Result<Flow> {
        loop {
            self.console.say("\n=== Admin Menu ===")?;
            self.console.say("1. Visitors menu")?;
            self.console.say("2. Artifacts menu")?;
            self.console.say("0. Logout")?;

            let Some(option) = self.read_option()? else {
                return Ok(Flow::Quit);
            };
            let flow = match option.as_str() {
                "1" => self.visitors_menu()?,
                "2" => self.artifacts_menu()?,
                "0" => {
                    debug!("Admin logged out");
                    return Ok(Flow::Back);
                }
                _ => {
                    self.console.say("Invalid option.")?;
                    Flow::Stay
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn visitors_menu(&mut self) -> Result<Flow> {
        loop {
            self.console.say("\n=== Visitors Menu ===")?;
            self.console.say("1. Register visitor")?;
            self.console.say("2. List visitors")?;
            self.console.say("3. Find visitor by ID")?;
            self.console.say("4. Update visitor status")?;
            self.console.say("5. Delete visitor")?;
            self.console.say("6. Statistics")?;
            self.console.say("0. Back")?;

            let Some(option) = self.read_option()? else {
                return Ok(Flow::Quit);
            };
            let flow = match option.as_str() {
                "1" => self.register_visitor()?,
                "2" => self.list_visitors()?,
                "3" => self.find_visitor()?,
                "4" => self.toggle_visitor_status()?,
                "5" => self.delete_visitor()?,
                "6" => self.visitor_statistics()?,
                "0" => return Ok(Flow::Stay),
                _ => {
                    self.console.say("Invalid option.")?;
                    Flow::Stay
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn artifacts_menu(&mut self) -> Result<Flow> {
        loop {
            self.console.say("\n=== Artifacts Menu ===")?;
            self.console.say("1. Register artifact")?;
            self.console.say("2. List artifacts")?;
            self.console.say("3. Find artifact by code")?;
            self.console.say("4. Classify artifacts by rarity")?;
            self.console.say("5. Statistics")?;
            self.console.say("6. Delete artifact")?;
            self.console.say("7. Update artifact rarity/status")?;
            self.console.say("0. Back")?;

            let Some(option) = self.read_option()? else {
                return Ok(Flow::Quit);
            };
            let flow = match option.as_str() {
                "1" => self.register_artifact()?,
                "2" => self.list_artifacts()?,
                "3" => self.find_artifact()?,
                "4" => self.classify_artifacts()?,
                "5" => self.artifact_statistics()?,
                "6" => self.delete_artifact()?,
                "7" => self.reclassify_artifact()?,
                "0" => return Ok(Flow::Stay),
                _ => {
                    self.console.say("Invalid option.")?;
                    Flow::Stay
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    /// Renders `markdown` through the configured renderer.
    fn show(&mut self, markdown: &str) -> Result<Flow> {
        self.console.render(self.renderer, markdown)?;
        Ok(Flow::Stay)
    }

    /// Unwraps a library result, printing recoverable errors.
    fn report<T>(&mut self, result: library_core::Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_recoverable() => {
                let status = OperationStatus::from(&err);
                self.console.render(self.renderer, &status.to_string())?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn print_options<C: Choice>(&mut self, heading: &str) -> Result<()> {
        self.console.say(heading)?;
        for (i, option) in C::OPTIONS.iter().enumerate() {
            self.console.say(&format!("{} = {}", i + 1, option.label()))?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Visitors
    // ------------------------------------------------------------------

    fn register_visitor(&mut self) -> Result<Flow> {
        let name = ask!(self, "Name: ");
        self.print_options::<SpeciesChoice>("Species options:")?;
        let species = ask!(self, "Select species: ");
        let is_other = SpeciesChoice::from_selection(&species).ok() == Some(SpeciesChoice::Other);
        let other_species = if is_other {
            Some(ask!(self, "Enter species: "))
        } else {
            None
        };
        let status = ask!(self, "Status (1 = active, 2 = retired): ");

        let result = self.library.register_visitor(&RegisterVisitor {
            name,
            species,
            other_species,
            status,
        });
        match self.report(result)? {
            Some(visitor) => self.show(&CreateResult::new(visitor).to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn list_visitors(&mut self) -> Result<Flow> {
        let result = self.library.list_visitors();
        match self.report(result)? {
            Some(visitors) => self.show(&Visitors(visitors).to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn find_visitor(&mut self) -> Result<Flow> {
        let id = ask!(self, "Enter visitor ID: ");
        let result = self.library.find_visitor(&id);
        match self.report(result)? {
            Some(visitor) => self.show(&visitor.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn toggle_visitor_status(&mut self) -> Result<Flow> {
        let id = ask!(self, "Enter visitor ID to update status: ");
        let result = self.library.find_visitor(&id);
        let Some(visitor) = self.report(result)? else {
            return Ok(Flow::Stay);
        };

        let fallback = if visitor.status_kind().and_then(VisitorStatus::toggled).is_none() {
            Some(ask!(
                self,
                "Current status is not active/retired. Set to (1) active or (2) retired: "
            ))
        } else {
            None
        };

        let result = self
            .library
            .toggle_visitor_status(&ToggleVisitorStatus { id, fallback });
        match self.report(result)? {
            Some(updated) => self.show(&updated.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn delete_visitor(&mut self) -> Result<Flow> {
        let id = ask!(self, "Enter visitor ID to delete: ");
        let result = self.library.find_visitor(&id);
        if self.report(result)?.is_none() {
            return Ok(Flow::Stay);
        }

        self.console.say("Choose delete option:")?;
        self.console.say("A - Remove row permanently")?;
        self.console.say("B - Mark as deleted (status = deleted)")?;
        let mode = ask!(self, "Option (A/B): ");

        let result = self
            .library
            .delete_visitor(&DeleteRecord { key: id, mode });
        match self.report(result)? {
            Some(deleted) => self.show(&deleted.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn visitor_statistics(&mut self) -> Result<Flow> {
        let result = self.library.visitor_statistics();
        match self.report(result)? {
            Some(stats) => self.show(&stats.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    // ------------------------------------------------------------------
    // Artifacts
    // ------------------------------------------------------------------

    fn register_artifact(&mut self) -> Result<Flow> {
        let code = ask!(self, "Code (leave empty to auto-generate): ");
        if !code.is_empty() {
            let result = self.library.ensure_artifact_code_free(&code);
            if self.report(result)?.is_none() {
                return Ok(Flow::Stay);
            }
        }
        let description = ask!(self, "Description: ");
        self.print_options::<Rarity>("Rarity options:")?;
        let rarity = ask!(self, "Select rarity (1-4): ");
        self.print_options::<ArtifactStatus>("Status options:")?;
        let status = ask!(self, "Select status (1-3): ");

        let result = self.library.register_artifact(&RegisterArtifact {
            code: Some(code),
            description,
            rarity,
            status,
        });
        match self.report(result)? {
            Some(artifact) => self.show(&CreateResult::new(artifact).to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn list_artifacts(&mut self) -> Result<Flow> {
        let result = self.library.list_artifacts();
        match self.report(result)? {
            Some(artifacts) => self.show(&Artifacts(artifacts).to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn find_artifact(&mut self) -> Result<Flow> {
        let code = ask!(self, "Enter artifact code: ");
        let result = self.library.find_artifact(&code);
        match self.report(result)? {
            Some(artifact) => self.show(&artifact.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn classify_artifacts(&mut self) -> Result<Flow> {
        self.console.say("\nRarity mapping:")?;
        self.console.say(&format!("  {}", Rarity::menu_labels()))?;
        self.console.say("Choice mapping for each rarity:")?;
        self.console.say("  1 = include, 2 = exclude\n")?;
        let rules = ask!(self, "Enter pairs separated by commas (e.g. 1=1,2=2,3=1,4=2): ");

        let result = self.library.classify_artifacts(&rules);
        match self.report(result)? {
            Some(classified) => self.show(&classified.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn artifact_statistics(&mut self) -> Result<Flow> {
        let result = self.library.artifact_statistics();
        match self.report(result)? {
            Some(stats) => self.show(&stats.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn delete_artifact(&mut self) -> Result<Flow> {
        let code = ask!(self, "Enter artifact code to delete: ");
        let result = self.library.find_artifact(&code);
        if self.report(result)?.is_none() {
            return Ok(Flow::Stay);
        }

        self.console.say("Choose delete option:")?;
        self.console.say("A - Remove row permanently")?;
        self.console.say("B - Mark as Destroyed (status = Destroyed)")?;
        let mode = ask!(self, "Option (A/B): ");

        let result = self
            .library
            .delete_artifact(&DeleteRecord { key: code, mode });
        match self.report(result)? {
            Some(deleted) => self.show(&deleted.to_string()),
            None => Ok(Flow::Stay),
        }
    }

    fn reclassify_artifact(&mut self) -> Result<Flow> {
        let code = ask!(self, "Enter artifact code to update: ");
        let result = self.library.find_artifact(&code);
        if self.report(result)?.is_none() {
            return Ok(Flow::Stay);
        }

        let rarity = ask!(self, "New rarity (1-4, empty to keep): ");
        let status = ask!(self, "New status (1-3, empty to keep): ");
        let keep_empty = |answer: String| (!answer.is_empty()).then_some(answer);

        let result = self.library.reclassify_artifact(&UpdateArtifact {
            code,
            rarity: keep_empty(rarity),
            status: keep_empty(status),
        });
        match self.report(result)? {
            Some(updated) => self.show(&updated.to_string()),
            None => Ok(Flow::Stay),
        }
    }
}
