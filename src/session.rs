//! Explicit per-run state: the catalog, the highlighted entry, the
//! directories involved and the clock used for dates.

use std::path::Path;

use crate::{
    catalog::{self, Catalog},
    command::Command,
    errors::{Result, TempletError},
    instantiate::{self, InstantiationRequest, Workspace},
    selection::Selection,
    time::Clock,
    utils::paths,
};

/// What the main loop should do after a command was applied.
#[derive(Debug)]
pub enum Outcome {
    Continue,
    ShowHelp,
    Unrecognized(String),
    Quit,
    Created(String),
    Failed(TempletError),
}

/// Read-only snapshot handed to the renderer and the input strategies.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub names: &'a [String],
    pub selected: Option<usize>,
    pub template_dir: &'a Path,
    pub status: Option<&'a str>,
}

impl SessionView<'_> {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub struct Session {
    catalog: Catalog,
    selection: Selection,
    workspace: Workspace,
    clock: Box<dyn Clock>,
    status: Option<String>,
}

impl Session {
    pub fn new(catalog: Catalog, workspace: Workspace, clock: Box<dyn Clock>) -> Self {
        let selection = Selection::new(catalog.len());
        Self {
            catalog,
            selection,
            workspace,
            clock,
            status: None,
        }
    }

    /// Creates the template directory if needed and loads the catalog.
    pub fn open(workspace: Workspace, clock: Box<dyn Clock>) -> Result<Self> {
        paths::ensure_template_dir(&workspace.template_dir)?;
        let catalog = catalog::list_templates(&workspace.template_dir)?;
        Ok(Self::new(catalog, workspace, clock))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            names: self.catalog.names(),
            selected: self.selection.current(),
            template_dir: &self.workspace.template_dir,
            status: self.status.as_deref(),
        }
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        if command.needs_templates() && self.catalog.is_empty() {
            return Outcome::Continue;
        }
        match command {
            Command::MoveUp => self.selection.move_up(),
            Command::MoveDown => self.selection.move_down(),
            Command::JumpTo(n) => {
                self.selection.jump_to(n);
            }
            Command::Instantiate { with_date_prefix } => {
                return self.instantiate_selected(with_date_prefix);
            }
            Command::Quit => return Outcome::Quit,
            Command::Help => return Outcome::ShowHelp,
            Command::Unknown(input) => return Outcome::Unrecognized(input),
        }
        Outcome::Continue
    }

    fn instantiate_selected(&self, with_date_prefix: bool) -> Outcome {
        let Some(template) = self
            .selection
            .current()
            .and_then(|index| self.catalog.get(index))
        else {
            return Outcome::Continue;
        };

        let request = InstantiationRequest::new(template, with_date_prefix);
        match instantiate::instantiate(&request, &self.workspace, self.clock.as_ref()) {
            Ok(filename) => Outcome::Created(filename),
            Err(err) => {
                tracing::warn!(template, error = %err, "instantiation failed");
                Outcome::Failed(err)
            }
        }
    }
}
