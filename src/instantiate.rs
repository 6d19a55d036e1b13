//! Creation of a working file from a template.
//!
//! The destination name is the template name, optionally prefixed with the
//! local date (`2024-03-01-notes.md`). When that name is taken in the working
//! directory a numeric suffix is inserted before the extension, always counted
//! from the original candidate (`notes-1.md`, `notes-2.md`, never
//! `notes-1-1.md`). Prose templates created with a date prefix get a short
//! header naming the template and the creation time.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::{Result, TempletError},
    time::Clock,
};

/// Extensions (lowercase, with the dot) that receive the metadata header.
pub const PROSE_EXTENSIONS: &[&str] = &[".txt", ".md", ".markdown", ".mdown", ".mkd"];

const DATE_FORMAT: &str = "%Y-%m-%d";
const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d • %H:%M:%S";

/// Directories involved in one session: where templates live and where new
/// files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub template_dir: PathBuf,
    pub work_dir: PathBuf,
}

impl Workspace {
    pub fn new(template_dir: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            work_dir: work_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantiationRequest {
    pub template: String,
    pub add_date_prefix: bool,
}

impl InstantiationRequest {
    pub fn new(template: impl Into<String>, add_date_prefix: bool) -> Self {
        Self {
            template: template.into(),
            add_date_prefix,
        }
    }
}

/// Splits on the last `.`, keeping the dot with the extension.
/// `notes.md` becomes `("notes", ".md")`, `Makefile` becomes `("Makefile", "")`.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Destination name before collision handling.
pub fn candidate_name(template: &str, add_date_prefix: bool, clock: &dyn Clock) -> String {
    let (base, extension) = split_name(template);
    if add_date_prefix {
        format!("{}-{base}{extension}", clock.today().format(DATE_FORMAT))
    } else {
        format!("{base}{extension}")
    }
}

/// Name for the `counter`-th collision of `candidate`.
pub fn suffixed_name(candidate: &str, counter: u32) -> String {
    let (stem, extension) = split_name(candidate);
    format!("{stem}-{counter}{extension}")
}

/// First name derived from `candidate` that does not exist in `dir`.
pub fn resolve_collision(dir: &Path, candidate: &str) -> String {
    let mut name = candidate.to_string();
    let mut counter = 1;
    while dir.join(&name).exists() {
        name = suffixed_name(candidate, counter);
        counter += 1;
    }
    if name != candidate {
        tracing::debug!(candidate, resolved = %name, "destination name already taken");
    }
    name
}

pub fn is_prose_extension(extension: &str) -> bool {
    let lowered = extension.to_ascii_lowercase();
    PROSE_EXTENSIONS.contains(&lowered.as_str())
}

pub fn render_header(template: &str, clock: &dyn Clock) -> String {
    format!(
        "# ✦ Template: {template}\n### 📅 {}\n---\n\n",
        clock.now().format(HEADER_TIMESTAMP_FORMAT)
    )
}

/// Final file content for `template`.
pub fn render_content(
    template: &str,
    content: &str,
    add_date_prefix: bool,
    clock: &dyn Clock,
) -> String {
    let (_, extension) = split_name(template);
    if add_date_prefix && is_prose_extension(extension) {
        let mut rendered = render_header(template, clock);
        rendered.push_str(content);
        rendered
    } else {
        content.to_string()
    }
}

/// Reads the template, writes the new file into the working directory and
/// returns the name actually written.
pub fn instantiate(
    request: &InstantiationRequest,
    workspace: &Workspace,
    clock: &dyn Clock,
) -> Result<String> {
    let source = workspace.template_dir.join(&request.template);
    let content = fs::read_to_string(&source).map_err(|source| TempletError::Read {
        template: request.template.clone(),
        source,
    })?;

    let candidate = candidate_name(&request.template, request.add_date_prefix, clock);
    let filename = resolve_collision(&workspace.work_dir, &candidate);
    let rendered = render_content(
        &request.template,
        &content,
        request.add_date_prefix,
        clock,
    );

    let destination = workspace.work_dir.join(&filename);
    fs::write(&destination, rendered).map_err(|source| TempletError::Write {
        path: destination.clone(),
        source,
    })?;

    tracing::info!(
        template = %request.template,
        file = %filename,
        dated = request.add_date_prefix,
        "created file from template"
    );
    Ok(filename)
}
