use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::ResetColor,
    terminal::{Clear, ClearType},
};

use crate::cli::help;
use crate::cli::input::{select_input, InputSource};
use crate::cli::output::{write_message, MessageKind};
use crate::cli::ui::{draw_frame, UiStyle};
use crate::config::Settings;
use crate::errors::{Result, TempletError};
use crate::instantiate::Workspace;
use crate::session::{Outcome, Session};
use crate::time::SystemClock;

/// How an interactive session ended.
#[derive(Debug)]
pub enum SessionEnd {
    Quit,
    Created(String),
    Failed(TempletError),
}

/// Draw, read one input event, apply it; repeat until quit or an
/// instantiation attempt.
pub fn run_session<I, W>(
    session: &mut Session,
    input: &mut I,
    out: &mut W,
    style: &UiStyle,
) -> io::Result<SessionEnd>
where
    I: InputSource + ?Sized,
    W: Write,
{
    loop {
        draw_frame(out, &session.view(), input.mode(), style)?;
        let Some(command) = input.next_command(&session.view())? else {
            continue;
        };

        match session.apply(command) {
            Outcome::Continue => {}
            Outcome::ShowHelp => {
                help::write_help(out, style)?;
                out.flush()?;
                input.acknowledge()?;
            }
            Outcome::Unrecognized(text) => {
                for line in help::unknown_hint(&text, session.catalog().len()) {
                    writeln!(out, "{}", style.dim(&line))?;
                }
                out.flush()?;
                input.acknowledge()?;
            }
            Outcome::Quit => return Ok(SessionEnd::Quit),
            Outcome::Created(filename) => return Ok(SessionEnd::Created(filename)),
            Outcome::Failed(err) => return Ok(SessionEnd::Failed(err)),
        }
    }
}

/// Clears the frame and prints the final result.
pub fn report<W: Write>(out: &mut W, end: &SessionEnd, style: &UiStyle) -> io::Result<()> {
    match end {
        SessionEnd::Quit => {}
        SessionEnd::Created(filename) => {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            write_message(
                out,
                MessageKind::Success,
                format!("Created: {}", style.bold(filename)),
                style,
            )?;
        }
        SessionEnd::Failed(err) => {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            write_message(
                out,
                MessageKind::Error,
                format!("Could not create file: {err}"),
                style,
            )?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        let _ = execute!(io::stdout(), ResetColor);
        println!();
        std::process::exit(0);
    });
    if let Err(err) = installed {
        tracing::warn!(error = %err, "could not install interrupt handler");
    }
}

/// Runs one interactive session in the current directory.
pub fn run_cli() -> Result<SessionEnd> {
    let settings = Settings::from_env()?;
    install_interrupt_handler();

    let workspace = Workspace::new(&settings.template_dir, &settings.work_dir);
    let mut session = Session::open(workspace, Box::new(SystemClock))?;
    let style = UiStyle::detect(settings.color);
    let (mut input, notice) = select_input(settings.input);
    if let Some(notice) = notice {
        session.set_status(notice);
    }
    tracing::debug!(mode = ?input.mode(), templates = session.catalog().len(), "session started");

    let mut stdout = io::stdout();
    let end = run_session(&mut session, input.as_mut(), &mut stdout, &style)?;
    tracing::debug!(?end, "session finished");
    report(&mut stdout, &end, &style)?;
    Ok(end)
}
