use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{InputMode, InputSource};
use crate::cli::help;
use crate::command::Command;
use crate::session::SessionView;

/// Maps one typed line to a command. Matching ignores case and surrounding
/// whitespace; an empty line means `enter`. With an empty catalog only quit
/// and help are understood.
pub fn translate_line(line: &str, catalog_empty: bool) -> Command {
    let input = line.trim().to_lowercase();
    let command = match input.as_str() {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "help" | "h" | "?" => Some(Command::Help),
        "" | "enter" | "e" => Some(Command::Instantiate {
            with_date_prefix: true,
        }),
        "copy" | "c" => Some(Command::Instantiate {
            with_date_prefix: false,
        }),
        "up" | "u" => Some(Command::MoveUp),
        "down" | "d" => Some(Command::MoveDown),
        // Too large for usize is out of range anyway.
        digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
            Some(Command::JumpTo(digits.parse().unwrap_or(usize::MAX)))
        }
        _ => None,
    };
    match command {
        Some(command) if !(catalog_empty && command.needs_templates()) => command,
        _ => Command::Unknown(input),
    }
}

/// Typed-command strategy for terminals without single-key capture.
pub struct LineInput<R, W> {
    reader: R,
    out: W,
}

impl LineInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn mode(&self) -> InputMode {
        InputMode::Line
    }

    fn next_command(&mut self, view: &SessionView<'_>) -> io::Result<Option<Command>> {
        match view.selected {
            Some(selected) if !view.is_empty() => {
                writeln!(self.out, "{}", help::command_summary(view.names.len()))?;
                write!(self.out, "Command [current: {}]: ", selected + 1)?;
            }
            _ => write!(self.out, "Command (q=quit): ")?,
        }
        self.out.flush()?;

        let Some(line) = self.read_line()? else {
            tracing::debug!("input closed");
            return Ok(Some(Command::Quit));
        };
        Ok(Some(translate_line(&line, view.is_empty())))
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        write!(self.out, "\nPress Enter to continue...")?;
        self.out.flush()?;
        self.read_line().map(|_| ())
    }
}
