use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::cli::input::InputMode;
use crate::cli::ui::style::UiStyle;
use crate::session::SessionView;
use crate::utils::paths::display_path;

pub const FRAME_WIDTH: usize = 44;
pub const VIEWPORT_HEIGHT: usize = 10;
const INNER_WIDTH: usize = FRAME_WIDTH - 2;
const CONTEXT_ABOVE: usize = 4;

const RAW_CONTROLS: &str = "↑↓ Move │ Enter: +Date │ c: Copy │ q: Quit";
const LINE_CONTROLS: &str = "Type commands below (help shown)";
const EMPTY_CONTROLS: &str = "q: Quit";

/// First catalog index shown in the viewport, keeping a few entries of
/// context above the selection.
pub fn viewport_start(selected: usize, len: usize, height: usize) -> usize {
    let upper = len.saturating_sub(height);
    selected.saturating_sub(CONTEXT_ABOVE).min(upper)
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn fit(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad_right(text: &str, width: usize) -> String {
    let text = fit(text, width);
    let fill = width.saturating_sub(width_of(&text));
    format!("{text}{}", " ".repeat(fill))
}

fn centered(text: &str, width: usize) -> (String, String, String) {
    let text = fit(text, width);
    let left = (width - width_of(&text)) / 2;
    let right = width - left - width_of(&text);
    (" ".repeat(left), text, " ".repeat(right))
}

struct FrameBuilder<'s> {
    style: &'s UiStyle,
    lines: Vec<String>,
}

impl<'s> FrameBuilder<'s> {
    fn new(style: &'s UiStyle) -> Self {
        Self {
            style,
            lines: Vec::new(),
        }
    }

    fn rule(&mut self, left: char, right: char) {
        let line = format!("{left}{}{right}", "═".repeat(INNER_WIDTH));
        self.lines.push(self.style.border(&line));
    }

    fn row(&mut self, styled: String) {
        let side = self.style.border("║");
        self.lines.push(format!("{side}{styled}{side}"));
    }

    fn plain_row(&mut self, text: &str) {
        self.row(pad_right(text, INNER_WIDTH));
    }

    fn centered_row(&mut self, text: &str, paint: impl Fn(&UiStyle, &str) -> String) {
        let (left, body, right) = centered(text, INNER_WIDTH);
        let painted = paint(self.style, &body);
        self.row(format!("{left}{painted}{right}"));
    }
}

/// Lines of one frame, top border first. Pure so tests can inspect layout.
pub fn render_frame(view: &SessionView<'_>, mode: InputMode, style: &UiStyle) -> Vec<String> {
    let mut frame = FrameBuilder::new(style);
    let dir = display_path(view.template_dir);

    frame.rule('╔', '╗');
    let title = match mode {
        InputMode::Raw => "templet [fancy]",
        InputMode::Line => "templet [not-fancy]",
    };
    frame.centered_row(title, UiStyle::title);
    frame.rule('╠', '╣');
    frame.centered_row(&format!("Templates: {dir}"), UiStyle::dim);
    frame.rule('╠', '╣');

    match view.selected {
        Some(selected) if !view.is_empty() => {
            let start = viewport_start(selected, view.names.len(), VIEWPORT_HEIGHT);
            for offset in 0..VIEWPORT_HEIGHT {
                let index = start + offset;
                let Some(name) = view.names.get(index) else {
                    frame.plain_row("");
                    continue;
                };
                let is_selected = index == selected;
                let text = match (mode, is_selected) {
                    (InputMode::Raw, true) => format!("  → {name}"),
                    (InputMode::Raw, false) => format!("    {name}"),
                    (InputMode::Line, true) => format!(" [{}] {name}", index + 1),
                    (InputMode::Line, false) => format!("  [{}] {name}", index + 1),
                };
                let padded = pad_right(&text, INNER_WIDTH);
                if is_selected {
                    frame.row(style.highlight(&padded));
                } else {
                    frame.row(padded);
                }
            }
        }
        _ => {
            let empty = [
                String::new(),
                "     No templates found!".to_string(),
                String::new(),
                format!("  Add files to: {dir}"),
                String::new(),
                "  Supported: .txt .md .py .yml .json".to_string(),
                "  .sh .html .toml .env Dockerfile ...".to_string(),
            ];
            for offset in 0..VIEWPORT_HEIGHT {
                frame.plain_row(empty.get(offset).map(String::as_str).unwrap_or(""));
            }
        }
    }

    frame.rule('╠', '╣');
    let controls = match (view.is_empty(), mode) {
        (true, _) => EMPTY_CONTROLS,
        (false, InputMode::Raw) => RAW_CONTROLS,
        (false, InputMode::Line) => LINE_CONTROLS,
    };
    frame.centered_row(controls, UiStyle::dim);
    frame.rule('╚', '╝');

    let mut lines = frame.lines;
    if let Some(status) = view.status {
        lines.push(style.accent(status));
    }
    lines
}

/// Clears the screen and draws the current frame.
pub fn draw_frame<W: Write>(
    out: &mut W,
    view: &SessionView<'_>,
    mode: InputMode,
    style: &UiStyle,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in render_frame(view, mode, style) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
