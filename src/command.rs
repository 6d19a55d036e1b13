/// Actions the main loop understands, produced by either input strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    /// 1-based catalog position.
    JumpTo(usize),
    Instantiate { with_date_prefix: bool },
    Quit,
    Help,
    /// Unrecognised input, kept for the hint.
    Unknown(String),
}

impl Command {
    /// Commands that only make sense with at least one template listed.
    pub fn needs_templates(&self) -> bool {
        matches!(
            self,
            Command::MoveUp | Command::MoveDown | Command::JumpTo(_) | Command::Instantiate { .. }
        )
    }
}
