/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The tracking status text changed
    Changed,
    /// Accumulated errors reached the threshold
    Error,
}

impl Event {
    /// Embed color (decimal RGB)
    pub fn color(self) -> u32 {
        match self {
            Event::Changed => 8_247_894,
            Event::Error => 14_177_041,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Changed => write!(f, "changed"),
            Event::Error => write!(f, "error"),
        }
    }
}
