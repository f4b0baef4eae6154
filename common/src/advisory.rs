//! Tone of a user-facing advisory banner.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    Success,
    Warning,
    Error,
}
