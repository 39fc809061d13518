use thiserror::Error;

/// Errors raised by a command against its interaction context.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command tried to respond after a response was already recorded.
    ///
    /// An interaction is answered by exactly one HTTP response; later
    /// messages must go through the webhook edit or follow-up endpoints.
    #[error("Interaction has already been responded to")]
    AlreadyResponded,

    /// The interaction carries no command data.
    #[error("Interaction is missing command data")]
    MissingData,
}
