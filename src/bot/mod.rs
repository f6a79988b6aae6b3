/// Bot command definitions
pub mod commands;
/// Update handlers for commands, plain text, and callback queries
pub mod handlers;
