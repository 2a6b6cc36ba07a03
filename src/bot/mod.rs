/// Command definitions and per-command handlers
pub mod commands;
/// Update routing
pub mod handlers;
/// MarkdownV2 reply texts
pub mod replies;
