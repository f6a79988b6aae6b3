/// User-facing reply formatting helpers
pub mod feedback;
/// Structured logging helpers
pub mod logging;
/// Birth date parsing and validation
pub mod validation;
/// Elapsed-week computation
pub mod weeks;
