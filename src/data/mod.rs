pub mod clipboard;
pub mod gemini;
pub mod parser;
pub mod projects;
pub mod prompt;
pub mod store;
