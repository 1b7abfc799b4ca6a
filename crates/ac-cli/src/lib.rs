pub mod cleanup_worker;
pub mod commands;
pub mod output;
pub mod repl;
pub mod setup;
pub mod vocabulary;
