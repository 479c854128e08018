pub mod cli;
pub mod commands;
pub mod gene;
pub mod layout;
pub mod motif;
pub mod utils;
