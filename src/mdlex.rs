//! Main module for mdlex library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

#[cfg(test)]
pub mod testing;
