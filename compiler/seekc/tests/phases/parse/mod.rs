//! Lexer and parser behaviour observed through the driver.

mod lexer;
mod parser;
