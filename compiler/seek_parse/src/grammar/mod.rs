//! Grammar rules, one `impl Parser` block per area.

mod expr;
mod stmt;
