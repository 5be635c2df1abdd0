//! Evaluation through the driver, plus the host-side helpers built on it.

mod board;
mod budget;
mod cli_options;
mod driver;
mod programs;
