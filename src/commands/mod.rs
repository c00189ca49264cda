//! Command execution for docqa

pub mod ask;

use std::time::Instant;

use crate::cli::Cli;
use docqa_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    ask::execute(cli, start)
}
