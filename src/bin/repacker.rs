mod cli_util;

use clap::Parser;
use comics_repacker::error::RepackerError;

use crate::cli_util::Args;

fn main() -> Result<(), RepackerError> {
    let args = Args::parse();
    args.execute()
}
