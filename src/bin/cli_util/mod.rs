mod logging;

use std::path::PathBuf;

use clap::Parser;
use log::info;

use comics_repacker::error::RepackerError;

use self::logging::{init_logger, Verbosity};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Repack multiple comic archives as single archive"
)]
pub struct Args {
    /// Comic archives (zip or rar) to unpack
    #[arg(required = true, num_args = 1..)]
    archives: Vec<PathBuf>,
    /// Output verbosity
    #[arg(short, long, default_value = "normal")]
    verbosity: Verbosity,
}

impl Args {
    pub fn execute(self) -> Result<(), RepackerError> {
        preamble(self.verbosity)?;

        info!("{} archive(s) given", self.archives.len());

        let report = comics_repacker::repack(&self.archives)?;

        info!(
            "Unpacked {} archive(s) into {}",
            report.extracted,
            report.workdir.display()
        );

        Ok(())
    }
}

fn preamble(verbosity: Verbosity) -> Result<(), RepackerError> {
    init_logger(verbosity)?;

    log::debug!("pid: {}", std::process::id());

    Ok(())
}
