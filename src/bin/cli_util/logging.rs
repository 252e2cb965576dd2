use clap::ValueEnum;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Dependencies never log louder than this, whatever the verbosity.
const DEPENDENCY_CEILING: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn level(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Normal => LevelFilter::Error,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Trace,
        }
    }

    fn dependency_level(self) -> LevelFilter {
        self.level().min(DEPENDENCY_CEILING)
    }
}

/// Route `log` records to stderr: the repacker's own modules (library and
/// binary share the `comics_repacker` target prefix) at the requested
/// verbosity, third party crates capped at warnings.
pub fn init_logger(verbosity: Verbosity) -> Result<(), log::SetLoggerError> {
    SimpleLogger::new()
        .with_level(verbosity.dependency_level())
        .with_module_level("comics_repacker", verbosity.level())
        .without_timestamps()
        .init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(Verbosity::Quiet.level(), LevelFilter::Off);
        assert_eq!(Verbosity::Normal.level(), LevelFilter::Error);
        assert_eq!(Verbosity::Verbose.level(), LevelFilter::Info);
        assert_eq!(Verbosity::Debug.level(), LevelFilter::Trace);
    }

    #[test]
    fn dependencies_are_capped_at_warn() {
        assert_eq!(Verbosity::Debug.dependency_level(), LevelFilter::Warn);
        assert_eq!(Verbosity::Verbose.dependency_level(), LevelFilter::Warn);
        assert_eq!(Verbosity::Normal.dependency_level(), LevelFilter::Error);
        assert_eq!(Verbosity::Quiet.dependency_level(), LevelFilter::Off);
    }
}
