use std::path::PathBuf;

use clap::ArgMatches;

pub const DETAILS: u8 = 1;

/// Configuration of input and output, distinct from the configuration of a solve.
#[derive(Clone)]
pub struct ConfigIO {
    pub paths: Vec<PathBuf>,
    pub detail: u8,
    pub show_model: bool,
    pub write_summary: bool,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            paths: Vec::default(),
            detail: DETAILS,
            show_model: false,
            write_summary: true,
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = ConfigIO::default();

        if let Ok(Some(paths)) = args.try_get_many::<PathBuf>("paths") {
            the_config.paths = paths.cloned().collect();
        }

        if let Ok(Some(detail)) = args.try_get_one::<u8>("detail") {
            the_config.detail = *detail;
        }

        if let Ok(Some(true)) = args.try_get_one::<bool>("model") {
            the_config.show_model = true;
        }

        if let Ok(Some(true)) = args.try_get_one::<bool>("no_summary") {
            the_config.write_summary = false;
        }

        the_config
    }

    /// The folder to benchmark, if the only path is a folder.
    pub fn batch_folder(&self) -> Option<&PathBuf> {
        match self.paths.as_slice() {
            [path] if path.is_dir() => Some(path),
            _ => None,
        }
    }
}
