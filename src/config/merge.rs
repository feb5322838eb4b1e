//! Apply CLI arguments on top of the loaded config

use crate::domain::Config;

/// Values given on the command line; `None` leaves the config value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub cutoff: Option<usize>,
    pub output_file: Option<String>,
    pub rank_tracking_output_file: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(cutoff) = overrides.cutoff {
        config.cutoff = cutoff;
    }
    if let Some(output) = overrides.output_file {
        config.output_file = output;
    }
    if let Some(output) = overrides.rank_tracking_output_file {
        config.rank_tracking_output_file = output;
    }
    config
}
