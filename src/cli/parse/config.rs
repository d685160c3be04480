use std::time::Duration;

use clap::ArgMatches;

use trio_sat::config::{Algorithm, Config};

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(algorithm)) = args.try_get_one::<Algorithm>("algorithm") {
        the_config.algorithm.value = *algorithm
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.time_limit.value = Duration::from_secs(*secs)
    };

    if let Ok(Some(millis)) = args.try_get_one::<u64>("grace") {
        if !the_config.grace.set(Duration::from_millis(*millis)) {
            let (min, max) = the_config.grace.min_max();
            println!("c Grace must be between {min:?} and {max:?}, using {:?}", the_config.grace.value);
        }
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_pure") {
        the_config.pure_literals.value = false
    };

    the_config
}
