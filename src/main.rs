// Mon Oct 19 2026 - Alex

use plugingen::{run_cli, utf8_args, Config, Streams};

fn main() {
    let config = Config::from_env();
    config.init_logging();

    let args = match utf8_args(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(arg) => {
            eprintln!("argument is not valid UTF-8: {:?}", arg);
            std::process::exit(1);
        }
    };

    log::debug!("Starting {} with {} argument(s)", config.version_output(), args.len());

    std::process::exit(run_cli(&config, &args, Streams::process()));
}
