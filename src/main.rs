use std::process;

use clap::{CommandFactory, Parser};

use checkfilechange::{perform_check, CheckConfig, Runner, ServiceState};

fn main() {
    let config = match CheckConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // clap stops rendering its own --help tip once the builtin help
            // action is disabled, so the hint is printed here
            print!("{}", err.render());
            println!("Try 'checkfilechange --help' for more information.");
            process::exit(ServiceState::Unknown.exit_code());
        }
    };

    if config.help {
        print_help_and_exit();
    }

    // we need a file to check!
    let Some(path) = config.file.clone() else {
        print_help_and_exit();
    };

    Runner::new()
        .on_error(|_| ServiceState::Unknown)
        .safe_run(|| perform_check(&path, &config))
        .print_and_exit()
}

/// Help requests exit with the UNKNOWN service state, no check is performed.
fn print_help_and_exit() -> ! {
    print!("{}", CheckConfig::command().render_help());
    process::exit(ServiceState::Unknown.exit_code());
}
