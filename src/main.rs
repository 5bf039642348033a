use envbuilder::{
    cli::{get_args, get_log_level_from_verbose, run, RunOutcome},
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    let lvl = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    match run(args) {
        Ok(RunOutcome::Written { saved: false, .. }) => std::process::exit(exit_codes::FAILURE),
        Ok(_) => std::process::exit(exit_codes::SUCCESS),
        Err(err) => default_error_handler(err),
    }
}
