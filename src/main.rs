//! cpm's main application entry point.

use cpm::{
    cli::get_args, error::default_error_handler, logger::init_logger,
    prompt::DialoguerPrompter, runner::run,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    let prompt = DialoguerPrompter::new();
    if let Err(err) = run(args, &prompt) {
        default_error_handler(err);
    }
}
