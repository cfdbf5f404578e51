use std::process;

use npmluau::cli::{Args, Command};

fn main() {
    let args = Args::parse_args();

    let command = Command::from_args(args);

    let exit_code = command.run();

    process::exit(exit_code);
}
