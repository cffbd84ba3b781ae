use std::process::ExitCode;

fn main() -> ExitCode {
    gridcolor::cli::run()
}
