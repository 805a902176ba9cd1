use std::process::ExitCode;

fn main() -> miette::Result<ExitCode> {
    golden_assert::cli::run()
}
