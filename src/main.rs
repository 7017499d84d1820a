use najia::ui::output;
use std::process::ExitCode;

fn main() -> ExitCode {
    match najia::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
