use std::process::ExitCode;

fn main() -> ExitCode {
    match booklint::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
