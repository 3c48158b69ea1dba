//! Check command handler.

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::CheckArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, masthead, render_failures};
use crate::lint::{RunContext, lint_source};

/// Exit status of a strict run that found bad links.
pub const STRICT_FAILURE_EXIT: u8 = 3;

pub fn handle_check(args: &CheckArgs, config: &Config, verbose: bool) -> Result<ExitCode> {
    let source = config.source_dir(args.source.as_ref());
    let manifest = config.manifest_name(args.summary.as_deref());
    let strict = config.strict(args.strict);

    if let OutputFormat::Human = args.format {
        println!("{}", masthead(verbose));
    }

    // 1. Run the lint; configuration errors end the run without a report
    let mut ctx = RunContext::new();
    let report = match lint_source(&source, &manifest, &mut ctx) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {}", err);
            return Ok(ExitCode::from(err.exit_code()));
        }
    };

    // 2. Display results
    match args.format {
        OutputFormat::Human => {
            if report.has_failures() {
                print!("{}", render_failures(&report));
            } else {
                println!("All links OK.");
            }
            println!(
                "\nOperation completed in {:.2} seconds",
                ctx.elapsed().as_secs_f64()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&report))?);
        }
    }

    // 3. Exit code: bad links only fail strict runs
    if strict && report.has_failures() {
        return Ok(ExitCode::from(STRICT_FAILURE_EXIT));
    }
    Ok(ExitCode::SUCCESS)
}
