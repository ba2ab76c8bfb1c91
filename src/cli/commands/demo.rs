//! Demo command implementation

use super::run::{execute, progress_level};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::DemoArgs;
use crate::config::template_spec;

pub fn run_demo(args: DemoArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        progress_level(args.format),
        &format!("Evaluar: built-in {} experiment", args.template),
    );

    let mut spec = template_spec(args.template);
    if let Some(dir) = args.output_dir {
        spec.output.dir = dir;
    }
    if args.no_plots {
        spec.output.plots.clear();
    }

    execute(&spec, args.format, level)
}
