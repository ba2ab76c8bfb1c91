//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::InitArgs;
use crate::config::template_yaml;

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let yaml = template_yaml(args.template).map_err(|e| format!("Template error: {e}"))?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            std::fs::write(path, &yaml)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote {} template to {}", args.template, path.display()),
            );
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
