use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::Command;

/// View or edit the YAML configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let config = Config::load();
            println!("📄 Current configuration:");
            println!(
                "{}",
                serde_yaml::to_string(&config)
                    .map_err(|e| AppError::Config(format!("cannot render config: {e}")))?
            );
        }

        if *edit_config {
            let path = Config::config_file();

            if !path.exists() {
                return Err(AppError::Config(format!(
                    "No configuration file at {}. Run 'shiftledger init' first.",
                    path.display()
                )));
            }

            let chosen = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .or_else(|| std::env::var("VISUAL").ok())
                .unwrap_or_else(|| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let status = Command::new(&chosen).arg(&path).status()?;

            if !status.success() {
                return Err(AppError::Config(format!(
                    "Editor '{}' exited with an error",
                    chosen
                )));
            }
        }
    }

    Ok(())
}
