//! Config command - show and change user configuration

use taskscribe::config::GlobalConfig;
use taskscribe::output::{OperationResult, OutputMode};

use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(action: ConfigAction, config: GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => show(&config, mode),
        ConfigAction::Set { key, value } => set(config, &key, &value, mode),
        ConfigAction::Path => {
            let path = GlobalConfig::config_path();
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
            Ok(())
        },
    }
}

fn show(config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("# {}", GlobalConfig::config_path().display());
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}

fn set(mut config: GlobalConfig, key: &str, value: &str, mode: OutputMode) -> anyhow::Result<()> {
    // Start from what is on disk so a broken file is reported, not overwritten
    if GlobalConfig::config_path().exists() {
        config = GlobalConfig::try_load()?;
    }

    config.set(key, value)?;
    let path = config.save()?;

    OperationResult {
        success: true,
        message: format!("Set {key} = {value} in {}", path.display()),
    }
    .render(mode);
    Ok(())
}
