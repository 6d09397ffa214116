use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, get_data_dir, Config};
use crate::history::{HistoryStore, JsonFileStore, UserRecord};
use crate::napfa::{standards_for, Gender, MAX_AGE, MIN_AGE};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Run the interactive init wizard: create the config file and the first
/// user profile.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("FitTrack Setup");
    println!("==============");
    println!();

    // 1. Profile
    let full_name = loop {
        let name = prompt("Full name: ")?;
        if !name.is_empty() {
            break name;
        }
        println!("  Name is required.");
    };

    let username_default = full_name
        .split_whitespace()
        .next()
        .unwrap_or("me")
        .to_lowercase();
    let username = prompt_with_default("Username", &username_default)?;

    let age: u8 = loop {
        let input = prompt_with_default("Age", "14")?;
        match input.parse::<u8>() {
            Ok(v) if (MIN_AGE..=MAX_AGE).contains(&v) => break v,
            Ok(_) => println!(
                "  Invalid: NAPFA standards cover ages {}-{}. Try again.",
                MIN_AGE, MAX_AGE
            ),
            Err(_) => println!("  Invalid: must be a number. Try again."),
        }
    };

    let gender = loop {
        let input = prompt_with_default("Gender (m/f)", "m")?.to_lowercase();
        match input.as_str() {
            "m" | "male" => break Gender::Male,
            "f" | "female" => break Gender::Female,
            _ => println!("  Invalid: enter 'm' or 'f'. Try again."),
        }
    };

    // Age was range-checked above; this ties the profile to a real table.
    standards_for(age, gender)?;

    // 2. Storage location
    println!();
    let data_dir_default = get_data_dir(&Config::default());
    let data_dir_str = prompt_with_default(
        "Where should user data be stored?",
        &data_dir_default.display().to_string(),
    )?;
    let data_dir = PathBuf::from(&data_dir_str);

    // 3. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        default_user: Some(username.clone()),
        data_dir: Some(data_dir.clone()),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    // 5. Create the profile, unless one is already there
    let store = JsonFileStore::new(data_dir);
    if store.load(&username)?.is_some() {
        println!();
        println!("Profile '{}' already exists, keeping it.", username);
    } else {
        store.save(&username, &UserRecord::new(full_name, age, gender))?;
        println!();
        println!("Profile '{}' created.", username);
    }

    println!("Config written to {}", config_path.display());
    println!("Run `fittrack napfa --help` to record your first test.");

    Ok(())
}
