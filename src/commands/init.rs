use std::io::{self, Write};

use crate::config::{Config, Credentials};
use crate::error::{AtlasError, Result};

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Atlas Projects Configuration");
    println!("============================\n");
    println!("Create an API key under Organization Access Manager > API Keys.\n");

    let config = Config {
        public_key: non_empty(prompt("Public key: ")?),
        private_key: non_empty(prompt("Private key: ")?),
        org_id: non_empty(prompt("Organization ID: ")?),
        ..Config::default()
    };

    let missing = Credentials {
        public_key: config.public_key.clone().unwrap_or_default(),
        private_key: config.private_key.clone().unwrap_or_default(),
        org_id: config.org_id.clone().unwrap_or_default(),
    }
    .missing();
    if !missing.is_empty() {
        return Err(AtlasError::MissingCredentials(missing));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AtlasError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let contents = toml::to_string(&config)?;
    std::fs::write(&config_path, contents).map_err(|e| AtlasError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("Run 'atlas-projects' to open the project browser.");

    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
