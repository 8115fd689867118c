//! Terminal entry point: run the license check and gate on the result.
//!
//! Exits 0 when the license is valid and the application may start, 1
//! otherwise (after waiting for a keypress so the message stays visible).

use std::io::{self, Write};
use std::process::ExitCode;

use mindset_license::{check_license, LicenseValidator, ValidatorConfig};

/// Interactive prompt used when no saved license is valid.
fn prompt_for_key() -> io::Result<String> {
    println!("=== VALIDATION DE LICENCE MINDSET TRADING ===");
    println!("Veuillez entrer votre clé de licence:");
    print!("Clé de licence: ");
    io::stdout().flush()?;

    let mut key = String::new();
    io::stdin().read_line(&mut key)?;
    Ok(key)
}

fn wait_for_enter() {
    println!("Appuyez sur Entrée pour quitter...");
    let mut discard = String::new();
    let _ = io::stdin().read_line(&mut discard);
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let validator = match ValidatorConfig::from_home().and_then(LicenseValidator::new) {
        Ok(validator) => validator,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = check_license(&validator, prompt_for_key).await;

    if outcome.ok {
        println!("✅ {}", outcome.message);
        println!("L'application peut démarrer.");
        ExitCode::SUCCESS
    } else {
        println!("❌ {}", outcome.message);
        println!("L'application ne peut pas démarrer sans licence valide.");
        wait_for_enter();
        ExitCode::FAILURE
    }
}
