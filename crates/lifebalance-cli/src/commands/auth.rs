use clap::Subcommand;
use lifebalance_core::GeminiService;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the Gemini API key in the OS keyring
    SetKey { key: String },
    /// Show whether a key is stored
    Status,
    /// Remove the stored key
    Clear,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::SetKey { key } => {
            GeminiService::set_api_key(&key)?;
            println!("API key stored.");
        }
        AuthAction::Status => {
            if GeminiService::has_stored_key() {
                println!("Gemini: configured");
            } else {
                println!("Gemini: no API key stored");
            }
        }
        AuthAction::Clear => {
            GeminiService::clear_api_key()?;
            println!("API key removed.");
        }
    }
    Ok(())
}
