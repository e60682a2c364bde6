use clap::Subcommand;
use lifebalance_core::hydration::DISPLAY_GLYPHS;
use serde_json::json;

#[derive(Subcommand)]
pub enum WaterAction {
    /// Log a glass of water
    Add,
    /// Take one back
    Sub,
    /// Print today's count
    Status,
}

pub fn run(action: WaterAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session()?;

    match action {
        WaterAction::Add => {
            let event = session.adjust_hydration(1)?;
            super::print_event(&event)?;
        }
        WaterAction::Sub => {
            let event = session.adjust_hydration(-1)?;
            super::print_event(&event)?;
        }
        WaterAction::Status => {
            let count = session.hydration_count();
            let filled = count.min(DISPLAY_GLYPHS) as usize;
            let glyphs = format!(
                "{}{}",
                "●".repeat(filled),
                "○".repeat(DISPLAY_GLYPHS as usize - filled)
            );
            let status = json!({
                "count": count,
                "goal": session.hydration_goal(),
                "glyphs": glyphs,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
