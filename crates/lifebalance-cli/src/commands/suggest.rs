use clap::Subcommand;
use lifebalance_core::{HackCategory, SuggestionStatus, TimeBudget};

#[derive(Subcommand)]
pub enum SuggestAction {
    /// Ask for meal ideas from the ingredients on hand
    Meal {
        /// Comma-separated ingredients, e.g. "eggs, kale"
        ingredients: String,
        /// Cooking time budget: "15 mins", "30 mins", "45 mins", "1 hour+"
        #[arg(long, default_value = "30 mins")]
        time: String,
    },
    /// Ask for a life hack
    Hack {
        /// Category label, e.g. "Morning Routine"; defaults to the first
        #[arg(long)]
        category: Option<String>,
    },
    /// List the available hack categories and time budgets
    Options,
}

pub fn run(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_async(action))
}

async fn run_async(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SuggestAction::Meal { ingredients, time } => {
            let budget = TimeBudget::from_label(&time)
                .ok_or_else(|| format!("unknown time budget: {time}"))?;
            let mut session = super::open_session()?;

            if session.request_meal(&ingredients, budget).await?.is_none() {
                eprintln!("ingredients are empty; nothing requested");
                return Ok(());
            }
            match session.meal_status() {
                SuggestionStatus::Ready => {
                    println!("{}", session.meal_result().unwrap_or_default());
                    Ok(())
                }
                _ => {
                    tracing::warn!("meal suggestion request failed");
                    Err("suggestion request failed; try again".into())
                }
            }
        }
        SuggestAction::Hack { category } => {
            let category = match category {
                None => HackCategory::default(),
                Some(label) => HackCategory::from_label(&label)
                    .ok_or_else(|| format!("unknown hack category: {label}"))?,
            };
            let mut session = super::open_session()?;

            session.request_hack(category).await?;
            match session.hack_status() {
                SuggestionStatus::Ready => {
                    println!("{}", session.hack_result().unwrap_or_default());
                    Ok(())
                }
                _ => {
                    tracing::warn!("life hack request failed");
                    Err("suggestion request failed; try again".into())
                }
            }
        }
        SuggestAction::Options => {
            for category in HackCategory::ALL {
                println!("category: {category}");
            }
            for budget in TimeBudget::ALL {
                println!("time: {budget}");
            }
            Ok(())
        }
    }
}
