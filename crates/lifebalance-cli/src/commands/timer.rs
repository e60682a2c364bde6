use clap::Subcommand;
use lifebalance_core::TimerMode;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a live countdown in the foreground until it completes
    Run {
        /// "focus" or "break"
        #[arg(long, default_value = "focus")]
        mode: String,
        /// Override the countdown length in minutes
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Print the session's timer state as JSON
    Status,
}

fn parse_mode(label: &str) -> Result<TimerMode, Box<dyn std::error::Error>> {
    match label.to_ascii_lowercase().as_str() {
        "focus" => Ok(TimerMode::Focus),
        "break" => Ok(TimerMode::Break),
        other => Err(format!("unknown timer mode: {other}").into()),
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { mode, minutes } => {
            let mode = parse_mode(&mode)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_countdown(mode, minutes))
        }
        TimerAction::Status => {
            // Timer state is session-local and never persisted; status
            // shows the fresh session default.
            let session = super::open_session()?;
            super::print_event(&session.timer().snapshot())
        }
    }
}

async fn run_countdown(
    mode: TimerMode,
    minutes: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session()?;
    session.switch_mode(mode);
    if let Some(minutes) = minutes {
        session.reset_timer(minutes);
    }
    session.start_timer();

    eprintln!("{}", session.timer().format_remaining());
    while session.timer().running() {
        let completed = session.await_tick().await;
        eprintln!("{}", session.timer().format_remaining());
        if let Some(event) = completed {
            super::print_event(&event)?;
        }
    }
    Ok(())
}
