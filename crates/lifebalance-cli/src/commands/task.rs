use clap::Subcommand;
use lifebalance_core::{TaskCategory, TaskFilter};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        text: String,
        /// Personal, Work, or Home
        #[arg(long, default_value = "Personal")]
        category: String,
    },
    /// List tasks as JSON, optionally filtered by category
    List {
        /// "all" or a category name
        #[arg(long)]
        filter: Option<String>,
    },
    /// Toggle completion for a task by id
    Toggle { id: String },
    /// Remove a task by id
    Remove { id: String },
}

fn parse_category(label: &str) -> Result<TaskCategory, Box<dyn std::error::Error>> {
    TaskCategory::from_label(label).ok_or_else(|| format!("unknown category: {label}").into())
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session()?;

    match action {
        TaskAction::Add { text, category } => {
            session.set_new_task_category(parse_category(&category)?);
            match session.add_task(&text)? {
                Some(event) => super::print_event(&event)?,
                None => eprintln!("task text is empty; nothing added"),
            }
        }
        TaskAction::List { filter } => {
            let filter = match filter.as_deref() {
                None => TaskFilter::All,
                Some(label) if label.eq_ignore_ascii_case("all") => TaskFilter::All,
                Some(label) => TaskFilter::Category(parse_category(label)?),
            };
            session.set_filter(filter);
            println!("{}", serde_json::to_string_pretty(&session.visible_tasks())?);
        }
        TaskAction::Toggle { id } => match session.toggle_task(&id)? {
            Some(event) => super::print_event(&event)?,
            None => eprintln!("no task with id {id}"),
        },
        TaskAction::Remove { id } => match session.remove_task(&id)? {
            Some(event) => super::print_event(&event)?,
            None => eprintln!("no task with id {id}"),
        },
    }
    Ok(())
}
