//! Timer session commands.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use tidbok_core::store::demo::demo_store;
use tidbok_core::{format_elapsed, Config, TimerSession};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a timing session against a demo task and record the entry
    Run {
        /// Task ID from the demo store
        id: u32,
        /// Session length in seconds
        #[arg(long, default_value_t = 5)]
        seconds: u64,
    },
    /// Print the HH:MM:SS display form of an elapsed second count
    Format {
        /// Elapsed seconds
        seconds: u64,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { id, seconds } => {
            let config = Config::load_or_default();
            let mut store = demo_store();
            let mut session = TimerSession::new().auto_start_task(config.timer.auto_start_task);

            if !session.start(&mut store, id) {
                println!("Could not start timer: no task with id {id}");
                return Ok(());
            }

            let mut stdout = std::io::stdout();
            for _ in 0..seconds {
                std::thread::sleep(Duration::from_secs(1));
                session.tick();
                print!("\r{}", format_elapsed(session.elapsed_secs()));
                stdout.flush()?;
            }
            println!();

            match session.stop(&mut store) {
                Some(entry) => {
                    println!("{}", serde_json::to_string_pretty(&entry)?);
                    println!("{}", serde_json::to_string_pretty(&store.task(id))?);
                }
                None => println!("No active session"),
            }
        }
        TimerAction::Format { seconds } => {
            println!("{}", format_elapsed(seconds));
        }
    }
    Ok(())
}
