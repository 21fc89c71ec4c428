use anyhow::Result;
use tracing::info;

use crate::cli::display::{print_due_soon, print_persons, print_tasks};
use crate::cli::ui::read_line;
use crate::logic::{Logic, LogicError};

pub struct ReplSession {
    logic: Logic,
    due_soon_days: i64,
}

impl ReplSession {
    pub fn new(logic: Logic, due_soon_days: i64) -> Self {
        Self { logic, due_soon_days }
    }

    /// Runs until `exit`, Esc or Ctrl-C.
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        loop {
            let Some(line) = read_line("> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.logic.execute(&line) {
                Ok(result) => {
                    println!("{}", result.feedback);
                    println!();
                    if result.exit {
                        break;
                    }
                    if !result.show_help {
                        self.print_lists();
                    }
                }
                Err(LogicError::Storage(e)) => {
                    // the change is applied in memory, keep the session alive
                    eprintln!("Warning: {}", e);
                }
                Err(e) => println!("{}", e),
            }
        }

        info!("session ended");
        Ok(())
    }

    fn print_welcome(&self) {
        println!("lifebook");
        println!("────────");
        println!("Type help for commands, exit to quit.");
        if let Some(storage) = self.logic.storage() {
            println!("Data: {}", storage.path().display());
        }
        println!();
        print_due_soon(&self.logic.due_soon_task_list(), self.due_soon_days);
    }

    fn print_lists(&self) {
        println!("Contacts");
        print_persons(&self.logic.filtered_person_list());
        println!();
        println!("Tasks");
        print_tasks(&self.logic.filtered_task_list());
        println!();
    }
}

/// Executes a single line and prints its outcome.
pub fn run_once(logic: &mut Logic, line: &str) -> Result<(), LogicError> {
    let result = logic.execute(line)?;
    println!("{}", result.feedback);
    if !result.show_help && !result.exit {
        print_persons(&logic.filtered_person_list());
        print_tasks(&logic.filtered_task_list());
    }
    Ok(())
}
