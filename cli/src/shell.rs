//! Interactive shell
//!
//! Reads commands line by line and drives a [`TodoManager`]. Positions are
//! shown and entered 1-based; the manager works with 0-based indices.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use todo_core::todo::{Todo, TodoManager};
use tracing::debug;

/// Commands understood at the main prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Toggle,
    Delete,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Add,
        Command::List,
        Command::Toggle,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::List => "list",
            Self::Toggle => "toggle",
            Self::Delete => "delete",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Add => "📌 add - Add a new todo",
            Self::List => "📝 list - List all todos",
            Self::Toggle => "🔄 toggle - Toggle completion status of a todo",
            Self::Delete => "🗑️ delete - Delete a todo",
            Self::Help => "❓ help - Show this help message",
            Self::Exit => "👋 exit - Close the app",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or(ParseCommandError(name))
    }
}

/// One-line rendering of a todo, e.g. `✅ Walk dog`
fn render(todo: &Todo) -> String {
    let marker = if todo.is_completed { "✅" } else { "❌" };
    format!("{} {}", marker, todo.title)
}

/// Read-eval-print loop over a todo manager
pub struct Shell<R, W> {
    manager: TodoManager,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(manager: TodoManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "🌟 Welcome to the Todo App! 🌟")?;
        self.show_help()?;

        loop {
            let Some(line) = self.prompt("\nEnter command (type 'help' for options):")? else {
                debug!("Input closed, leaving shell");
                break;
            };

            if line.is_empty() {
                writeln!(self.output, "❗ Invalid input. Please enter a valid command.")?;
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(_) => {
                    writeln!(self.output, "❗ Unknown command. Type 'help' for options.")?;
                    continue;
                }
            };

            debug!(?command, "Dispatching command");
            match command {
                Command::Add => self.handle_add()?,
                Command::List => self.list_todos()?,
                Command::Toggle => self.handle_toggle()?,
                Command::Delete => self.handle_delete()?,
                Command::Help => self.show_help()?,
                Command::Exit => {
                    writeln!(self.output, "👋 Exiting the app. Goodbye! ✨")?;
                    break;
                }
            }
        }

        self.output.flush()
    }

    /// Print `message`, then read one trimmed line. `None` on end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than ending the session.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", message)?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nAvailable Commands:")?;
        writeln!(self.output, "-------------------")?;
        for command in Command::ALL {
            writeln!(self.output, "{}", command.description())?;
        }
        writeln!(self.output, "-------------------")
    }

    fn list_todos(&mut self) -> io::Result<()> {
        if self.manager.is_empty() {
            return writeln!(
                self.output,
                "📝 No todos found. Add some tasks to get started! 🌟"
            );
        }

        writeln!(self.output, "\n📝 Your Todo List:")?;
        writeln!(self.output, "-------------------")?;
        for (position, todo) in self.manager.list().iter().enumerate() {
            writeln!(self.output, "{}. {}", position + 1, render(todo))?;
        }
        writeln!(self.output, "-------------------")
    }

    fn handle_add(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter todo title:")? else {
            return Ok(());
        };

        if title.is_empty() {
            return writeln!(self.output, "❗ Title cannot be empty. Please try again.");
        }

        let todo = self.manager.add(title);
        writeln!(self.output, "✅ Added: \"{}\" 🌟", todo.title)
    }

    fn handle_toggle(&mut self) -> io::Result<()> {
        let Some(index) = self.select_index("toggle")? else {
            return Ok(());
        };

        match self.manager.toggle_completion(index) {
            Ok(todo) => {
                let status = if todo.is_completed {
                    "completed"
                } else {
                    "not completed"
                };
                writeln!(self.output, "🌟 Marked \"{}\" as {}!", todo.title, status)
            }
            Err(e) => writeln!(self.output, "❗ {}", e),
        }
    }

    fn handle_delete(&mut self) -> io::Result<()> {
        let Some(index) = self.select_index("delete")? else {
            return Ok(());
        };

        match self.manager.delete(index) {
            Ok(todo) => writeln!(
                self.output,
                "🗑️ Deleted: \"{}\". Hope you meant to do that! 🌟",
                todo.title
            ),
            Err(e) => writeln!(self.output, "❗ {}", e),
        }
    }

    /// Ask for a 1-based position until it is valid. `None` on `back` or end of input.
    fn select_index(&mut self, verb: &str) -> io::Result<Option<usize>> {
        if self.manager.is_empty() {
            writeln!(
                self.output,
                "📝 No todos available to {}. Please add some first! 🌟",
                verb
            )?;
            return Ok(None);
        }

        self.list_todos()?;

        loop {
            let message = format!(
                "Enter the number of the todo to {} (or 'back' to return to main menu):",
                verb
            );
            let Some(input) = self.prompt(&message)? else {
                return Ok(None);
            };

            if input.eq_ignore_ascii_case("back") {
                return Ok(None);
            }

            let count = self.manager.count();
            match input.parse::<usize>() {
                Ok(position) if (1..=count).contains(&position) => return Ok(Some(position - 1)),
                _ => writeln!(
                    self.output,
                    "❗ Please enter a valid number between 1 and {}, or 'back' to return.",
                    count
                )?,
            }
        }
    }
}
