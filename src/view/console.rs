//! Line-oriented console view

use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::{name_prompt, View};
use crate::domain::Line;
use crate::error::{FixSuggestion, ValidationError};
use crate::screen::{ActionType, EntityType, Screen};

/// Reads one line per question from `input`, writes menus to `output`
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "{} {}", "##".cyan().bold(), prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        // Strip the line terminator only; everything else is the user's.
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn ask_user_command(&mut self, screen: &Screen) -> io::Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "{} {}", "##".cyan().bold(), screen.title().bold())?;
        for choice in screen.choices() {
            writeln!(self.output, "{}. {}", choice.command(), choice.label())?;
        }
        self.ask("Select a function.")
    }

    fn ask_name(&mut self, entity: EntityType, action: ActionType) -> io::Result<String> {
        self.ask(&name_prompt(entity, action))
    }

    fn ask_upward_end_station_name(&mut self) -> io::Result<String> {
        self.ask("Enter the upward end station name.")
    }

    fn ask_downward_end_station_name(&mut self) -> io::Result<String> {
        self.ask("Enter the downward end station name.")
    }

    fn ask_station_name_to_register_to_route(&mut self) -> io::Result<String> {
        self.ask("Enter the station name.")
    }

    fn ask_station_order_in_route(&mut self) -> io::Result<String> {
        self.ask("Enter the position (0 = front).")
    }

    fn ask_station_name_to_delete_from_route(&mut self) -> io::Result<String> {
        self.ask("Enter the name of the station to remove from the route.")
    }

    fn print_error_message(&mut self, error: &ValidationError) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{} {}", "[ERROR]".red().bold(), error)?;
        if let Some(suggestion) = error.fix_suggestion() {
            writeln!(self.output, "  {} {}", "Fix:".yellow(), suggestion)?;
        }
        Ok(())
    }

    fn print_info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{} {}", "[INFO]".green(), message)
    }

    fn print_entities(&mut self, title: &str, names: &[String]) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{} {}", "##".cyan().bold(), title)?;
        for name in names {
            writeln!(self.output, "{} {}", "[INFO]".green(), name)?;
        }
        Ok(())
    }

    fn print_map(&mut self, lines: &[Line]) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{} Subway map", "##".cyan().bold())?;
        for line in lines {
            writeln!(self.output, "{} {}", "[INFO]".green(), line.name.bold())?;
            writeln!(self.output, "{} ---", "[INFO]".green())?;
            for station in &line.route {
                writeln!(self.output, "{} {}", "[INFO]".green(), station)?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }
}
