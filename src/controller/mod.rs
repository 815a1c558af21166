//! Navigation Controller
//!
//! Owns the screen stack and the read-validate-dispatch loop.
//!
//! Each iteration reads one command for the top screen, validates it,
//! resolves it to a choice and applies exactly one transition:
//! - `Manage` pushes the entity's management screen
//! - `MoveBack` / `Exit` pop the top screen
//! - anything else is delegated to the [`Manager`]
//!
//! Validation failures are reported here and nowhere else; the stack is
//! left untouched and the same screen prompts again.

mod prompt;
mod stack;

pub use prompt::Prompter;
pub use stack::ScreenStack;

use tracing::debug;

use crate::config::AppConfig;
use crate::domain::SubwayMap;
use crate::error::{Result, SubwayError};
use crate::manager::Manager;
use crate::screen::{ActionType, Choice, ScreenRegistry, ScreenType};
use crate::validator;
use crate::view::View;

/// Effect of a resolved choice on the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Push(ScreenType),
    Pop,
    Delegate,
    /// MANAGE on an entity without a management screen
    Stay,
}

impl Transition {
    pub fn for_choice(choice: &Choice) -> Self {
        match choice.action_type() {
            ActionType::Manage => ScreenType::for_entity(choice.entity_type())
                .map(Transition::Push)
                .unwrap_or(Transition::Stay),
            ActionType::MoveBack | ActionType::Exit => Transition::Pop,
            _ => Transition::Delegate,
        }
    }
}

pub struct Controller<'a, V> {
    registry: &'a ScreenRegistry,
    stack: ScreenStack,
    prompter: Prompter<'a, V>,
    manager: Manager,
}

impl<'a, V: View> Controller<'a, V> {
    /// Controller positioned on the MAIN screen
    pub fn new(registry: &'a ScreenRegistry, config: &'a AppConfig, view: V, map: SubwayMap) -> Result<Self> {
        registry.get(ScreenType::Main)?;

        Ok(Self {
            registry,
            stack: ScreenStack::new(ScreenType::Main),
            prompter: Prompter::new(view, &config.limits),
            manager: Manager::new(map),
        })
    }

    /// Loop until the stack is empty
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        debug!("Screen stack empty, leaving run loop");
        Ok(())
    }

    /// One iteration. Returns whether the loop should continue.
    pub fn step(&mut self) -> Result<bool> {
        let Some(top) = self.stack.top() else {
            return Ok(false);
        };
        let screen = self.registry.get(top)?;
        let command = self.prompter.ask_user_command(screen)?;

        match self.process_command(&command, top) {
            Ok(()) => {}
            Err(SubwayError::Validation(err)) => {
                debug!(screen = %top, %err, "Rejected input");
                self.prompter.view_mut().print_error_message(&err)?;
            }
            Err(other) => return Err(other),
        }

        Ok(!self.stack.is_empty())
    }

    pub fn stack(&self) -> &ScreenStack {
        &self.stack
    }

    pub fn map(&self) -> &SubwayMap {
        self.manager.map()
    }

    pub fn view(&self) -> &V {
        self.prompter.view()
    }

    pub fn into_view(self) -> V {
        self.prompter.into_view()
    }

    fn process_command(&mut self, command: &str, current: ScreenType) -> Result<()> {
        let screen = self.registry.get(current)?;
        validator::validate_command(command, screen)?;
        let choice = screen.choice_for_command(command)?;

        match Transition::for_choice(choice) {
            Transition::Push(next) => {
                self.registry.get(next)?;
                debug!(from = %current, to = %next, "Push screen");
                self.stack.push(next);
            }
            Transition::Pop => {
                debug!(screen = %current, "Pop screen");
                self.stack.pop();
            }
            Transition::Delegate => {
                self.manager.manage_entity(choice, &mut self.prompter)?;
            }
            Transition::Stay => {
                debug!(entity = %choice.entity_type(), "No management screen for entity");
            }
        }
        Ok(())
    }
}
