//! Menu state machine
//!
//! The program is a three-state machine: the main menu, the standard
//! conversion submenu, and the terminal `Exit` state. Each call to
//! [`Session::step`] shows one menu, reads one choice and returns the next
//! state. Handlers for the individual options live in `modes.rs`.

use std::io::Write;

use anyhow::Result;

use super::prompts::{Console, LineSource};
use crate::convert::{ConversionPair, Precision};
use crate::report::History;
use crate::utils::{banner, error, farewell, heading, menu_option};

/// Where the menu loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Conversions,
    Exit,
}

const MAIN_OPTIONS: [&str; 9] = [
    "Standard Conversions",
    "Quick Convert Mode",
    "Batch Conversion",
    "View Conversion History",
    "Clear History",
    "Precision Settings",
    "Unit Reference",
    "About",
    "Exit",
];

/// One interactive session: the console, its history and its settings
pub struct Session<S, W> {
    pub console: Console<S, W>,
    pub history: History,
    pub precision: Precision,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(console: Console<S, W>, precision: Precision) -> Self {
        Self {
            console,
            history: History::new(),
            precision,
        }
    }

    /// Show the banner, then drive the menus until the user exits
    pub fn run(&mut self) -> Result<()> {
        for line in banner(env!("CARGO_PKG_VERSION")) {
            self.console.say(line)?;
        }

        let mut state = MenuState::Main;
        while state != MenuState::Exit {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Perform a single transition from `state`
    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        let next = match state {
            MenuState::Main => self.main_menu()?,
            MenuState::Conversions => self.conversion_menu()?,
            MenuState::Exit => MenuState::Exit,
        };
        if next != state {
            log::debug!("menu: {:?} -> {:?}", state, next);
        }
        Ok(next)
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        self.console.blank()?;
        self.console.say(heading("Main Menu"))?;
        for (i, label) in MAIN_OPTIONS.iter().enumerate() {
            self.console.say(menu_option(i + 1, label))?;
        }

        let choice = self.console.read_int("Please select an option (1-9): ")?;
        let next = match choice {
            1 => MenuState::Conversions,
            2 => {
                self.quick_convert()?;
                MenuState::Main
            }
            3 => {
                self.batch_convert()?;
                MenuState::Main
            }
            4 => {
                self.view_history()?;
                MenuState::Main
            }
            5 => {
                self.clear_history()?;
                MenuState::Main
            }
            6 => {
                self.precision_settings()?;
                MenuState::Main
            }
            7 => {
                self.unit_reference()?;
                MenuState::Main
            }
            8 => {
                self.about()?;
                MenuState::Main
            }
            9 => {
                self.console.blank()?;
                self.console.say(farewell())?;
                MenuState::Exit
            }
            _ => {
                self.console.say(error("Invalid option. Please enter 1-9."))?;
                MenuState::Main
            }
        };
        Ok(next)
    }

    fn conversion_menu(&mut self) -> Result<MenuState> {
        self.console.blank()?;
        self.console.say(heading("Conversion Options"))?;
        for (i, pair) in ConversionPair::STANDARD.iter().enumerate() {
            self.console.say(menu_option(i + 1, &pair.menu_label()))?;
        }
        let back = ConversionPair::STANDARD.len() + 1;
        self.console.say(menu_option(back, "Back to Main Menu"))?;

        let choice = self.console.read_int("Select conversion (1-7): ")?;
        if choice == back as i32 {
            return Ok(MenuState::Main);
        }

        match ConversionPair::from_choice(choice) {
            Some(pair) => self.convert_standard(pair)?,
            None => self.console.say(error("Invalid option. Please enter 1-7."))?,
        }
        Ok(MenuState::Conversions)
    }
}
