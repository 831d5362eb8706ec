//! Menu selections for the console game

use std::fmt;

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Shop,
    Exit,
}

/// Shop options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopChoice {
    LoadWords,
    Leave,
}

/// Rejected menu input; the caller re-prompts or backs out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Main menu input that is not a number
    NotANumber(String),
    /// Main menu number outside 1-3
    OutOfRange(i64),
    InvalidShopChoice(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(_) => write!(f, "Invalid selection. Please enter a number."),
            Self::OutOfRange(_) => {
                write!(f, "Invalid selection. Please enter a number between 1 and 3.")
            }
            Self::InvalidShopChoice(choice) => write!(f, "Invalid shop choice '{choice}'."),
        }
    }
}

impl std::error::Error for InputError {}

impl MenuChoice {
    /// Parse a main menu selection
    ///
    /// # Errors
    /// `InputError::NotANumber` for non-numeric input and
    /// `InputError::OutOfRange` for numbers other than 1, 2 or 3.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let input = input.trim();
        let number: i64 = input
            .parse()
            .map_err(|_| InputError::NotANumber(input.to_string()))?;

        match number {
            1 => Ok(Self::Play),
            2 => Ok(Self::Shop),
            3 => Ok(Self::Exit),
            other => Err(InputError::OutOfRange(other)),
        }
    }
}

impl ShopChoice {
    /// Parse a shop selection
    ///
    /// # Errors
    /// `InputError::InvalidShopChoice` for anything but 1 or 2.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        match input.trim() {
            "1" => Ok(Self::LoadWords),
            "2" => Ok(Self::Leave),
            other => Err(InputError::InvalidShopChoice(other.to_string())),
        }
    }
}
