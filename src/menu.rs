use std::io::{self, BufRead, Write};

use crate::celestial::{normalize_name, planet_names};
use crate::constants::MPS_TO_KMPS;
use crate::error::ValidationError;
use crate::physics::{calculate_bmi, escape_velocity_ms, planet_facts, weight_on_planet};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    Bmi,
    Weight,
    Escape,
    Facts,
    Quit,
}

impl MenuChoice {
    /// Accepts the menu number or the word, any case, surrounding blanks ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "bmi" => Some(Self::Bmi),
            "2" | "weight" => Some(Self::Weight),
            "3" | "escape" => Some(Self::Escape),
            "4" | "facts" => Some(Self::Facts),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

// ── Result lines ────────────────────────────────────────────────────
// Shared with the one-shot subcommands in main.

pub fn bmi_line(bmi: f64) -> String {
    format!("Your Earth BMI is {bmi:.2}")
}

pub fn weight_line(planet: &str, weight: f64) -> String {
    format!("On {planet}, your effective weight is {weight:.2} kg")
}

pub fn escape_line(planet: &str, velocity_ms: f64) -> String {
    format!(
        "Escape velocity on {planet}: {velocity_ms:.0} m/s {:.2} km/s",
        velocity_ms * MPS_TO_KMPS
    )
}

pub fn facts_lines(planet: &str, day_hours: f64, year_days: f64) -> [String; 2] {
    [
        format!("{planet} day length: {day_hours:?} hours"),
        format!("{planet} year length: {year_days:?} Earth days"),
    ]
}

/// Interactive console session over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show the menu, run one calculation, and return.
    /// Validation failures are printed, not returned.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Space Explorer Toolkit ===")?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "  1) bmi")?;
        writeln!(self.output, "  2) weight")?;
        writeln!(self.output, "  3) escape")?;
        writeln!(self.output, "  4) facts")?;
        writeln!(self.output, "  q) quit")?;

        let raw = match self.prompt_line("> ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let choice = match MenuChoice::parse(&raw) {
            Some(c) => c,
            None => {
                log::debug!("unknown menu choice {:?}", raw.trim());
                writeln!(self.output, "Unknown choice.")?;
                return Ok(());
            }
        };

        match self.dispatch(choice) {
            Ok(()) => Ok(()),
            Err(DriverError::Io(e)) => Err(e),
            Err(DriverError::Invalid(e)) => {
                log::debug!("rejected input: {}", e);
                writeln!(self.output, "{}", e)
            }
            Err(DriverError::Eof) => Ok(()),
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), DriverError> {
        match choice {
            MenuChoice::Bmi => {
                let weight = self.prompt_float("Enter your weight in kg: ")?;
                let height = self.prompt_float("Enter your height in meters: ")?;
                let bmi = calculate_bmi(weight, height)?;
                writeln!(self.output, "{}", bmi_line(bmi))?;
            }
            MenuChoice::Weight => {
                let weight = self.prompt_float("Enter your Earth weight in kg: ")?;
                let planet = self.prompt_planet()?;
                let w = weight_on_planet(weight, &planet)?;
                writeln!(self.output, "{}", weight_line(&planet, w))?;
            }
            MenuChoice::Escape => {
                let planet = self.prompt_planet()?;
                let v = escape_velocity_ms(&planet)?;
                writeln!(self.output, "{}", escape_line(&planet, v))?;
            }
            MenuChoice::Facts => {
                let planet = self.prompt_planet()?;
                let (day, year) = planet_facts(&planet)?;
                for line in facts_lines(&planet, day, year) {
                    writeln!(self.output, "{}", line)?;
                }
            }
            MenuChoice::Quit => writeln!(self.output, "Bye!")?,
        }
        Ok(())
    }

    /// `None` at end of input.
    fn prompt_line(&mut self, msg: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Re-prompts until the line parses as a number.
    fn prompt_float(&mut self, msg: &str) -> Result<f64, DriverError> {
        loop {
            let line = self.prompt_line(msg)?.ok_or(DriverError::Eof)?;
            match line.trim().parse::<f64>() {
                Ok(v) => return Ok(v),
                Err(_) => {
                    log::debug!("rejected number {:?}", line.trim());
                    writeln!(self.output, "Invalid number, try again")?;
                }
            }
        }
    }

    /// Lists the catalog, reads a name, and returns it normalized.
    fn prompt_planet(&mut self) -> Result<String, DriverError> {
        let names: Vec<_> = planet_names().collect();
        writeln!(self.output, "Planets: {}", names.join(", "))?;
        let line = self.prompt_line("choose a planet: ")?.ok_or(DriverError::Eof)?;
        Ok(normalize_name(&line))
    }
}

enum DriverError {
    Io(io::Error),
    Invalid(ValidationError),
    Eof,
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ValidationError> for DriverError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}
