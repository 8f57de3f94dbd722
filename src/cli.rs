use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "space_explorer", about = "Planet weight, escape velocity and BMI calculator")]
#[command(version)]
pub struct Args {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run one calculation and exit; without a command the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Earth body mass index
    Bmi {
        /// Weight in kg
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,
        /// Height in meters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },

    /// Effective weight on another planet
    Weight {
        /// Earth weight in kg
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,
        #[arg(short, long)]
        planet: String,
    },

    /// Surface escape velocity
    Escape {
        #[arg(short, long)]
        planet: String,
    },

    /// Day and year length
    Facts {
        #[arg(short, long)]
        planet: String,
    },

    /// List catalog planets
    Planets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definitions_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_command_means_menu() {
        let args = Args::try_parse_from(["space_explorer"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn parse_bmi() {
        let args =
            Args::try_parse_from(["space_explorer", "bmi", "--weight", "70", "--height", "1.75"]).unwrap();
        assert_eq!(args.command, Some(Command::Bmi { weight: 70.0, height: 1.75 }));
    }

    #[test]
    fn parse_weight_with_global_verbose() {
        let args = Args::try_parse_from([
            "space_explorer", "weight", "--weight", "70", "-p", "earth", "-v",
        ])
        .unwrap();
        assert!(args.verbose);
        assert_eq!(
            args.command,
            Some(Command::Weight { weight: 70.0, planet: "earth".to_string() })
        );
    }

    #[test]
    fn parse_planet_commands() {
        let args = Args::try_parse_from(["space_explorer", "escape", "--planet", "Jupiter"]).unwrap();
        assert_eq!(args.command, Some(Command::Escape { planet: "Jupiter".to_string() }));
        let args = Args::try_parse_from(["space_explorer", "facts", "-p", "mercury"]).unwrap();
        assert_eq!(args.command, Some(Command::Facts { planet: "mercury".to_string() }));
        let args = Args::try_parse_from(["space_explorer", "planets"]).unwrap();
        assert_eq!(args.command, Some(Command::Planets));
    }

    #[test]
    fn negative_weight_reaches_validation() {
        let args = Args::try_parse_from(["space_explorer", "weight", "--weight", "-5", "-p", "earth"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Weight { weight: -5.0, planet: "earth".to_string() })
        );
    }

    #[test]
    fn missing_planet_rejected() {
        assert!(Args::try_parse_from(["space_explorer", "escape"]).is_err());
        assert!(Args::try_parse_from(["space_explorer", "bmi", "--weight", "abc", "--height", "1"]).is_err());
    }
}
