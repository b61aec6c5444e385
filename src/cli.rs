use crate::Arguments;
use clap::{
    arg, builder::PossibleValue, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgMatches, Command, ValueEnum,
};
use std::ffi::OsString;
use std::path::PathBuf;

/// The image operations the binary exposes, one per button of a typical
/// viewer frontend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Threshold,
    Histogram,
    Reduce,
    Enlarge,
    Difference,
}

impl ValueEnum for Operation {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Threshold,
            Self::Histogram,
            Self::Reduce,
            Self::Enlarge,
            Self::Difference,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Threshold => Some(PossibleValue::new("threshold")),
            Self::Histogram => Some(PossibleValue::new("histogram")),
            Self::Reduce => Some(PossibleValue::new("reduce")),
            Self::Enlarge => Some(PossibleValue::new("enlarge")),
            Self::Difference => Some(PossibleValue::new("difference")),
        }
    }
}

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_operation_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_level_argument(command);
        let command = Self::register_factor_argument(command);
        Self::register_second_file_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_operation_argument(command: Command) -> Command {
        command.arg(Self::create_operation_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_level_argument(command: Command) -> Command {
        command.arg(Self::create_level_argument())
    }

    fn register_factor_argument(command: Command) -> Command {
        command.arg(Self::create_factor_argument())
    }

    fn register_second_file_argument(command: Command) -> Command {
        command.arg(Self::create_second_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to PGM input file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_operation_argument() -> Arg {
        Arg::new("operation")
            .help("Image operation to apply")
            .value_parser(value_parser!(Operation))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        arg!(output_file: -o --output <FILE> "Path to PGM output file")
            .value_parser(value_parser!(PathBuf))
            .required_if_eq_any([
                ("operation", "threshold"),
                ("operation", "reduce"),
                ("operation", "enlarge"),
                ("operation", "difference"),
            ])
    }

    fn create_level_argument() -> Arg {
        arg!(-l --level <LEVEL> "Threshold level")
            .default_value("128")
            .value_parser(value_parser!(i32))
    }

    fn create_factor_argument() -> Arg {
        arg!(-f --factor <FACTOR> "Resize factor")
            .default_value("2")
            .value_parser(value_parser!(i32))
    }

    fn create_second_file_argument() -> Arg {
        arg!(second_file: -w --with <FILE> "Second PGM input file for the difference operation")
            .value_parser(value_parser!(PathBuf))
            .required_if_eq("operation", "difference")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            operation: Self::extract_operation_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            level: Self::extract_level_argument(matches),
            factor: Self::extract_factor_argument(matches),
            second_file: Self::extract_second_file_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_operation_argument(matches: &ArgMatches) -> Operation {
        matches
            .get_one::<Operation>("operation")
            .expect("Required argument operation not provided")
            .to_owned()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_file").cloned()
    }

    fn extract_level_argument(matches: &ArgMatches) -> i32 {
        matches
            .get_one::<i32>("level")
            .expect("Threshold level must be provided, but was unset")
            .to_owned()
    }

    fn extract_factor_argument(matches: &ArgMatches) -> i32 {
        matches
            .get_one::<i32>("factor")
            .expect("Resize factor must be provided, but was unset")
            .to_owned()
    }

    fn extract_second_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("second_file").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::Command;

    use super::{CLIParser, Operation};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.pgm";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_operation_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_operation_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "enlarge"]);
        let operation = CLIParser::extract_operation_argument(&matches);
        assert_eq!(operation, Operation::Enlarge);
    }

    #[test]
    fn parse_level_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_level_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--level", "42"]);
        let level = CLIParser::extract_level_argument(&matches);
        assert_eq!(level, 42);
    }

    #[test]
    fn parse_level_argument_default() {
        let command = Command::new("test");
        let command = CLIParser::register_level_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let level = CLIParser::extract_level_argument(&matches);
        assert_eq!(level, 128);
    }

    #[test]
    fn parse_factor_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_factor_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f", "3"]);
        let factor = CLIParser::extract_factor_argument(&matches);
        assert_eq!(factor, 3);
    }

    #[test]
    fn missing_output_file_for_threshold_is_rejected() {
        let mut parser = CLIParser::new();
        let result = parser
            .command
            .try_get_matches_from_mut(vec![PROGRAM_NAME_ARGUMENT, "input.pgm", "threshold"]);
        assert!(result.is_err(), "Missing output file not detected");
    }

    #[test]
    fn missing_second_file_for_difference_is_rejected() {
        let mut parser = CLIParser::new();
        let result = parser.command.try_get_matches_from_mut(vec![
            PROGRAM_NAME_ARGUMENT,
            "input.pgm",
            "difference",
            "-o",
            "out.pgm",
        ]);
        assert!(result.is_err(), "Missing second input file not detected");
    }

    #[test]
    fn histogram_needs_no_output_file() {
        let mut parser = CLIParser::new();
        let arguments = parser.parse(vec![PROGRAM_NAME_ARGUMENT, "input.pgm", "histogram"]);
        assert_eq!(arguments.operation, Operation::Histogram);
        assert!(arguments.output_file.is_none());
    }

    #[test]
    fn parse_difference_arguments() {
        let mut parser = CLIParser::default();
        let arguments = parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "first.pgm",
            "difference",
            "-o",
            "diff.pgm",
            "--with",
            "second.pgm",
        ]);
        assert_eq!(arguments.operation, Operation::Difference);
        assert_eq!(
            arguments.second_file.as_deref().unwrap().file_name().unwrap(),
            "second.pgm"
        );
        assert_eq!(
            arguments.output_file.as_deref().unwrap().file_name().unwrap(),
            "diff.pgm"
        );
    }
}
