use std::ffi::OsString;
use std::path::PathBuf;

use clap::{
    arg, crate_description, crate_name, crate_version, value_parser, Arg, ArgMatches, Command,
};
use log::warn;

use crate::settings;

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// Image to sample, `None` if the user gave no path
    pub image_path: Option<PathBuf>,
    /// Number of colors to print, negative requests are clamped to zero
    pub color_count: usize,
}

/// Command line parser of the `extract_colors` executable
pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    /// Parser with all arguments registered
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    /// Parse `itr`, the first item being the program name
    ///
    /// Exits the process on malformed input or after printing `--help`/`--version`.
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

    /// One line usage summary
    pub fn usage(&mut self) -> String {
        self.command.render_usage().to_string()
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_image_path_argument(command);
        Self::register_color_count_argument(command)
    }

    fn register_image_path_argument(command: Command) -> Command {
        command.arg(Self::create_image_path_argument())
    }

    fn register_color_count_argument(command: Command) -> Command {
        command.arg(Self::create_color_count_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .bin_name("extract_colors")
            .version(crate_version!())
            .about(crate_description!())
    }

    fn create_image_path_argument() -> Arg {
        Arg::new("image_path")
            .value_name("IMAGE")
            .help("Path to the image file")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_color_count_argument() -> Arg {
        arg!(color_count: -n --count <COUNT> "Number of colors to print")
            .default_value(settings::DEFAULT_COLOR_COUNT.to_string())
            .required(false)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            image_path: Self::extract_image_path_argument(matches),
            color_count: Self::extract_color_count_argument(matches),
        }
    }

    fn extract_image_path_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("image_path").cloned()
    }

    fn extract_color_count_argument(matches: &ArgMatches) -> usize {
        let requested = matches
            .get_one::<i64>("color_count")
            .copied()
            .unwrap_or(settings::DEFAULT_COLOR_COUNT as i64);
        usize::try_from(requested).unwrap_or_else(|_| {
            warn!("color count {} is negative, reporting no colors", requested);
            0
        })
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::CLIParser;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_image_path_argument() {
        let image_file_name = "photo.png";
        let command = Command::new("test");
        let command = CLIParser::register_image_path_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, image_file_name]);
        let image_path = CLIParser::extract_image_path_argument(&matches).unwrap();
        assert_eq!(image_path.file_name().unwrap(), image_file_name);
    }

    #[test]
    fn image_path_may_be_missing() {
        let command = Command::new("test");
        let command = CLIParser::register_image_path_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert_eq!(CLIParser::extract_image_path_argument(&matches), None);
    }

    #[test]
    fn parse_color_count_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_color_count_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--count", "12"]);
        assert_eq!(CLIParser::extract_color_count_argument(&matches), 12);
    }

    #[test]
    fn color_count_defaults_to_five() {
        let command = Command::new("test");
        let command = CLIParser::register_color_count_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert_eq!(CLIParser::extract_color_count_argument(&matches), 5);
    }

    #[test]
    fn negative_color_count_is_clamped() {
        let command = Command::new("test");
        let command = CLIParser::register_color_count_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-n", "-3"]);
        assert_eq!(CLIParser::extract_color_count_argument(&matches), 0);
    }

    #[test]
    fn parse_color_count_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_color_count_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-n", "many"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for color count not detected");
        }
    }

    #[test]
    fn parse_all_arguments() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "/pictures/sunset.jpg",
            "-n",
            "3",
        ]);
        assert_eq!(
            arguments.image_path.unwrap().file_name().unwrap(),
            "sunset.jpg",
            "image path does not match"
        );
        assert_eq!(arguments.color_count, 3, "color count does not match");
    }

    #[test]
    fn usage_names_the_image() {
        let mut cli_parser = CLIParser::default();
        let usage = cli_parser.usage();
        assert!(usage.contains("[IMAGE]"), "{}", usage);
    }
}
