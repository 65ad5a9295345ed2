use std::env::args_os;
use std::process;

use extract_colors::{extract_top_colors, CLIParser};

const USAGE_EXIT_CODE: i32 = 2;

fn main() {
    env_logger::init();

    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let image_path = match arguments.image_path {
        Some(path) => path,
        None => {
            println!("{}", cli_parser.usage());
            process::exit(USAGE_EXIT_CODE);
        }
    };

    match extract_top_colors(&image_path, arguments.color_count) {
        Ok(palette) => {
            let report = palette.report(&image_path);
            #[cfg(feature = "print-truecolor")]
            let report = report.with_swatches(termion::is_tty(&std::io::stdout()));
            print!("{}", report);
        }
        Err(e) => {
            eprintln!("Extracting colors failed because of: {}", e);
            process::exit(e.exit_code());
        }
    }
}
