use std::env::args_os;

use pgm_toolbox::{apply_operation, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match apply_operation(&arguments) {
        Ok(_) => println!("Operation successful"),
        Err(e) => eprintln!("Operation failed because of: {}", e),
    }
}
