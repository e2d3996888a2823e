use pascalc_drv::{parse_args, print_help, run, Cli, ExitOutcome};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args) {
        Ok(Cli::Help) => print_help(),
        Ok(Cli::Version) => println!("pascalc {}", env!("CARGO_PKG_VERSION")),
        Ok(Cli::Run(config)) => match run(&config) {
            Ok(ExitOutcome::Clean) => {}
            Ok(ExitOutcome::DirtySource) => std::process::exit(1),
            Err(err) => {
                eprintln!("pascalc: {}", err);
                std::process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("pascalc: {}", err);
            std::process::exit(1);
        }
    }
}
