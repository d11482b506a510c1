use chatmark_cli::Cli;
use clap::Parser;

fn main() {
    // RUST_LOG still wins over the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match chatmark_cli::run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
