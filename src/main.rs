use nav_booking::StdoutPresenter;
use navflow::app;
use navflow::config::AppConfig;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "uso: navflow-demo [next | skip:<step>]...\n\
                     sin argumentos ejecuta el guion por defecto: skip:payment next";

fn main() {
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[navflow] {e}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }
    let taps = if args.is_empty() {
        app::demo_script()
    } else {
        match app::parse_taps(&args) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("[navflow] {e}\n{USAGE}");
                std::process::exit(2);
            }
        }
    };

    match app::run(&config, &taps, StdoutPresenter) {
        Ok(snapshot) => {
            tracing::info!(cursor = snapshot.cursor,
                           terminal_reached = snapshot.terminal_reached,
                           "flow finished");
        }
        Err(e) => {
            eprintln!("[navflow] {e}");
            std::process::exit(4);
        }
    }
}
