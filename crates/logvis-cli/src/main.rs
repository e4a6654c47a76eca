#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = logvis_cli::run_from_env() {
        eprintln!("logvis: {error}");
        std::process::exit(1);
    }
}
