fn main() {
    if let Err(e) = plugin_scanner_cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
