fn main() {
    if let Err(err) = recase::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
