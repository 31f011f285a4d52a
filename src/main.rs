fn main() {
    if let Err(err) = lookml_scaffold::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
