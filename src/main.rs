fn main() {
    if let Err(err) = bubble_renderer::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
