//! gitling binary entry point.

fn main() {
    if let Err(err) = gitling::cli::run() {
        gitling::ui::output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
