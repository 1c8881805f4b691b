//! pgen command-line entry point

fn main() {
    // Logging is initialised in `cli::run` once `--debug` / `--trace` are known.
    pgen::cli::run();
}
