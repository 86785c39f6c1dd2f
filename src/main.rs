fn main() {
    urbanenv::app::cli::run();
}
