fn main() {
    galley::cli::run();
}
