use steamworks_webapi::cli;

fn main() {
    env_logger::init();
    cli::cli_main();
}
