use clap::Parser;

mod args;
mod build;
mod init;

fn main() {
    human_panic::setup_panic!();

    let args = args::Args::parse();
    args.color.write_global();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .format_target(false)
        .init();

    let result = args.command.run();
    proc_exit::exit(result.map_err(|err| proc_exit::Code::FAILURE.with_message(err)));
}
