use phishx::app::{self, Flags};

fn main() -> iced::Result {
    phishx::logging::init_tracing();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_url: args.opt_value_from_str("--api-url").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}
