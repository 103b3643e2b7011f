// SPDX-License-Identifier: MPL-2.0
use storeit::app::{self, Flags};

const HELP: &str = "\
StoreIt - storage management browser

USAGE:
  storeit [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --data-dir <dir>     Directory holding the session store
  --config-dir <dir>   Directory holding settings.toml
  --api-url <url>      Catalog backend base URL for this run
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_url: args.opt_value_from_str("--api-url")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(error) => {
            eprintln!("storeit: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
