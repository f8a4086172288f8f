// SPDX-License-Identifier: MPL-2.0
use ai_center::app::{self, Flags};

const HELP: &str = "\
Center for Strategic Applications of Artificial Intelligence

USAGE:
  ai_center [OPTIONS]

OPTIONS:
  --lang <uk|en>        Language for this session (not saved)
  --page <name>         Starting page: home, experts, expert-detail, news
  --config-dir <dir>    Directory holding settings.toml
  --i18n-dir <dir>      Directory with uk.toml and en.toml replacing the built-in texts
  -h, --help            Print this help

ENVIRONMENT:
  AI_CENTER_CONFIG_DIR  Config directory when --config-dir is not given
  RUST_LOG              Log filter (default: warn)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        page: args.opt_value_from_str("--page")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", rest);
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{}", HELP);
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    }
}
