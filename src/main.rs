// SPDX-License-Identifier: MPL-2.0
use shelfwise::app::{self, paths, Flags};

const HELP: &str = "\
Shelfwise - store and inventory admin dashboard

USAGE:
  shelfwise [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --route <PATH>        Page to open on startup (default: /)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory for diagnostics reports
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        route: args.opt_value_from_str("--route").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
    };

    for unknown in args.finish() {
        eprintln!("Ignoring unexpected argument: {}", unknown.to_string_lossy());
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
