// SPDX-License-Identifier: MPL-2.0
use unrot::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        server: args.opt_value_from_str("--server").unwrap_or(None),
    };

    app::run(flags)
}
