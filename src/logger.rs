use log::LevelFilter;
use env_logger::{Builder, Target};
use std::io::Write;
use chrono::Local;

/// Status lines go to stdout. `RUST_LOG` overrides the `Info` default.
pub fn init() {
    Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .target(Target::Stdout)
        .init();
}
