use std::io::Write;

/// Initialize process-wide logging.
///
/// Logs at `info` by default, `RUST_LOG` overrides the filter. Safe to call
/// more than once, later calls are no-ops.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                buf.timestamp_millis(),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .ok();
}
