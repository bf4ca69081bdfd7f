//! Stderr logger configured from `SEABATTLE_LOG`.
//!
//! The variable holds comma-separated directives: a bare level sets the
//! default, `target=level` overrides it for a module path prefix, e.g.
//! `warn,seabattle::core::placement=debug`. The longest matching prefix wins.

use std::env;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log directives.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

#[derive(Debug, PartialEq, Eq)]
struct Directives {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl Directives {
    /// Unparsable directives are skipped; the default stays `info`.
    fn parse(spec: &str) -> Self {
        let mut default = LevelFilter::Info;
        let mut targets = Vec::new();
        for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        targets.push((target.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = part.parse() {
                        default = level;
                    }
                }
            }
        }
        // Longest prefix first.
        targets.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { default, targets }
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .find(|(prefix, _)| target.starts_with(prefix.as_str()))
            .map_or(self.default, |&(_, level)| level)
    }

    fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

struct StderrLogger {
    directives: Directives,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.directives.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let elapsed = self.started.elapsed();
            eprintln!(
                "[{:>4}.{:03}s {:<5} {}] {}",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger using the directives in `SEABATTLE_LOG`.
/// Calling it again is harmless.
pub fn init_logging() {
    let logger = LOGGER.get_or_init(|| StderrLogger {
        directives: Directives::parse(&env::var(LOG_ENV).unwrap_or_default()),
        started: Instant::now(),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.directives.max_level());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_means_info() {
        let d = Directives::parse("");
        assert_eq!(d.default, LevelFilter::Info);
        assert!(d.targets.is_empty());
        assert_eq!(d.max_level(), LevelFilter::Info);
    }

    #[test]
    fn bare_level_sets_default() {
        assert_eq!(Directives::parse("trace").default, LevelFilter::Trace);
        assert_eq!(Directives::parse(" Warn ").default, LevelFilter::Warn);
    }

    #[test]
    fn longest_target_prefix_wins() {
        let d = Directives::parse("warn,seabattle=info,seabattle::core::placement=debug");
        assert_eq!(d.level_for("seabattle::core::placement"), LevelFilter::Debug);
        assert_eq!(d.level_for("seabattle::core::game"), LevelFilter::Info);
        assert_eq!(d.level_for("clap"), LevelFilter::Warn);
        assert_eq!(d.max_level(), LevelFilter::Debug);
    }

    #[test]
    fn garbage_is_ignored() {
        let d = Directives::parse("loud,seabattle=??,off");
        assert_eq!(d.default, LevelFilter::Off);
        assert!(d.targets.is_empty());
    }
}
