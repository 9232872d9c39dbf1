// src/replay_opt.rs
//
// Caller-side options for the replay pipeline. The core takes no
// configuration; everything here belongs to the layer that calls it.

use crate::defaults;

/// Options for [`crate::replay`]
#[derive(Debug, Clone)]
pub struct ReplayOpt {
    /// Reject inputs longer than this many elements (None = unlimited).
    /// The DP table is `(m+1)*(n+1)` cells, so this bounds memory.
    pub max_input_len: Option<usize>,
    /// Record a per-cell step log
    pub trace_steps: bool,
    /// Worker threads for batch mode (None = all cores)
    pub threads: Option<usize>,
    /// 1=error, 2=warning, 3=message, 4=debug, 5+=trace
    pub verbosity: i32,
}

impl Default for ReplayOpt {
    fn default() -> Self {
        ReplayOpt {
            max_input_len: Self::length_guard(defaults::MAX_INPUT_LEN),
            trace_steps: defaults::TRACE_STEPS,
            threads: None,
            verbosity: defaults::VERBOSITY,
        }
    }
}

impl ReplayOpt {
    /// Map a CLI length limit to a guard; 0 disables it
    pub fn length_guard(max_len: usize) -> Option<usize> {
        (max_len > 0).then_some(max_len)
    }

    /// Map verbosity to a log level filter
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            v if v <= 1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Parse one `source<TAB>target` batch line.
    ///
    /// A line without a separator is an error; empty fields are allowed.
    pub fn parse_pair_line(line: &str) -> Result<(String, String), String> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match line.split_once(defaults::PAIR_SEPARATOR) {
            Some((source, target)) if !target.contains(defaults::PAIR_SEPARATOR) => {
                Ok((source.to_string(), target.to_string()))
            }
            Some(_) => Err(format!("Expected exactly two tab-separated fields: {:?}", line)),
            None => Err(format!("Missing tab separator: {:?}", line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opt = ReplayOpt::default();
        assert_eq!(opt.max_input_len, Some(defaults::MAX_INPUT_LEN));
        assert!(!opt.trace_steps);
        assert_eq!(opt.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_length_guard() {
        assert_eq!(ReplayOpt::length_guard(0), None);
        assert_eq!(ReplayOpt::length_guard(42), Some(42));
    }

    #[test]
    fn test_log_level_mapping() {
        let mut opt = ReplayOpt::default();
        opt.verbosity = 0;
        assert_eq!(opt.log_level(), log::LevelFilter::Error);
        opt.verbosity = 2;
        assert_eq!(opt.log_level(), log::LevelFilter::Warn);
        opt.verbosity = 4;
        assert_eq!(opt.log_level(), log::LevelFilter::Debug);
        opt.verbosity = 9;
        assert_eq!(opt.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_parse_pair_line() {
        assert_eq!(
            ReplayOpt::parse_pair_line("kitten\tsitting"),
            Ok(("kitten".to_string(), "sitting".to_string()))
        );
        assert_eq!(
            ReplayOpt::parse_pair_line("\thello\r"),
            Ok((String::new(), "hello".to_string()))
        );
        assert!(ReplayOpt::parse_pair_line("no separator").is_err());
        assert!(ReplayOpt::parse_pair_line("a\tb\tc").is_err());
    }
}
