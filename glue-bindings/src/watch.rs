/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::{Duration, Instant};

/// Measures the duration of named build steps.
///
/// Build scripts print the result with [`write_stats_to()`](Self::write_stats_to), which ends up in the
/// `output` file of the build directory (visible with `cargo build -vv`).
pub struct StopWatch {
    last_instant: Instant,
    metrics: Vec<Metric>,
    name_len: usize,
}

struct Metric {
    name: String,
    duration: Duration,
}

impl StopWatch {
    pub fn start() -> Self {
        Self {
            last_instant: Instant::now(),
            metrics: vec![],
            name_len: 0,
        }
    }

    /// Records the time elapsed since the last call to `record()` (or since `start()`), under `what`.
    pub fn record(&mut self, what: impl Into<String>) {
        let now = Instant::now();
        let name = what.into();

        self.name_len = self.name_len.max(name.len());
        self.metrics.push(Metric {
            name,
            duration: now - self.last_instant,
        });
        self.last_instant = now;
    }

    pub fn total(&self) -> Duration {
        self.metrics.iter().map(|m| m.duration).sum()
    }

    pub fn write_stats_to(&self, to: &mut impl std::io::Write) {
        let width = self.name_len;

        writeln!(to, "Build step durations:").expect("write stats");
        for metric in self.metrics.iter() {
            let Metric { name, duration } = metric;
            let millis = duration.as_millis();

            writeln!(to, "   {name:>width$}   {millis:>5}ms").expect("write stats");
        }

        let total = self.total().as_millis();
        writeln!(to, "   {:>width$}   {total:>5}ms", "total").expect("write stats");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_list_each_step() {
        let mut watch = StopWatch::start();
        watch.record("load");
        watch.record("generate_classes");

        let mut out = Vec::new();
        watch.write_stats_to(&mut out);
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("load"));
        assert!(text.contains("generate_classes"));
        assert!(text.contains("total"));
        assert_eq!(text.lines().count(), 4);
    }
}
