//! Human-readable verdict reporting

use super::guard::{AccuracyCheck, LatencyCheck, Verdict};
use std::fmt;

fn status(passed: bool) -> &'static str {
    if passed {
        "ok"
    } else {
        "REGRESSED"
    }
}

impl fmt::Display for AccuracyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "accuracy: current={:.4} baseline={:.4} [{}]",
            self.current,
            self.baseline,
            status(self.passed())
        )
    }
}

impl fmt::Display for LatencyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "latency: current={:.4}ms baseline={:.4}ms [{}]",
            self.current_ms(),
            self.baseline_ms(),
            status(self.passed())
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.accuracy)?;
        writeln!(f, "{}", self.latency)?;
        write!(
            f,
            "verdict: {}",
            if self.passed() { "PASS" } else { "FAIL" }
        )
    }
}

impl Verdict {
    /// Export the verdict as a markdown table
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("| Check | Current | Baseline | Status |\n");
        md.push_str("|-------|---------|----------|--------|\n");
        md.push_str(&format!(
            "| Accuracy | {:.4} | {:.4} | {} |\n",
            self.accuracy.current,
            self.accuracy.baseline,
            status(self.accuracy.passed())
        ));
        md.push_str(&format!(
            "| Latency (ms) | {:.4} | {:.4} | {} |\n",
            self.latency.current_ms(),
            self.latency.baseline_ms(),
            status(self.latency.passed())
        ));
        md
    }
}
