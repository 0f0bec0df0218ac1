//! Report rendering.
//!
//! The matcher returns data; this module owns the output format. Successes
//! are always shown before errors, and the overall verdict is explicit.

use tracing::{error, info};
use vouch_core::{Finding, Report};

const BANNER: &str = "******************************";

/// Log a banner-framed phase marker.
pub fn phase(message: &str) {
    info!("{BANNER}");
    info!("{message}");
    info!("{BANNER}");
}

/// Render a full report: verdict first, then passes, then failures.
pub fn report(report: &Report) {
    if report.passed() {
        phase("The validation result is PASS.");
        info!("The details are as following.");
        for finding in &report.successes {
            info!(" * {}", finding.message);
        }
    } else {
        phase("The validation result is FAIL.");
        info!("The details are as following.");
        if !report.successes.is_empty() {
            info!("The following part validation result is PASS.");
            for finding in &report.successes {
                info!(" * {}", finding.message);
            }
        }
        info!("The following part validation result is FAIL.");
        for finding in &report.errors {
            error!("{}", coded_line(finding));
        }
    }
}

/// Prefix a failure message with its diagnostic code.
fn coded_line(finding: &Finding) -> String {
    match finding.code {
        Some(code) => format!("{code}: {}", finding.message),
        None => finding.message.clone(),
    }
}
