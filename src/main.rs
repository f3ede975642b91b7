use std::io::{self, Write};

use fast_fibonacci::report::{write_report, BenchmarkPlan};

// Always exits with status 0; a failed stdout write is only logged.
fn main() {
    pretty_env_logger::init();

    let plan = BenchmarkPlan::DEFAULT;
    log::info!("running benchmark plan {plan:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &plan).and_then(|()| out.flush()) {
        log::error!("failed to write report: {e}");
    }
}
