use crate::config::load_scenario;
use std::io::Write;
use std::path::Path;

/// Runs the scenario at `path` (or the reference one) into `out`.
///
/// Returns the process exit status. Failures are reported on `err` as
/// `error: <message>` with status 1; the demo itself never fails.
pub fn run<O, E>(path: Option<&Path>, no_color: bool, out: &mut O, err: &mut E) -> u8
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match load_scenario(path, no_color).and_then(|scenario| scenario.run(&mut *out)) {
        Ok(()) => 0,
        Err(error) => {
            // Nothing left to report to if stderr is gone too.
            let _ = writeln!(err, "error: {error}");
            1
        }
    }
}
