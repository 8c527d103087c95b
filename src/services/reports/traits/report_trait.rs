use crate::consts::SEPARATOR_WIDTH;
use crate::errors::AppResult;
use crate::state::TripData;
use log::debug;
use std::io::Write;
use std::time::Instant;

/// A trait that defines one block of descriptive statistics over the filtered
/// record set. Implementors only read the trips; they never change them.
pub trait ReportTrait {
    /// Line printed before the statistics are computed.
    fn heading(&self) -> &'static str;

    /// Computes the statistics and writes them to `out`.
    ///
    /// # Arguments
    /// * `data` - The filtered record set.
    /// * `out` - Where the result lines go.
    ///
    /// # Returns
    /// * `AppResult<()>` - Returns `Ok(())` once the block is written,
    ///   or an `AppErrors` variant if writing fails.
    fn execute(&self, data: &TripData, out: &mut dyn Write) -> AppResult<()>;

    /// Runs `execute` between the heading and the elapsed-time footer.
    fn run(&self, data: &TripData, out: &mut dyn Write) -> AppResult<()> {
        writeln!(out, "\n{}\n", self.heading())?;
        let started = Instant::now();

        self.execute(data, out)?;

        let elapsed = started.elapsed().as_secs_f64();
        debug!("{} took {elapsed}s", self.heading());
        writeln!(out, "\nThis took {elapsed} seconds.")?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}

/// Printed in place of mode/mean values when no trip survived the filters.
pub const NO_TRIPS: &str = "No trips match the selected filters.";
