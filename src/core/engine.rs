use crate::core::printer::Printer;
use crate::core::{schedule, ConfigProvider, Result, VendorSource};
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};

/// Top-level driver: fetch, filter, then page results interactively.
pub struct FinderEngine<S: VendorSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: VendorSource, C: ConfigProvider> FinderEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    /// Run the whole pipeline against the reference instant `now`.
    ///
    /// All user-visible output goes through `output`; continuation
    /// answers are read from `input`. The handles are released when they
    /// are dropped, on success and error paths alike.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        now: NaiveDateTime,
        input: R,
        mut output: W,
    ) -> Result<()> {
        writeln!(output, "Start fetching data...")?;
        let records = self.source.fetch().await?;
        tracing::info!("Fetched {} vendor records", records.len());

        if records.is_empty() {
            writeln!(output, "No food trunk available at this moment!")?;
            return Ok(());
        }

        writeln!(output, "Parsing data...")?;
        let open = schedule::process(records, now);
        tracing::info!("{} vendors open at {}", open.len(), now);

        if open.is_empty() {
            writeln!(output, "No food trunk available at this moment!")?;
            return Ok(());
        }

        let mut printer = Printer::new(input, output, self.config.page_size());
        printer.present(&open)
    }
}
