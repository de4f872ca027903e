//! FASTQ filtering by GC content, length and mean quality.
//!
//! Records are pulled lazily from any record iterator, so a filter run never
//! holds more than one record in memory. Survivors keep their input order.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, FormatError};
use crate::policy::{ErrorPolicy, FilterOptions};
use crate::reader::FastqReader;
use crate::record::FastqRecord;
use crate::util::create_writer;

/// Counters for one filter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub seen: u64,
    pub passed: u64,
    /// Malformed records dropped under [`ErrorPolicy::Skip`].
    pub skipped: u64,
}

#[derive(Debug, Clone, Default)]
pub struct FastqFilter {
    opts: FilterOptions,
}

impl FastqFilter {
    pub fn new(opts: FilterOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.opts
    }

    /// True iff GC% and length fall within their bounds and the mean
    /// quality reaches the threshold.
    pub fn accepts(&self, rec: &FastqRecord) -> Result<bool, FormatError> {
        rec.check()?;
        Ok(self.opts.gc.contains(rec.gc_content())
            && self.opts.length.contains(rec.len())
            && rec.mean_quality() >= self.opts.min_quality)
    }

    /// Lazily keep the records that pass.
    pub fn apply<I>(&self, records: I) -> Filtered<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Result<FastqRecord, Error>>,
    {
        Filtered {
            inner: records.into_iter(),
            filter: self,
            stats: FilterStats::default(),
        }
    }
}

/// Iterator adapter returned by [`FastqFilter::apply`].
pub struct Filtered<'a, I> {
    inner: I,
    filter: &'a FastqFilter,
    stats: FilterStats,
}

impl<I> Filtered<'_, I> {
    pub fn stats(&self) -> FilterStats {
        self.stats
    }
}

impl<I> Iterator for Filtered<'_, I>
where
    I: Iterator<Item = Result<FastqRecord, Error>>,
{
    type Item = Result<FastqRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rec = match self.inner.next()? {
                Ok(rec) => rec,
                Err(err) => return Some(Err(err)),
            };
            self.stats.seen += 1;
            match self.filter.accepts(&rec) {
                Ok(true) => {
                    self.stats.passed += 1;
                    return Some(Ok(rec));
                }
                Ok(false) => continue,
                Err(source) => {
                    if self.filter.opts.on_malformed == ErrorPolicy::Skip {
                        log::warn!("skipping malformed record {}: {source}", rec.header);
                        self.stats.skipped += 1;
                        continue;
                    }
                    return Some(Err(Error::Record {
                        header: rec.header,
                        source,
                    }));
                }
            }
        }
    }
}

/// Filter `records` into `out`, writing each survivor as soon as it passes.
pub fn filter_fastq_stream<I, W>(
    records: I,
    out: &mut W,
    opts: &FilterOptions,
) -> Result<FilterStats, Error>
where
    I: IntoIterator<Item = Result<FastqRecord, Error>>,
    W: Write,
{
    let filter = FastqFilter::new(opts.clone());
    let mut survivors = filter.apply(records);
    for rec in survivors.by_ref() {
        rec?.write_to(out).map_err(Error::Write)?;
    }
    out.flush().map_err(Error::Write)?;
    Ok(survivors.stats())
}

/// Filter the FASTQ file at `input` into a freshly created `output`.
///
/// The input is opened before the output is created, so a missing input
/// leaves no output file behind.
pub fn filter_fastq<P, Q>(input: P, output: Q, opts: &FilterOptions) -> Result<FilterStats, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let reader = FastqReader::from_path(input.as_ref())?;
    let mut out = create_writer(output.as_ref())?;
    log::debug!(
        "filtering {:?} -> {:?} (gc {}, length {}, min quality {})",
        input.as_ref(),
        output.as_ref(),
        opts.gc,
        opts.length,
        opts.min_quality
    );
    let stats = filter_fastq_stream(reader, &mut out, opts)?;
    log::debug!(
        "{} of {} records kept, {} skipped",
        stats.passed,
        stats.seen,
        stats.skipped
    );
    Ok(stats)
}
