use proptest::prelude::*;
use seqfile_tools::{
    Bounds, Error, ErrorPolicy, FastqFilter, FastqReader, FastqRecord, FilterOptions, FormatError,
    filter_fastq, filter_fastq_stream,
};
use std::fs;
use std::io::{BufReader, Cursor};
use tempfile::tempdir;

const TWO_RECORDS: &str = "@seq1\nACGT\n+\n!!!!\n@seq2\nAAAA\n+\n!!!!\n";

fn opts(gc: (f64, f64), length: (usize, usize), min_quality: f64) -> FilterOptions {
    FilterOptions {
        gc: Bounds::new(gc.0, gc.1).unwrap(),
        length: Bounds::new(length.0, length.1).unwrap(),
        min_quality,
        on_malformed: ErrorPolicy::Return,
    }
}

fn run(input: &str, opts: &FilterOptions) -> Result<String, Error> {
    let reader = FastqReader::from_bufread(Cursor::new(input.as_bytes().to_vec()));
    let mut out = Vec::new();
    filter_fastq_stream(reader, &mut out, opts)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn everything_passes_wide_bounds() {
    let out = run(TWO_RECORDS, &opts((0.0, 100.0), (0, 10), 0.0)).unwrap();
    assert_eq!(out, TWO_RECORDS);
}

#[test]
fn length_upper_bound_excludes_all() {
    let out = run(TWO_RECORDS, &opts((0.0, 100.0), (0, 3), 0.0)).unwrap();
    assert_eq!(out, "");
}

#[test]
fn quality_threshold_excludes_low_quality() {
    let o = FilterOptions {
        min_quality: 40.0,
        ..FilterOptions::default()
    };
    let out = run("@seq3\nACGT\n+\n!!!!\n", &o).unwrap();
    assert_eq!(out, "");
}

#[test]
fn gc_bounds_are_inclusive() {
    // seq1 is 50% GC, seq2 0%
    let out = run(TWO_RECORDS, &opts((50.0, 50.0), (0, 10), 0.0)).unwrap();
    assert_eq!(out, "@seq1\nACGT\n+\n!!!!\n");
    let out = run(TWO_RECORDS, &opts((0.0, 49.9), (0, 10), 0.0)).unwrap();
    assert_eq!(out, "@seq2\nAAAA\n+\n!!!!\n");
}

#[test]
fn separator_is_normalised_to_plus() {
    let out = run("@r\nGG\n+r\nII\n", &FilterOptions::default()).unwrap();
    assert_eq!(out, "@r\nGG\n+\nII\n");
}

#[test]
fn length_mismatch_fails_by_default() {
    let input = "@ok\nACGT\n+\nIIII\n@bad\nACGT\n+\nIII\n";
    match run(input, &FilterOptions::default()).unwrap_err() {
        Error::Record { header, source } => {
            assert_eq!(header, "@bad");
            assert_eq!(source, FormatError::LengthMismatch { seq: 4, qual: 3 });
        }
        other => panic!("expected record error, got {other:?}"),
    }
}

#[test]
fn length_mismatch_skipped_in_skip_mode() {
    let input = "@bad\nACGT\n+\nIII\n@ok\nACGT\n+\nIIII\n";
    let o = FilterOptions {
        on_malformed: ErrorPolicy::Skip,
        ..FilterOptions::default()
    };
    let reader = FastqReader::from_bufread(BufReader::new(input.as_bytes()));
    let mut out = Vec::new();
    let stats = filter_fastq_stream(reader, &mut out, &o).unwrap();
    assert_eq!(out, b"@ok\nACGT\n+\nIIII\n");
    assert_eq!(stats.seen, 2);
    assert_eq!(stats.passed, 1);
    assert_eq!(stats.skipped, 1);
}

#[test]
fn filter_fastq_writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fastq");
    let output = dir.path().join("out.fastq");
    fs::write(&input, TWO_RECORDS).unwrap();

    let o = FilterOptions {
        length: Bounds::at_most(10).unwrap(),
        ..FilterOptions::default()
    };
    let stats = filter_fastq(&input, &output, &o).unwrap();
    assert_eq!(stats.passed, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), TWO_RECORDS);

    // rerun overwrites rather than appends
    let o = FilterOptions {
        length: Bounds::at_most(3).unwrap(),
        ..FilterOptions::default()
    };
    filter_fastq(&input, &output, &o).unwrap();
    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn missing_input_is_an_error_and_creates_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.fastq");
    let err = filter_fastq(dir.path().join("nonexistent.fastq"), &output, &FilterOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(!output.exists());
}

#[test]
fn inverted_gc_bounds_are_rejected() {
    assert!(Bounds::new(50.0, 40.0).is_err());
}

#[test]
fn filtered_iterator_is_lazy() {
    // the second record is truncated; taking one survivor never reaches it
    let input = "@a\nACGT\n+\nIIII\n@b\nAC";
    let filter = FastqFilter::default();
    let reader = FastqReader::from_bufread(BufReader::new(input.as_bytes()));
    let first: Vec<_> = filter.apply(reader).take(1).collect::<Result<_, _>>().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].header, "@a");
}

fn arb_record() -> impl Strategy<Value = FastqRecord> {
    (0usize..30).prop_flat_map(|len| {
        (
            0u32..1000,
            proptest::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')], len),
            proptest::collection::vec(33u8..=73, len),
        )
            .prop_map(|(id, seq, qual)| FastqRecord {
                header: format!("@r{id}"),
                seq,
                qual,
            })
    })
}

fn keep(records: &[FastqRecord], o: &FilterOptions) -> Vec<FastqRecord> {
    FastqFilter::new(o.clone())
        .apply(records.iter().cloned().map(Ok))
        .collect::<Result<_, _>>()
        .unwrap()
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        records in proptest::collection::vec(arb_record(), 0..20),
        gc in 0.0f64..100.0,
        len in 0usize..30,
        q in 0.0f64..40.0,
    ) {
        let o = FilterOptions {
            gc: Bounds::at_most(gc).unwrap(),
            length: Bounds::at_most(len).unwrap(),
            min_quality: q,
            on_malformed: ErrorPolicy::Return,
        };
        let once = keep(&records, &o);
        let twice = keep(&once, &o);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn survivors_keep_input_order(
        records in proptest::collection::vec(arb_record(), 0..20),
        q in 0.0f64..40.0,
    ) {
        let o = FilterOptions { min_quality: q, ..FilterOptions::default() };
        let kept = keep(&records, &o);
        let expected: Vec<_> = records
            .iter()
            .filter(|r| r.mean_quality() >= q)
            .cloned()
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn scalar_bound_equals_zero_based_pair(
        records in proptest::collection::vec(arb_record(), 0..20),
        gc in 0.0f64..100.0,
        len in 0usize..30,
    ) {
        let scalar = FilterOptions {
            gc: Bounds::from_values(&[gc]).unwrap(),
            length: Bounds::from_values(&[len]).unwrap(),
            ..FilterOptions::default()
        };
        let pair = FilterOptions {
            gc: Bounds::new(0.0, gc).unwrap(),
            length: Bounds::new(0, len).unwrap(),
            ..FilterOptions::default()
        };
        prop_assert_eq!(keep(&records, &scalar), keep(&records, &pair));
    }
}
