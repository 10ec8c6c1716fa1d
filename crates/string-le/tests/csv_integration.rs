//! CSV integration tests: bulk/stream equivalence, fan-out, batched drains.

use string_le::{
    BatchPolicy, CancellationToken, ExtractionOptions, StringLeConfig, VecSink,
    drain_csv_to_sink, extract_csv, fan_out_columns, stream_csv,
};

fn opts() -> ExtractionOptions {
    ExtractionOptions::default()
}

#[test]
fn test_bulk_no_header_all_columns() {
    let strings = string_le::extract("1, a ,2\n3,b,4\n,c,5\n", "csv", &opts());
    assert_eq!(strings, vec!["1", "a", "2", "3", "b", "4", "c", "5"]);
}

#[test]
fn test_bulk_header_single_column() {
    let options = ExtractionOptions::column(0).with_header(true);
    let strings = string_le::extract("name,age\n alice ,30\n bob ,40\n", "csv", &options);
    assert_eq!(strings, vec!["alice", "bob"]);
}

#[test]
fn test_bulk_quoting() {
    let options = ExtractionOptions::default().with_header(true);
    let strings = string_le::extract("name,desc\n\"a,1\",\"x\"\"y\"\n", "csv", &options);
    assert_eq!(strings, vec!["a,1", "x\"y"]);
}

#[test]
fn test_quoted_multiline_cell() {
    let strings = string_le::extract("\"line1\nline2\",after\n", "csv", &opts());
    assert_eq!(strings, vec!["line1\nline2", "after"]);
    assert_eq!(string_le::count_multiline(&strings), 1);
}

#[test]
fn test_stream_equals_bulk_across_option_grid() {
    let texts = [
        "1, a ,2\n3,b,4\n,c,5\n",
        "name,desc\n\"a,1\",\"x\"\"y\"\n\nlast,\n",
        "\u{feff}h1,h2\r\nv1,v2\r\n",
        "single\n",
        "",
    ];
    let option_sets = [
        ExtractionOptions::default(),
        ExtractionOptions::default().with_header(true),
        ExtractionOptions::column(0),
        ExtractionOptions::column(1).with_header(true),
        ExtractionOptions::column(42),
    ];
    for text in texts {
        for options in &option_sets {
            let bulk = extract_csv(text, options).unwrap();
            let streamed: Vec<_> = stream_csv(text, options).collect();
            assert_eq!(streamed, bulk, "text: {text:?}, options: {options:?}");
        }
    }
}

#[test]
fn test_stream_is_lazy_and_stoppable() {
    let mut big = String::from("col\n");
    for i in 0..10_000 {
        big.push_str(&format!("value-{i}\n"));
    }
    // Taking a prefix must not require draining the rest.
    let first_three: Vec<_> = stream_csv(&big, &opts()).take(3).collect();
    assert_eq!(first_three, vec!["col", "value-0", "value-1"]);
}

#[test]
fn test_fan_out_matches_per_column_extraction() {
    let text = "name,age,city\nalice,30,berlin\nbob,40,\n";
    let options = ExtractionOptions {
        select_all_columns: true,
        csv_has_header: true,
        ..ExtractionOptions::default()
    };
    let columns = fan_out_columns(text, &options, &StringLeConfig::default());
    assert_eq!(columns.len(), 3);
    for extraction in &columns {
        let single = ExtractionOptions::column(extraction.column).with_header(true);
        assert_eq!(
            extraction.strings,
            extract_csv(text, &single).unwrap(),
            "column {}",
            extraction.column
        );
    }
    assert_eq!(columns[2].strings, vec!["berlin"]);
}

#[tokio::test]
async fn test_drain_batches_and_final_flush() {
    let mut text = String::new();
    for i in 0..1_203 {
        text.push_str(&format!("row-{i}\n"));
    }
    let mut sink = VecSink::new();
    let delivered = drain_csv_to_sink(
        &text,
        &opts(),
        &BatchPolicy {
            max_items: 500,
            max_delay: std::time::Duration::from_secs(3600),
        },
        false,
        CancellationToken::new(),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(delivered, 1_203);
    assert_eq!(sink.batches.len(), 3);
    assert_eq!(sink.batches[0].len(), 500);
    assert_eq!(sink.batches[1].len(), 500);
    // The remainder arrives in the final flush.
    assert_eq!(sink.batches[2].len(), 203);
    assert_eq!(sink.values().len(), 1_203);
    assert_eq!(sink.batches[2].last().map(String::as_str), Some("row-1202"));
}

#[tokio::test]
async fn test_drain_streaming_dedupe_matches_bulk_pipeline() {
    let text = "fruit\napple\nbanana\napple\ncherry\nbanana\n";
    let options = ExtractionOptions::default().with_header(true);

    let mut sink = VecSink::new();
    drain_csv_to_sink(
        text,
        &options,
        &BatchPolicy::default(),
        true,
        CancellationToken::new(),
        &mut sink,
    )
    .await
    .unwrap();

    let bulk = string_le::dedupe(&extract_csv(text, &options).unwrap());
    assert_eq!(sink.values(), bulk);
}

#[tokio::test]
async fn test_drain_cancellation_drops_unflushed() {
    struct CancellingSink {
        token: CancellationToken,
        batches: Vec<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl string_le::BatchSink for CancellingSink {
        async fn write_batch(&mut self, batch: Vec<String>) -> string_le::Result<()> {
            self.batches.push(batch);
            // Simulate the consumer cancelling after the first flush.
            self.token.cancel();
            Ok(())
        }
    }

    let mut text = String::new();
    for i in 0..30 {
        text.push_str(&format!("v{i}\n"));
    }
    let token = CancellationToken::new();
    let mut sink = CancellingSink {
        token: token.clone(),
        batches: Vec::new(),
    };
    let delivered = drain_csv_to_sink(
        &text,
        &opts(),
        &BatchPolicy {
            max_items: 10,
            max_delay: std::time::Duration::from_secs(3600),
        },
        false,
        token,
        &mut sink,
    )
    .await
    .unwrap();

    // One batch made it out; everything buffered after cancellation is gone.
    assert_eq!(delivered, 10);
    assert_eq!(sink.batches.len(), 1);
}
