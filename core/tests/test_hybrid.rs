// Hybrid codec behavior:
// * primary -> fallback escalation and the both-failed path
// * legacy (4x) vs exact-size decompression
// * status code mapping
// * interop between liblz4 and lz4_flex primitives

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use fastlog_core::api;
    use fastlog_core::hybrid::{CompressionPath, HybridCodec, HybridError, Lz4Codec, Phase, Status};
    use fastlog_core::primitives::{
        worst_case_bound, BoundedDecompressor, FallbackCompressor, FlexFast, FlexSafe, Lz4Fast, Lz4Hc,
        Lz4Safe, PrimaryCompressor, PrimitiveError,
    };
    use proptest::prelude::*;

    fn sample_log(len: usize) -> Vec<u8> {
        let line = b"2024-03-01T12:00:00Z INFO request served status=200 path=/api/v1/items\n";
        line.iter().copied().cycle().take(len).collect()
    }

    fn noise(len: usize) -> Vec<u8> {
        // xorshift: incompressible enough for LZ4
        let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
        (0..len)
            .map(|_| {
                x ^= x << 13;
                x ^= x >> 7;
                x ^= x << 17;
                x as u8
            })
            .collect()
    }

    // ## Test doubles

    #[derive(Debug, Default)]
    struct FailingPrimary {
        calls: AtomicUsize,
    }

    impl PrimaryCompressor for FailingPrimary {
        fn name(&self) -> &'static str {
            "failing-primary"
        }

        fn compress(&self, _input: &[u8], _level: i32, _dst: &mut [u8]) -> Result<usize, PrimitiveError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(PrimitiveError::Failed { codec: self.name(), msg: "forced".into() })
        }
    }

    #[derive(Debug, Default)]
    struct ZeroPrimary;

    impl PrimaryCompressor for ZeroPrimary {
        fn name(&self) -> &'static str {
            "zero-primary"
        }

        fn compress(&self, _input: &[u8], _level: i32, _dst: &mut [u8]) -> Result<usize, PrimitiveError> {
            Ok(0)
        }
    }

    #[derive(Debug, Default)]
    struct OverrunPrimary;

    impl PrimaryCompressor for OverrunPrimary {
        fn name(&self) -> &'static str {
            "overrun-primary"
        }

        fn compress(&self, _input: &[u8], _level: i32, dst: &mut [u8]) -> Result<usize, PrimitiveError> {
            Ok(dst.len() + 1)
        }
    }

    #[derive(Debug, Default)]
    struct CountingFallback {
        calls: Arc<AtomicUsize>,
    }

    impl FallbackCompressor for CountingFallback {
        fn name(&self) -> &'static str {
            "counting-fallback"
        }

        fn compress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Lz4Fast.compress(input, dst)
        }
    }

    #[derive(Debug, Default)]
    struct FailingFallback;

    impl FallbackCompressor for FailingFallback {
        fn name(&self) -> &'static str {
            "failing-fallback"
        }

        fn compress(&self, _input: &[u8], _dst: &mut [u8]) -> Result<usize, PrimitiveError> {
            Err(PrimitiveError::Failed { codec: self.name(), msg: "forced".into() })
        }
    }

    /// Records the capacity it was handed, then defers to liblz4.
    #[derive(Debug, Default)]
    struct CapacityProbe {
        seen: Arc<AtomicUsize>,
    }

    impl BoundedDecompressor for CapacityProbe {
        fn name(&self) -> &'static str {
            "capacity-probe"
        }

        fn decompress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError> {
            self.seen.store(dst.len(), Ordering::SeqCst);
            Lz4Safe.decompress(input, dst)
        }
    }

    // # ✅ 1. Round trips through the default codec

    #[test]
    fn block_round_trip_at_default_level() {
        let codec = Lz4Codec::lz4();
        let data = sample_log(64 * 1024);

        let packed = codec.compress_block(&data, 9).unwrap();
        assert_eq!(packed.path(), CompressionPath::Primary);
        assert!(packed.len() < data.len());
        assert!(packed.len() <= worst_case_bound(data.len()).unwrap());

        let restored = codec.decompress_block(packed.as_bytes(), data.len()).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn legacy_round_trip_within_heuristic() {
        // Random bytes barely compress, so 4x capacity is plenty.
        let data = noise(10_000);
        let packed = api::compress(&data, 9, 4, 65_536).unwrap();
        assert!(packed.len() <= worst_case_bound(data.len()).unwrap());
        assert_eq!(api::decompress(&packed).unwrap(), data);
    }

    #[test]
    fn every_level_round_trips() {
        let codec = Lz4Codec::lz4();
        let data = sample_log(20_000);
        for level in 1..=12 {
            let packed = codec.compress_block(&data, level).unwrap();
            assert_eq!(codec.decompress_block(packed.as_bytes(), data.len()).unwrap(), data, "level {level}");
        }
    }

    #[test]
    fn empty_input_round_trips() {
        let packed = api::compress_block(&[], 9).unwrap();
        assert!(!packed.is_empty());
        assert!(api::decompress_block(&packed, 0).unwrap().is_empty());

        let legacy = api::compress(&[], 9, 0, 0).unwrap();
        assert!(api::decompress(&legacy).unwrap().is_empty());
    }

    #[test]
    fn legacy_parameters_do_not_change_output() {
        let data = sample_log(50_000);
        let a = api::compress(&data, 9, 1, 4096).unwrap();
        let b = api::compress(&data, 9, 16, 1 << 20).unwrap();
        let c = api::compress_block(&data, 9).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    // # ✅ 2. Heuristic limitation of legacy decompression

    #[test]
    fn highly_compressible_input_needs_exact_size() {
        let data = vec![0u8; 100_000];
        let packed = api::compress(&data, 9, 0, 0).unwrap();
        assert!(packed.len() * 4 < data.len());

        let legacy = api::decompress(&packed);
        assert_eq!(Status::of(&legacy), Status::ErrDecompress);

        let exact = api::decompress_block(&packed, data.len()).unwrap();
        assert_eq!(exact, data);
    }

    #[test]
    fn legacy_capacity_is_four_times_input() {
        let probe = CapacityProbe::default();
        let seen = Arc::clone(&probe.seen);
        let codec = HybridCodec::new(Lz4Hc, Lz4Fast, probe);

        let packed = codec.compress_block(&noise(3_000), 9).unwrap();
        codec.decompress_legacy(packed.as_bytes()).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), packed.len() * 4);

        let _ = codec.decompress_block(packed.as_bytes(), 1234);
        assert_eq!(seen.load(Ordering::SeqCst), 1234);
    }

    // # ✅ 3. Exact-size decompression edge cases

    #[test]
    fn undersized_expected_size_fails() {
        let data = sample_log(10_000);
        let packed = api::compress_block(&data, 9).unwrap();
        let err = api::decompress_block(&packed, data.len() - 1).unwrap_err();
        assert!(matches!(err, HybridError::Decompress { capacity, .. } if capacity == data.len() - 1));
        assert_eq!(err.status(), Status::ErrDecompress);
    }

    #[test]
    fn oversized_expected_size_returns_actual_length() {
        let data = sample_log(10_000);
        let packed = api::compress_block(&data, 9).unwrap();
        let restored = api::decompress_block(&packed, data.len() + 500).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn corrupt_input_fails_on_both_paths() {
        let garbage = [0xF0u8, 0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x02];
        assert_eq!(Status::of(&api::decompress(&garbage)), Status::ErrDecompress);
        assert_eq!(Status::of(&api::decompress_block(&garbage, 1024)), Status::ErrDecompress);
    }

    #[test]
    fn truncated_stream_fails() {
        let data = noise(4_096);
        let packed = api::compress_block(&data, 9).unwrap();
        let cut = &packed[..packed.len() / 2];
        assert!(api::decompress_block(cut, data.len()).is_err());
    }

    // # ✅ 4. Escalation

    #[test]
    fn failing_primary_escalates_once() {
        let fallback = CountingFallback::default();
        let calls = Arc::clone(&fallback.calls);
        let codec = HybridCodec::new(FailingPrimary::default(), fallback, Lz4Safe);
        let data = sample_log(30_000);

        let packed = codec.compress_block(&data, 9).unwrap();
        assert!(packed.used_fallback());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(packed.status(), Status::Ok);

        let restored = codec.decompress_block(packed.as_bytes(), data.len()).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn healthy_primary_never_touches_fallback() {
        let fallback = CountingFallback::default();
        let calls = Arc::clone(&fallback.calls);
        let codec = HybridCodec::new(Lz4Hc, fallback, Lz4Safe);
        for _ in 0..3 {
            codec.compress_block(&sample_log(5_000), 9).unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn zero_and_overrun_counts_are_primary_failures() {
        let data = sample_log(8_000);

        let zero = HybridCodec::new(ZeroPrimary, Lz4Fast, Lz4Safe);
        let packed = zero.compress_block(&data, 9).unwrap();
        assert_eq!(packed.path(), CompressionPath::Fallback);

        let overrun = HybridCodec::new(OverrunPrimary, Lz4Fast, Lz4Safe);
        let packed = overrun.compress_block(&data, 9).unwrap();
        assert_eq!(packed.path(), CompressionPath::Fallback);
        assert_eq!(overrun.decompress_block(packed.as_bytes(), data.len()).unwrap(), data);
    }

    #[test]
    fn both_failing_reports_fallback_status() {
        let codec = HybridCodec::new(FailingPrimary::default(), FailingFallback, Lz4Safe);
        let result = codec.compress_legacy(&sample_log(1_000), 9, 0, 0);
        assert_eq!(Status::of(&result), Status::ErrFallback);

        match result.unwrap_err() {
            HybridError::BothFailed { primary, fallback } => {
                assert!(matches!(primary, PrimitiveError::Failed { codec: "failing-primary", .. }));
                assert!(matches!(fallback, PrimitiveError::Failed { codec: "failing-fallback", .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // # ✅ 5. Status codes

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::ErrCompress.code(), 1);
        assert_eq!(Status::ErrFallback.code(), 2);
        assert_eq!(Status::ErrDecompress.code(), 3);

        for raw in 0..=3u8 {
            assert_eq!(Status::verify(raw).unwrap().code(), raw);
        }
        assert!(Status::verify(4).is_err());
        assert!(Status::Ok.is_ok());
        assert!(!Status::ErrFallback.is_ok());
    }

    #[test]
    fn error_status_mapping() {
        let alloc_c = HybridError::Allocation { requested: 1, phase: Phase::Compress };
        let alloc_d = HybridError::Allocation { requested: 1, phase: Phase::Decompress };
        let too_big = HybridError::InputTooLarge { len: 1, max: 0 };
        assert_eq!(alloc_c.status(), Status::ErrCompress);
        assert_eq!(alloc_d.status(), Status::ErrDecompress);
        assert_eq!(too_big.status(), Status::ErrCompress);
    }

    // # ✅ 6. Primitive interop and concurrency

    #[test]
    fn flex_and_liblz4_share_the_block_format() {
        let data = sample_log(40_000);

        let c_to_rust = HybridCodec::new(Lz4Hc, FlexFast, FlexSafe);
        let packed = c_to_rust.compress_block(&data, 9).unwrap();
        assert_eq!(c_to_rust.decompress_block(packed.as_bytes(), data.len()).unwrap(), data);

        let rust_fallback = HybridCodec::new(FailingPrimary::default(), FlexFast, Lz4Safe);
        let packed = rust_fallback.compress_block(&data, 9).unwrap();
        assert!(packed.used_fallback());
        assert_eq!(rust_fallback.decompress_block(packed.as_bytes(), data.len()).unwrap(), data);
    }

    #[test]
    fn concurrent_calls_are_independent() {
        let codec = Lz4Codec::lz4();
        std::thread::scope(|s| {
            for t in 0..8usize {
                let codec = &codec;
                s.spawn(move || {
                    let data = sample_log(10_000 + t * 997);
                    for level in [1, 9, 12] {
                        let packed = codec.compress_block(&data, level).unwrap();
                        assert_eq!(codec.decompress_block(packed.as_bytes(), data.len()).unwrap(), data);
                    }
                });
            }
        });
    }

    // # ✅ 7. Properties

    proptest! {
        #[test]
        fn prop_block_round_trip(data in proptest::collection::vec(any::<u8>(), 0..8192), level in 1i32..=12) {
            let packed = api::compress_block(&data, level).unwrap();
            prop_assert!(packed.len() <= worst_case_bound(data.len()).unwrap());
            prop_assert_eq!(api::decompress_block(&packed, data.len()).unwrap(), data);
        }

        #[test]
        fn prop_fallback_output_is_decodable(data in proptest::collection::vec(any::<u8>(), 1..4096)) {
            let codec = HybridCodec::new(FailingPrimary::default(), Lz4Fast, Lz4Safe);
            let packed = codec.compress_block(&data, 9).unwrap();
            prop_assert!(packed.used_fallback());
            prop_assert_eq!(codec.decompress_block(packed.as_bytes(), data.len()).unwrap(), data);
        }
    }
}
