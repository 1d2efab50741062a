// Encoder configuration: defaults, JSON loading, validation.

#[cfg(test)]
mod tests {
    use std::fs;

    use fastlog_core::config::{ConfigError, FastLogConfig};
    use fastlog_core::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_LEVEL, MAX_BLOCK_SIZE};

    #[test]
    fn defaults_match_constants() {
        let cfg = FastLogConfig::default();
        assert_eq!(cfg.level, DEFAULT_LEVEL);
        assert_eq!(cfg.level, 9);
        assert_eq!(cfg.block_size, DEFAULT_BLOCK_SIZE);
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = FastLogConfig::from_json_str(r#"{ "level": 4 }"#).unwrap();
        assert_eq!(cfg.level, 4);
        assert_eq!(cfg.block_size, DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn json_round_trip() {
        let cfg = FastLogConfig { level: 12, block_size: 65_536 };
        let back = FastLogConfig::from_json_str(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            FastLogConfig::from_json_str(r#"{ "levle": 4 }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            FastLogConfig::from_json_str(r#"{ "level": 13 }"#),
            Err(ConfigError::LevelOutOfRange { have: 13, min: 1, max: 12 })
        ));
        assert!(matches!(
            FastLogConfig::from_json_str(r#"{ "block_size": 0 }"#),
            Err(ConfigError::BlockSizeZero)
        ));

        let too_big = FastLogConfig { block_size: MAX_BLOCK_SIZE + 1, ..FastLogConfig::default() };
        assert!(matches!(too_big.validate(), Err(ConfigError::BlockSizeTooLarge { .. })));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("fastlog-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "level": 2, "block_size": 4096 }"#).unwrap();
        let cfg = FastLogConfig::from_json_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg, FastLogConfig { level: 2, block_size: 4096 });
        assert!(matches!(FastLogConfig::from_json_file(&path), Err(ConfigError::Io(_))));
    }
}
