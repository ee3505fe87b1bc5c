use clap::Parser;
use shopcart_orders::{FakeDataGenerator, PoolsError, SamplePools};
use std::path::PathBuf;
use tracing::{Level, debug};

#[derive(clap::ValueEnum, Debug, Clone)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        (&log_level).into()
    }
}

impl From<&LogLevel> for Level {
    fn from(log_level: &LogLevel) -> Self {
        match log_level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct Env {
    #[clap(long, env, default_value = "info")]
    pub log_level: LogLevel,
    /// Seed for reproducible fixtures. Without it every run produces fresh data
    #[clap(long, env = "FIXTURE_SEED")]
    pub seed: Option<u64>,
    /// JSON file replacing the built-in shop, product and variant pools
    #[clap(long, env = "FIXTURE_POOLS")]
    pub pools: Option<PathBuf>,
}

impl Env {
    pub fn load_pools(&self) -> Result<SamplePools, PoolsError> {
        match &self.pools {
            Some(path) => SamplePools::from_json_file(path),
            None => Ok(SamplePools::default()),
        }
    }

    pub fn build_generator(&self) -> Result<FakeDataGenerator, PoolsError> {
        let pools = self.load_pools()?;

        let generator = match self.seed {
            Some(seed) => {
                debug!("Using seeded fixture generator: seed={seed}");
                FakeDataGenerator::seeded(pools, seed)
            }
            None => FakeDataGenerator::from_entropy(pools),
        };

        Ok(generator)
    }
}

pub fn setup_tracing(log_level: &LogLevel) {
    let level: Level = log_level.into();
    let default_filter = format!("shopcart_fixtures={level},shopcart_orders={level}");

    // stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::io::Write;

    pub fn create_test_env(seed: u64) -> Env {
        Env {
            log_level: LogLevel::Debug,
            seed: Some(seed),
            pools: None,
        }
    }

    fn write_temp_pools(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "shopcart-fixtures-{}-{name}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(&LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_env_parses_flags() {
        let env = Env::try_parse_from([
            "shopcart-fixtures",
            "--log-level",
            "trace",
            "--seed",
            "11",
            "--pools",
            "pools.json",
        ])
        .unwrap();

        assert!(matches!(env.log_level, LogLevel::Trace));
        assert_eq!(env.seed, Some(11));
        assert_eq!(env.pools, Some(PathBuf::from("pools.json")));
    }

    #[test]
    fn test_env_rejects_bad_seed() {
        assert!(Env::try_parse_from(["shopcart-fixtures", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_seeded_env_builds_reproducible_generators() {
        let env = create_test_env(99);
        let first = env.build_generator().unwrap().generate_orders();
        let second = env.build_generator().unwrap().generate_orders();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_pools_without_file() {
        let env = create_test_env(1);
        assert_eq!(env.load_pools().unwrap(), SamplePools::default());
    }

    #[test]
    fn test_pools_file_is_used() {
        let path = write_temp_pools(
            "custom",
            r#"{"shopNames": ["Night Market"], "products": ["Lantern"], "variants": ["Red"]}"#,
        );
        let env = Env {
            pools: Some(path.clone()),
            ..create_test_env(5)
        };

        let orders = env.build_generator().unwrap().generate_orders();
        assert!(orders.iter().all(|order| order.shop_name == "Night Market"));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_empty_pool_in_file_is_rejected() {
        let path = write_temp_pools(
            "empty",
            r#"{"shopNames": [], "products": ["Lantern"], "variants": ["Red"]}"#,
        );
        let env = Env {
            pools: Some(path.clone()),
            ..create_test_env(5)
        };

        assert!(matches!(
            env.build_generator(),
            Err(PoolsError::EmptyPool { pool: "shopNames" })
        ));

        std::fs::remove_file(path).unwrap();
    }
}
