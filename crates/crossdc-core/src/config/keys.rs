//! Well-known configuration keys and locations

/// Comma-separated broker list the producer connects to.
pub const BOOTSTRAP_SERVERS: &str = "bootstrapServers";

/// Topic the producer mirrors updates into.
pub const TOPIC_NAME: &str = "topicName";

/// Keys that must resolve to a non-null value. There is no default for either.
pub const REQUIRED_KEYS: [&str; 2] = [BOOTSTRAP_SERVERS, TOPIC_NAME];

/// Coordination-service path read when no override is configured.
pub const DEFAULT_PROPS_PATH: &str = "/crossdc.properties";

/// Environment variable overriding [`DEFAULT_PROPS_PATH`].
pub const PROPS_PATH_ENV: &str = "CROSSDC_PROPS_PATH";
