use serde::Deserialize;
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WeatherCfg {
    #[serde(default)]
    pub http: HttpCfg,
    #[serde(default)]
    pub influx: InfluxCfg,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct HttpCfg {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}
impl Default for HttpCfg {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Store connection settings. Presence is not checked here; an empty url or
/// token shows up as a failed write.
#[derive(Deserialize, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct InfluxCfg {
    pub url: String,
    pub token: String,
    pub org: String,
    pub bucket: String,
    pub timeout_ms: u64,
}
impl Default for InfluxCfg {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            org: String::new(),
            bucket: String::new(),
            timeout_ms: 10_000,
        }
    }
}

impl fmt::Debug for InfluxCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfluxCfg")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .field("org", &self.org)
            .field("bucket", &self.bucket)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 6969)
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub http_bind: Option<String>,
}

impl WeatherCfg {
    pub fn load(path: Option<String>, overrides: CliOverrides) -> anyhow::Result<Self> {
        Self::from_builder(build_config(path, overrides)?)
    }

    fn from_builder(cfg: config::Config) -> anyhow::Result<Self> {
        Ok(cfg.try_deserialize()?)
    }
}

const INFLUX_ENV: [(&str, &str); 4] = [
    ("influx.url", "INFLUX_URL"),
    ("influx.token", "INFLUX_TOKEN"),
    ("influx.org", "INFLUX_ORG"),
    ("influx.bucket", "INFLUX_BUCKET"),
];

fn build_config(path: Option<String>, overrides: CliOverrides) -> anyhow::Result<config::Config> {
    use config::Environment;
    let builder = file_sources(path)
        .add_source(Environment::with_prefix("WEATHER").separator("__"));
    let builder = influx_overrides(builder, |var| std::env::var(var).ok())?
        .set_override_option("http.bind", overrides.http_bind)?;

    Ok(builder.build()?)
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn influx_overrides(
    mut builder: Builder,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Builder> {
    for (key, var) in INFLUX_ENV {
        builder = builder.set_override_option(key, lookup(var))?;
    }
    Ok(builder)
}

fn file_sources(path: Option<String>) -> Builder {
    use config::{Config, File};
    let mut builder = Config::builder().add_source(File::with_name("weather").required(false));
    if let Some(path) = path {
        builder = builder.add_source(File::with_name(&path));
    }
    builder
}
