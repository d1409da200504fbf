use std::str::FromStr;

use nalgebra::Point3;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,loctree=debug,probe=info",
        env = "PROBE_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Number of random points to index
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub points: usize,
    /// Number of distinct face labels to spread over the points
    #[arg(long, default_value_t = 100)]
    pub labels: u32,
    /// Seed for the generated point cloud
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,
    /// Focus point to query around
    #[arg(short, long, default_value = "0.5,0.5,0.5", value_parser = parse_point3::<f32>, value_name = "X,Y,Z")]
    pub query: Point3<f32>,
    /// Query radius
    #[arg(short, long, default_value_t = 0.1)]
    pub radius: f32,
    /// Maximum tree depth
    #[arg(long, default_value_t = 10)]
    pub max_depth: u32,
    /// Points a node accumulates before routing into children
    #[arg(long, default_value_t = 10)]
    pub min_node_points: usize,
    /// Cross-check the query result against a brute-force scan
    #[arg(long)]
    pub check: bool,
}

fn parse_point3<R: FromStr + nalgebra::Scalar>(
    s: &str,
) -> Result<Point3<R>, Box<dyn std::error::Error + Send + Sync + 'static>>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let mut split = s.trim().split(',');
    let mut coord = || -> Result<R, Box<dyn std::error::Error + Send + Sync + 'static>> {
        Ok(R::from_str(split.next().ok_or("expected X,Y,Z")?.trim())?)
    };
    let x = coord()?;
    let y = coord()?;
    let z = coord()?;
    Ok(nalgebra::point![x, y, z])
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
