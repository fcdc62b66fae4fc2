use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::ArgAction;
use gs12urn::{
    domain::{DEFAULT_GTIN_PREFIX, DEFAULT_NODE_NAME, DEFAULT_SSCC_PREFIX},
    Config,
};
use tracing::instrument;

/// A GTIN/SSCC to URN conversion tool.
///
/// Reads an inbound XML file and prints one EPC URN per GTIN or SSCC value
/// found in it.
///
/// Example:
///
///     gs12urn ./inbound.xml
///     gs12urn ./inbound-sscc.xml --node-name cmn:SSCC
#[derive(Debug, clap::Parser)]
#[command(version, about, verbatim_doc_comment)]
pub struct Cli {
    /// The inbound XML file
    inbound_file: PathBuf,

    /// The XML node name that contains the GTIN/SSCC values, with namespace
    #[arg(long, value_name = "NAME", default_value = DEFAULT_NODE_NAME)]
    node_name: String,

    /// The beginning of the URN for GTINs
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_GTIN_PREFIX)]
    gtin_uri: String,

    /// The beginning of the URN for SSCCs
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_SSCC_PREFIX)]
    sscc_uri: String,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        self.convert(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn config(&self) -> Config {
        Config::default()
            .with_node_name(&self.node_name)
            .with_gtin_prefix(&self.gtin_uri)
            .with_sscc_prefix(&self.sscc_uri)
    }

    /// Converts the inbound file, writing one URN per line to `out`.
    #[instrument(level = "debug", skip(self, out), fields(file = %self.inbound_file.display()))]
    fn convert<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let file = File::open(&self.inbound_file)
            .with_context(|| format!("failed to open {}", self.inbound_file.display()))?;

        let urns = gs12urn::scan(BufReader::new(file), &self.config())
            .with_context(|| format!("failed to read {}", self.inbound_file.display()))?;

        for urn in urns {
            writeln!(out, "{urn}")?;
        }
        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout is reserved for URNs
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
