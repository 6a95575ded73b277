//! Handler configuration from command line arguments and environment

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "opsworkscm-handler")]
#[command(about = "Run one OpsWorksCM::Server handler invocation", long_about = None)]
pub struct HandlerConfig {
    /// Region used when the invocation does not name one
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom OpsWorks CM endpoint
    #[arg(long, env = "OPSWORKSCM_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Invocation JSON file (stdin when omitted)
    #[arg(short, long, env = "OPSWORKSCM_HANDLER_INPUT")]
    pub input: Option<PathBuf>,
}

impl HandlerConfig {
    /// The request's own region wins over the configured one
    pub fn effective_region(&self, request_region: Option<&str>) -> Option<String> {
        request_region
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .or_else(|| self.region.clone())
    }
}
