//! Command to detect the URL base path of a request.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use rootpaths::{BasePathContext, ServerMode};

/// Server mode argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ServerModeArg {
    /// Built-in development server
    Builtin,
    /// Regular web server
    Web,
}

impl From<ServerModeArg> for ServerMode {
    fn from(arg: ServerModeArg) -> Self {
        match arg {
            ServerModeArg::Builtin => ServerMode::BuiltinServer,
            ServerModeArg::Web => ServerMode::WebServer,
        }
    }
}

/// Detect the URL prefix an application is served under.
#[derive(Args)]
pub struct BasePathCommand {
    /// The request's SCRIPT_NAME
    #[arg(long, value_name = "PATH")]
    pub script_name: String,

    /// The request's REQUEST_URI
    #[arg(long, value_name = "URI")]
    pub request_uri: Option<String>,

    /// Server mode
    #[arg(long, value_enum, default_value = "web")]
    pub mode: ServerModeArg,
}

impl BasePathCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut ctx = BasePathContext::new(self.mode.into()).with_script_name(self.script_name);
        if let Some(uri) = self.request_uri {
            ctx = ctx.with_request_uri(uri);
        }

        println!("{}", ctx.detect());
        Ok(())
    }
}
