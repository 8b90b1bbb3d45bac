use crate::domain::ports::ConfigProvider;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::ffi::OsString;

/// Used in the usage line when the OS hands us no argument 0 at all.
pub const DEFAULT_PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, Parser)]
#[command(name = "greeter")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Argument 0 as invoked; filled in by `from_args`.
    #[arg(skip)]
    pub program: String,

    #[arg(allow_hyphen_values = true, value_parser = OsStringValueParser::new().map(lossy))]
    pub name: Option<String>,

    /// Anything after the name is accepted and ignored.
    #[arg(
        hide = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = OsStringValueParser::new().map(lossy)
    )]
    pub ignored: Vec<String>,
}

fn lossy(value: OsString) -> String {
    value.to_string_lossy().into_owned()
}

impl CliConfig {
    /// Parses a full argument sequence, argument 0 included.
    ///
    /// Exits through clap on a parse error, like `Parser::parse`.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = args
            .first()
            .map(|arg0| arg0.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

        let mut config = if args.is_empty() {
            CliConfig::parse_from([DEFAULT_PROGRAM_NAME])
        } else {
            CliConfig::parse_from(&args)
        };
        config.program = program;
        // clap swallows a literal `--` as end-of-options; the name is argument 1 verbatim
        config.name = args.get(1).cloned().map(lossy);
        config.ignored = args.iter().skip(2).cloned().map(lossy).collect();
        config
    }

    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }
}

impl ConfigProvider for CliConfig {
    fn program(&self) -> &str {
        &self.program
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
