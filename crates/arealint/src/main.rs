mod check;
mod logging;
mod show;


use anyhow::Result;
use clap::Parser as ArgParser;


#[derive(Debug, ArgParser)]
#[command(about = "Finds course areas a player can never reach")]
pub(crate) struct Args {
    /// Increase log verbosity, repeat for more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write logs and reports to a timestamped file in this directory
    #[arg(long, global = true)]
    log_dir: Option<std::path::PathBuf>,

    /// Archives come from the Switch release (little-endian)
    #[arg(long, global = true, default_value_t = false)]
    deluxe: bool,

    #[command(subcommand)]
    command: CommandArgs,
}

impl Args {
    pub(crate) fn variant(&self) -> nsmbu_course::Variant {
        if self.deluxe {
            nsmbu_course::Variant::Deluxe
        } else {
            nsmbu_course::Variant::WiiU
        }
    }
}


#[derive(Debug, Clone, clap::Subcommand)]
pub(crate) enum CommandArgs {
    Check(check::Args),
    Show(show::Args),
}


fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = logging::init(args.verbose, args.log_dir.as_deref())?;

    match &args.command {
        CommandArgs::Check(sub_args) => check::execute(&args, sub_args)?,
        CommandArgs::Show(sub_args) => show::execute(&args, sub_args)?,
    }

    Ok(())
}
