use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "Silhouette CLI - maps the projected area of a protein's alpha-carbon trace over a 360x360 grid of rotation angles.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input PDB file.
    #[arg(required = true, value_name = "INPUT_PDB")]
    pub input: PathBuf,

    /// Path for the output area matrix [default: area_matrix.dat].
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Grid step size in Angstroms [default: 1.0].
    #[arg(long, value_name = "FLOAT")]
    pub step: Option<f64>,

    /// Atom disk radius in Angstroms [default: 1.7].
    #[arg(long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.step=0.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides_and_repeated_set_values() {
        let cli = Cli::try_parse_from([
            "silhouette",
            "protein.pdb",
            "-o",
            "out.dat",
            "--step",
            "0.5",
            "-S",
            "grid.radius=2.0",
            "-S",
            "output.path=x.dat",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("protein.pdb"));
        assert_eq!(cli.output, Some(PathBuf::from("out.dat")));
        assert_eq!(cli.step, Some(0.5));
        assert_eq!(cli.radius, None);
        assert_eq!(cli.set_values.len(), 2);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["silhouette"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["silhouette", "in.pdb", "-q", "-v"]).is_err());
    }
}
