use ai_wheel::commands::{self, Config, ConfigOptions, DownloadOptions, InstallOptions};
use ai_wheel::python::PythonVersion;
use ai_wheel::runtime::RealRuntime;
use ai_wheel::wheel::{DEFAULT_REPO, DEFAULT_VERSION, HostOverrides};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// ai-wheel - algebraic_immunity wheel resolver
///
/// Prints the download URL of the pre-built algebraic_immunity wheel that
/// matches this machine's operating system, architecture and Python version.
/// It can also download the wheel or install it with pip.
///
/// If the GITHUB_TOKEN environment variable is set, it is used for GitHub API
/// requests (needed for `--version latest` and `check` under rate limits).
///
/// Examples:
///   ai-wheel                        # URL of the 0.1.0 wheel
///   ai-wheel -v 1.2.0               # URL of the 1.2.0 wheel
///   ai-wheel -v latest install      # pip install the newest release
#[derive(Parser, Debug)]
#[command(
    author,
    about,
    version = env!("AI_WHEEL_BUILD_VERSION"),
    disable_version_flag = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Version of the package release ("latest" asks GitHub)
    #[arg(
        short = 'v',
        long = "version",
        value_name = "VERSION",
        default_value = DEFAULT_VERSION,
        global = true
    )]
    version: String,

    /// Print the version of ai-wheel itself
    #[arg(short = 'V', long = "tool-version", action = clap::ArgAction::Version)]
    tool_version: Option<bool>,

    /// Operating system to resolve for instead of this one (Linux, Windows, Darwin)
    #[arg(long, value_name = "OS", global = true)]
    os: Option<String>,

    /// Architecture to resolve for instead of this one (x86_64, aarch64, AMD64, x86, arm64)
    #[arg(long, value_name = "ARCH", global = true)]
    arch: Option<String>,

    /// Python version to resolve for, e.g. 3.11 (skips probing the interpreter)
    #[arg(long = "python-version", value_name = "X.Y", global = true)]
    python_version: Option<PythonVersion>,

    /// Python interpreter used to detect the version and to run pip
    #[arg(long, value_name = "PATH", env = "AI_WHEEL_PYTHON", global = true)]
    interpreter: Option<String>,

    /// GitHub repository publishing the wheels
    #[arg(
        long,
        value_name = "OWNER/REPO",
        env = "AI_WHEEL_REPO",
        default_value = DEFAULT_REPO,
        global = true
    )]
    repo: String,

    /// Release download host (defaults to https://github.com)
    #[arg(long = "download-url", value_name = "URL", global = true)]
    download_url: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the wheel URL (the default)
    Url,

    /// Install the wheel with pip
    Install(InstallArgs),

    /// Download the wheel into a directory
    Download(DownloadArgs),

    /// Check that the release publishes a wheel for this platform
    Check,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Print the pip command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments for pip, after `--`
    #[arg(last = true, value_name = "PIP_ARGS")]
    pub pip_args: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Directory to save the wheel in (defaults to the current directory)
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Download again even if the file exists
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let options = ConfigOptions {
        repo: cli.repo,
        download_url: cli.download_url,
        api_url: cli.api_url,
        overrides: HostOverrides {
            os: cli.os,
            arch: cli.arch,
            python_version: cli.python_version,
            interpreter: cli.interpreter,
        },
    };
    let config = Config::new(RealRuntime, options)?;
    let version = cli.version;

    match cli.command.unwrap_or(Commands::Url) {
        Commands::Url => {
            commands::url(&config, &version).await?;
        }
        Commands::Install(args) => {
            let options = InstallOptions {
                dry_run: args.dry_run,
                pip_args: args.pip_args,
            };
            commands::install(&config, &version, &options).await?;
        }
        Commands::Download(args) => {
            let options = DownloadOptions {
                dir: args.dir,
                force: args.force,
            };
            commands::download(&config, &version, &options).await?;
        }
        Commands::Check => {
            commands::check(&config, &version).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["ai-wheel"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.version, "0.1.0");
        assert_eq!(cli.os, None);
        assert_eq!(cli.python_version, None);
    }

    #[test]
    fn test_cli_version_flag() {
        let cli = Cli::try_parse_from(["ai-wheel", "-v", "1.2.0"]).unwrap();
        assert_eq!(cli.version, "1.2.0");

        let cli = Cli::try_parse_from(["ai-wheel", "--version", "latest"]).unwrap();
        assert_eq!(cli.version, "latest");
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ai-wheel",
            "download",
            "-v",
            "2.0.0",
            "--os",
            "Windows",
            "--arch",
            "x86",
            "--python-version",
            "3.10",
            "--dir",
            "/tmp/wheels",
        ])
        .unwrap();
        assert_eq!(cli.version, "2.0.0");
        assert_eq!(cli.os.as_deref(), Some("Windows"));
        assert_eq!(cli.arch.as_deref(), Some("x86"));
        assert_eq!(cli.python_version, Some(PythonVersion::new(3, 10)));
        match cli.command {
            Some(Commands::Download(args)) => {
                assert_eq!(args.dir, Some(PathBuf::from("/tmp/wheels")));
                assert!(!args.force);
            }
            _ => panic!("Expected Download command"),
        }
    }

    #[test]
    fn test_cli_install_pip_args() {
        let cli =
            Cli::try_parse_from(["ai-wheel", "install", "--dry-run", "--", "--user", "-q"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert!(args.dry_run);
                assert_eq!(args.pip_args, vec!["--user", "-q"]);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_python_version() {
        let result = Cli::try_parse_from(["ai-wheel", "--python-version", "eleven"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["ai-wheel", "owner/repo"]).is_err());
    }
}
