use anyhow::Result;
use bitlet::LOG_ENV;
use bitlet::areas::repository::Repository;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal local version control tool",
    long_about = "bitlet stores file snapshots by content hash, stages them in an index, \
    freezes the index into commits and tracks commits with branches. \
    Everything stays in the local .git directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add files to the staging index",
        long_about = "This command hashes and stores the given files and appends them to the staging index. \
        With --all, every regular file in the repository root is staged."
    )]
    Add {
        #[arg(short = 'a', long = "all", help = "Stage every file in the repository root")]
        all: bool,
        #[arg(
            index = 1,
            required_unless_present = "all",
            conflicts_with = "all",
            help = "The files to stage"
        )]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a commit on the current branch \
        and clears the staging index."
    )]
    Commit {
        #[arg(
            index = 1,
            required_unless_present = "message_flag",
            conflicts_with = "message_flag",
            help = "The commit message"
        )]
        message: Option<String>,
        #[arg(short = 'm', long = "message", id = "message_flag", help = "The commit message")]
        message_flag: Option<String>,
    },
    #[command(name = "status", about = "List the staged files")]
    Status,
    #[command(name = "log", about = "Show the commit the current branch points to")]
    Log,
    #[command(
        name = "branch",
        about = "List branches or create a new one",
        long_about = "Without arguments, this command lists all branches and marks the current one. \
        With a name, it creates a branch pointing at the current branch's commit."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to another branch",
        long_about = "This command points HEAD at an existing branch. Files in the working directory are left untouched."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_color() {
    if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

fn open_repository(path: Option<&str>) -> Result<Repository> {
    let writer = Box::new(std::io::stdout());

    match path {
        Some(path) => Repository::new(path, writer),
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), writer)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    init_color();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = open_repository(path.as_deref())?;
            repository.init().await?;
        }
        Commands::Add { all, paths } => {
            let mut repository = open_repository(None)?;
            if *all {
                repository.add_all().await?;
            } else {
                repository.add(paths).await?;
            }
        }
        Commands::Commit {
            message,
            message_flag,
        } => {
            let mut repository = open_repository(None)?;
            let message = message
                .as_deref()
                .or(message_flag.as_deref())
                .unwrap_or_default();
            repository.commit(message).await?;
        }
        Commands::Status => {
            let mut repository = open_repository(None)?;
            repository.status().await?;
        }
        Commands::Log => {
            let repository = open_repository(None)?;
            repository.log()?;
        }
        Commands::Branch { name } => {
            let mut repository = open_repository(None)?;
            match name {
                Some(name) => {
                    repository.branch(name)?;
                }
                None => {
                    repository.list_branches()?;
                }
            }
        }
        Commands::Checkout { name } => {
            let mut repository = open_repository(None)?;
            repository.checkout(name)?;
        }
        Commands::HashObject { write, file } => {
            let mut repository = open_repository(None)?;
            repository.hash_object(file, *write)?;
        }
        Commands::CatFile { sha } => {
            let mut repository = open_repository(None)?;
            repository.cat_file(sha)?;
        }
    }

    Ok(())
}
