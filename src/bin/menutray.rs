//! Command-line interface for menutray
//! Reads a menu description, then shows, checks or activates the menu it describes.
//!
//! Usage:
//!   menutray show [--format `<format>`] [--command] `<source>`...   - Print the tray menu
//!   menutray check [--command] `<source>`...                        - Validate a description
//!   menutray run --entry `<A/B/C>` [--wait] [--command] `<source>`... - Run an entry's command
//!   menutray formats                                              - List output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use menutray::config::{Loader, TrayConfig};
use menutray::menu::formats::{FormatRegistry, RenderOptions};
use menutray::menu::parse_menu;
use menutray::tray::{
    activate, assemble_menu, reap, Activation, DescriptionSource, IconResolver, ShellLauncher,
};
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

type CliResult = Result<ExitCode, Box<dyn Error>>;

fn source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("command")
                .long("command")
                .help("Treat the sources as a command line whose output is the description")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("source")
                .help("Description file, or program and arguments with --command")
                .required(true)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

fn cli() -> Command {
    Command::new("menutray")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build tray menus from indented text descriptions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered over the defaults")
                .global(true),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Tray title (tooltip and root menu title)")
                .global(true),
        )
        .arg(
            Arg::new("icon")
                .long("icon")
                .help("Tray icon name or path")
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter (e.g. 'debug', 'menutray=trace'); overrides RUST_LOG")
                .global(true),
        )
        .subcommand(source_args(
            Command::new("show").about("Print the tray menu built from a description").arg(
                Arg::new("format")
                    .long("format")
                    .short('f')
                    .help("Output format (see `menutray formats`)"),
            ),
        ))
        .subcommand(source_args(
            Command::new("check").about("Validate a description and report the first error"),
        ))
        .subcommand(source_args(
            Command::new("run")
                .about("Run the command of an entry")
                .arg(
                    Arg::new("entry")
                        .long("entry")
                        .short('e')
                        .help("Entry path: submenu titles and the entry title, joined by '/'")
                        .required(true),
                )
                .arg(
                    Arg::new("wait")
                        .long("wait")
                        .help("Wait for the command and exit with its status")
                        .action(ArgAction::SetTrue),
                ),
        ))
        .subcommand(Command::new("formats").about("List available output formats"))
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    let log_level = matches
        .subcommand()
        .and_then(|(_, sub_matches)| sub_matches.get_one::<String>("log-level"))
        .or_else(|| matches.get_one::<String>("log-level"));
    init_tracing(log_level.map(String::as_str));

    let result = match matches.subcommand() {
        Some(("formats", _)) => handle_formats_command(),
        Some((name, sub_matches)) => load_config(sub_matches).and_then(|config| match name {
            "show" => handle_show_command(sub_matches, &config),
            "check" => handle_check_command(sub_matches, &config),
            "run" => handle_run_command(sub_matches, &config),
            _ => unreachable!(),
        }),
        None => unreachable!(),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    })
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<TrayConfig, Box<dyn Error>> {
    let mut loader = Loader::from_env();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.file(path);
    }
    if let Some(title) = matches.get_one::<String>("title") {
        loader = loader.title(title);
    }
    if let Some(icon) = matches.get_one::<String>("icon") {
        loader = loader.icon(icon);
    }
    Ok(loader.build()?)
}

fn read_description(matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
    let args = matches
        .get_many::<String>("source")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let source = DescriptionSource::from_args(matches.get_flag("command"), args)?;
    Ok(source.read()?)
}

/// Handle the show command
fn handle_show_command(matches: &ArgMatches, config: &TrayConfig) -> CliResult {
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.render.format);
    let registry = FormatRegistry::builtin();
    registry.get(format)?;

    let text = read_description(matches)?;
    let menu = assemble_menu(&text, &config.tray.title, Some(&config.tray.icon));
    let options = RenderOptions::from(&config.render);
    print!("{}", registry.render(&menu.tree, format, &options)?);
    Ok(ExitCode::SUCCESS)
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches, config: &TrayConfig) -> CliResult {
    let text = read_description(matches)?;
    let tree = match parse_menu(&text) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprint!("{}", error.source_context(&text));
            return Ok(ExitCode::FAILURE);
        }
    };

    let resolver = IconResolver::from_config(&config.icons);
    for icon in tree.icons() {
        if resolver.resolve(icon).is_none() {
            warn!(icon, "icon not found");
            eprintln!("warning: icon '{}' not found", icon);
        }
    }

    let entries: usize = tree.menus().map(|(_, menu)| menu.entries().count()).sum();
    println!(
        "ok: {} top-level items, {} submenus, {} entries",
        tree.root().items.len(),
        tree.menu_count() - 1,
        entries
    );
    Ok(ExitCode::SUCCESS)
}

/// Handle the run command
fn handle_run_command(matches: &ArgMatches, config: &TrayConfig) -> CliResult {
    let text = read_description(matches)?;
    let menu = assemble_menu(&text, &config.tray.title, Some(&config.tray.icon));
    let entry = matches
        .get_one::<String>("entry")
        .ok_or("an entry path is required")?;
    let path: Vec<&str> = entry.split('/').collect();

    match activate(&menu, &path, &ShellLauncher::from(&config.shell))? {
        Activation::Quit => {
            println!("quit");
            Ok(ExitCode::SUCCESS)
        }
        Activation::Spawned { mut child, checked } => {
            if let Some(checked) = checked {
                let state = if checked { "checked" } else { "unchecked" };
                println!("{} is now {}", entry, state);
            }
            if !matches.get_flag("wait") {
                // A command still running when we exit is adopted by init
                reap(child)?;
                return Ok(ExitCode::SUCCESS);
            }
            let status = child.wait()?;
            debug!(%status, "entry command finished");
            let code = status.code().unwrap_or(1);
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }
    }
}

/// Handle the formats command
fn handle_formats_command() -> CliResult {
    println!("Available output formats:\n");
    for formatter in FormatRegistry::builtin().formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
        println!();
    }
    Ok(ExitCode::SUCCESS)
}
