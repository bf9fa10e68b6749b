//! Combobox CLI
//!
//! Interactive terminal picker plus non-interactive commands for inspecting
//! filtering and replaying event sequences.

use clap::{Args, Parser, Subcommand, ValueEnum};
use combobox::script::{parse_script, replay};
use combobox::{Combobox, Event, ListContent, PickerConfig, Snapshot, NO_RESULTS};
use console::style;
use std::path::PathBuf;

/// Combobox - accessible autocomplete picker
///
/// A text input with a filtered dropdown of options, driven by keyboard
/// and mouse.
#[derive(Parser)]
#[command(name = "combobox")]
#[command(author = "Combobox Contributors")]
#[command(version)]
#[command(about = "Accessible autocomplete picker for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the label and options come from
#[derive(Args)]
struct OptionsArgs {
    /// Display and accessibility label (default: Animals)
    #[arg(short, long)]
    label: Option<String>,

    /// An option; repeat for more (overrides --options-file)
    #[arg(short = 'o', long = "option")]
    options: Vec<String>,

    /// JSON ({"label", "options"} or array) or one-option-per-line file
    #[arg(short = 'f', long)]
    options_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive picker and print the final value
    Pick {
        #[command(flatten)]
        args: OptionsArgs,
    },

    /// Show which options a query matches
    Filter {
        /// Query text (use -- before it if it starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        args: OptionsArgs,
    },

    /// Feed scripted events to the widget and print its final state
    ///
    /// Steps: type:<text>, set:<text>, backspace, down, up, enter, esc, tab,
    /// focus, blur, toggle, hover:<row>, click:<row>, outside
    Replay {
        /// Steps to run, in order
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,

        #[command(flatten)]
        args: OptionsArgs,
    },
}

impl OptionsArgs {
    fn config(&self) -> combobox::Result<PickerConfig> {
        PickerConfig::resolve(
            self.label.clone(),
            self.options.clone(),
            self.options_file.as_deref(),
        )
    }
}

fn main() {
    combobox::logging::init();
    tracing::info!(version = combobox::VERSION, "combobox starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pick { args } => cmd_pick(&args),
        Commands::Filter { query, args } => cmd_filter(&query, &args),
        Commands::Replay { steps, args } => cmd_replay(&steps, &args),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Pick command implementation
fn cmd_pick(args: &OptionsArgs) -> combobox::Result<()> {
    let config = args.config()?;
    let selection = combobox::tui::run(config)?;

    match args.output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "label": selection.label,
                    "value": selection.value,
                    "committed": selection.committed,
                })
            );
        }
        OutputFormat::Text => println!("{}", selection.value),
    }

    Ok(())
}

/// Filter command implementation
fn cmd_filter(query: &str, args: &OptionsArgs) -> combobox::Result<()> {
    let config = args.config()?;
    let mut widget = Combobox::new(config.options, config.label);
    widget.handle(Event::Input(query.to_string()));

    let matches: Vec<&str> = widget.filtered().collect();

    if args.output == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({
                "label": widget.label(),
                "query": query,
                "open": widget.is_open(),
                "matches": matches,
            })
        );
        return Ok(());
    }

    println!(
        "{} {} matching '{}':",
        style("→").cyan().bold(),
        style(widget.label()).bold(),
        style(query).yellow()
    );
    println!();

    if matches.is_empty() {
        println!("  {}", style(NO_RESULTS).dim());
    }
    for (i, option) in matches.iter().enumerate() {
        println!("  {} {}", style(format!("{:3}.", i + 1)).dim(), style(option).cyan());
    }

    println!();
    println!(
        "  {} {}",
        style("Dropdown:").bold(),
        if widget.is_open() { "open" } else { "closed" }
    );

    Ok(())
}

/// Replay command implementation
fn cmd_replay(steps: &[String], args: &OptionsArgs) -> combobox::Result<()> {
    let config = args.config()?;
    let steps = parse_script(steps)?;

    let mut widget = Combobox::new(config.options, config.label);
    replay(&mut widget, &steps);
    let snapshot = widget.snapshot();

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => print_snapshot(&snapshot),
    }

    Ok(())
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("  {} {:?}", style("Query:").bold(), snapshot.query);
    println!(
        "  {} {}",
        style("Dropdown:").bold(),
        if snapshot.open { "open" } else { "closed" }
    );
    println!(
        "  {} {}",
        style("Focused:").bold(),
        if snapshot.focused { "yes" } else { "no" }
    );
    if let Some(id) = &snapshot.accessibility.input.aria_activedescendant {
        println!("  {} {}", style("Active:").bold(), id);
    }

    match &snapshot.list {
        ListContent::Hidden => {}
        ListContent::NoResults(placeholder) => {
            println!();
            println!("  {}", style(placeholder.text).dim());
        }
        ListContent::Options(rows) => {
            println!();
            for row in rows {
                if row.aria_selected {
                    println!("  {} {}", style("\u{25B8}").green().bold(), style(&row.text).green());
                } else {
                    println!("    {}", row.text);
                }
            }
        }
    }
}
