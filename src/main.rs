use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, Level};

use club_points::eligibility::SemesterId;
use club_points::points::{PlacementPointsTable, PointsCalculator};
use club_points::PointsError;
use club_points::standings::{score_event, Standings};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Points earned for a placement in an event of a given size
    Points {
        /// Number of participants in the event
        #[arg(short, long)]
        size: u32,
        /// Finishing position (1 = winner)
        #[arg(short, long)]
        placement: u32,
    },
    /// List roster members who can still register for an event
    Eligible {
        /// Event JSON file (id, semester_id, participants)
        #[arg(short, long)]
        event: PathBuf,
        /// Roster JSON file (array of memberships)
        #[arg(short, long)]
        roster: PathBuf,
    },
    /// Accumulate event results into per-semester rankings
    Standings {
        /// Events JSON file (array of events with placements)
        #[arg(short, long)]
        events: PathBuf,
        /// Roster JSON file (array of memberships)
        #[arg(short, long)]
        roster: PathBuf,
        /// Only show this semester
        #[arg(short, long)]
        semester: Option<u64>,
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "club-points")]
#[command(about = "Club tournament ranking points and event eligibility", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/club-points/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn fail(code: i32, message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match club_points::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    // Build and validate the points table at startup
    let points_config = config.points.unwrap_or_default();
    let table = match PlacementPointsTable::from_config(&points_config) {
        Ok(t) => t,
        Err(PointsError::InvalidTable(errors)) => {
            eprintln!("Points config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {}", e)),
    };
    debug!(
        entries = table.entries().count(),
        standard_field = table.standard_field(),
        "points table loaded"
    );

    let use_colors = club_points::output::should_use_colors();

    match cli.command {
        Commands::Points { size, placement } => {
            let award = PointsCalculator::new(size, &table).and_then(|calc| calc.award(placement));
            match award {
                Ok(award) => println!(
                    "{}",
                    club_points::output::format_award(&award, cli.verbose, use_colors)
                ),
                Err(e) => fail(EXIT_INPUT, e),
            }
        }
        Commands::Eligible { event, roster } => {
            let event = match club_points::input::load_event(&event) {
                Ok(e) => e,
                Err(e) => fail(EXIT_INPUT, format!("Input error: {:#}", e)),
            };
            let roster = match club_points::input::load_roster(&roster) {
                Ok(r) => r,
                Err(e) => fail(EXIT_INPUT, format!("Input error: {:#}", e)),
            };

            let eligible = club_points::eligibility::eligible_for_event(&event, &roster);
            info!(
                event = %event.id,
                registered = event.participants.len(),
                eligible = eligible.len(),
                "resolved eligible members"
            );
            println!(
                "{}",
                club_points::output::format_eligible_list(&eligible, use_colors)
            );
        }
        Commands::Standings {
            events,
            roster,
            semester,
            tsv,
        } => {
            let events = match club_points::input::load_events(&events) {
                Ok(e) => e,
                Err(e) => fail(EXIT_INPUT, format!("Input error: {:#}", e)),
            };
            let roster = match club_points::input::load_roster(&roster) {
                Ok(r) => r,
                Err(e) => fail(EXIT_INPUT, format!("Input error: {:#}", e)),
            };

            let mut standings = Standings::new();
            for event in &events {
                match score_event(event, &roster, &table) {
                    Ok(awards) => standings.record_all(&awards),
                    Err(e) => fail(EXIT_INPUT, format!("Event {}: {}", event.id, e)),
                }
            }

            let semesters = match semester {
                Some(id) => vec![SemesterId(id)],
                None => standings.semesters(),
            };

            for (i, semester_id) in semesters.iter().enumerate() {
                let rankings = standings.rankings(*semester_id);
                if tsv {
                    let output = club_points::output::format_rankings_tsv(&rankings, &roster);
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                } else {
                    if i > 0 {
                        println!();
                    }
                    println!("Semester {}", semester_id);
                    println!(
                        "{}",
                        club_points::output::format_rankings_table(&rankings, &roster, use_colors)
                    );
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
