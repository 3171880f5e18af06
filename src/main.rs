//! Coagulation Simulator - Entry point
//!
//! Headless driver for the coagulation cascade engine.
//!
//! CLI Usage:
//!   cargo run                                  # Injury scenario, 2000 ticks
//!   cargo run -- --scenario fibrinolysis       # Watch a clot break down
//!   cargo run -- --disorder "haemophilia b"    # Apply a disorder preset
//!   cargo run -- -n 4000 --csv                 # Longer run with CSV export

use anyhow::{bail, Result};
use coagulation_simulator::{
    config::Parameters,
    export::CsvExporter,
    state::{Disorder, SimulationState, Speed, TraceBuffer},
};

/// Which perturbation to apply before the step loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scenario {
    /// Resting state; the cascade is a fixed point until perturbed
    Rest,
    /// Tissue injury (pro-thrombotic haemostasis)
    Injury,
    /// Injury with the anticoagulant panel primed
    Anticoagulant,
    /// Jump to a formed clot and watch fibrinolysis
    Fibrinolysis,
}

/// Parsed command-line options
struct CliOptions {
    scenario: Scenario,
    disorder: Option<String>,
    steps: usize,
    speed: Option<String>,
    realtime: bool,
    csv: bool,
}

/// Parse CLI arguments
fn parse_args() -> Result<CliOptions> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        scenario: Scenario::Injury,
        disorder: None,
        steps: 2000,
        speed: None,
        realtime: false,
        csv: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scenario" | "-s" => {
                i += 1;
                if i >= args.len() {
                    bail!("--scenario requires a value");
                }
                options.scenario = match args[i].to_lowercase().as_str() {
                    "rest" | "none" => Scenario::Rest,
                    "injury" => Scenario::Injury,
                    "anticoagulant" => Scenario::Anticoagulant,
                    "fibrinolysis" => Scenario::Fibrinolysis,
                    other => bail!(
                        "unknown scenario '{}' (expected rest, injury, anticoagulant, fibrinolysis)",
                        other
                    ),
                };
            }
            "--disorder" | "-d" => {
                i += 1;
                if i >= args.len() {
                    bail!("--disorder requires a name");
                }
                options.disorder = Some(args[i].clone());
            }
            "-n" | "--steps" => {
                i += 1;
                if i >= args.len() {
                    bail!("--steps requires a value");
                }
                options.steps = args[i].parse().unwrap_or(2000);
            }
            "--speed" => {
                i += 1;
                if i >= args.len() {
                    bail!("--speed requires a value");
                }
                options.speed = Some(args[i].clone());
            }
            "--realtime" => options.realtime = true,
            "--csv" => options.csv = true,
            "--list-disorders" => {
                println!("Available disorder presets:");
                for disorder in Disorder::ALL {
                    let note = if disorder.is_wired() { "" } else { "  (no wired effect)" };
                    println!("  {}{}", disorder, note);
                }
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Coagulation Simulator");
                println!();
                println!("Usage: coagulation-simulator [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --scenario, -s S   rest | injury | anticoagulant | fibrinolysis");
                println!("                     (default: injury)");
                println!("  --disorder, -d D   Apply a disorder preset (see --list-disorders)");
                println!("  -n, --steps N      Maximum number of ticks (default: 2000)");
                println!("  --speed S          Playback speed: 1, 2, 4, 8, 16, 32, 64 or 0.5");
                println!("  --realtime         Sleep the speed-derived interval between ticks");
                println!("  --csv              Export a time series under exports/");
                println!("  --list-disorders   List disorder presets and exit");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    Ok(options)
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args()?;

    log::info!("Coagulation Simulator starting...");

    // Load parameters
    let params = Parameters::load_or_default();
    log::info!(
        "Parameters loaded: clot ceiling {} AU, base interval {} ms",
        params.simulation.clot_ceiling_AU,
        params.simulation.base_tick_interval_ms
    );

    let mut state = SimulationState::new(&params);

    if let Some(label) = &options.speed {
        let speed: Speed = label.parse()?;
        state.set_speed(speed);
    }

    // Disorders perturb the resting factor levels, so they go on before the
    // injury scenario exposes any surfaces
    if let Some(name) = &options.disorder {
        let disorder: Disorder = name.parse()?;
        state.set_disorder(disorder);
        println!("Disorder: {}", disorder);
    }

    match options.scenario {
        Scenario::Rest => {}
        Scenario::Injury => state.apply_injury(),
        Scenario::Anticoagulant => state.set_haemostasis_mode(false),
        Scenario::Fibrinolysis => state.set_fibrinolysis_mode(),
    }
    println!("Scenario: {:?}", options.scenario);

    let mut trace = TraceBuffer::new();
    let mut exporter = if options.csv {
        // One sample per simulated second (every other tick)
        Some(CsvExporter::new(1.0)?)
    } else {
        None
    };

    let tick_interval_ms = state.speed.tick_interval_ms(params.simulation.base_tick_interval_ms);
    if options.realtime {
        log::info!("Realtime pacing: {} ms per tick ({})", tick_interval_ms, state.speed);
    }

    println!("\n--- Running up to {} ticks ---\n", options.steps);

    let mut ticks_run = 0;
    for step in 0..options.steps {
        state.step();
        trace.record(&state);
        ticks_run += 1;

        let metrics = state.metrics();
        if let Some(exporter) = exporter.as_mut() {
            exporter.maybe_record(&metrics)?;
        }

        // Report progress every 10%
        if options.steps >= 10 && step % (options.steps / 10) == 0 {
            let progress = (step as f64 / options.steps as f64) * 100.0;
            println!(
                "  {:3.0}%: tick={}, thrombin={:.3} AU, cross-linked fibrin={:.3} AU",
                progress, metrics.tick, metrics.thrombin_AU, metrics.cross_linked_fibrin_AU
            );
        }

        // Advisory terminal conditions: the core never halts itself
        if metrics.cross_linked_fibrin_AU >= params.simulation.clot_ceiling_AU {
            println!("\nClot fully formed at t = {:.1} s", metrics.time_sec);
            break;
        }
        if metrics.time_sec >= params.simulation.max_elapsed_sec {
            println!("\nElapsed-time limit reached at t = {:.1} s", metrics.time_sec);
            break;
        }

        if options.realtime {
            std::thread::sleep(std::time::Duration::from_millis(tick_interval_ms));
        }
    }

    println!("\n=== Results ({} ticks) ===\n", ticks_run);
    let metrics = state.metrics();
    metrics.print_summary();

    println!();
    println!(
        "Tracked series: {} and {} ({} samples)",
        trace.tracked(0),
        trace.tracked(1),
        trace.len()
    );

    if let Some(exporter) = exporter {
        let path = exporter.finish()?;
        println!("Time series written to {}", path.display());
    }

    Ok(())
}
