use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use detent_components::slider::Slider;

mod output;
mod session;

use session::{Outcome, Session, apply, describe_snapshot, format_values};

#[derive(Parser)]
#[command(name = "example")]
#[command(version, about = "Replay a recorded slider session", long_about = None)]
struct Cli {
    /// Session file with a [slider] table and [[event]] entries
    session: PathBuf,
    /// Print the rendered markers after every event
    #[arg(short, long)]
    snapshots: bool,
    /// Log filter directive, overrides RUST_LOG
    #[arg(long)]
    log: Option<String>,
    /// Physical pixels per dp, applied to the marker size
    #[arg(long, value_name = "FACTOR")]
    scale_factor: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.log.as_deref() {
        Some(directive) => detent_ui::logging::init_tracing_with(directive),
        None => detent_ui::logging::init_tracing(),
    }
    if let Some(scale_factor) = cli.scale_factor {
        detent_ui::dp::set_scale_factor(scale_factor);
    }

    let session = Session::load(&cli.session)?;
    let args = session
        .slider
        .to_args()
        .on_sliding_start(|marker| output::status("Sliding", format!("{marker:?} marker")))
        .on_sliding_complete(|marker| output::status("Released", format!("{marker:?} marker")));
    if let Err(err) = args.validate() {
        output::warn(format!("{err}; markers fall back to the scale ends"));
    }

    let mut slider = Slider::new(args);
    output::status(
        "Loaded",
        format!(
            "{} with {} events ({:?} slider)",
            cli.session.display(),
            session.events.len(),
            slider.slider_type()
        ),
    );

    for event in &session.events {
        tracing::debug!(?event, "Replaying session event");
        match apply(&mut slider, event) {
            Outcome::Changed(values) => output::status("Changed", format_values(&values)),
            Outcome::Rejected(reason) => output::rejected("Rejected", reason),
            Outcome::Ignored => {}
        }
        if cli.snapshots {
            for line in describe_snapshot(&slider.snapshot()) {
                output::step(line);
            }
        }
    }

    match slider.values() {
        Some(values) => output::status("Final", format_values(&values)),
        None => output::warn("no markers were placed; did the session contain a layout event?"),
    }
    Ok(())
}
