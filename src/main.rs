use bazi_calendar::{parse_birth_datetime, render_report, Config, PillarCalculator};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod app;

const USAGE: &str = "usage: bazi_calendar [YYYY-MM-DD HH:MM]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with structured format.
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [date, time] => {
            let at = parse_birth_datetime(date, time)?;
            info!(%at, "computing chart");
            let profile = PillarCalculator::default().profile(at);
            print!("{}", render_report(&profile, config.symbol_style));
            Ok(())
        }
        [] => run_live(config),
        _ => Err(USAGE.into()),
    }
}

fn run_live(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bazi Clock",
        options,
        Box::new(move |cc| {
            let app = app::BaziClock::new(&cc.egui_ctx, config);
            Box::new(app) as Box<dyn eframe::App>
        }),
    )?;

    Ok(())
}
