mod app;
mod resume;
mod util;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a resume dataset in JSON form; the built-in sample is
    /// used when omitted.
    #[arg(long)]
    resume: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "resume-graph",
        options,
        Box::new(move |cc| Ok(Box::new(app::ResumeGraphApp::new(cc, args.resume.clone())))),
    )
}
