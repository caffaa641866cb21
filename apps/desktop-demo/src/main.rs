use anyhow::Context;
use dragpanel_demo::{Session, Viewport};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let viewport = match std::env::args().nth(1) {
        Some(arg) => Viewport::parse(&arg).with_context(|| format!("invalid viewport {arg:?}"))?,
        None => Viewport::default(),
    };

    println!("=== Drag panel session ({}x{}) ===", viewport.width, viewport.height);
    let mut session = Session::new(viewport)?;
    let report = session.run_script().context("scripted session failed")?;

    for line in &report.timeline {
        println!("  {line}");
    }
    println!();
    println!("frames rendered:  {}", report.frames);
    println!("disappearances:   {:?}", report.disappearances);
    Ok(())
}
