use scalekit::driver::{Command, Session};
use scalekit::{init_logging, SettingsPersistence, BUILD_DATE, VERSION};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!("scalekit {} (built {})", VERSION, BUILD_DATE);

    // An explicit settings file may be given as the only argument
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => SettingsPersistence::default_path()?,
    };
    let persistence = SettingsPersistence::load_or_default(&path);
    info!("Settings: {}", persistence.path().display());

    let mut session = Session::new(persistence.scale().clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", session.render())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.execute(&command) {
            Ok(true) => write!(out, "{}", session.render())?,
            Ok(false) => break,
            Err(e) => eprintln!("{}", e),
        }
        out.flush()?;
    }

    Ok(())
}
