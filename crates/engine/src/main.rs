//! Hideseek - Main entry point.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hideseek_engine::infrastructure::settings::GameSettings;
use hideseek_engine::App;

fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hideseek_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = GameSettings::from_env()?;
    tracing::info!(
        data_dir = %settings.data_dir.display(),
        house = %settings.house,
        opponents = settings.opponents.len(),
        "Starting Hideseek"
    );

    let app = App::from_settings(settings);
    let mut console = app.console()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", console.status())?;
    write!(stdout, "{}", console.prompt())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }
        if !input.is_empty() {
            writeln!(stdout, "{}\n", console.handle_line(input))?;
            writeln!(stdout, "{}", console.status())?;
        }
        write!(stdout, "{}", console.prompt())?;
        stdout.flush()?;
    }

    tracing::info!("Goodbye");
    Ok(())
}

fn load_dotenv() {
    load_dotenv_from(std::path::Path::new("."));
}

/// Local overrides first; dotenvy never replaces a variable already set.
fn load_dotenv_from(dir: &std::path::Path) {
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
