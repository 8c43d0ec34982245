use std::str::FromStr;
use log::LevelFilter;

pub const LOG_ENV: &str = "RATPOLY_LOG";

pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> { 
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}

// Reads the level from `RATPOLY_LOG`, falling back to `warn`.
pub fn init_logger_from_env() -> Result<(), log::SetLoggerError> { 
    let v = std::env::var(LOG_ENV).ok();
    init_simple_logger(parse_level(v.as_deref()))
}

pub fn parse_level(s: Option<&str>) -> LevelFilter { 
    s.and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}
