use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Tunables for the simulation and its input shell.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Seconds between generations while running
    pub tick_interval: f32,
    /// Edge length of a cell in pixels at zoom 1.0
    pub cell_size: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Multiplier applied per wheel notch
    pub zoom_step: f32,
    /// A press released within this many seconds counts as a click
    pub click_max_secs: f64,
    /// A press that travels further than this (pixels) is a drag, not a click
    pub click_max_drag_px: f32,
    /// Chance each cell is alive when randomizing
    pub random_density: f64,
    pub min_updates_per_second: f32,
    pub max_updates_per_second: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: 0.05,
            cell_size: 10.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
            zoom_step: 1.1,
            click_max_secs: 0.1,
            click_max_drag_px: 4.0,
            random_density: 0.3,
            min_updates_per_second: 1.0,
            max_updates_per_second: 60.0,
        }
    }
}

impl Config {
    /// Defaults overlaid with `LIFE_TICK_MS`, `LIFE_CELL_SIZE` and `LIFE_RANDOM_DENSITY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<f32, _>(&lookup, "LIFE_TICK_MS")? {
            config.tick_interval = ms / 1000.0;
        }
        if let Some(size) = parse_var(&lookup, "LIFE_CELL_SIZE")? {
            config.cell_size = size;
        }
        if let Some(density) = parse_var(&lookup, "LIFE_RANDOM_DENSITY")? {
            config.random_density = density;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("tick_interval", self.tick_interval as f64, 0.001, 10.0)?;
        check("cell_size", self.cell_size as f64, 1.0, 1000.0)?;
        check("zoom_step", self.zoom_step as f64, 1.001, 4.0)?;
        check("random_density", self.random_density, 0.0, 1.0)?;
        check("min_zoom", self.min_zoom as f64, 0.01, 100.0)?;
        check("max_zoom", self.max_zoom as f64, 0.01, 100.0)?;
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvertedZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        check("click_max_secs", self.click_max_secs, 0.0, 5.0)?;
        check("click_max_drag_px", self.click_max_drag_px as f64, 0.0, 100.0)?;
        check("min_updates_per_second", self.min_updates_per_second as f64, 0.1, 1000.0)?;
        check("max_updates_per_second", self.max_updates_per_second as f64, 0.1, 1000.0)?;
        if self.min_updates_per_second > self.max_updates_per_second {
            return Err(ConfigError::InvertedSpeedBounds {
                min: self.min_updates_per_second,
                max: self.max_updates_per_second,
            });
        }
        check(
            "updates_per_second",
            self.updates_per_second() as f64,
            self.min_updates_per_second as f64,
            self.max_updates_per_second as f64,
        )?;
        Ok(())
    }

    /// Generations per second implied by `tick_interval`
    pub fn updates_per_second(&self) -> f32 {
        1.0 / self.tick_interval
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Unparsable { key, value: raw }),
    }
}

fn check(key: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    // Negated so NaN fails too
    if !(value >= min && value <= max) {
        return Err(ConfigError::OutOfBounds { key, value, min, max });
    }
    Ok(())
}
