use std::path::Path;

use anyhow::{bail, Context, Result};
use flight::{FlightSpec, InputBuffer};
use serde::{Deserialize, Serialize};

/// A full headless run: tick rate, the body being flown, its tuning and the
/// scripted input timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_hz: u32,
    pub ticks: u64,
    pub body: BodyConfig,
    pub flight: FlightSpec,
    pub script: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub mass: f32,
    /// Scalar moment of inertia (uniform about every axis).
    pub inertia: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self { mass: 1.0, inertia: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptInput {
    Thrust,
    Strafe,
    Vertical,
    Roll,
    Boost,
}

/// One input write delivered at the start of `tick`. Boost treats any
/// non-zero `value` as pressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub tick: u64,
    pub input: ScriptInput,
    #[serde(default)]
    pub value: f32,
}

impl ScriptEvent {
    pub fn apply(&self, input: &InputBuffer) {
        match self.input {
            ScriptInput::Thrust => input.set_thrust(self.value),
            ScriptInput::Strafe => input.set_strafe(self.value),
            ScriptInput::Vertical => input.set_vertical(self.value),
            ScriptInput::Roll => input.set_roll(self.value),
            ScriptInput::Boost => input.set_boost(self.value != 0.0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        // Boosted burn, coast, a strafe tap and a short roll
        let ev = |tick, input, value| ScriptEvent { tick, input, value };
        Self {
            tick_hz: 50,
            ticks: 250,
            body: BodyConfig::default(),
            flight: FlightSpec::default(),
            script: vec![
                ev(0, ScriptInput::Thrust, 1.0),
                ev(0, ScriptInput::Boost, 1.0),
                ev(40, ScriptInput::Boost, 0.0),
                ev(60, ScriptInput::Thrust, 0.0),
                ev(100, ScriptInput::Strafe, -1.0),
                ev(110, ScriptInput::Strafe, 0.0),
                ev(150, ScriptInput::Roll, 0.5),
                ev(175, ScriptInput::Roll, 0.0),
            ],
        }
    }
}

impl Config {
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_hz == 0 {
            bail!("tick_hz must be positive");
        }
        if !(self.body.mass > 0.0) {
            bail!("body.mass must be positive, got {}", self.body.mass);
        }
        if !(self.body.inertia > 0.0) {
            bail!("body.inertia must be positive, got {}", self.body.inertia);
        }
        self.flight.validate().context("invalid flight tuning")?;
        Ok(())
    }
}

/// Read a run description from TOML, or fall back to the built-in demo.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut cfg = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<Config>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    cfg.script.sort_by_key(|ev| ev.tick);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            tick_hz = 60

            [flight]
            thrust = 200.0

            [[script]]
            tick = 5
            input = "thrust"
            value = 1.0

            [[script]]
            tick = 9
            input = "boost"
            value = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tick_hz, 60);
        assert_eq!(cfg.ticks, Config::default().ticks);
        assert_eq!(cfg.flight.thrust, 200.0);
        assert_eq!(cfg.flight.strafe_thrust, FlightSpec::default().strafe_thrust);
        assert_eq!(cfg.body, BodyConfig::default());
        assert_eq!(cfg.script.len(), 2);
        assert_eq!(cfg.script[1].input, ScriptInput::Boost);
    }

    #[test]
    fn bad_glide_reduction_fails_validation() {
        let mut cfg = Config::default();
        cfg.flight.thrust_glide_reduction = 1.0;
        let err = cfg.validate().unwrap_err();
        assert!(format!("{err:#}").contains("glide reduction"), "{err:#}");
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let cfg = Config { tick_hz: 0, ..Config::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Some(Path::new("/nonexistent/flight.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/flight.toml"));
    }

    #[test]
    fn bundled_hauler_run_matches_preset() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/runs/hauler.toml"));
        let cfg = load_config(Some(path)).unwrap();
        assert_eq!(cfg.flight, flight::flightspecs::hauler_spec());
        assert!(cfg.script.windows(2).all(|w| w[0].tick <= w[1].tick));
    }

    #[test]
    fn default_run_is_valid() {
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg.dt(), 0.02);
    }

    #[test]
    fn boost_event_presses_on_nonzero() {
        let input = InputBuffer::new();
        input.enable();
        ScriptEvent { tick: 0, input: ScriptInput::Boost, value: 1.0 }.apply(&input);
        assert!(input.snapshot().boost);
        ScriptEvent { tick: 0, input: ScriptInput::Boost, value: 0.0 }.apply(&input);
        assert!(!input.snapshot().boost);
    }
}
