//! User configuration — interaction tunables, keybindings, and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/tilt-card/config.toml` (default `~/.config/tilt-card/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::tilt::TiltConfig;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleHud,
    Reset,
}

impl Action {
    /// Ordered list of all actions.
    pub const ALL: &[Action] = &[Action::Quit, Action::ToggleHud, Action::Reset];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::ToggleHud => "Toggle HUD",
            Action::Reset => "Reset Card",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::ToggleHud => "toggle_hud",
            Action::Reset => "reset",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "quit" => Some(Action::Quit),
            "toggle_hud" => Some(Action::ToggleHud),
            "reset" => Some(Action::Reset),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Serialise to config-file format.  The display form round-trips
    /// through [`KeyBind::parse`] for every key we emit.
    fn to_config_string(&self) -> String {
        self.display()
    }

    /// Parse a key string like `"Ctrl+c"`, `"q"`, `"Esc"`, `"F2"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            s if s.len() == 1 => KeyCode::Char(s.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── errors ────────────

/// A config line that names a known tunable but carries a bad value.
/// Surfaced as a warning; the line is skipped and the default survives.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for `{key}`: `{value}` (expected a number)")]
    InvalidNumber { key: String, value: String },
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — interaction tunables and keybindings.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Pointer-to-center distance (units) that arms tracking.
    pub boundary: f64,
    /// Milliseconds of pointer silence before the card lets go.
    pub idle_ms: u64,
    /// Pointer-follow transition length in milliseconds.
    pub follow_ms: u64,
    /// Revert-to-rest transition length in milliseconds.
    pub revert_ms: u64,
    /// Show the HUD readout on startup.
    pub hud: bool,
}

impl AppConfig {
    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);
        m.insert(ToggleHud, vec![KeyBind::new(Char('h'), n)]);
        m.insert(Reset, vec![KeyBind::new(Char('r'), n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// The interaction tunables as the controller consumes them.
    pub fn tilt(&self) -> TiltConfig {
        TiltConfig {
            boundary: self.boundary,
            follow: Duration::from_millis(self.follow_ms),
            idle_timeout: Duration::from_millis(self.idle_ms),
            revert: Duration::from_millis(self.revert_ms),
        }
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        Action::ALL
            .iter()
            .map(|&a| format!("{}: {}", self.short_binding(a), a.label()))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        Self::defaults()
    }

    /// Load config, writing the defaults on first run so the tunables are
    /// discoverable without reading the source.
    pub fn load_or_init() -> Self {
        if !config_path().exists() {
            let config = Self::defaults();
            if let Err(err) = config.save() {
                tracing::warn!(%err, "could not write default config");
            }
            return config;
        }
        Self::load()
    }

    /// Built-in defaults, no disk access.
    pub fn defaults() -> Self {
        Self {
            bindings: Self::default_bindings(),
            boundary: 400.0,
            idle_ms: 1000,
            follow_ms: 125,
            revert_ms: 2000,
            hud: true,
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::defaults();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match config.apply_tunable(key, value) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(%err, "skipping config line");
                    continue;
                }
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                if let Some(bind) = KeyBind::parse(part) {
                    parsed.push(bind);
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    /// Apply one tunable line.  Returns `Ok(true)` when `key` named a
    /// tunable, `Ok(false)` when it should be tried as a binding instead.
    /// Values are clamped so a wild config file cannot make the interaction
    /// unusable.
    fn apply_tunable(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        let invalid = || ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "boundary" => {
                let v: f64 = value.parse().map_err(|_| invalid())?;
                self.boundary = v.clamp(50.0, 5000.0);
            }
            "idle_ms" => {
                let v: u64 = value.parse().map_err(|_| invalid())?;
                self.idle_ms = v.clamp(100, 10_000);
            }
            "follow_ms" => {
                let v: u64 = value.parse().map_err(|_| invalid())?;
                self.follow_ms = v.clamp(16, 2_000);
            }
            "revert_ms" => {
                let v: u64 = value.parse().map_err(|_| invalid())?;
                self.revert_ms = v.clamp(100, 10_000);
            }
            "hud" => {
                self.hud = value == "true";
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# tilt-card configuration".to_string(),
            String::new(),
            "# Interaction tunables".to_string(),
            format!("boundary = {}", self.boundary),
            format!("idle_ms = {}", self.idle_ms),
            format!("follow_ms = {}", self.follow_ms),
            format!("revert_ms = {}", self.revert_ms),
            format!("hud = {}", self.hud),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Enter, Esc, Tab, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/tilt-card/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("tilt-card").join("config.toml")
}
