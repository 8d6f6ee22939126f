use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use ratatui::style::Color;
use tracing::warn;

use crate::demo::{DemoKind, parse_demo};
use crate::error::Error;

/// Defaults gathered from rc files and the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub demos: Vec<DemoKind>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub text: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Layer `other` on top of `self`: its valued options win, and a
    /// non-empty demo list replaces ours.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            demos: if other.demos.is_empty() {
                self.demos.clone()
            } else {
                other.demos.clone()
            },
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
            fg: other.fg.clone().or_else(|| self.fg.clone()),
            bg: other.bg.clone().or_else(|| self.bg.clone()),
            text: other.text.clone().or_else(|| self.text.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// Demos to run; the typewriter when none are configured.
    pub fn demos_or_default(&self) -> Vec<DemoKind> {
        if self.demos.is_empty() {
            vec![DemoKind::Typewriter]
        } else {
            self.demos.clone()
        }
    }

    /// Foreground color, falling back to red when unset or invalid.
    pub fn foreground(&self) -> Color {
        color_or(self.fg.as_deref(), Color::Red)
    }

    /// Background color, falling back to none when unset or invalid.
    pub fn background(&self) -> Color {
        color_or(self.bg.as_deref(), Color::Reset)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("segmatrix").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("segmatrix")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("segmatrix").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("segmatrix")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".segmatrixrc")
}

/// Read flags from an rc file. A missing file yields no flags.
///
/// Each non-comment line holds one flag and its value; the value runs to the
/// end of the line so `--text` may contain spaces.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| match line.split_once(char::is_whitespace) {
            Some((flag, value)) if flag.starts_with("--") && !flag.contains('=') => {
                vec![flag.to_owned(), value.trim().to_owned()]
            }
            _ => line.split_whitespace().map(ToOwned::to_owned).collect(),
        })
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# segmatrix defaults (saved with --save)".to_string());
    for demo in &flags.demos {
        lines.push(format!("--demo {demo}"));
    }
    if let Some(rows) = flags.rows {
        lines.push(format!("--rows {rows}"));
    }
    if let Some(cols) = flags.cols {
        lines.push(format!("--cols {cols}"));
    }
    if let Some(fg) = &flags.fg {
        lines.push(format!("--fg {fg}"));
    }
    if let Some(bg) = &flags.bg {
        lines.push(format!("--bg {bg}"));
    }
    if let Some(text) = &flags.text {
        lines.push(format!("--text {text}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the flags this crate understands out of a token list.
///
/// Unknown tokens are skipped, so the full argv can be passed in. Both
/// `--flag value` and `--flag=value` forms are accepted.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        if !is_valued_flag(name) {
            i += 1;
            continue;
        }
        let value = match inline {
            Some(value) => Some(value),
            None => {
                let next = tokens.get(i + 1).map(String::as_str);
                if next.is_some() {
                    i += 1;
                }
                next
            }
        };
        if let Some(value) = value {
            apply_flag(&mut flags, name, value);
        }
        i += 1;
    }
    flags
}

/// Parse a grid dimension. Zero or non-numeric input clamps to 1.
pub fn parse_dimension(value: &str) -> usize {
    value.trim().parse::<usize>().map_or(1, |n| n.max(1))
}

/// Parse a color name, `#rrggbb` or palette index.
pub fn parse_color(value: &str) -> crate::error::Result<Color> {
    Color::from_str(value.trim()).map_err(|_| Error::InvalidColor(value.to_string()))
}

fn color_or(value: Option<&str>, fallback: Color) -> Color {
    let Some(value) = value else {
        return fallback;
    };
    parse_color(value).unwrap_or_else(|err| {
        warn!(%err, "using default color");
        fallback
    })
}

fn is_valued_flag(name: &str) -> bool {
    matches!(
        name,
        "--demo" | "--rows" | "--cols" | "--fg" | "--bg" | "--text" | "--log-file"
    )
}

fn apply_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--demo" => match parse_demo(value) {
            Ok(kind) => flags.demos.push(kind),
            Err(err) => warn!(%err, "ignoring demo"),
        },
        "--rows" => flags.rows = Some(parse_dimension(value)),
        "--cols" => flags.cols = Some(parse_dimension(value)),
        "--fg" => flags.fg = Some(value.to_string()),
        "--bg" => flags.bg = Some(value.to_string()),
        "--text" => flags.text = Some(value.to_string()),
        "--log-file" => flags.log_file = Some(PathBuf::from(value)),
        _ => {}
    }
}
