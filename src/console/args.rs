use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown render format {value:?}, expected \"plain\" or \"json\"")]
pub struct UnknownRenderFormat {
    pub value: String,
}

impl FromStr for RenderFormat {
    type Err = UnknownRenderFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(RenderFormat::Plain),
            "json" => Ok(RenderFormat::Json),
            _ => Err(UnknownRenderFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Settings of the console game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleArgs {
    pub player_one: String,
    pub player_two: String,
    pub render_format: RenderFormat,
    /// Printed for vacant cells by the plain renderer.
    pub empty_glyph: String,
}

impl Default for ConsoleArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleArgs {
    const DEFAULT_PLAYER_ONE: &'static str = "X";
    const DEFAULT_PLAYER_TWO: &'static str = "O";
    const DEFAULT_EMPTY_GLYPH: &'static str = "_";

    pub const PLAYER_ONE_VAR: &'static str = "TICTACTOE_PLAYER_ONE";
    pub const PLAYER_TWO_VAR: &'static str = "TICTACTOE_PLAYER_TWO";
    pub const RENDER_FORMAT_VAR: &'static str = "TICTACTOE_RENDER_FORMAT";
    pub const EMPTY_GLYPH_VAR: &'static str = "TICTACTOE_EMPTY_GLYPH";

    pub fn new() -> Self {
        Self {
            player_one: Self::DEFAULT_PLAYER_ONE.to_string(),
            player_two: Self::DEFAULT_PLAYER_TWO.to_string(),
            render_format: RenderFormat::default(),
            empty_glyph: Self::DEFAULT_EMPTY_GLYPH.to_string(),
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConsoleArgs::from_env`], reading values through `lookup`.
    /// Blank or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            let value = lookup(key)?;
            if value.trim().is_empty() {
                warn!("{} is blank, using the default", key);
                None
            } else {
                Some(value)
            }
        };

        let render_format = non_blank(Self::RENDER_FORMAT_VAR)
            .and_then(|value| {
                value
                    .parse::<RenderFormat>()
                    .map_err(|e| warn!("{}: {}, using the default", Self::RENDER_FORMAT_VAR, e))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            player_one: non_blank(Self::PLAYER_ONE_VAR)
                .unwrap_or_else(|| Self::DEFAULT_PLAYER_ONE.to_string()),
            player_two: non_blank(Self::PLAYER_TWO_VAR)
                .unwrap_or_else(|| Self::DEFAULT_PLAYER_TWO.to_string()),
            render_format,
            empty_glyph: non_blank(Self::EMPTY_GLYPH_VAR)
                .unwrap_or_else(|| Self::DEFAULT_EMPTY_GLYPH.to_string()),
        }
    }
}
