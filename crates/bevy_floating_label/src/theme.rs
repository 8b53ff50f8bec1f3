use std::time::Duration;

use bevy::color::HexColorError;
use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::style::{ContainerStyle, InputStyle, LabelStyle};
use crate::tokens;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid color for `{field}`: {source}")]
    Color {
        field: &'static str,
        source: HexColorError,
    },
    #[error("transition duration must be greater than zero")]
    ZeroDuration,
}

/// App-wide look of every floating label field.
///
/// Per-field props are layered on top of the `container`, `label` and `input`
/// overrides held here, which are in turn layered on top of the defaults in
/// [`crate::tokens`].
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct FieldTheme {
    pub label_color: Color,
    pub border_color: Color,
    pub error_color: Color,
    pub label_rest_offset: f32,
    pub label_float_offset: f32,
    pub label_left: f32,
    pub label_left_with_icon: f32,
    pub error_margin_top: f32,
    pub error_font_size: f32,
    pub transition: Duration,
    pub container: ContainerStyle,
    pub label: LabelStyle,
    pub input: InputStyle,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            label_color: tokens::LABEL_COLOR.into(),
            border_color: tokens::BORDER_COLOR.into(),
            error_color: tokens::ERROR_COLOR.into(),
            label_rest_offset: tokens::LABEL_REST_OFFSET,
            label_float_offset: tokens::LABEL_FLOAT_OFFSET,
            label_left: tokens::LABEL_LEFT,
            label_left_with_icon: tokens::LABEL_LEFT_WITH_ICON,
            error_margin_top: tokens::ERROR_MARGIN_TOP,
            error_font_size: tokens::ERROR_FONT_SIZE,
            transition: tokens::TRANSITION_DURATION,
            container: ContainerStyle::default(),
            label: LabelStyle::default(),
            input: InputStyle::default(),
        }
    }
}

/// On-disk form of [`FieldTheme`]. Missing keys keep the default.
#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct ThemeConfig {
    label_color: Option<String>,
    border_color: Option<String>,
    error_color: Option<String>,
    label_rest_offset: Option<f32>,
    label_float_offset: Option<f32>,
    label_left: Option<f32>,
    label_left_with_icon: Option<f32>,
    error_margin_top: Option<f32>,
    error_font_size: Option<f32>,
    transition_ms: Option<u64>,
}

fn parse_color(field: &'static str, value: Option<&str>, fallback: Color) -> Result<Color, ThemeError> {
    match value {
        Some(hex) => Srgba::hex(hex)
            .map(Color::from)
            .map_err(|source| ThemeError::Color { field, source }),
        None => Ok(fallback),
    }
}

impl FieldTheme {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    fn from_config(config: ThemeConfig) -> Result<Self, ThemeError> {
        let defaults = Self::default();

        let transition = match config.transition_ms {
            Some(0) => return Err(ThemeError::ZeroDuration),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.transition,
        };

        Ok(Self {
            label_color: parse_color("label_color", config.label_color.as_deref(), defaults.label_color)?,
            border_color: parse_color("border_color", config.border_color.as_deref(), defaults.border_color)?,
            error_color: parse_color("error_color", config.error_color.as_deref(), defaults.error_color)?,
            label_rest_offset: config.label_rest_offset.unwrap_or(defaults.label_rest_offset),
            label_float_offset: config.label_float_offset.unwrap_or(defaults.label_float_offset),
            label_left: config.label_left.unwrap_or(defaults.label_left),
            label_left_with_icon: config
                .label_left_with_icon
                .unwrap_or(defaults.label_left_with_icon),
            error_margin_top: config.error_margin_top.unwrap_or(defaults.error_margin_top),
            error_font_size: config.error_font_size.unwrap_or(defaults.error_font_size),
            transition,
            ..defaults
        })
    }
}
