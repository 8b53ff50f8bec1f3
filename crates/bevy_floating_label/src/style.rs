//! Layered style overrides.
//!
//! Each style struct holds optional values. Layers are applied bottom to top and
//! a value set in a higher layer replaces the one below it. Unset values fall
//! through to the layer below and finally to the defaults in [`crate::tokens`].

use bevy::prelude::*;

use crate::tokens;

pub trait StyleLayer: Default + Clone {
    /// Returns `self` with every value that `over` sets replaced by `over`'s.
    fn layered(&self, over: &Self) -> Self;
}

/// Folds `layers` in order; later layers win.
pub fn resolve<S: StyleLayer>(layers: &[&S]) -> S {
    layers
        .iter()
        .fold(S::default(), |resolved, layer| resolved.layered(layer))
}

/// Overrides for the bordered container around the label, icon and input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerStyle {
    pub width: Option<Val>,
    pub height: Option<Val>,
    pub padding: Option<UiRect>,
    pub border_width: Option<f32>,
    pub corner_radius: Option<f32>,
    pub background: Option<Color>,
}

impl StyleLayer for ContainerStyle {
    fn layered(&self, over: &Self) -> Self {
        Self {
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            padding: over.padding.or(self.padding),
            border_width: over.border_width.or(self.border_width),
            corner_radius: over.corner_radius.or(self.corner_radius),
            background: over.background.or(self.background),
        }
    }
}

impl ContainerStyle {
    pub fn with_width(mut self, width: Val) -> Self {
        self.width = Some(width);
        self
    }
    pub fn with_height(mut self, height: Val) -> Self {
        self.height = Some(height);
        self
    }
    pub fn with_padding(mut self, padding: UiRect) -> Self {
        self.padding = Some(padding);
        self
    }
    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn background_color(&self) -> Color {
        self.background.unwrap_or(tokens::CONTAINER_BG.into())
    }

    pub fn node(&self) -> Node {
        Node {
            width: self.width.unwrap_or(percent(100)),
            height: self.height.unwrap_or(px(tokens::INPUT_HEIGHT)),
            padding: self
                .padding
                .unwrap_or(UiRect::axes(px(tokens::CONTAINER_PADDING_X), px(0))),
            border: UiRect::all(px(self.border_width.unwrap_or(tokens::BORDER_WIDTH))),
            border_radius: BorderRadius::all(px(self.corner_radius.unwrap_or(tokens::CORNER_RADIUS))),
            align_items: AlignItems::Center,
            column_gap: px(6),
            ..default()
        }
    }
}

/// Overrides for the floating label text. The label's colour and left offset
/// are not part of this layer; they follow the error state and icon presence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelStyle {
    pub font: Option<Handle<Font>>,
    pub font_size: Option<f32>,
    /// Fill behind the label so it masks the border once floated.
    pub background: Option<Color>,
}

impl StyleLayer for LabelStyle {
    fn layered(&self, over: &Self) -> Self {
        Self {
            font: over.font.clone().or_else(|| self.font.clone()),
            font_size: over.font_size.or(self.font_size),
            background: over.background.or(self.background),
        }
    }
}

impl LabelStyle {
    pub fn with_font(mut self, font: Handle<Font>) -> Self {
        self.font = Some(font);
        self
    }
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn text_font(&self) -> TextFont {
        TextFont {
            font: self.font.clone().unwrap_or_default(),
            font_size: self.font_size.unwrap_or(tokens::LABEL_FONT_SIZE),
            ..default()
        }
    }
}

/// Overrides for the text-entry surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputStyle {
    pub font: Option<Handle<Font>>,
    pub font_size: Option<f32>,
    pub color: Option<Color>,
    pub cursor_color: Option<Color>,
    pub selection_color: Option<Color>,
}

impl StyleLayer for InputStyle {
    fn layered(&self, over: &Self) -> Self {
        Self {
            font: over.font.clone().or_else(|| self.font.clone()),
            font_size: over.font_size.or(self.font_size),
            color: over.color.or(self.color),
            cursor_color: over.cursor_color.or(self.cursor_color),
            selection_color: over.selection_color.or(self.selection_color),
        }
    }
}

impl InputStyle {
    pub fn with_font(mut self, font: Handle<Font>) -> Self {
        self.font = Some(font);
        self
    }
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn text_font(&self) -> TextFont {
        TextFont {
            font: self.font.clone().unwrap_or_default(),
            font_size: self.font_size.unwrap_or(tokens::INPUT_FONT_SIZE),
            ..default()
        }
    }

    pub fn text_color(&self) -> Color {
        self.color.unwrap_or(tokens::INPUT_TEXT_COLOR.into())
    }
}
