//! A text field whose label rests over the input and floats above it while the
//! field is focused or holds text.

mod feathers;
mod headless;
pub mod icons;
pub mod style;
pub mod theme;
pub mod tokens;

pub use feathers::*;
pub use headless::*;
pub use icons::{FieldIcon, Icon};
pub use theme::{FieldTheme, ThemeError};

use bevy::prelude::*;

pub struct FloatingLabelFieldPlugin;

impl Plugin for FloatingLabelFieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((headless::plugin, icons::plugin, feathers::plugin));
    }
}
