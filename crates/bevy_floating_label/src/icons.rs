use bevy::prelude::*;
pub use lucide_icons::Icon;

/// Resource holding the loaded Lucide icon font handle.
#[derive(Resource)]
pub struct IconFont(pub Handle<Font>);

pub fn plugin(app: &mut App) {
    app.add_systems(PreStartup, load_icon_font);
}

fn load_icon_font(
    mut commands: Commands,
    mut fonts: ResMut<Assets<Font>>,
) -> Result<(), BevyError> {
    let icon_font = Font::try_from_bytes(lucide_icons::LUCIDE_FONT_BYTES.to_vec())?;
    commands.insert_resource(IconFont(fonts.add(icon_font)));
    Ok(())
}

/// Content shown in a field's leading icon slot.
pub enum FieldIcon {
    /// A Lucide glyph drawn with the [`IconFont`].
    Glyph(Icon),
    /// Any entity the owner spawned; it is moved into the icon slot.
    Entity(Entity),
}

impl From<Icon> for FieldIcon {
    fn from(icon: Icon) -> Self {
        Self::Glyph(icon)
    }
}

impl From<Entity> for FieldIcon {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

/// Create a text bundle that renders a single Lucide icon glyph.
pub fn icon_glyph(icon: Icon, size: f32, font: Handle<Font>, color: Color) -> impl Bundle {
    (
        Text::new(String::from(icon.unicode())),
        TextFont {
            font,
            font_size: size,
            ..Default::default()
        },
        TextColor(color),
    )
}
