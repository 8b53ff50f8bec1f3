use bevy::prelude::*;
use bevy_floating_label::*;
use bevy_ui_text_input::TextInputFilter;

fn main() -> AppExit {
    App::new()
        .add_plugins((DefaultPlugins, FloatingLabelFieldPlugin))
        .insert_resource(ClearColor(Color::WHITE))
        .add_systems(Startup, (load_theme, spawn_form))
        .add_systems(Update, reset_form)
        .run()
}

const THEME: &str = include_str!("../assets/theme.json");

fn load_theme(mut commands: Commands) {
    match FieldTheme::from_json(THEME) {
        Ok(theme) => commands.insert_resource(theme),
        Err(err) => warn!("keeping the default field theme: {err}"),
    }
}

fn spawn_form(mut commands: Commands) {
    commands.spawn(Camera2d);

    let email = commands
        .spawn(floating_label_field(
            FloatingLabelFieldProps::new("Email").with_icon(Icon::Mail),
        ))
        .observe(validate_email)
        .observe(|focused: On<FieldFocused>| info!("email field {} focused", focused.entity))
        .observe(|blurred: On<FieldBlurred>| info!("email field {} blurred", blurred.entity))
        .id();

    let name = commands
        .spawn(floating_label_field(
            FloatingLabelFieldProps::new("Name").with_value("Ada"),
        ))
        .observe(|changed: On<FieldTextChanged>| info!("name is now {:?}", changed.text))
        .id();

    let badge = commands
        .spawn((
            Node {
                width: px(10),
                height: px(10),
                border_radius: BorderRadius::MAX,
                ..default()
            },
            BackgroundColor(Color::srgb(0.2, 0.6, 0.3)),
        ))
        .id();

    let invite = commands
        .spawn(floating_label_field(
            FloatingLabelFieldProps::new("Invite code")
                .with_icon(badge)
                .with_filter(TextInputFilter::Integer)
                .with_label_color(Color::srgb(0.2, 0.3, 0.6))
                .with_error("Required"),
        ))
        .observe(require_text)
        .id();

    commands
        .spawn(Node {
            width: px(360),
            margin: UiRect::all(Val::Auto),
            padding: UiRect::all(px(24)),
            flex_direction: FlexDirection::Column,
            row_gap: px(20),
            ..default()
        })
        .add_children(&[email, name, invite]);
}

fn validate_email(
    changed: On<FieldTextChanged>,
    mut errors: Query<&mut FieldError>,
) -> Result<(), BevyError> {
    let mut error = errors.get_mut(changed.entity)?;
    let message = if changed.text.is_empty() || changed.text.contains('@') {
        ""
    } else {
        "Enter a valid email address"
    };
    if error.0 != message {
        error.0 = message.to_string();
    }
    Ok(())
}

fn require_text(
    changed: On<FieldTextChanged>,
    mut errors: Query<&mut FieldError>,
) -> Result<(), BevyError> {
    let mut error = errors.get_mut(changed.entity)?;
    let message = if changed.text.is_empty() { "Required" } else { "" };
    if error.0 != message {
        error.0 = message.to_string();
    }
    Ok(())
}

/// F5 clears every field without firing change events.
fn reset_form(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    fields: Query<Entity, With<FloatingLabelField>>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }
    for entity in &fields {
        commands.trigger(SetFieldValue {
            entity,
            text: String::new(),
        });
    }
}
