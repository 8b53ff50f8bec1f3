use bevy::input_focus::InputFocus;
use bevy::prelude::*;
use bevy_ui_text_input::actions::{TextInputAction, TextInputEdit};
use bevy_ui_text_input::*;

use crate::headless::*;
use crate::icons::{FieldIcon, IconFont, icon_glyph};
use crate::style::{ContainerStyle, InputStyle, LabelStyle, resolve};
use crate::theme::FieldTheme;
use crate::tokens;

pub(crate) fn plugin(app: &mut App) {
    if !app.is_plugin_added::<TextInputPlugin>() {
        app.add_plugins(TextInputPlugin);
    }
    app.add_observer(write_value_to_buffer)
        .add_systems(
            Update,
            (
                (setup_floating_label_fields, restyle_on_error).chain(),
                handle_unfocus,
                (read_buffer_text, report_input_text).chain(),
            )
                .before(FloatingLabelSystems),
        )
        .add_systems(PostUpdate, apply_initial_value);
}

pub fn set_text_input_value(queue: &mut TextInputQueue, text: String) {
    queue.add(TextInputAction::Edit(TextInputEdit::SelectAll));
    queue.add(TextInputAction::Edit(TextInputEdit::Paste(text)));
}

/// The bordered box holding the label, icon slot and input.
#[derive(Component)]
pub struct FieldContainer;

#[derive(Component)]
pub struct FieldLabel;

#[derive(Component)]
pub struct FieldIconSlot;

/// Error line under the container. Spawned even when there is no error.
#[derive(Component)]
pub struct FieldErrorText;

#[derive(Component)]
struct InitialFieldValue(String);

/// Last text read from an input's buffer, compared against the field value.
#[derive(Component, Debug, Default)]
struct FieldInputText(String);

#[derive(Component)]
pub struct FieldConfig {
    label: String,
    label_color: Option<Color>,
    container_style: ContainerStyle,
    label_style: LabelStyle,
    input_style: InputStyle,
    icon: Option<FieldIcon>,
    input: Option<TextInputNode>,
    filter: Option<TextInputFilter>,
    prompt: Option<TextInputPrompt>,
    initialized: bool,
}

impl FieldConfig {
    pub fn label(&self) -> &str {
        &self.label
    }
}

pub struct FloatingLabelFieldProps {
    pub label: String,
    pub error: String,
    pub value: Option<String>,
    pub label_color: Option<Color>,
    pub container_style: ContainerStyle,
    pub label_style: LabelStyle,
    pub input_style: InputStyle,
    pub icon: Option<FieldIcon>,
    /// Handed to the text-entry surface as is.
    pub input: Option<TextInputNode>,
    pub filter: Option<TextInputFilter>,
    pub prompt: Option<TextInputPrompt>,
}

impl FloatingLabelFieldProps {
    pub fn new(label: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            error: String::new(),
            value: None,
            label_color: None,
            container_style: ContainerStyle::default(),
            label_style: LabelStyle::default(),
            input_style: InputStyle::default(),
            icon: None,
            input: None,
            filter: None,
            prompt: None,
        }
    }
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
    pub fn with_label_color(mut self, color: impl Into<Color>) -> Self {
        self.label_color = Some(color.into());
        self
    }
    pub fn with_container_style(mut self, style: ContainerStyle) -> Self {
        self.container_style = style;
        self
    }
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }
    pub fn with_input_style(mut self, style: InputStyle) -> Self {
        self.input_style = style;
        self
    }
    pub fn with_icon(mut self, icon: impl Into<FieldIcon>) -> Self {
        self.icon = Some(icon.into());
        self
    }
    pub fn with_input(mut self, input: TextInputNode) -> Self {
        self.input = Some(input);
        self
    }
    pub fn with_filter(mut self, filter: TextInputFilter) -> Self {
        self.filter = Some(filter);
        self
    }
    pub fn with_prompt(mut self, prompt: TextInputPrompt) -> Self {
        self.prompt = Some(prompt);
        self
    }
}

fn default_input_node() -> TextInputNode {
    TextInputNode {
        mode: TextInputMode::SingleLine,
        clear_on_submit: false,
        unfocus_on_submit: true,
        ..default()
    }
}

pub fn floating_label_field(props: FloatingLabelFieldProps) -> impl Bundle {
    let FloatingLabelFieldProps {
        label,
        error,
        value,
        label_color,
        container_style,
        label_style,
        input_style,
        icon,
        input,
        filter,
        prompt,
    } = props;

    let value = value.unwrap_or_default();
    let progress = initial_progress(&value);

    (
        Node {
            width: percent(100),
            flex_direction: FlexDirection::Column,
            ..default()
        },
        FloatingLabelField::new(value),
        LabelTransition::settled(progress, tokens::TRANSITION_DURATION),
        FieldError(error),
        FieldConfig {
            label,
            label_color,
            container_style,
            label_style,
            input_style,
            icon,
            input,
            filter,
            prompt,
            initialized: false,
        },
    )
}

fn setup_floating_label_fields(
    mut commands: Commands,
    theme: Res<FieldTheme>,
    icon_font: Option<Res<IconFont>>,
    mut fields: Query<(
        Entity,
        &mut FieldConfig,
        &FloatingLabelField,
        &FieldError,
        &mut LabelTransition,
    )>,
) {
    for (entity, mut config, field, error, mut transition) in &mut fields {
        if config.initialized {
            continue;
        }
        config.initialized = true;

        if transition.duration() != theme.transition {
            transition.set_duration(theme.transition);
        }

        let container_style = resolve(&[&theme.container, &config.container_style]);
        let label_style = resolve(&[&theme.label, &config.label_style]);
        let input_style = resolve(&[&theme.input, &config.input_style]);
        let has_icon = config.icon.is_some();
        let tint = label_color(error, config.label_color, &theme);
        // Glyphs never take the error colour; only the border and label do.
        let icon_tint = config.label_color.unwrap_or(theme.label_color);

        let container = commands
            .spawn((
                FieldContainer,
                container_style.node(),
                BackgroundColor(container_style.background_color()),
                BorderColor::all(border_color(error, &theme)),
                Interaction::None,
            ))
            .id();

        let label = commands
            .spawn((
                FieldLabel,
                Text::new(config.label.clone()),
                label_style.text_font(),
                TextColor(tint),
                Node {
                    position_type: PositionType::Absolute,
                    left: px(label_offset_x(has_icon, &theme)),
                    top: px(tokens::LABEL_TOP),
                    padding: UiRect::horizontal(px(tokens::LABEL_PADDING_X)),
                    ..default()
                },
                BackgroundColor(
                    label_style
                        .background
                        .unwrap_or(container_style.background_color()),
                ),
                UiTransform {
                    translation: Val2 {
                        x: px(0),
                        y: px(label_offset_y(transition.progress(), &theme)),
                    },
                    ..default()
                },
                ZIndex(1),
                Pickable::IGNORE,
            ))
            .id();

        let icon_slot = config.icon.take().map(|icon| {
            let slot = commands
                .spawn((
                    FieldIconSlot,
                    Node {
                        width: px(tokens::ICON_SLOT_WIDTH),
                        height: percent(100),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .id();

            match icon {
                FieldIcon::Glyph(glyph) => match &icon_font {
                    Some(font) => {
                        commands
                            .entity(slot)
                            .with_child(icon_glyph(glyph, tokens::ICON_SIZE, font.0.clone(), icon_tint));
                    }
                    None => warn!("icon font is not loaded; field {entity} renders an empty icon slot"),
                },
                FieldIcon::Entity(content) => {
                    commands.entity(slot).add_child(content);
                }
            }
            slot
        });

        let mut input = commands.spawn((
            FieldInputOf(entity),
            FieldInputText(field.value().to_string()),
            config.input.take().unwrap_or_else(default_input_node),
            input_style.text_font(),
            TextColor(input_style.text_color()),
            TextInputStyle {
                cursor_color: input_style.cursor_color.unwrap_or(input_style.text_color()),
                cursor_width: 1.0,
                selection_color: input_style
                    .selection_color
                    .unwrap_or(theme.label_color.with_alpha(0.25)),
                ..default()
            },
            Node {
                flex_grow: 1.0,
                height: percent(100),
                justify_content: JustifyContent::Center,
                overflow: Overflow::clip(),
                ..default()
            },
        ));

        if let Some(filter) = config.filter.take() {
            input.insert(filter);
        }

        if let Some(prompt) = config.prompt.take() {
            input.insert(prompt);
        }

        if !field.value().is_empty() {
            input.insert(InitialFieldValue(field.value().to_string()));
        }

        let input = input.id();

        let error_text = commands
            .spawn((
                FieldErrorText,
                Text::new(error.0.clone()),
                TextFont {
                    font_size: theme.error_font_size,
                    ..default()
                },
                TextColor(theme.error_color),
                Node {
                    margin: UiRect::top(px(error_margin_top(error, &theme))),
                    ..default()
                },
            ))
            .id();

        let mut container_children = vec![label];
        container_children.extend(icon_slot);
        container_children.push(input);

        commands
            .entity(container)
            .add_children(&container_children)
            .observe(move |_: On<Pointer<Click>>, mut focus: ResMut<InputFocus>| {
                focus.set(input);
            });

        commands
            .entity(entity)
            .add_children(&[container, error_text])
            .insert(FieldParts {
                container,
                label,
                icon_slot,
                input,
                error: error_text,
            });

        debug!("mounted floating label field {entity} ({:?})", config.label);
    }
}

fn restyle_on_error(
    theme: Res<FieldTheme>,
    fields: Query<(Entity, &FieldError, &FieldConfig, &FieldParts), Changed<FieldError>>,
    mut containers: Query<&mut BorderColor, With<FieldContainer>>,
    mut labels: Query<&mut TextColor, With<FieldLabel>>,
    mut error_texts: Query<(&mut Text, &mut Node), With<FieldErrorText>>,
) {
    for (entity, error, config, parts) in &fields {
        let (Ok(mut border), Ok(mut label), Ok((mut text, mut node))) = (
            containers.get_mut(parts.container),
            labels.get_mut(parts.label),
            error_texts.get_mut(parts.error),
        ) else {
            warn!("floating label field {entity} is missing parts; skipping restyle");
            continue;
        };

        *border = BorderColor::all(border_color(error, &theme));
        label.0 = label_color(error, config.label_color, &theme);
        text.0.clone_from(&error.0);
        node.margin.top = px(error_margin_top(error, &theme));
    }
}

fn read_buffer_text(
    mut inputs: Query<(&TextInputBuffer, &mut FieldInputText), Changed<TextInputBuffer>>,
) {
    for (buffer, mut text) in &mut inputs {
        let current = buffer.get_text();
        if text.0 != current {
            text.0 = current;
        }
    }
}

fn report_input_text(
    mut commands: Commands,
    inputs: Query<(&FieldInputOf, &FieldInputText), Changed<FieldInputText>>,
    fields: Query<&FloatingLabelField>,
) {
    for (owner, text) in &inputs {
        let Ok(field) = fields.get(owner.0) else {
            continue;
        };
        // Text the field already holds came from `SetFieldValue` or the initial value.
        if text.0 != field.value() {
            commands.trigger(EditFieldText {
                entity: owner.0,
                text: text.0.clone(),
            });
        }
    }
}

fn apply_initial_value(
    mut commands: Commands,
    mut inputs: Query<(
        Entity,
        &InitialFieldValue,
        &TextInputBuffer,
        &mut TextInputQueue,
    )>,
) {
    for (entity, initial, buffer, mut queue) in &mut inputs {
        if buffer.get_text().is_empty() {
            queue.add(TextInputAction::Edit(TextInputEdit::Paste(initial.0.clone())));
        }
        commands.entity(entity).remove::<InitialFieldValue>();
    }
}

fn write_value_to_buffer(
    set: On<SetFieldValue>,
    mut commands: Commands,
    fields: Query<&FieldParts>,
    mut queues: Query<&mut TextInputQueue>,
) -> Result<(), BevyError> {
    // Not mounted yet; setup seeds the buffer from the stored value.
    let Ok(parts) = fields.get(set.entity) else {
        return Ok(());
    };

    set_text_input_value(&mut *queues.get_mut(parts.input)?, set.text.clone());
    commands.entity(parts.input).remove::<InitialFieldValue>();

    Ok(())
}

fn handle_unfocus(
    mut focus: ResMut<InputFocus>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    inputs: Query<&FieldInputOf>,
    fields: Query<&FieldParts>,
    containers: Query<&Interaction, With<FieldContainer>>,
) {
    let Some(focused_entity) = focus.0 else {
        return;
    };
    let Ok(owner) = inputs.get(focused_entity) else {
        return;
    };
    let Ok(parts) = fields.get(owner.0) else {
        return;
    };
    let Ok(interaction) = containers.get(parts.container) else {
        return;
    };

    let clicked_outside =
        mouse.get_just_pressed().next().is_some() && *interaction == Interaction::None;

    if clicked_outside || keyboard.just_pressed(KeyCode::Escape) {
        focus.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Icon;

    struct MountedParts {
        container: Entity,
        label: Entity,
        error: Entity,
    }

    fn mount_by_hand(app: &mut App, props: FloatingLabelFieldProps) -> (Entity, MountedParts) {
        let world = app.world_mut();
        let container = world
            .spawn((FieldContainer, BorderColor::all(Color::NONE)))
            .id();
        let label = world.spawn((FieldLabel, TextColor(Color::NONE))).id();
        let error = world
            .spawn((FieldErrorText, Text::default(), Node::default()))
            .id();
        let input = world.spawn_empty().id();

        let entity = world
            .spawn((
                floating_label_field(props),
                FieldParts {
                    container,
                    label,
                    icon_slot: None,
                    input,
                    error,
                },
            ))
            .id();

        (
            entity,
            MountedParts {
                container,
                label,
                error,
            },
        )
    }

    fn restyle_app() -> App {
        let mut app = App::new();
        app.init_resource::<FieldTheme>()
            .add_systems(Update, restyle_on_error);
        app
    }

    fn border(app: &App, parts: &MountedParts) -> Color {
        app.world().get::<BorderColor>(parts.container).unwrap().top
    }

    fn label_tint(app: &App, parts: &MountedParts) -> Color {
        app.world().get::<TextColor>(parts.label).unwrap().0
    }

    fn error_line(app: &App, parts: &MountedParts) -> (String, Val) {
        let world = app.world();
        (
            world.get::<Text>(parts.error).unwrap().0.clone(),
            world.get::<Node>(parts.error).unwrap().margin.top,
        )
    }

    #[test]
    fn mount_with_error_renders_red() {
        let mut app = restyle_app();
        let tint = Color::srgb(0.0, 0.4, 0.2);
        let (_, parts) = mount_by_hand(
            &mut app,
            FloatingLabelFieldProps::new("Email")
                .with_error("Required")
                .with_label_color(tint),
        );
        app.update();

        let theme = FieldTheme::default();
        assert_eq!(border(&app, &parts), theme.error_color);
        assert_eq!(label_tint(&app, &parts), theme.error_color);
        assert_eq!(error_line(&app, &parts), ("Required".to_string(), px(5.0)));
    }

    #[test]
    fn clearing_the_error_restores_label_color_and_margin() {
        let mut app = restyle_app();
        let tint = Color::srgb(0.0, 0.4, 0.2);
        let (entity, parts) = mount_by_hand(
            &mut app,
            FloatingLabelFieldProps::new("Email")
                .with_error("Required")
                .with_label_color(tint),
        );
        app.update();

        app.world_mut().get_mut::<FieldError>(entity).unwrap().0.clear();
        app.update();

        let theme = FieldTheme::default();
        assert_eq!(border(&app, &parts), theme.border_color);
        assert_eq!(label_tint(&app, &parts), tint);
        // The node stays; only its margin collapses.
        assert_eq!(error_line(&app, &parts), (String::new(), px(0.0)));
    }

    #[test]
    fn default_label_color_without_error() {
        let mut app = restyle_app();
        let (_, parts) = mount_by_hand(&mut app, FloatingLabelFieldProps::new("Name"));
        app.update();

        let theme = FieldTheme::default();
        assert_eq!(label_tint(&app, &parts), theme.label_color);
        assert_eq!(border(&app, &parts), theme.border_color);
        assert_eq!(error_line(&app, &parts).1, px(0.0));
    }

    #[test]
    fn bundle_seeds_value_and_progress() {
        let mut world = World::new();

        let empty = world
            .spawn(floating_label_field(FloatingLabelFieldProps::new("Email").with_value("")))
            .id();
        let filled = world
            .spawn(floating_label_field(FloatingLabelFieldProps::new("Email").with_value("x")))
            .id();
        let numeric = world
            .spawn(floating_label_field(FloatingLabelFieldProps::new(42)))
            .id();

        assert_eq!(world.get::<LabelTransition>(empty).unwrap().progress(), RESTING);
        assert_eq!(world.get::<LabelTransition>(filled).unwrap().progress(), FLOATED);
        assert_eq!(world.get::<FloatingLabelField>(filled).unwrap().value(), "x");
        assert_eq!(world.get::<FloatingLabelField>(numeric).unwrap().value(), "");
        assert_eq!(world.get::<FieldConfig>(numeric).unwrap().label(), "42");
        assert!(!world.get::<FieldError>(numeric).unwrap().is_active());
    }

    fn mount_app() -> App {
        let mut app = App::new();
        app.init_resource::<FieldTheme>()
            .insert_resource(IconFont(Handle::default()))
            .add_systems(Update, setup_floating_label_fields);
        app
    }

    fn mount(app: &mut App, props: FloatingLabelFieldProps) -> (Entity, FieldParts) {
        let entity = app.world_mut().spawn(floating_label_field(props)).id();
        app.update();
        let parts = *app.world().get::<FieldParts>(entity).unwrap();
        (entity, parts)
    }

    #[test]
    fn mounts_resting_field_without_icon_or_error() {
        let mut app = mount_app();
        let (entity, parts) = mount(&mut app, FloatingLabelFieldProps::new("Email"));
        let world = app.world();
        let theme = FieldTheme::default();

        assert!(parts.icon_slot.is_none());
        assert_eq!(world.get::<Node>(parts.label).unwrap().left, px(15.0));
        assert_eq!(world.get::<UiTransform>(parts.label).unwrap().translation.y, px(4.0));
        assert_eq!(world.get::<TextColor>(parts.label).unwrap().0, theme.label_color);
        assert_eq!(world.get::<BorderColor>(parts.container).unwrap().top, theme.border_color);

        // The error line is spawned even without an error.
        assert_eq!(world.get::<Text>(parts.error).unwrap().0, "");
        assert_eq!(world.get::<Node>(parts.error).unwrap().margin.top, px(0.0));
        assert_eq!(
            world.get::<Children>(entity).unwrap().to_vec(),
            vec![parts.container, parts.error]
        );

        assert_eq!(world.get::<FieldInputOf>(parts.input).unwrap().0, entity);
        assert!(world.get::<InitialFieldValue>(parts.input).is_none());
        assert!(world.get::<FieldConfig>(entity).unwrap().initialized);
    }

    #[test]
    fn mounts_floated_field_with_glyph_and_error() {
        let mut app = mount_app();
        let tint = Color::srgb(0.1, 0.2, 0.7);
        let (_, parts) = mount(
            &mut app,
            FloatingLabelFieldProps::new("Email")
                .with_value("x")
                .with_icon(Icon::Mail)
                .with_label_color(tint)
                .with_error("Required"),
        );
        let world = app.world();
        let theme = FieldTheme::default();

        assert_eq!(world.get::<Node>(parts.label).unwrap().left, px(20.0));
        assert_eq!(world.get::<UiTransform>(parts.label).unwrap().translation.y, px(-20.0));
        assert_eq!(world.get::<TextColor>(parts.label).unwrap().0, theme.error_color);
        assert_eq!(world.get::<BorderColor>(parts.container).unwrap().top, theme.error_color);
        assert_eq!(world.get::<Text>(parts.error).unwrap().0, "Required");
        assert_eq!(world.get::<Node>(parts.error).unwrap().margin.top, px(5.0));
        assert_eq!(world.get::<InitialFieldValue>(parts.input).unwrap().0, "x");

        // The glyph keeps the caller's tint while the label turns red.
        let slot = parts.icon_slot.unwrap();
        let glyph = world.get::<Children>(slot).unwrap()[0];
        assert_eq!(world.get::<TextColor>(glyph).unwrap().0, tint);
    }

    #[test]
    fn entity_icon_moves_into_the_slot() {
        let mut app = mount_app();
        let badge = app.world_mut().spawn(Node::default()).id();
        let (_, parts) = mount(&mut app, FloatingLabelFieldProps::new("Code").with_icon(badge));

        let slot = parts.icon_slot.unwrap();
        assert_eq!(app.world().get::<ChildOf>(badge).unwrap().parent(), slot);
        assert_eq!(app.world().get::<Node>(parts.label).unwrap().left, px(20.0));
    }

    #[test]
    fn initial_value_marker_is_consumed() {
        let mut app = App::new();
        app.add_systems(PostUpdate, apply_initial_value);
        let input = app
            .world_mut()
            .spawn((default_input_node(), InitialFieldValue("x".to_string())))
            .id();

        app.update();

        assert!(app.world().get::<InitialFieldValue>(input).is_none());
    }

    #[derive(Resource, Default)]
    struct Changes(Vec<String>);

    fn bridge_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<Changes>()
            .add_plugins(crate::headless::plugin)
            .add_systems(Update, report_input_text)
            .add_observer(|changed: On<FieldTextChanged>, mut changes: ResMut<Changes>| {
                changes.0.push(changed.text.clone());
            });
        app
    }

    fn spawn_bridged(app: &mut App, initial: &str) -> (Entity, Entity) {
        let world = app.world_mut();
        let entity = world
            .spawn(floating_label_field(FloatingLabelFieldProps::new("Email").with_value(initial)))
            .id();
        let input = world
            .spawn((FieldInputOf(entity), FieldInputText(initial.to_string())))
            .id();
        app.update();
        (entity, input)
    }

    fn type_text(app: &mut App, input: Entity, text: &str) {
        app.world_mut().get_mut::<FieldInputText>(input).unwrap().0 = text.to_string();
        app.update();
    }

    #[test]
    fn buffer_edits_report_one_change_per_new_text() {
        let mut app = bridge_app();
        let (entity, input) = spawn_bridged(&mut app, "");

        type_text(&mut app, input, "a");
        type_text(&mut app, input, "ab");
        app.update();
        type_text(&mut app, input, "ab");

        assert_eq!(app.world().resource::<Changes>().0, ["a", "ab"]);
        assert_eq!(app.world().get::<FloatingLabelField>(entity).unwrap().value(), "ab");
    }

    #[test]
    fn initial_and_set_values_stay_silent_when_the_buffer_catches_up() {
        let mut app = bridge_app();
        let (entity, input) = spawn_bridged(&mut app, "x");

        // Initial paste lands in the buffer.
        type_text(&mut app, input, "x");

        app.world_mut().trigger(SetFieldValue {
            entity,
            text: String::new(),
        });
        type_text(&mut app, input, "");

        assert!(app.world().resource::<Changes>().0.is_empty());
        assert_eq!(app.world().get::<FloatingLabelField>(entity).unwrap().value(), "");
    }

    #[test]
    fn set_value_drops_pending_initial_value() {
        let mut app = App::new();
        app.add_observer(write_value_to_buffer);
        let world = app.world_mut();
        let input = world
            .spawn((default_input_node(), InitialFieldValue("x".to_string())))
            .id();
        let entity = world
            .spawn(FieldParts {
                container: Entity::PLACEHOLDER,
                label: Entity::PLACEHOLDER,
                icon_slot: None,
                input,
                error: Entity::PLACEHOLDER,
            })
            .id();

        world.trigger(SetFieldValue {
            entity,
            text: "y".to_string(),
        });
        world.flush();

        assert!(app.world().get::<InitialFieldValue>(input).is_none());
    }

    fn unfocus_app(interaction: Interaction) -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<InputFocus>()
            .add_systems(Update, handle_unfocus);

        let world = app.world_mut();
        let container = world.spawn((FieldContainer, interaction)).id();
        let entity = world.spawn_empty().id();
        let input = world.spawn(FieldInputOf(entity)).id();
        world.entity_mut(entity).insert(FieldParts {
            container,
            label: Entity::PLACEHOLDER,
            icon_slot: None,
            input,
            error: Entity::PLACEHOLDER,
        });
        world.resource_mut::<InputFocus>().0 = Some(input);
        (app, input)
    }

    #[test]
    fn escape_clears_focus() {
        let (mut app, input) = unfocus_app(Interaction::None);
        app.update();
        assert_eq!(app.world().resource::<InputFocus>().0, Some(input));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        assert_eq!(app.world().resource::<InputFocus>().0, None);
    }

    #[test]
    fn click_outside_clears_focus_but_click_inside_keeps_it() {
        let (mut app, _) = unfocus_app(Interaction::None);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        assert_eq!(app.world().resource::<InputFocus>().0, None);

        let (mut app, input) = unfocus_app(Interaction::Pressed);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        assert_eq!(app.world().resource::<InputFocus>().0, Some(input));
    }
}
