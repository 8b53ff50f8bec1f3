use std::time::Duration;

use bevy::{
    input_focus::InputFocus,
    math::curve::{Curve, EaseFunction},
    prelude::*,
};

use crate::theme::FieldTheme;

/// Progress value of a label sitting over the input.
pub const RESTING: f32 = 0.0;
/// Progress value of a label floated above the input.
pub const FLOATED: f32 = 1.0;

pub(crate) fn plugin(app: &mut App) {
    app.init_resource::<FieldTheme>()
        .init_resource::<InputFocus>()
        .add_observer(apply_text_edit)
        .add_observer(apply_set_value)
        .add_systems(
            Update,
            (track_field_focus, tick_label_transitions, apply_label_offsets)
                .chain()
                .in_set(FloatingLabelSystems),
        );
}

/// Focus tracking, label animation and label placement.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FloatingLabelSystems;

/// The current text of a floating label field, owned by the field entity.
#[derive(Component, Debug, Default, Clone)]
pub struct FloatingLabelField {
    value: String,
    focused: bool,
}

impl FloatingLabelField {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replaces the stored text. Returns `false` if it was already `text`.
    pub fn replace_value(&mut self, text: &str) -> bool {
        if self.value == text {
            return false;
        }
        self.value.clear();
        self.value.push_str(text);
        true
    }

    /// Where the label belongs once any running transition has finished.
    pub fn settled_progress(&self) -> f32 {
        if self.focused || !self.value.is_empty() {
            FLOATED
        } else {
            RESTING
        }
    }
}

/// Starting label progress for a field mounted with `value`.
pub fn initial_progress(value: &str) -> f32 {
    if value.is_empty() { RESTING } else { FLOATED }
}

/// Time-based tween of the label's progress between [`RESTING`] and [`FLOATED`].
///
/// Calling [`LabelTransition::animate_to`] while a tween is running restarts it
/// from the current progress toward the new target.
#[derive(Component, Debug, Clone)]
pub struct LabelTransition {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    ease: EaseFunction,
}

impl LabelTransition {
    pub fn settled(progress: f32, duration: Duration) -> Self {
        let progress = progress.clamp(RESTING, FLOATED);
        Self {
            from: progress,
            to: progress,
            elapsed: duration,
            duration,
            ease: EaseFunction::CubicInOut,
        }
    }

    pub fn with_ease(mut self, ease: EaseFunction) -> Self {
        self.ease = ease;
        self
    }

    pub fn progress(&self) -> f32 {
        if self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.ease.sample_clamped(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.elapsed < self.duration
    }

    pub fn animate_to(&mut self, target: f32) {
        self.from = self.progress();
        self.to = target.clamp(RESTING, FLOATED);
        self.elapsed = Duration::ZERO;
    }

    pub fn tick(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.duration);
    }

    /// Changes the length of future tweens. A running tween keeps its progress.
    pub fn set_duration(&mut self, duration: Duration) {
        let progress = self.progress();
        if self.is_running() {
            self.from = progress;
            self.elapsed = Duration::ZERO;
            self.duration = duration;
        } else {
            *self = Self::settled(progress, duration).with_ease(self.ease);
        }
    }
}

/// Vertical translation of the label for a given progress.
pub fn label_offset_y(progress: f32, theme: &FieldTheme) -> f32 {
    let progress = progress.clamp(RESTING, FLOATED);
    theme.label_rest_offset + (theme.label_float_offset - theme.label_rest_offset) * progress
}

pub fn label_offset_x(has_icon: bool, theme: &FieldTheme) -> f32 {
    if has_icon {
        theme.label_left_with_icon
    } else {
        theme.label_left
    }
}

/// Caller-supplied error message. Empty means no error.
#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldError(pub String);

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }
}

pub fn border_color(error: &FieldError, theme: &FieldTheme) -> Color {
    if error.is_active() {
        theme.error_color
    } else {
        theme.border_color
    }
}

/// An active error overrides the caller's `label_color`.
pub fn label_color(error: &FieldError, label_color: Option<Color>, theme: &FieldTheme) -> Color {
    if error.is_active() {
        theme.error_color
    } else {
        label_color.unwrap_or(theme.label_color)
    }
}

/// The error node is always present; only its top margin depends on the error.
pub fn error_margin_top(error: &FieldError, theme: &FieldTheme) -> f32 {
    if error.is_active() {
        theme.error_margin_top
    } else {
        0.0
    }
}

/// Child entities of a mounted field.
#[derive(Component, Debug, Clone, Copy)]
pub struct FieldParts {
    pub container: Entity,
    pub label: Entity,
    pub icon_slot: Option<Entity>,
    pub input: Entity,
    pub error: Entity,
}

/// Links a text-entry entity back to the field that owns it.
#[derive(Component, Debug, Clone, Copy)]
pub struct FieldInputOf(pub Entity);

/// Fired after the field's text changed through editing.
///
/// Edits are read from the text-entry buffer once per frame, so several
/// keystrokes landing in the same frame are reported as one event carrying the
/// resulting text.
#[derive(EntityEvent, Debug, Clone)]
pub struct FieldTextChanged {
    pub entity: Entity,
    pub text: String,
}

#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct FieldFocused {
    pub entity: Entity,
}

#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct FieldBlurred {
    pub entity: Entity,
}

/// An edit coming from the text-entry surface. Fires [`FieldTextChanged`] when
/// the text differs from the stored value.
#[derive(EntityEvent, Debug, Clone)]
pub struct EditFieldText {
    pub entity: Entity,
    pub text: String,
}

/// Replaces the field's value from the owner's side without firing
/// [`FieldTextChanged`].
#[derive(EntityEvent, Debug, Clone)]
pub struct SetFieldValue {
    pub entity: Entity,
    pub text: String,
}

fn settle_if_unfocused(field: &FloatingLabelField, transition: &mut LabelTransition) {
    if field.focused {
        return;
    }
    let target = field.settled_progress();
    if transition.target() != target {
        transition.animate_to(target);
    }
}

fn apply_text_edit(
    edit: On<EditFieldText>,
    mut commands: Commands,
    mut fields: Query<(&mut FloatingLabelField, &mut LabelTransition)>,
) -> Result<(), BevyError> {
    let (mut field, mut transition) = fields.get_mut(edit.entity)?;

    if !field.replace_value(&edit.text) {
        return Ok(());
    }
    settle_if_unfocused(&field, &mut transition);

    commands.trigger(FieldTextChanged {
        entity: edit.entity,
        text: edit.text.clone(),
    });

    Ok(())
}

fn apply_set_value(
    set: On<SetFieldValue>,
    mut fields: Query<(&mut FloatingLabelField, &mut LabelTransition)>,
) -> Result<(), BevyError> {
    let (mut field, mut transition) = fields.get_mut(set.entity)?;

    if field.replace_value(&set.text) {
        settle_if_unfocused(&field, &mut transition);
    }

    Ok(())
}

fn track_field_focus(
    mut commands: Commands,
    focus: Res<InputFocus>,
    mut fields: Query<(
        Entity,
        &FieldParts,
        &mut FloatingLabelField,
        &mut LabelTransition,
    )>,
) {
    for (entity, parts, mut field, mut transition) in &mut fields {
        let focused = focus.0 == Some(parts.input);
        if focused == field.focused {
            continue;
        }
        field.focused = focused;

        if focused {
            debug!("floating label field {entity} focused");
            transition.animate_to(FLOATED);
            commands.trigger(FieldFocused { entity });
        } else {
            debug!("floating label field {entity} blurred");
            if field.value.is_empty() {
                transition.animate_to(RESTING);
            }
            commands.trigger(FieldBlurred { entity });
        }
    }
}

fn tick_label_transitions(time: Res<Time>, mut transitions: Query<&mut LabelTransition>) {
    for mut transition in &mut transitions {
        if transition.is_running() {
            transition.tick(time.delta());
        }
    }
}

fn apply_label_offsets(
    theme: Res<FieldTheme>,
    fields: Query<(Entity, &FieldParts, &LabelTransition), Changed<LabelTransition>>,
    mut labels: Query<&mut UiTransform>,
) {
    for (entity, parts, transition) in &fields {
        let Ok(mut transform) = labels.get_mut(parts.label) else {
            warn!("floating label field {entity} has no label transform");
            continue;
        };
        // Translation only, so the label never triggers a layout pass.
        transform.translation = Val2 {
            x: px(0),
            y: px(label_offset_y(transition.progress(), &theme)),
        };
    }
}
