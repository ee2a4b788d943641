//! Render model: what the presentation layer draws for the stack.

use serde::{Deserialize, Serialize};

use crate::event::SwipeDirection;
use crate::gesture::{rotation_for, DragConfig, DragState};
use crate::layout::{LayoutState, Size};
use crate::Card;

/// How stacked cards are offset behind the front card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackStyle {
    /// Vertical offset per depth level, at scale 1.
    pub offset_y: f32,
    /// Scale lost per depth level.
    pub scale_step: f32,
    /// Horizontal distance a committed card flies to.
    pub exit_distance: f32,
}

impl Default for StackStyle {
    fn default() -> Self {
        Self {
            offset_y: 10.0,
            scale_step: 0.05,
            exit_distance: 1000.0,
        }
    }
}

/// Per-card transform relative to the stack origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    /// Horizontal translation in pixels.
    pub translate_x: f32,
    /// Vertical translation in pixels.
    pub translate_y: f32,
    /// Rotation in degrees, clockwise.
    pub rotation_deg: f32,
    /// Uniform scale on top of the layout scale.
    pub scale: f32,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
    /// 0.0 (hidden) to 1.0.
    pub opacity: f32,
}

impl Default for CardTransform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation_deg: 0.0,
            scale: 1.0,
            z_index: 0,
            opacity: 1.0,
        }
    }
}

/// One card as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCard {
    /// Depth in the stack; 0 is the front.
    pub depth: usize,
    /// The card.
    pub card: Card,
    /// Where to draw it.
    pub transform: CardTransform,
    /// Whether pointer input on this card is accepted.
    pub draggable: bool,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    /// Cards front to back.
    pub cards: Vec<RenderedCard>,
    /// Current layout.
    pub layout: LayoutState,
    /// Card size in pixels.
    pub card_size: Size,
    /// Cards left, including the ones drawn.
    pub remaining: usize,
    /// Direction of the commit in flight, if any.
    pub committing: Option<SwipeDirection>,
}

/// Inputs for [`build_render_model`], borrowed from the controller.
pub(crate) struct RenderInput<'a> {
    pub visible: Vec<&'a Card>,
    pub drag: DragState,
    pub drag_config: &'a DragConfig,
    pub committing: Option<SwipeDirection>,
    pub layout: LayoutState,
    pub card_size: Size,
    pub remaining: usize,
    pub style: &'a StackStyle,
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // depth is at most a handful of cards
pub(crate) fn build_render_model(input: RenderInput<'_>) -> RenderModel {
    let count = input.visible.len();
    let cards = input
        .visible
        .into_iter()
        .enumerate()
        .map(|(depth, card)| {
            let z_index = (count - depth) as i32;
            let transform = if depth == 0 {
                front_transform(&input.drag, input.drag_config, input.committing, input.style, z_index)
            } else {
                let level = depth as f32;
                CardTransform {
                    translate_y: level * input.style.offset_y * input.layout.scale_factor,
                    scale: (1.0 - level * input.style.scale_step).max(0.0),
                    z_index,
                    ..CardTransform::default()
                }
            };
            RenderedCard {
                depth,
                card: card.clone(),
                transform,
                draggable: depth == 0 && input.committing.is_none(),
            }
        })
        .collect();

    RenderModel {
        cards,
        layout: input.layout,
        card_size: input.card_size,
        remaining: input.remaining,
        committing: input.committing,
    }
}

fn front_transform(
    drag: &DragState,
    drag_config: &DragConfig,
    committing: Option<SwipeDirection>,
    style: &StackStyle,
    z_index: i32,
) -> CardTransform {
    match committing {
        Some(direction) => CardTransform {
            translate_x: direction.sign() * style.exit_distance,
            translate_y: drag.delta_y,
            rotation_deg: direction.sign() * drag_config.max_rotation_deg,
            z_index,
            opacity: 0.0,
            ..CardTransform::default()
        },
        None => CardTransform {
            translate_x: drag.delta_x,
            translate_y: drag.delta_y,
            rotation_deg: rotation_for(drag.delta_x, drag_config),
            z_index,
            ..CardTransform::default()
        },
    }
}
