use bevy_ecs::prelude::Component;

/// Scene-graph visibility flag. Rendering is external; this component only
/// records the state an outside renderer should honor.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visible(pub bool);
