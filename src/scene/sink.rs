use crate::foundation::core::TargetState;

/// Opaque handle to one render target within a scene's slot layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SlotId(pub usize);

/// Boundary to the host's render-target setter.
///
/// The core never touches rendering; it hands `(slot, state)` pairs to this
/// trait and the host applies them to its visual surface.
pub trait TargetSink {
    /// Apply `state` to the element behind `slot`.
    fn apply(&mut self, slot: SlotId, state: &TargetState);
}

/// In-memory sink capturing the last applied state per slot.
///
/// Useful for tests and for hosts that batch-apply once per tick.
#[derive(Clone, Debug)]
pub struct BufferSink {
    states: Vec<TargetState>,
}

impl BufferSink {
    /// Build a sink with `count` slots, all at the identity state.
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![TargetState::identity(); count],
        }
    }

    /// Last state applied to `slot`, or `None` for a slot the sink never had.
    pub fn get(&self, slot: SlotId) -> Option<&TargetState> {
        self.states.get(slot.0)
    }

    /// All slot states in slot order.
    pub fn states(&self) -> &[TargetState] {
        &self.states
    }
}

impl TargetSink for BufferSink {
    /// Unknown slots are ignored; the tick path never panics.
    fn apply(&mut self, slot: SlotId, state: &TargetState) {
        if let Some(s) = self.states.get_mut(slot.0) {
            *s = *state;
        }
    }
}
