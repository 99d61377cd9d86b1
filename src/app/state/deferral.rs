/// Generation counter for a timer-driven state change.
///
/// `arm` hands out a fresh token; the deferred action is applied only if it
/// brings back the token that is still armed. Disarming (or re-arming)
/// turns any already-queued action into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deferral {
    generation: u64,
    armed: Option<u64>,
}

impl Deferral {
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.armed = Some(self.generation);
        self.generation
    }

    /// Returns whether something was pending.
    pub fn disarm(&mut self) -> bool {
        self.armed.take().is_some()
    }

    /// Consumes the token if it is the armed one.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed == Some(generation) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
