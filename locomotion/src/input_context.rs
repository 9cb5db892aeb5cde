#[derive(Debug, Default, Clone)]
/// Context that holds input state for a locomotion session. The driver feeds it the raw state of
/// the freeze button each frame, and the session asks it whether the button went down this frame.
///
/// Currently only supports the freeze button (the `F` key on desktop builds).
pub struct InputContext {
    freeze_button: bool,
    freeze_button_prev: bool,
}

impl InputContext {
    /// Get the current state of the freeze button
    pub fn freeze_button(&self) -> bool {
        self.freeze_button
    }

    /// Was the freeze button just pressed this frame?
    pub fn freeze_button_just_pressed(&self) -> bool {
        !self.freeze_button_prev & self.freeze_button
    }

    /// Synchronize the context with the raw button state. Call once per frame, before `tick`.
    pub fn update(&mut self, freeze_button: bool) {
        self.freeze_button_prev = self.freeze_button;
        self.freeze_button = freeze_button;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freeze_button_edges() {
        let mut input_context = InputContext::default();
        assert!(!input_context.freeze_button_just_pressed());

        input_context.update(true);
        assert!(input_context.freeze_button());
        assert!(input_context.freeze_button_just_pressed());

        // Held down: no new edge
        input_context.update(true);
        assert!(!input_context.freeze_button_just_pressed());

        input_context.update(false);
        assert!(!input_context.freeze_button());
        assert!(!input_context.freeze_button_just_pressed());
    }
}
