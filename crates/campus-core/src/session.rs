/// First-visit prompt gated by a session flag the host owns and injects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroPrompt {
    already_shown: bool,
    open: bool,
}

impl IntroPrompt {
    pub fn new(already_shown: bool) -> Self {
        Self {
            already_shown,
            open: !already_shown,
        }
    }

    pub fn should_display(&self) -> bool {
        self.open
    }

    /// Hides the prompt and returns the flag value the host should store for the session.
    pub fn dismiss(&mut self) -> bool {
        self.open = false;
        self.already_shown = true;
        self.already_shown
    }

    pub fn already_shown(&self) -> bool {
        self.already_shown
    }
}
