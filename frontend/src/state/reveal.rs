/// One-way "revealed" flag for a scroll-in animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only on the false -> true transition; the caller should
    /// stop watching the element then.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::new().revealed);
    }

    #[test]
    fn reveals_once_and_never_reverts() {
        let mut state = RevealState::new();
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(state.revealed);

        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert!(state.revealed);
    }
}
