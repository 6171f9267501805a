use crate::constants::SPINNER_FRAMES;

/// Animation frames shared by the summary spinner and the typing indicator.
/// Advanced once per UI tick.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
    }

    /// Three bouncing dots, one of them raised per frame.
    pub fn typing_dots(&self) -> String {
        let raised = self.spinner_idx % 3;
        (0..3)
            .map(|i| if i == raised { "●" } else { "∙" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        let mut status = StatusIndicator::new();
        let first = status.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            status.update_spinner();
        }
        assert_eq!(status.spinner(), first);
    }

    #[test]
    fn test_typing_dots_move() {
        let mut status = StatusIndicator::new();
        assert_eq!(status.typing_dots(), "● ∙ ∙");
        status.update_spinner();
        assert_eq!(status.typing_dots(), "∙ ● ∙");
    }
}
