//! Screen stack - LIFO navigation history

use crate::screen::ScreenType;

/// Navigation history. The top is the only screen accepting input; the
/// run loop ends when the stack empties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenStack {
    screens: Vec<ScreenType>,
}

impl ScreenStack {
    /// Stack holding only `root`
    pub fn new(root: ScreenType) -> Self {
        Self {
            screens: vec![root],
        }
    }

    pub fn push(&mut self, screen: ScreenType) {
        self.screens.push(screen);
    }

    pub fn pop(&mut self) -> Option<ScreenType> {
        self.screens.pop()
    }

    /// Current screen, `None` once navigation has finished
    pub fn top(&self) -> Option<ScreenType> {
        self.screens.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Bottom to top
    pub fn as_slice(&self) -> &[ScreenType] {
        &self.screens
    }
}
