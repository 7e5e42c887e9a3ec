//! Map/cards presentation switch.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Map,
    Cards,
}

impl ViewMode {
    pub fn flipped(self) -> Self {
        match self {
            ViewMode::Map => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Map,
        }
    }

    /// Text for the toggle button: the view a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Map => "Card View",
            ViewMode::Cards => "Map View",
        }
    }
}

/// The DOM side of a view switch (container/card classes, button label).
pub trait ViewPresenter {
    fn present(&mut self, mode: ViewMode);
}

/// Holds exactly one [`ViewMode`]; it changes only through [`toggle`].
///
/// [`toggle`]: ViewModeController::toggle
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewModeController {
    mode: ViewMode,
}

impl ViewModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Push the current mode to the presenter without changing it, used once
    /// on mount so the DOM matches the controller.
    pub fn sync(&self, presenter: &mut dyn ViewPresenter) {
        presenter.present(self.mode);
    }

    pub fn toggle(&mut self, presenter: &mut dyn ViewPresenter) -> ViewMode {
        self.mode = self.mode.flipped();
        log::debug!("[view] switched to {:?}", self.mode);
        presenter.present(self.mode);
        self.mode
    }
}
