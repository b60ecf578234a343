//! Scoped "operation in flight" guard

use crate::traits::ArticleView;
use crate::types::{Control, ControlBoard, ControlState};

/// Marks a control busy for as long as it lives.
///
/// Acquisition records the control's state and shows it busy; dropping the
/// guard restores exactly the recorded state on every exit path.
pub(crate) struct InFlight<'a, V: ArticleView + ?Sized> {
    controls: &'a mut ControlBoard,
    view: &'a V,
    control: Control,
    prior: ControlState,
}

impl<'a, V: ArticleView + ?Sized> InFlight<'a, V> {
    /// Returns `None` if the control is already disabled.
    pub(crate) fn acquire(
        controls: &'a mut ControlBoard,
        view: &'a V,
        control: Control,
    ) -> Option<Self> {
        let prior = controls.get(control);
        if !prior.enabled {
            return None;
        }
        controls.set(control, ControlState::BUSY);
        view.set_control(control, ControlState::BUSY);
        Some(Self {
            controls,
            view,
            control,
            prior,
        })
    }
}

impl<V: ArticleView + ?Sized> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.controls.set(self.control, self.prior);
        self.view.set_control(self.control, self.prior);
    }
}
