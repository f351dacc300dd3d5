// SPDX-License-Identifier: MPL-2.0
//! Dashboard view state: which modal dialogs are open and which dock
//! features are enabled.
//!
//! One `ViewState` lives for the whole session. It is owned by the
//! application root and handed down by reference to every view, and it is
//! only ever mutated through the named operations below (or [`ViewState::apply`],
//! which dispatches to them).
//!
//! Modal flags and toggle flags are two independent groups: no modal
//! operation touches a toggle and no toggle operation touches a modal.

/// The five modal dialog slots, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Message,
    Emergency,
    Notification,
    Health,
    Setting,
}

impl ModalKind {
    /// All modal kinds, in declaration (and stacking) order.
    pub const ALL: [ModalKind; 5] = [
        ModalKind::Message,
        ModalKind::Emergency,
        ModalKind::Notification,
        ModalKind::Health,
        ModalKind::Setting,
    ];

    /// Name of the backing field, used in log output.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            ModalKind::Message => "modal_open.message",
            ModalKind::Emergency => "modal_open.emergency",
            ModalKind::Notification => "modal_open.notification",
            ModalKind::Health => "modal_open.health",
            ModalKind::Setting => "modal_open.setting",
        }
    }
}

/// The four dock features that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    Alert,
    Camera,
    Drive,
    Mic,
}

impl ToggleKind {
    /// All toggles, in dock order.
    pub const ALL: [ToggleKind; 4] = [
        ToggleKind::Alert,
        ToggleKind::Camera,
        ToggleKind::Drive,
        ToggleKind::Mic,
    ];

    /// Name of the backing field, used in log output.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            ToggleKind::Alert => "toggle.alert",
            ToggleKind::Camera => "toggle.camera",
            ToggleKind::Drive => "toggle.drive",
            ToggleKind::Mic => "toggle.mic",
        }
    }
}

/// Open/closed flag per modal. All closed by default.
///
/// Several flags may be set at once; nothing here enforces exclusivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalFlags {
    pub message: bool,
    pub emergency: bool,
    pub notification: bool,
    pub health: bool,
    pub setting: bool,
}

impl ModalFlags {
    /// Returns the flag for `kind`.
    #[must_use]
    pub fn get(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Message => self.message,
            ModalKind::Emergency => self.emergency,
            ModalKind::Notification => self.notification,
            ModalKind::Health => self.health,
            ModalKind::Setting => self.setting,
        }
    }

    fn slot_mut(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Message => &mut self.message,
            ModalKind::Emergency => &mut self.emergency,
            ModalKind::Notification => &mut self.notification,
            ModalKind::Health => &mut self.health,
            ModalKind::Setting => &mut self.setting,
        }
    }
}

/// Enabled/disabled flag per dock feature. All enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleFlags {
    pub alert: bool,
    pub camera: bool,
    pub drive: bool,
    pub mic: bool,
}

impl Default for ToggleFlags {
    fn default() -> Self {
        Self {
            alert: true,
            camera: true,
            drive: true,
            mic: true,
        }
    }
}

impl ToggleFlags {
    /// Returns the flag for `kind`.
    #[must_use]
    pub fn get(&self, kind: ToggleKind) -> bool {
        match kind {
            ToggleKind::Alert => self.alert,
            ToggleKind::Camera => self.camera,
            ToggleKind::Drive => self.drive,
            ToggleKind::Mic => self.mic,
        }
    }

    fn slot_mut(&mut self, kind: ToggleKind) -> &mut bool {
        match kind {
            ToggleKind::Alert => &mut self.alert,
            ToggleKind::Camera => &mut self.camera,
            ToggleKind::Drive => &mut self.drive,
            ToggleKind::Mic => &mut self.mic,
        }
    }
}

/// A single state mutation requested by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(ModalKind),
    CloseAllModals,
    Toggle(ToggleKind),
}

/// Session-lifetime record of modal-open and toggle booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    modal_open: ModalFlags,
    toggle: ToggleFlags,
}

impl ViewState {
    /// Creates the start-up state: every modal closed, every feature enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the modal group.
    #[must_use]
    pub fn modal_open(&self) -> &ModalFlags {
        &self.modal_open
    }

    /// Read access to the toggle group.
    #[must_use]
    pub fn toggle(&self) -> &ToggleFlags {
        &self.toggle
    }

    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.modal_open.get(kind)
    }

    #[must_use]
    pub fn is_enabled(&self, kind: ToggleKind) -> bool {
        self.toggle.get(kind)
    }

    /// Open modals in stacking order.
    pub fn open_modals(&self) -> impl Iterator<Item = ModalKind> + '_ {
        ModalKind::ALL
            .into_iter()
            .filter(move |kind| self.modal_open.get(*kind))
    }

    #[must_use]
    pub fn any_modal_open(&self) -> bool {
        self.open_modals().next().is_some()
    }

    /// Applies `action` through the matching named operation.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Open(kind) => self.open(kind),
            Action::CloseAllModals => self.close_all_modals(),
            Action::Toggle(kind) => self.toggle_feature(kind),
        }
    }

    /// Sets the flag for `kind` to `true`. Opening an already-open modal is a no-op.
    pub fn open(&mut self, kind: ModalKind) {
        *self.modal_open.slot_mut(kind) = true;
        tracing::info!(field = kind.field_name(), value = true, "view state changed");
    }

    pub fn open_message(&mut self) {
        self.open(ModalKind::Message);
    }

    pub fn open_emergency(&mut self) {
        self.open(ModalKind::Emergency);
    }

    pub fn open_notification(&mut self) {
        self.open(ModalKind::Notification);
    }

    pub fn open_health(&mut self) {
        self.open(ModalKind::Health);
    }

    pub fn open_setting(&mut self) {
        self.open(ModalKind::Setting);
    }

    /// Closes every modal at once. There is no per-modal close.
    pub fn close_all_modals(&mut self) {
        let was_open = self.open_modals().count();
        self.modal_open = ModalFlags::default();
        tracing::info!(field = "modal_open", value = false, was_open, "all modals closed");
    }

    /// Flips the flag for `kind`, reading the current value.
    pub fn toggle_feature(&mut self, kind: ToggleKind) {
        let slot = self.toggle.slot_mut(kind);
        *slot = !*slot;
        let value = *slot;
        tracing::info!(field = kind.field_name(), value, "view state changed");
    }

    pub fn toggle_alert(&mut self) {
        self.toggle_feature(ToggleKind::Alert);
    }

    pub fn toggle_camera(&mut self) {
        self.toggle_feature(ToggleKind::Camera);
    }

    pub fn toggle_drive(&mut self) {
        self.toggle_feature(ToggleKind::Drive);
    }

    pub fn toggle_mic(&mut self) {
        self.toggle_feature(ToggleKind::Mic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_toggles_on_and_modals_closed() {
        let state = ViewState::new();
        for kind in ToggleKind::ALL {
            assert!(state.is_enabled(kind), "{kind:?} should start enabled");
        }
        for kind in ModalKind::ALL {
            assert!(!state.is_open(kind), "{kind:?} should start closed");
        }
        assert!(!state.any_modal_open());
    }

    #[test]
    fn open_sets_exactly_the_called_flags() {
        let mut state = ViewState::new();
        state.open_notification();
        state.open_setting();

        let open: Vec<_> = state.open_modals().collect();
        assert_eq!(open, vec![ModalKind::Notification, ModalKind::Setting]);
    }

    #[test]
    fn named_openers_target_their_own_slot() {
        let openers: [(fn(&mut ViewState), ModalKind); 5] = [
            (ViewState::open_message, ModalKind::Message),
            (ViewState::open_emergency, ModalKind::Emergency),
            (ViewState::open_notification, ModalKind::Notification),
            (ViewState::open_health, ModalKind::Health),
            (ViewState::open_setting, ModalKind::Setting),
        ];
        for (open, kind) in openers {
            let mut state = ViewState::new();
            open(&mut state);
            assert_eq!(state.open_modals().collect::<Vec<_>>(), vec![kind]);
        }
    }

    #[test]
    fn opening_twice_matches_opening_once() {
        let mut once = ViewState::new();
        once.open_health();

        let mut twice = ViewState::new();
        twice.open_health();
        twice.open_health();

        assert_eq!(once, twice);
    }

    #[test]
    fn close_all_clears_every_modal() {
        let mut state = ViewState::new();
        state.open_message();
        state.open_health();
        state.close_all_modals();

        assert_eq!(*state.modal_open(), ModalFlags::default());
        assert!(!state.any_modal_open());
    }

    #[test]
    fn close_all_on_closed_state_is_harmless() {
        let mut state = ViewState::new();
        state.close_all_modals();
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn toggle_twice_restores_original_value() {
        for kind in ToggleKind::ALL {
            let mut state = ViewState::new();
            state.toggle_feature(kind);
            assert!(!state.is_enabled(kind));
            state.toggle_feature(kind);
            assert!(state.is_enabled(kind));
        }
    }

    #[test]
    fn named_toggles_target_their_own_slot() {
        let mut state = ViewState::new();
        state.toggle_camera();
        state.toggle_mic();

        assert!(state.toggle().alert);
        assert!(!state.toggle().camera);
        assert!(state.toggle().drive);
        assert!(!state.toggle().mic);

        state.toggle_alert();
        state.toggle_drive();
        assert!(!state.toggle().alert);
        assert!(!state.toggle().drive);
    }

    #[test]
    fn modal_operations_leave_toggles_alone() {
        let mut state = ViewState::new();
        state.toggle_drive();
        let toggles = *state.toggle();

        state.open_emergency();
        state.close_all_modals();

        assert_eq!(*state.toggle(), toggles);
    }

    #[test]
    fn toggle_operations_leave_modals_alone() {
        let mut state = ViewState::new();
        state.open_message();
        let modals = *state.modal_open();

        for kind in ToggleKind::ALL {
            state.toggle_feature(kind);
        }

        assert_eq!(*state.modal_open(), modals);
    }

    #[test]
    fn apply_dispatches_to_named_operations() {
        let mut state = ViewState::new();
        state.apply(Action::Open(ModalKind::Emergency));
        state.apply(Action::Toggle(ToggleKind::Camera));
        assert!(state.is_open(ModalKind::Emergency));
        assert!(!state.is_enabled(ToggleKind::Camera));

        state.apply(Action::CloseAllModals);
        assert!(!state.any_modal_open());
        assert!(!state.is_enabled(ToggleKind::Camera));
    }
}
