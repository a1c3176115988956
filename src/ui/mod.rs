pub mod keybindings;
pub(crate) mod layout;
pub mod terminal_guard;
pub mod wizard;

pub use terminal_guard::{install_panic_hook, TerminalGuard};
pub use wizard::WizardScreen;
