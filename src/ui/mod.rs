//! UI layer: theme, screens, and reusable widgets.

pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
pub use widgets::NotificationManager;
