pub mod forms;
pub mod notifications;

pub use notifications::NotificationManager;
