pub mod human;
pub mod notify;

pub use human::HumanMode;
pub use notify::{BannerNotifier, GameOverNotice, Notifier};
