use crate::game::CollisionType;

/// Receives the end-of-game report
pub trait Notifier {
    fn game_over(&mut self, score: u32, cause: CollisionType);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverNotice {
    pub score: u32,
    pub cause: CollisionType,
}

impl GameOverNotice {
    pub fn message(&self) -> String {
        format!("You Lose! Your score is {}", self.score)
    }
}

/// Keeps the report so the terminal can show it as a banner
#[derive(Debug, Default)]
pub struct BannerNotifier {
    notice: Option<GameOverNotice>,
}

impl BannerNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(&self) -> Option<&GameOverNotice> {
        self.notice.as_ref()
    }
}

impl Notifier for BannerNotifier {
    fn game_over(&mut self, score: u32, cause: CollisionType) {
        // Only the first report counts
        if self.notice.is_none() {
            self.notice = Some(GameOverNotice { score, cause });
        }
    }
}
