use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::chat::ChatTurn;

/// Process-wide, append-only record of every conversation turn.
///
/// All requests share the one log; there is no per-caller partitioning. The
/// mutex guards individual operations only and is never held across a
/// provider call, so concurrent chats interleave their appends in the shared
/// timeline.
#[derive(Clone)]
pub struct ConversationLog {
    turns: Arc<Mutex<Vec<ChatTurn>>>,
    max_len: usize,
}

impl ConversationLog {
    /// `max_len` caps the number of stored turns; 0 keeps the full history.
    pub fn new(max_len: usize) -> Self {
        Self {
            turns: Arc::new(Mutex::new(Vec::new())),
            max_len,
        }
    }

    pub async fn append(&self, turn: ChatTurn) {
        let mut turns = self.turns.lock().await;
        turns.push(turn);
        if self.max_len > 0 && turns.len() > self.max_len {
            let excess = turns.len() - self.max_len;
            turns.drain(..excess);
        }
    }

    /// The most recent `n` stored turns, oldest first.
    pub async fn window(&self, n: usize) -> Vec<ChatTurn> {
        let turns = self.turns.lock().await;
        let start = turns.len().saturating_sub(n);
        turns[start..].to_vec()
    }

    pub async fn clear(&self) {
        self.turns.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.turns.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.turns.lock().await.is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new(0)
    }
}
