use snake_common::games::snake::SessionCommand;
use snake_common::log;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: SessionCommand) {
        if let Err(e) = self.tx.send(command) {
            log!("Game session is gone, dropped {:?}", e.0);
        }
    }
}
