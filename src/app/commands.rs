//! Where transport button clicks go once a frame has been painted

use crate::types::PlayerCommand;
use tracing::debug;

/// Receives player commands, once per click, after the frame that produced them
pub trait CommandSink {
    fn dispatch(&mut self, command: PlayerCommand);
}

/// Nothing drives playback yet: commands are logged and dropped
#[derive(Debug, Default)]
pub struct LogCommands;

impl CommandSink for LogCommands {
    fn dispatch(&mut self, command: PlayerCommand) {
        debug!(?command, "Player command (no handler wired)");
    }
}

#[cfg(test)]
impl CommandSink for Vec<PlayerCommand> {
    fn dispatch(&mut self, command: PlayerCommand) {
        self.push(command);
    }
}

impl<T: CommandSink + ?Sized> CommandSink for &mut T {
    fn dispatch(&mut self, command: PlayerCommand) {
        (**self).dispatch(command);
    }
}
