use crate::mpris::MprisHandle;
use crate::player::{PlayerStatus, StatusHandle, StatusSink};

/// Fans transport status out to the TUI and the MPRIS service.
pub struct Notifier {
    pub status: StatusHandle,
    pub mpris: MprisHandle,
}

impl StatusSink for Notifier {
    fn publish(&mut self, status: &PlayerStatus) {
        self.status.publish(status);
        self.mpris.publish(status);
    }
}
