//! Schedule status.

text_enum! {
    /// Progress of a booked lesson occurrence.
    ScheduleStatus {
        /// Booked, not yet held.
        Planned => "PLANNED",
        /// Held.
        Done => "DONE",
        /// Called off.
        Cancelled => "CANCELLED",
    }
}

impl ScheduleStatus {
    /// Whether the occurrence can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}
