//! Poll cadence for the event bridge.

use std::time::{Duration, Instant};

const LONGEST: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollTarget {
    /// Static/metadata endpoints
    Static,
    /// The database summary
    Database,
    /// The currently requested schema
    Schema,
}

/// Two independent intervals; the schema follows the database cadence once requested.
#[derive(Debug, Clone)]
pub struct PollSchedule {
    static_every: Duration,
    database_every: Duration,
    next_static: Instant,
    next_database: Instant,
    next_schema: Option<Instant>,
}

impl PollSchedule {
    /// Static and database polls are due immediately.
    pub fn new(static_every: Duration, database_every: Duration, now: Instant) -> Self {
        Self {
            static_every,
            database_every,
            next_static: now,
            next_database: now,
            next_schema: None,
        }
    }

    pub fn due(&self, now: Instant) -> Vec<PollTarget> {
        let mut due = Vec::new();
        if self.next_static <= now {
            due.push(PollTarget::Static);
        }
        if self.next_database <= now {
            due.push(PollTarget::Database);
        }
        if self.next_schema.is_some_and(|next| next <= now) {
            due.push(PollTarget::Schema);
        }
        due
    }

    pub fn mark(&mut self, target: PollTarget, now: Instant) {
        match target {
            PollTarget::Static => self.next_static = later(now, self.static_every),
            PollTarget::Database => self.next_database = later(now, self.database_every),
            PollTarget::Schema => self.next_schema = Some(later(now, self.database_every)),
        }
    }

    /// Start (or restart) schema polling with an immediate poll.
    pub fn arm_schema(&mut self, now: Instant) {
        self.next_schema = Some(now);
    }

    pub fn next_deadline(&self) -> Instant {
        let deadline = self.next_static.min(self.next_database);
        match self.next_schema {
            Some(schema) => deadline.min(schema),
            None => deadline,
        }
    }
}

// An interval past the end of the clock means "not again in this process".
fn later(now: Instant, every: Duration) -> Instant {
    now.checked_add(every).unwrap_or(now + LONGEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIC: Duration = Duration::from_secs(60);
    const DATABASE: Duration = Duration::from_secs(30);

    #[test]
    fn test_initial_polls_are_due() {
        let now = Instant::now();
        let schedule = PollSchedule::new(STATIC, DATABASE, now);
        assert_eq!(schedule.due(now), vec![PollTarget::Static, PollTarget::Database]);
    }

    #[test]
    fn test_intervals_are_independent() {
        let now = Instant::now();
        let mut schedule = PollSchedule::new(STATIC, DATABASE, now);
        schedule.mark(PollTarget::Static, now);
        schedule.mark(PollTarget::Database, now);

        assert!(schedule.due(now + Duration::from_secs(29)).is_empty());
        assert_eq!(schedule.due(now + DATABASE), vec![PollTarget::Database]);
        assert_eq!(
            schedule.due(now + STATIC),
            vec![PollTarget::Static, PollTarget::Database]
        );
        assert_eq!(schedule.next_deadline(), now + DATABASE);
    }

    #[test]
    fn test_schema_polling_starts_when_armed() {
        let now = Instant::now();
        let mut schedule = PollSchedule::new(STATIC, DATABASE, now);
        schedule.mark(PollTarget::Static, now);
        schedule.mark(PollTarget::Database, now);
        assert!(!schedule.due(now + STATIC).contains(&PollTarget::Schema));

        let later = now + Duration::from_secs(5);
        schedule.arm_schema(later);
        assert_eq!(schedule.due(later), vec![PollTarget::Schema]);
        assert_eq!(schedule.next_deadline(), later);

        schedule.mark(PollTarget::Schema, later);
        assert_eq!(schedule.next_deadline(), now + DATABASE);
        assert!(schedule.due(later + DATABASE).contains(&PollTarget::Schema));
    }

    #[test]
    fn test_overlong_interval_does_not_overflow() {
        let now = Instant::now();
        let mut schedule = PollSchedule::new(Duration::MAX, DATABASE, now);

        schedule.mark(PollTarget::Static, now);
        schedule.mark(PollTarget::Database, now);

        assert_eq!(schedule.due(now + DATABASE), vec![PollTarget::Database]);
        assert_eq!(schedule.next_deadline(), now + DATABASE);
    }
}
