use crate::{Record, Timestamp};

/// A log line reduced to the user that wrote it and when.
pub type LogRecord = Record<char>;

pub fn log(user: char, ts: Timestamp) -> LogRecord {
    Record::new(user, ts)
}

/// Five logs from five users, deliberately out of timestamp order.
pub fn sample_logs() -> Vec<LogRecord> {
    vec![log('A', 3), log('B', 1), log('C', 2), log('D', 4), log('E', 0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_distinct_users_and_timestamps() {
        let logs = sample_logs();
        let mut users: Vec<char> = logs.iter().map(|l| l.label).collect();
        let mut stamps: Vec<Timestamp> = logs.iter().map(|l| l.ts).collect();
        users.sort_unstable();
        users.dedup();
        stamps.sort_unstable();
        stamps.dedup();
        assert_eq!(users.len(), 5);
        assert_eq!(stamps, vec![0, 1, 2, 3, 4]);
    }
}
