use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(80);
pub const DELETE_DELAY: Duration = Duration::from_millis(30);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

pub static ROLES: &[&str] = &[
    "Software Engineer",
    "Java Developer",
    "React Developer",
    "Cloud & Backend Developer",
    "Problem Solver",
];

/// Types out each role one character at a time, holds it, erases it and moves on
/// to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    roles: &'static [&'static str],
    index: usize,
    /// Characters of the current role on screen.
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self {
            roles,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn role(&self) -> &'static str {
        self.roles.get(self.index).copied().unwrap_or_default()
    }

    fn role_len(&self) -> usize {
        self.role().chars().count()
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn text(&self) -> &'static str {
        let role = self.role();
        let end = role
            .char_indices()
            .nth(self.shown)
            .map_or(role.len(), |(i, _)| i);
        &role[..end]
    }

    /// How long to wait before the next [`advance`](Self::advance).
    pub fn next_delay(&self) -> Duration {
        if !self.deleting && self.shown == self.role_len() {
            HOLD_DELAY
        } else if self.deleting && self.shown == 0 {
            Duration::ZERO
        } else if self.deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        }
    }

    pub fn advance(&mut self) {
        if self.roles.is_empty() {
            return;
        }
        if !self.deleting && self.shown == self.role_len() {
            self.deleting = true;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.roles.len();
        } else if self.deleting {
            self.shown -= 1;
        } else {
            self.shown += 1;
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(ROLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_holds_and_deletes() {
        static ROLES: &[&str] = &["ab", "xyz"];
        let mut tw = Typewriter::new(ROLES);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.next_delay(), TYPE_DELAY);

        tw.advance();
        assert_eq!(tw.text(), "a");
        tw.advance();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.next_delay(), HOLD_DELAY);

        tw.advance();
        assert!(tw.is_deleting());
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.next_delay(), DELETE_DELAY);

        tw.advance();
        tw.advance();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.next_delay(), Duration::ZERO);

        tw.advance();
        assert!(!tw.is_deleting());
        assert_eq!(tw.role_index(), 1);
        tw.advance();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_to_first_role() {
        static ROLES: &[&str] = &["a", "b"];
        let mut tw = Typewriter::new(ROLES);
        // type, hold, delete, next: 4 steps per one-character role
        for _ in 0..8 {
            tw.advance();
        }
        assert_eq!(tw.role_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_multibyte_roles() {
        static ROLES: &[&str] = &["héllo"];
        let mut tw = Typewriter::new(ROLES);
        tw.advance();
        tw.advance();
        assert_eq!(tw.text(), "hé");
        for _ in 0..3 {
            tw.advance();
        }
        assert_eq!(tw.text(), "héllo");
        assert_eq!(tw.next_delay(), HOLD_DELAY);
    }

    #[test]
    fn test_default_roles_cycle() {
        let mut tw = Typewriter::default();
        let mut seen = Vec::new();
        for _ in 0..1000 {
            if tw.next_delay() == HOLD_DELAY && !seen.contains(&tw.text()) {
                seen.push(tw.text());
            }
            tw.advance();
        }
        assert_eq!(seen, ROLES);
    }

    #[test]
    fn test_no_roles_is_inert() {
        static EMPTY: &[&str] = &[];
        let mut tw = Typewriter::new(EMPTY);
        tw.advance();
        assert_eq!(tw.text(), "");
    }
}
