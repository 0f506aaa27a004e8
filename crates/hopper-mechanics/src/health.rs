/// Hit points for the player. The platformer runs with a single hit
/// point, so any hurt is lethal, but the type keeps the counter explicit
/// so gameplay rules read as intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    max_hp: i32,
    current_hp: i32,
}

impl Health {
    pub fn new(max_hp: i32) -> Self {
        Self {
            max_hp,
            current_hp: max_hp,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn increment(&mut self) {
        self.current_hp = (self.current_hp + 1).min(self.max_hp);
    }

    /// Remove one hit point. Returns true if this drop reached zero, so
    /// the caller can raise the health-is-zero event exactly once.
    pub fn decrement(&mut self) -> bool {
        if self.current_hp == 0 {
            return false;
        }
        self.current_hp -= 1;
        self.current_hp == 0
    }

    /// Drop straight to zero.
    pub fn die(&mut self) {
        self.current_hp = 0;
    }

    /// Restore to full, used on respawn.
    pub fn reset(&mut self) {
        self.current_hp = self.max_hp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_reports_reaching_zero_once() {
        let mut health = Health::new(2);
        assert!(!health.decrement());
        assert!(health.decrement());
        assert!(!health.decrement());
        assert!(!health.is_alive());
    }

    #[test]
    fn test_reset_restores_full_health() {
        let mut health = Health::new(1);
        health.die();
        assert!(!health.is_alive());
        health.reset();
        assert!(health.is_alive());
    }

    #[test]
    fn test_increment_caps_at_max() {
        let mut health = Health::new(1);
        health.increment();
        health.decrement();
        assert!(!health.is_alive());
    }
}
