//! Rainbow robot mode, unlocked by the Konami code.

/// Robot animation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RobotMode {
    #[default]
    Normal,
    Rainbow,
}

impl RobotMode {
    /// CSS `animation` value for the robot.
    pub fn animation(&self) -> &'static str {
        match self {
            RobotMode::Normal => "robotFloat 4s ease-in-out infinite",
            RobotMode::Rainbow => "rainbowRobot 2s infinite, robotFloat 4s ease-in-out infinite",
        }
    }
}

/// Rainbow mode state. Every activation schedules its own expiry, and the
/// first expiry to fire ends rainbow mode.
#[derive(Debug, Clone, Default)]
pub struct EasterEgg {
    mode: RobotMode,
    activations: u64,
}

impl EasterEgg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> RobotMode {
        self.mode
    }

    /// Enter rainbow mode. Returns the activation number for its expiry timer.
    pub fn activate(&mut self) -> u64 {
        self.activations += 1;
        self.mode = RobotMode::Rainbow;
        tracing::info!(activation = self.activations, "Easter egg activated");
        self.activations
    }

    /// Leave rainbow mode. Returns false if it was already over.
    pub fn expire(&mut self, activation: u64) -> bool {
        if self.mode == RobotMode::Normal {
            return false;
        }
        self.mode = RobotMode::Normal;
        tracing::debug!(activation, "Easter egg expired");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_and_expire() {
        let mut egg = EasterEgg::new();
        let activation = egg.activate();
        assert_eq!(egg.mode(), RobotMode::Rainbow);
        assert!(egg.expire(activation));
        assert_eq!(egg.mode(), RobotMode::Normal);
        assert!(!egg.expire(activation));
    }

    #[test]
    fn test_first_expiry_ends_reactivated_mode() {
        let mut egg = EasterEgg::new();
        let first = egg.activate();
        let second = egg.activate();
        assert_ne!(first, second);

        assert!(egg.expire(first));
        assert_eq!(egg.mode(), RobotMode::Normal);
        assert!(!egg.expire(second));
        assert_eq!(egg.mode(), RobotMode::Normal);
    }
}
