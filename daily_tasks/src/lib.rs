//! # Daily tasks
//!
//! Counters behind the daily tasks screen: steps made today and water drunk.
//! The store is owned by the host application. Trackers never touch it,
//! the host copies their results in with [`DailyTasks::update_daily_steps`].

/// One glass
pub const WATER_PORTION_LITERS: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goals {
    pub steps: u64,
    pub water_liters: f64,
}

impl Goals {
    pub const fn new() -> Self {
        Self {
            steps: 3000,
            water_liters: 3.0,
        }
    }

    pub const fn set_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    pub const fn set_water_liters(mut self, water_liters: f64) -> Self {
        self.water_liters = water_liters;
        self
    }
}

impl Default for Goals {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTasks {
    daily_steps: u64,
    water_intake_liters: f64,
    goals: Goals,
}

impl DailyTasks {
    /// Starting values for a fresh day.
    pub const fn new() -> Self {
        Self {
            daily_steps: 1350,
            water_intake_liters: 2.0,
            goals: Goals::new(),
        }
    }

    pub const fn with_values(daily_steps: u64, water_intake_liters: f64, goals: Goals) -> Self {
        Self {
            daily_steps,
            water_intake_liters,
            goals,
        }
    }

    pub const fn daily_steps(&self) -> u64 {
        self.daily_steps
    }

    pub const fn water_intake_liters(&self) -> f64 {
        self.water_intake_liters
    }

    pub const fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Replaces today's total.
    pub fn update_daily_steps(&mut self, steps: u64) {
        log::debug!("Daily steps {} -> {}", self.daily_steps, steps);
        self.daily_steps = steps;
    }

    /// Adds one portion, never above the goal. Returns `false` if goal was already reached.
    pub fn add_water(&mut self) -> bool {
        if self.is_water_complete() {
            return false;
        }

        self.water_intake_liters =
            (self.water_intake_liters + WATER_PORTION_LITERS).min(self.goals.water_liters);

        if self.is_water_complete() {
            log::info!("Water goal of {} L reached", self.goals.water_liters);
        }

        true
    }

    /// Removes one portion, never below zero. Returns `false` if nothing was drunk.
    pub fn reduce_water(&mut self) -> bool {
        if self.water_intake_liters <= 0.0 {
            return false;
        }

        self.water_intake_liters = (self.water_intake_liters - WATER_PORTION_LITERS).max(0.0);
        true
    }

    pub fn is_water_complete(&self) -> bool {
        self.water_intake_liters >= self.goals.water_liters
    }

    pub fn is_steps_complete(&self) -> bool {
        self.daily_steps >= self.goals.steps
    }

    /// Percent of water goal, up to 100
    pub fn water_progress(&self) -> f64 {
        progress(self.water_intake_liters, self.goals.water_liters)
    }

    /// Percent of steps goal, up to 100
    pub fn steps_progress(&self) -> f64 {
        progress(self.daily_steps as f64, self.goals.steps as f64)
    }
}

impl Default for DailyTasks {
    fn default() -> Self {
        Self::new()
    }
}

fn progress(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 100.0;
    }

    (value / goal * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_day() {
        let tasks = DailyTasks::default();

        assert_eq!(tasks.daily_steps(), 1350);
        assert_eq!(tasks.water_intake_liters(), 2.0);
        assert_eq!(tasks.steps_progress(), 45.0);
        assert!(!tasks.is_water_complete());
        assert!(!tasks.is_steps_complete());
    }

    #[test]
    fn water_is_capped_by_goal() {
        let mut tasks = DailyTasks::default();

        for _ in 0..4 {
            assert!(tasks.add_water());
        }
        assert_eq!(tasks.water_intake_liters(), 3.0);
        assert!(tasks.is_water_complete());
        assert_eq!(tasks.water_progress(), 100.0);

        assert!(!tasks.add_water());
        assert_eq!(tasks.water_intake_liters(), 3.0);
    }

    #[test]
    fn partial_portion_up_to_goal() {
        let mut tasks = DailyTasks::with_values(0, 2.9, Goals::new());

        assert!(tasks.add_water());

        assert_eq!(tasks.water_intake_liters(), 3.0);
    }

    #[test]
    fn water_never_below_zero() {
        let mut tasks = DailyTasks::with_values(0, 0.1, Goals::new());

        assert!(tasks.reduce_water());
        assert_eq!(tasks.water_intake_liters(), 0.0);

        assert!(!tasks.reduce_water());
        assert_eq!(tasks.water_intake_liters(), 0.0);
        assert_eq!(tasks.water_progress(), 0.0);
    }

    #[test]
    fn reduce_after_complete() {
        let mut tasks = DailyTasks::with_values(0, 3.0, Goals::new());

        assert!(tasks.reduce_water());

        assert!(!tasks.is_water_complete());
        assert!(tasks.add_water());
    }

    #[test]
    fn steps_goal() {
        let mut tasks = DailyTasks::with_values(0, 0.0, Goals::new().set_steps(100));

        tasks.update_daily_steps(250);

        assert!(tasks.is_steps_complete());
        assert_eq!(tasks.steps_progress(), 100.0);
    }

    #[test]
    fn zero_goal_counts_as_done() {
        let tasks = DailyTasks::with_values(0, 0.0, Goals::new().set_water_liters(0.0));

        assert_eq!(tasks.water_progress(), 100.0);
    }
}
