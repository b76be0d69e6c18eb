/// Entrance easing shared by every reveal transition.
pub const EASE_CURVE: [f64; 4] = [0.6, 0.01, 0.05, 0.95];

/// Below this both displacement and velocity count as settled.
const REST_PRECISION: f64 = 0.01;

pub fn ease_css() -> String {
    let [x1, y1, x2, y2] = EASE_CURVE;
    format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
}

impl SpringConfig {
    /// Used by the stat counters in the about section.
    pub const COUNTER: SpringConfig = SpringConfig {
        tension: 120.0,
        friction: 14.0,
    };
}

/// Unit-mass damped spring pulling `value` towards `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, from: f64, target: f64) -> Self {
        Self {
            config,
            value: from,
            velocity: 0.0,
            target,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_PRECISION && self.velocity.abs() < REST_PRECISION
    }

    /// Advances by `dt` seconds (semi-implicit Euler). Snaps onto the target
    /// once settled so the last frame shows the exact value.
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }
        let force = -self.config.tension * (self.value - self.target) - self.config.friction * self.velocity;
        self.velocity += force * dt;
        self.value += self.velocity * dt;
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_matches_curve() {
        assert_eq!(ease_css(), "cubic-bezier(0.6, 0.01, 0.05, 0.95)");
    }

    #[test]
    fn counter_spring_lands_on_target() {
        let mut spring = Spring::new(SpringConfig::COUNTER, 0.0, 50.0);
        let mut frames = 0;
        while !spring.is_settled() && frames < 1_000 {
            spring.step(1.0 / 60.0);
            frames += 1;
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 50.0);
        assert!(frames > 10, "settled suspiciously fast: {frames}");
    }

    #[test]
    fn spring_moves_toward_target_first() {
        let mut spring = Spring::new(SpringConfig::COUNTER, 0.0, 100.0);
        spring.step(1.0 / 60.0);
        assert!(spring.value() > 0.0);
        assert!(spring.value() < 100.0);
    }

    #[test]
    fn settled_spring_stays_put() {
        let mut spring = Spring::new(SpringConfig::COUNTER, 2.0, 2.0);
        assert!(spring.is_settled());
        spring.step(1.0 / 60.0);
        assert_eq!(spring.value(), 2.0);
    }
}
